// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for git-pusher.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, RemoteSettings
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Remote name used when none is configured.
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Secure-transport URL the remote is repointed to after confirmation.
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/ksenxx/kiss_ai.git";

/// SSH-style URL used when the remote has to be created.
pub const DEFAULT_CREATE_URL: &str = "git@github.com:ksenxx/kiss_ai.git";

/// Substring every acceptable remote URL contains.
pub const DEFAULT_IDENTIFIER: &str = "ksenxx/kiss_ai";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log mutating git calls instead of running them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// The remote pushes go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSettings {
    /// Remote name, e.g. `origin`.
    pub name: String,
    /// URL written when the user agrees to fix a mismatched remote.
    pub url: String,
    /// URL used when the remote does not exist yet.
    pub create_url: String,
    /// Substring that marks a remote URL as pointing at the right repository.
    pub identifier: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_REMOTE_NAME.to_string(),
            url: DEFAULT_REMOTE_URL.to_string(),
            create_url: DEFAULT_CREATE_URL.to_string(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

impl RemoteSettings {
    /// Whether `url` points at the expected repository.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        url.contains(&self.identifier)
    }

    /// Check that every field is set and both URLs carry the identifier.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an empty field and
    /// `ConfigError::InvalidValue` for a URL that could never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("name", &self.name),
            ("url", &self.url),
            ("create_url", &self.create_url),
            ("identifier", &self.identifier),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "remote".to_string(),
                    key: key.to_string(),
                });
            }
        }

        for (key, value) in [("url", &self.url), ("create_url", &self.create_url)] {
            if !self.matches(value) {
                return Err(ConfigError::InvalidValue {
                    section: "remote".to_string(),
                    key: key.to_string(),
                    message: format!(
                        "'{value}' does not contain identifier '{}'",
                        self.identifier
                    ),
                });
            }
        }

        Ok(())
    }
}
