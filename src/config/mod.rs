// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for git-pusher.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gpush.toml (cwd, optional)
//! 3. --ini files
//! 4. GPUSH_* env vars
//! 5. --set overrides and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GPUSH_GLOBAL__DRY=true         → global.dry = true
//! GPUSH_REMOTE__NAME=upstream    → remote.name = "upstream"
//! GPUSH_REMOTE__CREATE_URL=...   → remote.create_url = "..."
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, RemoteSettings};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Target remote.
    pub remote: RemoteSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_pusher::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gpush.toml")
    ///     .with_env_prefix("GPUSH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the loaded values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the remote settings are incomplete or inconsistent.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.remote.validate()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.output_log_level",
            u8::from(self.global.output_log_level).to_string(),
        );
        options.insert(
            "global.file_log_level",
            u8::from(self.global.file_log_level).to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("remote.name", self.remote.name.clone());
        options.insert("remote.url", self.remote.url.clone());
        options.insert("remote.create_url", self.remote.create_url.clone());
        options.insert("remote.identifier", self.remote.identifier.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
