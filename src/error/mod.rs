// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   AppError (~16 bytes, transparent)
//!                 |
//!   +--------+----+----+--------+
//!   |        |         |        |
//!   v        v         v        v
//!  Push     Git     Config   Process
//!  Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Push    NotARepository, FetchFailed, InvalidChoice, PushRejected,
//!           DetachedHead, EmptyCommitMessage, CommitFailed,
//!           RemoteSetupFailed, PromptFailed, TagPushFailed (warning only)
//!   Git     Gix, CommandFailed
//!   Config  MissingKey, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => AppError stays pointer sized plus tag.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Push flow failed.
    #[error(transparent)]
    Push(#[from] Box<PushError>),

    /// Git operation failed.
    #[error(transparent)]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),
}

impl AppError {
    /// The push-flow error inside this error, if any.
    #[must_use]
    pub fn as_push(&self) -> Option<&PushError> {
        match self {
            Self::Push(e) => Some(e),
            _ => None,
        }
    }

    /// Short failure detail: git's stderr for failed commands, otherwise
    /// the message followed by its sources.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Git(e) => e.message(),
            other => chain(other),
        }
    }
}

/// `error: source: source ...`, each message once.
fn chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PushError => Push,
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Push Errors ---

/// Failures of the push flow.
///
/// Every variant except [`PushError::TagPushFailed`] ends the run with exit
/// code 1. Tag push failures are reported as warnings.
#[derive(Debug, Error)]
pub enum PushError {
    /// Working directory is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Fetching from the remote failed.
    #[error("failed to fetch from '{remote}': {message}")]
    FetchFailed { remote: String, message: String },

    /// Menu input outside 1-4.
    #[error("invalid choice '{input}', expected a number from 1 to 4")]
    InvalidChoice { input: String },

    /// The remote refused the lease-protected push.
    #[error("push to '{target}' was rejected: {message}")]
    PushRejected { target: String, message: String },

    /// Pushing tags failed.
    #[error("failed to push tags to '{remote}': {message}")]
    TagPushFailed { remote: String, message: String },

    /// HEAD does not point at a branch.
    #[error("HEAD is detached, check out a branch before pushing")]
    DetachedHead,

    /// The user chose to commit but entered no message.
    #[error("commit message must not be empty")]
    EmptyCommitMessage,

    /// Staging or committing local changes failed.
    #[error("failed to commit local changes: {message}")]
    CommitFailed { message: String },

    /// Adding or updating the remote failed.
    #[error("failed to configure remote '{remote}': {message}")]
    RemoteSetupFailed { remote: String, message: String },

    /// Reading an answer from the terminal failed.
    #[error("failed to read answer")]
    PromptFailed(#[source] std::io::Error),
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error(transparent)]
    Gix(#[from] GixError),
}

impl GitError {
    /// Message suitable for embedding in a higher-level error.
    ///
    /// For failed commands this is git's stderr rather than the full
    /// `command - message` rendering.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CommandFailed { message, .. } => message.clone(),
            Self::Gix(e) => chain(e),
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
