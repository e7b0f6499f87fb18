// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Colored status lines.
//!
//! Each line is printed to stdout and mirrored as a tracing event under
//! [`STATUS_TARGET`] so it also reaches the log file.

use std::fmt::Display;

use console::{Style, style};
use tracing::{error as log_error, info as log_info, warn as log_warn};

use crate::logging::STATUS_TARGET;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warn,
    Error,
}

impl StatusKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Success => "[OK]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn style(self) -> Style {
        let base = Style::new().bold();
        match self {
            Self::Info => base.blue(),
            Self::Success => base.green(),
            Self::Warn => base.yellow(),
            Self::Error => base.red(),
        }
    }
}

/// Render a status line, colored when the terminal supports it.
#[must_use]
pub fn render(kind: StatusKind, message: &str) -> String {
    format!("{} {message}", kind.style().apply_to(kind.tag()))
}

fn emit(kind: StatusKind, message: &str) {
    println!("{}", render(kind, message));
    match kind {
        StatusKind::Info | StatusKind::Success => log_info!(target: STATUS_TARGET, "{message}"),
        StatusKind::Warn => log_warn!(target: STATUS_TARGET, "{message}"),
        StatusKind::Error => log_error!(target: STATUS_TARGET, "{message}"),
    }
}

pub fn info(message: impl Display) {
    emit(StatusKind::Info, &message.to_string());
}

pub fn success(message: impl Display) {
    emit(StatusKind::Success, &message.to_string());
}

pub fn warn(message: impl Display) {
    emit(StatusKind::Warn, &message.to_string());
}

pub fn error(message: impl Display) {
    emit(StatusKind::Error, &message.to_string());
}

/// Section heading without a severity tag.
pub fn heading(message: impl Display) {
    println!("{}", style(message).bold());
}
