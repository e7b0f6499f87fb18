// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-pusher using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gpush [global options] [push options]   run the push flow
//! gpush options                           print effective configuration
//! gpush inis                              list loaded config files
//! gpush version
//! ```

pub mod global;
pub mod push;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::push::PushArgs;
use clap::{Parser, Subcommand};

/// Interactive remote push orchestrator.
#[derive(Debug, Parser)]
#[command(
    name = "gpush",
    author,
    version,
    about = "Push the current branch, all branches or tags to a checked remote",
    long_about = "git-pusher Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Makes sure the configured remote exists and points at the\n\
                  expected repository, fetches it, then pushes with\n\
                  --force-with-lease according to the option picked from the menu.",
    after_help = "CONFIG FILES:\n\n\
                  gpush reads `gpush.toml` from the current directory if present.\n\
                  Additional files can be given with --ini; they are loaded after it.\n\
                  GPUSH_SECTION__KEY environment variables and --set override files.\n\
                  Use --no-default-inis to skip `gpush.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Options for the push flow
    #[command(flatten)]
    pub push: PushArgs,

    /// Command to execute, the push flow when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands besides the default push flow.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
