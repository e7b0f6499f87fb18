// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push flow arguments.

use clap::Args;
use std::path::PathBuf;

use crate::push::strategy::PushStrategy;

/// Arguments for the push flow.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Push option to use instead of asking with the menu.
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<PushStrategy>,

    /// Repository to push from, defaults to the current directory.
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,
}
