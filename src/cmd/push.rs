// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command: wires the git backends and the terminal prompt into an
//! [`Orchestrator`] and runs one session.

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::cli::push::PushArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::{GixBackend, ShellBackend};
use crate::push::prompt::TermPrompt;
use crate::push::{Orchestrator, PushOutcome, status};

/// Main handler for the push flow.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved, git is not
/// installed, or the orchestrator stops on a fatal push error.
pub fn run_push_command(args: &PushArgs, config: &Config) -> Result<PushOutcome> {
    let workdir = resolve_workdir(args.directory.as_ref())?;
    let dry_run = config.global.dry;

    let query = GixBackend::new(&workdir);
    let git = ShellBackend::new(&workdir, dry_run)?;
    if git.is_dry_run() {
        status::warn("Dry run: state-changing git commands are only logged");
    }

    let mut prompt = TermPrompt::new();
    let outcome = Orchestrator::new(
        &query,
        &git,
        &mut prompt,
        &config.remote,
        workdir.display().to_string(),
    )
    .run(args.strategy)?;

    debug!(?outcome, "push session finished");
    status::success("All done!");
    Ok(outcome)
}

fn resolve_workdir(directory: Option<&PathBuf>) -> Result<PathBuf> {
    match directory {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("failed to resolve the current directory"),
    }
}
