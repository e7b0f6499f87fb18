// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push orchestration.
//!
//! ```text
//! Start --> preflight --> ensure_remote --> fetch --> choose_strategy
//!              |               |              |             |
//!        NotARepository   RemoteSetup    FetchFailed   InvalidChoice
//!                                                           |
//!                                                           v
//!              Done <-- push_tags (warn only) <-- push branch(es)
//!                                                           |
//!                                                      PushRejected
//! ```
//!
//! Every named failure except the tag push ends the run. Branch pushes use
//! `--force-with-lease`; a rejection prints the manual `--force` command and
//! never retries.

pub mod prompt;
pub mod status;
pub mod strategy;

#[cfg(test)]
mod test_utils;

use tracing::{debug, info_span};

use crate::config::types::RemoteSettings;
use crate::error::{AppResult, PushError};
use crate::git::{GitMutation, GitQuery};

use prompt::Prompt;
use strategy::{PushStrategy, force_push_hint};

/// How [`Orchestrator::ensure_remote`] left the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    /// Remote was missing and has been added.
    Created,
    /// Remote already pointed at the expected repository.
    UpToDate,
    /// Remote pointed elsewhere and the user agreed to repoint it.
    Updated,
    /// Remote points elsewhere and the user kept it.
    MismatchAccepted,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub strategy: PushStrategy,
    /// Branch that was pushed, None when all branches were pushed.
    pub branch: Option<String>,
    /// False when tags were not requested or their push failed.
    pub tags_pushed: bool,
}

/// Runs one push session against one working directory.
pub struct Orchestrator<'a> {
    query: &'a dyn GitQuery,
    git: &'a dyn GitMutation,
    prompt: &'a mut dyn Prompt,
    remote: &'a RemoteSettings,
    workdir: String,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        query: &'a dyn GitQuery,
        git: &'a dyn GitMutation,
        prompt: &'a mut dyn Prompt,
        remote: &'a RemoteSettings,
        workdir: impl Into<String>,
    ) -> Self {
        Self {
            query,
            git,
            prompt,
            remote,
            workdir: workdir.into(),
        }
    }

    /// Run the full flow. With `preselected`, the menu is skipped.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`PushError`] (or backend error) encountered.
    pub fn run(&mut self, preselected: Option<PushStrategy>) -> AppResult<PushOutcome> {
        let _span = info_span!("push", remote = %self.remote.name, workdir = %self.workdir)
            .entered();

        self.preflight()?;
        let remote_status = self.ensure_remote()?;
        debug!(?remote_status, "remote ready");
        self.fetch()?;

        let strategy = match preselected {
            Some(strategy) => {
                status::info(format!("Using preselected option: {}", strategy.label()));
                strategy
            }
            None => self.choose_strategy()?,
        };
        self.execute(strategy)
    }

    /// Fail unless the working directory is inside a git work tree.
    ///
    /// # Errors
    ///
    /// Returns `PushError::NotARepository`.
    pub fn preflight(&self) -> AppResult<()> {
        if self.query.is_git_repo() {
            Ok(())
        } else {
            Err(PushError::NotARepository {
                path: self.workdir.clone(),
            }
            .into())
        }
    }

    /// Make sure the configured remote exists and points at the expected repository.
    ///
    /// # Errors
    ///
    /// Returns `PushError::RemoteSetupFailed` if git cannot add or update the
    /// remote, or a backend error if the remote cannot be looked up.
    pub fn ensure_remote(&mut self) -> AppResult<RemoteStatus> {
        let settings = self.remote;
        let name = settings.name.as_str();

        let Some(url) = self.query.remote_url(name)? else {
            status::info(format!(
                "Remote '{name}' not found, adding it: {}",
                settings.create_url
            ));
            self.git
                .add_remote(name, &settings.create_url)
                .map_err(|e| PushError::RemoteSetupFailed {
                    remote: name.to_string(),
                    message: e.detail(),
                })?;
            status::success(format!("Remote '{name}' added"));
            return Ok(RemoteStatus::Created);
        };

        if settings.matches(&url) {
            status::success(format!("Remote '{name}' is configured: {url}"));
            return Ok(RemoteStatus::UpToDate);
        }

        status::warn(format!(
            "Remote '{name}' points to {url}, expected a URL containing '{}'",
            settings.identifier
        ));
        if self.confirm("Do you want to update it? (y/n)")? {
            self.git
                .set_remote_url(name, &settings.url)
                .map_err(|e| PushError::RemoteSetupFailed {
                    remote: name.to_string(),
                    message: e.detail(),
                })?;
            status::success(format!("Remote '{name}' updated to {}", settings.url));
            Ok(RemoteStatus::Updated)
        } else {
            status::warn(format!("Keeping remote '{name}' at {url}"));
            Ok(RemoteStatus::MismatchAccepted)
        }
    }

    /// Fetch all refs from the remote.
    ///
    /// # Errors
    ///
    /// Returns `PushError::FetchFailed`.
    pub fn fetch(&self) -> AppResult<()> {
        let name = self.remote.name.as_str();
        status::info(format!("Fetching from '{name}'..."));
        self.git.fetch(name).map_err(|e| PushError::FetchFailed {
            remote: name.to_string(),
            message: e.detail(),
        })?;
        status::success("Fetch complete");
        Ok(())
    }

    /// Show the menu and read a choice.
    ///
    /// # Errors
    ///
    /// Returns `PushError::InvalidChoice` for input outside 1-4.
    pub fn choose_strategy(&mut self) -> AppResult<PushStrategy> {
        status::heading("Select push option:");
        for line in PushStrategy::menu() {
            println!("{line}");
        }
        let answer = self.ask("Enter choice [1-4] (default: 1):")?;
        Ok(PushStrategy::from_menu_input(&answer)?)
    }

    /// Push according to `strategy`.
    ///
    /// # Errors
    ///
    /// Returns the branch push error. Tag push failures are only reported.
    pub fn execute(&mut self, strategy: PushStrategy) -> AppResult<PushOutcome> {
        debug!(?strategy, "executing push strategy");

        let branch = if strategy.all_branches() {
            self.push_all_branches()?;
            None
        } else {
            Some(self.push_current_branch()?)
        };
        let tags_pushed = strategy.includes_tags() && self.push_tags();

        Ok(PushOutcome {
            strategy,
            branch,
            tags_pushed,
        })
    }

    /// Push the checked-out branch, offering to commit local changes first.
    ///
    /// Returns the branch name.
    ///
    /// # Errors
    ///
    /// Returns `PushError::DetachedHead`, `EmptyCommitMessage`, `CommitFailed`
    /// or `PushRejected`.
    pub fn push_current_branch(&mut self) -> AppResult<String> {
        let branch = self
            .query
            .current_branch()?
            .ok_or(PushError::DetachedHead)?;
        status::info(format!("Current branch: {branch}"));

        if self.query.has_uncommitted_changes()? {
            status::warn("You have uncommitted changes");
            if self.confirm("Do you want to commit them before pushing? (y/n)")? {
                self.commit_changes()?;
            } else {
                status::warn("Pushing without them, uncommitted changes stay local");
            }
        }

        let remote = self.remote;
        let remote = remote.name.as_str();
        status::info(format!(
            "Pushing '{branch}' to '{remote}' (--force-with-lease)..."
        ));
        if let Err(e) = self.git.push_branch(remote, &branch) {
            suggest_force_push(&force_push_hint(remote, Some(&branch)));
            return Err(PushError::PushRejected {
                target: format!("{remote}/{branch}"),
                message: e.detail(),
            }
            .into());
        }
        status::success(format!("Pushed '{branch}' to '{remote}'"));
        Ok(branch)
    }

    /// Push every local branch.
    ///
    /// # Errors
    ///
    /// Returns `PushError::PushRejected`.
    pub fn push_all_branches(&self) -> AppResult<()> {
        let remote = self.remote.name.as_str();
        status::info(format!(
            "Pushing all branches to '{remote}' (--force-with-lease)..."
        ));
        if let Err(e) = self.git.push_all_branches(remote) {
            suggest_force_push(&force_push_hint(remote, None));
            return Err(PushError::PushRejected {
                target: remote.to_string(),
                message: e.detail(),
            }
            .into());
        }
        status::success(format!("Pushed all branches to '{remote}'"));
        Ok(())
    }

    /// Push all tags. Failure is reported as a warning and returns false.
    pub fn push_tags(&self) -> bool {
        let remote = self.remote.name.as_str();
        status::info(format!("Pushing tags to '{remote}'..."));
        match self.git.push_tags(remote) {
            Ok(()) => {
                status::success(format!("Pushed tags to '{remote}'"));
                true
            }
            Err(e) => {
                let warning = PushError::TagPushFailed {
                    remote: remote.to_string(),
                    message: e.detail(),
                };
                status::warn(warning);
                false
            }
        }
    }

    fn commit_changes(&mut self) -> AppResult<()> {
        let message = self.ask("Enter commit message:")?;
        let message = message.trim();
        if message.is_empty() {
            return Err(PushError::EmptyCommitMessage.into());
        }

        self.git
            .stage_all()
            .and_then(|()| self.git.commit(message))
            .map_err(|e| PushError::CommitFailed {
                message: e.detail(),
            })?;
        status::success("Changes committed");
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        self.prompt
            .confirm(question)
            .map_err(|e| PushError::PromptFailed(e).into())
    }

    fn ask(&mut self, question: &str) -> AppResult<String> {
        self.prompt
            .input(question)
            .map_err(|e| PushError::PromptFailed(e).into())
    }
}

/// The failure itself, with git's stderr, is reported by the caller.
fn suggest_force_push(hint: &str) {
    status::info(format!(
        "If the remote has diverged and should be overwritten, run: {hint}"
    ));
}
