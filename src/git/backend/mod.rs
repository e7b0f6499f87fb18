// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//!                     --> ShellBackend (git CLI)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```
//!
//! Both backends are bound to one working directory at construction.

use crate::error::{AppResult, GitError, GixError, ProcessError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if the working directory is inside a git work tree.
    fn is_git_repo(&self) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(&self) -> AppResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(&self) -> AppResult<bool>;

    /// Fetch URL of the named remote (None if no such remote exists).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn remote_url(&self, name: &str) -> AppResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify the repository or talk to a remote.
pub trait GitMutation {
    /// Stage every change in the work tree (`git add -A`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn stage_all(&self) -> AppResult<()>;

    /// Commit the index with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    fn commit(&self, message: &str) -> AppResult<()>;

    /// Add a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be added.
    fn add_remote(&self, name: &str, url: &str) -> AppResult<()>;

    /// Point an existing remote at a new URL.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the URL cannot be set.
    fn set_remote_url(&self, name: &str, url: &str) -> AppResult<()>;

    /// Fetch all refs from a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    fn fetch(&self, remote: &str) -> AppResult<()>;

    /// Push one branch with `--force-with-lease`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or fails.
    fn push_branch(&self, remote: &str, branch: &str) -> AppResult<()>;

    /// Push every local branch with `--force-with-lease`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or fails.
    fn push_all_branches(&self, remote: &str) -> AppResult<()>;

    /// Push all tags.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    fn push_tags(&self, remote: &str) -> AppResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only, no subprocess.
#[derive(Debug, Clone)]
pub struct GixBackend {
    path: PathBuf,
}

impl GixBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn discover(&self) -> AppResult<gix::Repository> {
        gix::discover(&self.path)
            .map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))).into())
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(&self) -> bool {
        gix::discover(&self.path).is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch(&self) -> AppResult<Option<String>> {
        let repo = self.discover()?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(&self) -> AppResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = self.discover()?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }

    /// Fetch URL after `url.<base>.insteadOf` rewrites, as `git remote get-url` reports it.
    fn remote_url(&self, name: &str) -> AppResult<Option<String>> {
        let repo = self.discover()?;
        let Some(remote) = repo.try_find_remote(name) else {
            return Ok(None);
        };
        let remote = remote.map_err(|e| GitError::CommandFailed {
            command: format!("remote get-url {name}"),
            message: e.to_string(),
        })?;
        Ok(remote
            .url(gix::remote::Direction::Fetch)
            .map(|url| url.to_bstring().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// With `dry_run` set, mutations are logged and reported as successful
/// without running git. Queries always run.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    path: PathBuf,
    git: PathBuf,
    dry_run: bool,
}

impl ShellBackend {
    /// Locate `git` on `PATH` and bind to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not installed.
    pub fn new(path: impl Into<PathBuf>, dry_run: bool) -> AppResult<Self> {
        let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        Ok(Self {
            path: path.into(),
            git,
            dry_run,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    ///
    /// Returns trimmed stdout on success, stderr inside `GitError::CommandFailed`
    /// on a non-zero exit.
    pub(crate) fn git_command(&self, args: &[&str]) -> AppResult<String> {
        use std::process::Command;

        let command = format!("git {}", args.join(" "));
        debug!(cwd = %self.path.display(), %command, "running git");

        let output = Command::new(&self.git)
            .args(args)
            .current_dir(&self.path)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(%command, code = ?output.status.code(), %message, "git failed");
            return Err(GitError::CommandFailed { command, message }.into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        trace!(%command, %stdout, "git succeeded");
        Ok(stdout)
    }

    fn mutate(&self, args: &[&str]) -> AppResult<()> {
        if self.dry_run {
            info!("would run: git {}", args.join(" "));
            return Ok(());
        }
        self.git_command(args)?;
        Ok(())
    }
}

impl GitMutation for ShellBackend {
    fn stage_all(&self) -> AppResult<()> {
        self.mutate(&["add", "-A"])
    }

    fn commit(&self, message: &str) -> AppResult<()> {
        self.mutate(&["commit", "--quiet", "-m", message])
    }

    fn add_remote(&self, name: &str, url: &str) -> AppResult<()> {
        self.mutate(&["remote", "add", name, url])
    }

    fn set_remote_url(&self, name: &str, url: &str) -> AppResult<()> {
        self.mutate(&["remote", "set-url", name, url])
    }

    fn fetch(&self, remote: &str) -> AppResult<()> {
        self.mutate(&["fetch", "--quiet", remote])
    }

    fn push_branch(&self, remote: &str, branch: &str) -> AppResult<()> {
        self.mutate(&["push", "--force-with-lease", remote, branch])
    }

    fn push_all_branches(&self, remote: &str) -> AppResult<()> {
        self.mutate(&["push", "--force-with-lease", "--all", remote])
    }

    fn push_tags(&self, remote: &str) -> AppResult<()> {
        self.mutate(&["push", "--tags", remote])
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(&self) -> bool {
        self.git_command(&["rev-parse", "--is-inside-work-tree"])
            .is_ok_and(|out| out == "true")
    }

    fn current_branch(&self) -> AppResult<Option<String>> {
        Ok(self.git_command(&["symbolic-ref", "--short", "-q", "HEAD"]).ok())
    }

    fn has_uncommitted_changes(&self) -> AppResult<bool> {
        let output = self.git_command(&["status", "--porcelain"])?;
        Ok(!output.is_empty())
    }

    fn remote_url(&self, name: &str) -> AppResult<Option<String>> {
        let remotes = self.git_command(&["remote"])?;
        if !remotes.lines().any(|r| r.trim() == name) {
            return Ok(None);
        }
        self.git_command(&["remote", "get-url", name]).map(Some)
    }
}

#[cfg(test)]
mod tests;
