// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push strategies and the numbered menu that selects them.
//!
//! ```text
//! 1  current branch          (default, empty input)
//! 2  all branches
//! 3  current branch + tags
//! 4  all branches + tags
//! ```

use clap::ValueEnum;

use crate::error::PushError;

/// What gets pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PushStrategy {
    /// The checked-out branch.
    #[value(name = "current")]
    CurrentBranch,
    /// Every local branch.
    #[value(name = "all")]
    AllBranches,
    /// The checked-out branch, then all tags.
    #[value(name = "current-tags")]
    CurrentBranchWithTags,
    /// Every local branch, then all tags.
    #[value(name = "all-tags")]
    AllBranchesWithTags,
}

impl PushStrategy {
    /// Menu order.
    pub const ALL: [Self; 4] = [
        Self::CurrentBranch,
        Self::AllBranches,
        Self::CurrentBranchWithTags,
        Self::AllBranchesWithTags,
    ];

    /// Parse an answer to the menu prompt.
    ///
    /// Surrounding whitespace is ignored and an empty answer selects
    /// [`PushStrategy::CurrentBranch`].
    ///
    /// # Errors
    ///
    /// Returns `PushError::InvalidChoice` for anything but `1`-`4`.
    pub fn from_menu_input(input: &str) -> Result<Self, PushError> {
        match input.trim() {
            "" | "1" => Ok(Self::CurrentBranch),
            "2" => Ok(Self::AllBranches),
            "3" => Ok(Self::CurrentBranchWithTags),
            "4" => Ok(Self::AllBranchesWithTags),
            other => Err(PushError::InvalidChoice {
                input: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::CurrentBranch => 1,
            Self::AllBranches => 2,
            Self::CurrentBranchWithTags => 3,
            Self::AllBranchesWithTags => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentBranch => "Push current branch",
            Self::AllBranches => "Push all branches",
            Self::CurrentBranchWithTags => "Push current branch + tags",
            Self::AllBranchesWithTags => "Push all branches + tags",
        }
    }

    #[must_use]
    pub const fn all_branches(self) -> bool {
        matches!(self, Self::AllBranches | Self::AllBranchesWithTags)
    }

    #[must_use]
    pub const fn includes_tags(self) -> bool {
        matches!(
            self,
            Self::CurrentBranchWithTags | Self::AllBranchesWithTags
        )
    }

    /// Menu lines, one per strategy.
    #[must_use]
    pub fn menu() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|s| format!("  {}) {}", s.menu_number(), s.label()))
            .collect()
    }
}

/// Command the user can run to overwrite the remote without lease protection.
#[must_use]
pub fn force_push_hint(remote: &str, branch: Option<&str>) -> String {
    match branch {
        Some(branch) => format!("git push --force {remote} {branch}"),
        None => format!("git push --force --all {remote}"),
    }
}
