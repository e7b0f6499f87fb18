// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted git backend and prompt for orchestrator tests.
//!
//! `ScriptedGit` records every call as a short string (`"fetch origin"`,
//! `"push origin main"`) so tests can assert on order and absence.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::error::{AppResult, GitError};
use crate::git::{GitMutation, GitQuery};

use super::prompt::Prompt;

#[derive(Debug, Default)]
pub(super) struct ScriptedGit {
    pub is_repo: bool,
    pub branch: Option<String>,
    pub dirty: bool,
    pub remote_url: RefCell<Option<String>>,
    pub fail_fetch: bool,
    pub fail_push: bool,
    pub fail_tags: bool,
    pub fail_commit: bool,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedGit {
    /// Clean repository on `main` whose remote is missing.
    pub(super) fn repo() -> Self {
        Self {
            is_repo: true,
            branch: Some("main".to_string()),
            ..Self::default()
        }
    }

    pub(super) fn with_remote(self, url: &str) -> Self {
        *self.remote_url.borrow_mut() = Some(url.to_string());
        self
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(super) fn pushed(&self) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with("push"))
    }

    fn record(&self, call: String, fail: bool) -> AppResult<()> {
        self.calls.borrow_mut().push(call.clone());
        if fail {
            return Err(GitError::CommandFailed {
                command: format!("git {call}"),
                message: "scripted failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl GitQuery for ScriptedGit {
    fn is_git_repo(&self) -> bool {
        self.is_repo
    }

    fn current_branch(&self) -> AppResult<Option<String>> {
        Ok(self.branch.clone())
    }

    fn has_uncommitted_changes(&self) -> AppResult<bool> {
        Ok(self.dirty)
    }

    fn remote_url(&self, _name: &str) -> AppResult<Option<String>> {
        Ok(self.remote_url.borrow().clone())
    }
}

impl GitMutation for ScriptedGit {
    fn stage_all(&self) -> AppResult<()> {
        self.record("add -A".to_string(), false)
    }

    fn commit(&self, message: &str) -> AppResult<()> {
        self.record(format!("commit {message}"), self.fail_commit)
    }

    fn add_remote(&self, name: &str, url: &str) -> AppResult<()> {
        *self.remote_url.borrow_mut() = Some(url.to_string());
        self.record(format!("remote add {name} {url}"), false)
    }

    fn set_remote_url(&self, name: &str, url: &str) -> AppResult<()> {
        *self.remote_url.borrow_mut() = Some(url.to_string());
        self.record(format!("remote set-url {name} {url}"), false)
    }

    fn fetch(&self, remote: &str) -> AppResult<()> {
        self.record(format!("fetch {remote}"), self.fail_fetch)
    }

    fn push_branch(&self, remote: &str, branch: &str) -> AppResult<()> {
        self.record(format!("push {remote} {branch}"), self.fail_push)
    }

    fn push_all_branches(&self, remote: &str) -> AppResult<()> {
        self.record(format!("push --all {remote}"), self.fail_push)
    }

    fn push_tags(&self, remote: &str) -> AppResult<()> {
        self.record(format!("push --tags {remote}"), self.fail_tags)
    }
}

/// Answers questions from a queue and remembers what was asked.
#[derive(Debug, Default)]
pub(super) struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub(super) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            questions: Vec::new(),
        }
    }

    fn next(&mut self, question: &str) -> io::Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer"))
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.next(question)?;
        Ok(answer
            .chars()
            .next()
            .is_some_and(super::prompt::is_affirmative))
    }

    fn input(&mut self, question: &str) -> io::Result<String> {
        self.next(question)
    }
}
