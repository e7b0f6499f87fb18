// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitMutation, GitQuery, GixBackend, ShellBackend};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Repository on branch `main` with one commit.
fn init_repo_with_commit(path: &Path) {
    run_git(&["init", "--quiet"], path);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], path);
    run_git(&["config", "user.email", "test@example.com"], path);
    run_git(&["config", "user.name", "Test"], path);
    std::fs::write(path.join("README.md"), "# Test").expect("failed to write README");
    run_git(&["add", "README.md"], path);
    run_git(&["commit", "-m", "Initial commit", "--quiet"], path);
}

fn shell(path: &Path) -> ShellBackend {
    ShellBackend::new(path, false).expect("git should be installed")
}

#[test]
fn test_backends_agree_on_repo_detection() {
    let temp = temp_dir();
    assert!(!GixBackend::new(temp.path()).is_git_repo());
    assert!(!shell(temp.path()).is_git_repo());

    init_repo_with_commit(temp.path());
    assert!(GixBackend::new(temp.path()).is_git_repo());
    assert!(shell(temp.path()).is_git_repo());
}

#[test]
fn test_current_branch() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    assert_eq!(
        GixBackend::new(temp.path()).current_branch().unwrap(),
        Some("main".to_string())
    );
    assert_eq!(
        shell(temp.path()).current_branch().unwrap(),
        Some("main".to_string())
    );
}

#[test]
fn test_current_branch_detached() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    run_git(&["checkout", "--quiet", "--detach"], temp.path());

    assert_eq!(GixBackend::new(temp.path()).current_branch().unwrap(), None);
    assert_eq!(shell(temp.path()).current_branch().unwrap(), None);
}

#[test]
fn test_uncommitted_changes() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let gix = GixBackend::new(temp.path());
    let git = shell(temp.path());
    assert!(!gix.has_uncommitted_changes().unwrap());
    assert!(!git.has_uncommitted_changes().unwrap());

    std::fs::write(temp.path().join("notes.txt"), "draft").unwrap();
    assert!(gix.has_uncommitted_changes().unwrap());
    assert!(git.has_uncommitted_changes().unwrap());
}

#[test]
fn test_stage_and_commit() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("notes.txt"), "draft").unwrap();

    let git = shell(temp.path());
    git.stage_all().unwrap();
    git.commit("Add notes").unwrap();

    assert!(!git.has_uncommitted_changes().unwrap());
    let subject = git.git_command(&["log", "-1", "--format=%s"]).unwrap();
    assert_eq!(subject, "Add notes");
}

#[test]
fn test_remote_url_lifecycle() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let gix = GixBackend::new(temp.path());
    let git = shell(temp.path());
    assert_eq!(gix.remote_url("origin").unwrap(), None);
    assert_eq!(git.remote_url("origin").unwrap(), None);

    git.add_remote("origin", "git@example.com:team/tool.git")
        .unwrap();
    assert_eq!(
        gix.remote_url("origin").unwrap().as_deref(),
        Some("git@example.com:team/tool.git")
    );

    git.set_remote_url("origin", "https://example.com/team/tool.git")
        .unwrap();
    assert_eq!(
        git.remote_url("origin").unwrap().as_deref(),
        Some("https://example.com/team/tool.git")
    );
    assert_eq!(
        gix.remote_url("origin").unwrap().as_deref(),
        Some("https://example.com/team/tool.git")
    );
}

#[test]
fn test_remote_url_applies_instead_of_rewrites() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    run_git(
        &[
            "config",
            "url.https://github.com/ksenxx/kiss_ai.git.insteadOf",
            "https://mirror.example.com/kiss.git",
        ],
        temp.path(),
    );
    run_git(
        &["remote", "add", "origin", "https://mirror.example.com/kiss.git"],
        temp.path(),
    );

    let expected = Some("https://github.com/ksenxx/kiss_ai.git");
    assert_eq!(
        GixBackend::new(temp.path())
            .remote_url("origin")
            .unwrap()
            .as_deref(),
        expected
    );
    assert_eq!(
        shell(temp.path()).remote_url("origin").unwrap().as_deref(),
        expected
    );
}

#[test]
fn test_dry_run_skips_mutations() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let dry = ShellBackend::new(temp.path(), true).unwrap();
    assert!(dry.is_dry_run());
    dry.add_remote("origin", "git@example.com:team/tool.git")
        .unwrap();
    dry.fetch("origin").unwrap();
    dry.push_branch("origin", "main").unwrap();

    assert_eq!(dry.remote_url("origin").unwrap(), None);
}

#[test]
fn test_failed_command_carries_stderr() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let err = shell(temp.path()).fetch("missing-remote").unwrap_err();
    let detail = err.detail();
    assert!(
        detail.contains("missing-remote"),
        "stderr should name the remote, got: {detail}"
    );
    assert!(err.to_string().starts_with("git command failed: git fetch"));
}

#[test]
fn test_push_branch_and_tags_to_bare_remote() {
    let temp = temp_dir();
    let remote = temp.path().join("remote.git");
    let work = temp.path().join("work");
    std::fs::create_dir_all(&remote).unwrap();
    std::fs::create_dir_all(&work).unwrap();
    run_git(&["init", "--bare", "--quiet"], &remote);
    init_repo_with_commit(&work);
    run_git(&["tag", "v1.0.0"], &work);

    let git = shell(&work);
    git.add_remote("origin", remote.to_str().unwrap()).unwrap();
    git.fetch("origin").unwrap();
    git.push_branch("origin", "main").unwrap();
    git.push_tags("origin").unwrap();

    let bare = shell(&remote);
    assert!(bare.git_command(&["rev-parse", "refs/heads/main"]).is_ok());
    assert!(bare.git_command(&["rev-parse", "refs/tags/v1.0.0"]).is_ok());
}
