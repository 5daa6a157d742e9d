//! Local git "remote" fixtures
//!
//! Each fixture owns a temp dir holding a bare repository that plays the part
//! of the hosted remote, a scratch area for caller files, and the workspace root.
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use catalog_onboard::config::{MutatorSettings, OnboardConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use tempfile::TempDir;

/// Empty home directory shared by every git process the tests spawn
static EMPTY_HOME: LazyLock<TempDir> =
    LazyLock::new(|| TempDir::new().expect("create empty home"));

/// Hide user and system git config from `cmd`
///
/// Nothing the tests run may depend on the developer's identity or settings.
pub fn isolate_git_config(cmd: &mut Command) -> &mut Command {
    cmd.env("HOME", EMPTY_HOME.path())
        .env("XDG_CONFIG_HOME", EMPTY_HOME.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .env_remove("GIT_COMMITTER_NAME")
        .env_remove("GIT_COMMITTER_EMAIL")
}

/// Bare remote plus scratch directories for one test
pub struct RemoteFixture {
    dir: TempDir,
    remote: PathBuf,
}

impl RemoteFixture {
    /// Remote named `{name}.git` whose `main` holds a single README commit
    pub fn new(name: &str) -> Self {
        Self::with_files(name, &[("README.md", "# test repo\n")])
    }

    /// Remote named `{name}.git` whose `main` holds one commit with `files`
    pub fn with_files(name: &str, files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let remote = dir.path().join("remotes").join(format!("{name}.git"));
        fs::create_dir_all(&remote).unwrap();
        git(&remote, &["init", "--quiet", "--bare", "--initial-branch=main"]);

        let seed = dir.path().join("seed");
        fs::create_dir_all(&seed).unwrap();
        git(&seed, &["init", "--quiet", "--initial-branch=main"]);
        for (path, content) in files {
            let file = seed.join(path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file, content).unwrap();
        }
        git(&seed, &["add", "--all"]);
        git(&seed, &["commit", "--quiet", "-m", "initial commit"]);
        git(&seed, &["remote", "add", "origin", remote.to_str().unwrap()]);
        git(&seed, &["push", "--quiet", "origin", "main"]);

        fs::create_dir_all(dir.path().join("input")).unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();

        Self { dir, remote }
    }

    /// URL passed to the mutator (a local path)
    pub fn url(&self) -> String {
        self.remote.to_string_lossy().into_owned()
    }

    /// Root under which workspaces are created
    pub fn workspace_root(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Mutator settings pointing at this fixture's workspace root
    pub fn settings(&self) -> MutatorSettings {
        MutatorSettings {
            workspace_root: self.workspace_root(),
            ..MutatorSettings::default()
        }
    }

    /// Full config for onboarding this fixture with `source` as the caller file
    pub fn config(&self, branch: &str, source: &Path, destination: &str) -> OnboardConfig {
        OnboardConfig {
            remote_url: self.url(),
            branch: branch.to_string(),
            source_file: source.to_path_buf(),
            destination: PathBuf::from(destination),
            mutator: self.settings(),
            ..OnboardConfig::default()
        }
    }

    /// Write a caller file outside the workspace
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join("input").join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Whether the remote has `refs/heads/{branch}`
    pub fn has_branch(&self, branch: &str) -> bool {
        isolate_git_config(&mut Command::new("git"))
            .args(["show-ref", "--verify", "--quiet", &format!("refs/heads/{branch}")])
            .current_dir(&self.remote)
            .status()
            .unwrap()
            .success()
    }

    /// Commit id of `rev` on the remote
    pub fn rev(&self, rev: &str) -> String {
        git(&self.remote, &["rev-parse", rev]).trim().to_string()
    }

    /// Number of commits in `range` on the remote
    pub fn count(&self, range: &str) -> usize {
        git(&self.remote, &["rev-list", "--count", range])
            .trim()
            .parse()
            .unwrap()
    }

    /// Contents of `path` at `rev` on the remote
    pub fn show(&self, rev: &str, path: &str) -> String {
        git(&self.remote, &["show", &format!("{rev}:{path}")])
    }

    /// `git log -1 --format=...` of `rev` on the remote
    pub fn log_format(&self, rev: &str, format: &str) -> String {
        git(&self.remote, &["log", "-1", &format!("--format={format}"), rev])
            .trim()
            .to_string()
    }
}

/// Run git in `dir` with a fixed identity, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = isolate_git_config(&mut Command::new("git"))
        .args([
            "-c",
            "user.name=Fixture",
            "-c",
            "user.email=fixture@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("spawn git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
