//! Git subprocess adapter
//!
//! Network operations (clone, ls-remote, push) and worktree operations
//! (checkout, add, commit) go through the `git` executable. Credentials are
//! injected per process through `GIT_CONFIG_*` variables, never through argv
//! or the repository config.

use crate::auth::Credential;
use crate::config::CommitIdentity;
use crate::error::GitError;
use crate::onboard::ProgressCallback;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Number of trailing stderr lines kept for error reports
const STDERR_TAIL: usize = 10;

/// Splits git's progress stream into lines
///
/// git redraws progress with `\r`, so both `\r` and `\n` end a line.
#[derive(Debug, Default)]
pub struct ProgressLines {
    pending: Vec<u8>,
}

impl ProgressLines {
    /// Feed raw bytes, returning every line they complete
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for &byte in bytes {
            if byte == b'\r' || byte == b'\n' {
                lines.extend(self.take());
            } else {
                self.pending.push(byte);
            }
        }
        lines
    }

    /// Flush whatever is left once the stream ends
    pub fn finish(&mut self) -> Option<String> {
        self.take()
    }

    fn take(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.pending).trim_end().to_string();
        self.pending.clear();
        if line.is_empty() { None } else { Some(line) }
    }
}

/// Wrapper for executing git commands in a working directory
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
    env: Vec<(String, String)>,
}

impl Git {
    /// Run commands in `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            env: Vec::new(),
        }
    }

    /// Authenticate HTTPS transport with `username` and the credential as password
    #[must_use]
    pub fn with_basic_auth(mut self, credential: &Credential, username: &str) -> Self {
        self.env.extend([
            ("GIT_CONFIG_COUNT".to_string(), "1".to_string()),
            ("GIT_CONFIG_KEY_0".to_string(), "http.extraHeader".to_string()),
            (
                "GIT_CONFIG_VALUE_0".to_string(),
                format!(
                    "Authorization: {}",
                    credential.basic_auth_header(username)
                ),
            ),
        ]);
        self
    }

    /// Working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Clone `url` into `dest`, streaming progress
    #[instrument(skip(self, progress))]
    pub async fn clone_repo(
        &self,
        url: &str,
        dest: &Path,
        progress: &dyn ProgressCallback,
    ) -> Result<(), GitError> {
        let dest = dest.to_string_lossy();
        self.run_streaming(&["clone", "--progress", "--", url, &dest], progress)
            .await
    }

    /// Check out an existing local branch
    #[instrument(skip(self))]
    pub async fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run_checked(&["checkout", "--quiet", branch, "--"])
            .await?;
        Ok(())
    }

    /// Stage every added, modified and removed path
    pub async fn add_all(&self) -> Result<(), GitError> {
        self.run_checked(&["add", "--all", "--", "."]).await?;
        Ok(())
    }

    /// True if the index differs from HEAD
    pub async fn has_staged_changes(&self) -> Result<bool, GitError> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.run(&args).await?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(failure(&args, &output)),
        }
    }

    /// Commit the index as `identity`, authored at `date` (any format git accepts)
    #[instrument(skip_all)]
    pub async fn commit(&self, identity: &CommitIdentity, date: &str) -> Result<(), GitError> {
        let mut cmd = self.command(&["commit", "--quiet", "-m", identity.message.as_str()]);
        cmd.env("GIT_AUTHOR_NAME", &identity.author_name)
            .env("GIT_AUTHOR_EMAIL", &identity.author_email)
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_NAME", &identity.author_name)
            .env("GIT_COMMITTER_EMAIL", &identity.author_email)
            .env("GIT_COMMITTER_DATE", date);

        let output = cmd.output().await.map_err(|source| GitError::Spawn {
            command: "commit".to_string(),
            source,
        })?;
        if !output.status.success() {
            return Err(failure(&["commit"], &output));
        }
        Ok(())
    }

    /// Resolve a revision to a full commit id
    pub async fn rev_parse(&self, rev: &str) -> Result<String, GitError> {
        let output = self.run_checked(&["rev-parse", "--verify", rev]).await?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Whether `branch` exists on `remote`
    #[instrument(skip(self))]
    pub async fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError> {
        let refname = format!("refs/heads/{branch}");
        let args = ["ls-remote", "--exit-code", remote, refname.as_str()];
        let output = self.run(&args).await?;
        match output.status.code() {
            Some(0) => Ok(true),
            // --exit-code: no matching refs
            Some(2) => Ok(false),
            _ => Err(failure(&args, &output)),
        }
    }

    /// Push `branch` to the same name on `remote`, streaming progress
    #[instrument(skip(self, progress))]
    pub async fn push_branch(
        &self,
        remote: &str,
        branch: &str,
        progress: &dyn ProgressCallback,
    ) -> Result<(), GitError> {
        let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");
        self.run_streaming(&["push", "--progress", remote, &refspec], progress)
            .await
    }

    async fn run_streaming(
        &self,
        args: &[&str],
        progress: &dyn ProgressCallback,
    ) -> Result<(), GitError> {
        let spawn_error = |source| GitError::Spawn {
            command: args.join(" "),
            source,
        };

        let mut child = self
            .command(args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let mut tail = VecDeque::with_capacity(STDERR_TAIL);
        if let Some(mut stderr) = child.stderr.take() {
            let mut lines = ProgressLines::default();
            let mut buf = [0u8; 4096];
            loop {
                let n = stderr.read(&mut buf).await.map_err(spawn_error)?;
                if n == 0 {
                    break;
                }
                for line in lines.feed(&buf[..n]) {
                    progress.on_git_progress(&line).await;
                    keep_tail(&mut tail, line);
                }
            }
            if let Some(line) = lines.finish() {
                progress.on_git_progress(&line).await;
                keep_tail(&mut tail, line);
            }
        }

        let status = child.wait().await.map_err(spawn_error)?;
        if !status.success() {
            return Err(GitError::Failed {
                command: args.join(" "),
                status: status.to_string(),
                stderr: Vec::from(tail).join("\n"),
            });
        }
        debug!(command = %args.join(" "), "git finished");
        Ok(())
    }

    async fn run_checked(&self, args: &[&str]) -> Result<Output, GitError> {
        let output = self.run(args).await?;
        if !output.status.success() {
            return Err(failure(args, &output));
        }
        Ok(output)
    }

    async fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        self.command(args)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                command: args.join(" "),
                source,
            })
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.workdir)
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

fn keep_tail(tail: &mut VecDeque<String>, line: String) {
    if tail.len() == STDERR_TAIL {
        tail.pop_front();
    }
    tail.push_back(line);
}

fn failure(args: &[&str], output: &Output) -> GitError {
    GitError::Failed {
        command: args.join(" "),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
