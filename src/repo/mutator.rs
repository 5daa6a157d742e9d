//! Clone, branch, inject files, commit and push

use crate::auth::Credential;
use crate::config::{CommitIdentity, MutatorSettings};
use crate::error::{Error, Result};
use crate::onboard::{Phase, ProgressCallback};
use crate::repo::git::Git;
use crate::repo::workspace::{reset_workspace, workspace_path};
use crate::types::{CatalogDescriptor, LocalRepository};
use chrono::Local;
use gix::refs::transaction::PreviousValue;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument};

/// Mutates a fresh clone of one repository and pushes a new branch
///
/// The workspace is destroyed and recreated on every run, so only one
/// mutator may target a given repository URL at a time.
pub struct LocalRepositoryMutator<'a> {
    settings: &'a MutatorSettings,
    credential: &'a Credential,
}

impl<'a> LocalRepositoryMutator<'a> {
    /// Create a mutator using `credential` for clone and push
    pub const fn new(settings: &'a MutatorSettings, credential: &'a Credential) -> Self {
        Self {
            settings,
            credential,
        }
    }

    /// Workspace that `remote_url` is cloned into
    pub fn workspace_path(&self, remote_url: &str) -> Result<PathBuf> {
        workspace_path(&self.settings.workspace_root, remote_url)
    }

    /// Run the whole local pipeline
    ///
    /// 1. reset the workspace
    /// 2. clone `remote_url`
    /// 3. create and check out `branch` at HEAD
    /// 4. move `source` to `destination` inside the tree (the source is consumed)
    /// 5. write the catalog descriptor
    /// 6. stage everything and commit
    /// 7. push `branch` to the configured remote
    ///
    /// Fails fast; nothing already done is rolled back.
    #[instrument(skip(self, progress), fields(workspace))]
    pub async fn mutate_and_push(
        &self,
        remote_url: &str,
        branch: &str,
        source: &Path,
        destination: &Path,
        progress: &dyn ProgressCallback,
    ) -> Result<LocalRepository> {
        let path = self.workspace_path(remote_url)?;
        tracing::Span::current().record("workspace", tracing::field::display(path.display()));

        progress.on_phase(Phase::ResettingWorkspace).await;
        reset_workspace(&path)?;

        progress.on_phase(Phase::Cloning).await;
        progress.on_message(&format!("git clone {remote_url}")).await;
        self.clone_remote(remote_url, &path, progress).await?;

        progress.on_phase(Phase::CreatingBranch).await;
        progress.on_message(&format!("git checkout -b {branch}")).await;
        let base_commit = create_branch(&path, branch, &self.settings.commit)?;
        Git::new(&path)
            .checkout(branch)
            .await
            .map_err(|e| branch_error(branch, e))?;

        progress.on_phase(Phase::PlacingFile).await;
        place_file(source, &path, destination)?;

        progress.on_phase(Phase::WritingDescriptor).await;
        write_descriptor(&path.join(&self.settings.descriptor_file))?;

        progress.on_phase(Phase::Committing).await;
        let commit = self.commit(&path, branch, progress).await?;

        progress.on_phase(Phase::Pushing).await;
        progress.on_message("git push").await;
        self.push(&path, branch, progress).await?;

        info!(branch, commit = %commit, "branch pushed");

        Ok(LocalRepository {
            path,
            branch: branch.to_string(),
            base_commit,
            commit,
        })
    }

    async fn clone_remote(
        &self,
        remote_url: &str,
        path: &Path,
        progress: &dyn ProgressCallback,
    ) -> Result<()> {
        let parent = path.parent().unwrap_or(&self.settings.workspace_root);
        Git::new(parent)
            .with_basic_auth(self.credential, &self.settings.auth_users.clone)
            .clone_repo(remote_url, path, progress)
            .await
            .map_err(|source| Error::Clone {
                url: remote_url.to_string(),
                source,
            })
    }

    async fn commit(
        &self,
        path: &Path,
        branch: &str,
        progress: &dyn ProgressCallback,
    ) -> Result<String> {
        let git = Git::new(path);
        let identity = &self.settings.commit;

        progress.on_message("git add .").await;
        git.add_all()
            .await
            .map_err(|source| Error::Commit { source })?;

        progress
            .on_message(&format!("git commit -m '{}'", identity.message))
            .await;
        if let Err(source) = git.commit(identity, &Local::now().to_rfc2822()).await {
            // An empty diff is reported separately from other commit failures
            return match git.has_staged_changes().await {
                Ok(false) => Err(Error::NothingToCommit {
                    branch: branch.to_string(),
                }),
                _ => Err(Error::Commit { source }),
            };
        }

        git.rev_parse("HEAD")
            .await
            .map_err(|source| Error::Commit { source })
    }

    async fn push(&self, path: &Path, branch: &str, progress: &dyn ProgressCallback) -> Result<()> {
        let remote = &self.settings.remote_name;
        let git = Git::new(path).with_basic_auth(self.credential, &self.settings.auth_users.push);
        let push_error = |source| Error::Push {
            branch: branch.to_string(),
            remote: remote.clone(),
            source,
        };

        if git
            .remote_branch_exists(remote, branch)
            .await
            .map_err(push_error)?
        {
            return Err(Error::RemoteBranchExists {
                branch: branch.to_string(),
                remote: remote.clone(),
            });
        }

        git.push_branch(remote, branch, progress)
            .await
            .map_err(push_error)
    }
}

/// Create `refs/heads/{branch}` at HEAD, returning the HEAD commit id
///
/// Never overwrites an existing branch. The reflog entry is signed by
/// `identity`, so no user-level git identity is required.
fn create_branch(path: &Path, branch: &str, identity: &CommitIdentity) -> Result<String> {
    let options = gix::open::Options::default().config_overrides([
        format!("committer.name={}", identity.author_name),
        format!("committer.email={}", identity.author_email),
    ]);
    let repo = gix::open_opts(path, options).map_err(|e| branch_error(branch, e))?;
    let refname = format!("refs/heads/{branch}");

    if repo
        .try_find_reference(refname.as_str())
        .map_err(|e| branch_error(branch, e))?
        .is_some()
    {
        return Err(Error::BranchExists(branch.to_string()));
    }

    let head = repo
        .head_id()
        .map_err(|e| branch_error(branch, e))?
        .detach();

    repo.reference(
        refname.as_str(),
        head,
        PreviousValue::MustNotExist,
        format!("branch: Created from {head}"),
    )
    .map_err(|e| branch_error(branch, e))?;

    debug!(branch, head = %head, "branch created");
    Ok(head.to_string())
}

fn branch_error(branch: &str, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::BranchCreate {
        branch: branch.to_string(),
        source: Box::new(source),
    }
}

/// Move `source` to `destination` under `root`, replacing anything there
fn place_file(source: &Path, root: &Path, destination: &Path) -> Result<()> {
    let target = root.join(destination);
    let to_error = |source_err| Error::FilePlacement {
        from: source.to_path_buf(),
        to: target.clone(),
        source: source_err,
    };

    if destination.as_os_str().is_empty()
        || destination
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(to_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination must be a relative path inside the workspace",
        )));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    match fs::rename(source, &target) {
        Ok(()) => {}
        // rename cannot cross filesystems; fall back to copy + remove
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, &target).map_err(to_error)?;
            fs::remove_file(source).map_err(to_error)?;
        }
        Err(e) => return Err(to_error(e)),
    }

    debug!(from = %source.display(), to = %target.display(), "file placed");
    Ok(())
}

fn write_descriptor(path: &Path) -> Result<()> {
    let to_error = |source: Box<dyn std::error::Error + Send + Sync>| Error::DescriptorWrite {
        path: path.to_path_buf(),
        source,
    };

    let yaml = CatalogDescriptor::default()
        .to_yaml()
        .map_err(|e| to_error(Box::new(e)))?;
    fs::write(path, yaml).map_err(|e| to_error(Box::new(e)))?;
    Ok(())
}
