//! Deterministic workspace location and reset

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deterministic workspace directory name for a remote URL
///
/// The last path segment with any `.git` suffix removed:
/// `https://github.com/org/repo.git` becomes `repo`.
pub fn workspace_name(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit(['/', ':', '\\']).next().unwrap_or(trimmed);
    let name = segment.strip_suffix(".git").unwrap_or(segment);

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::Parse(format!(
            "cannot derive a workspace name from {url}"
        )));
    }
    Ok(name.to_string())
}

/// Workspace path for `url` under `root`
///
/// Always absolute: a relative `root` is resolved against the current
/// directory, so git commands run elsewhere see the same location.
pub fn workspace_path(root: &Path, url: &str) -> Result<PathBuf> {
    let path = root.join(workspace_name(url)?);
    std::path::absolute(&path).map_err(|source| Error::WorkspaceReset { path, source })
}

/// Remove anything at `path` so the clone starts from nothing
///
/// A missing path is fine. The parent directory is created if needed.
pub fn reset_workspace(path: &Path) -> Result<()> {
    let to_error = |source| Error::WorkspaceReset {
        path: path.to_path_buf(),
        source,
    };

    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).map(|()| true),
        Ok(_) => fs::remove_file(path).map(|()| true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
    .map_err(to_error)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    debug!(path = %path.display(), removed, "workspace reset");
    Ok(())
}
