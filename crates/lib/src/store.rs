//! Junction creation, detection and removal.
//!
//! [`LinkStore`] is the capability the config processor and the cleaner
//! drive; [`FsLinkStore`] is the filesystem rendition. Windows gets true
//! directory junctions via the `junction` crate. Unix gets the closest
//! analogue, a directory symlink, so configs and tests behave the same
//! across platforms.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from creating or removing a junction.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("failed to create junction {link} -> {target}: {source}")]
  Create {
    link: PathBuf,
    target: PathBuf,
    source: io::Error,
  },

  #[error("failed to remove junction {path}: {source}")]
  Remove { path: PathBuf, source: io::Error },

  #[error("junction already exists: {path}")]
  Exists { path: PathBuf },

  #[error("path already exists and is not a junction: {path}")]
  Occupied { path: PathBuf },
}

/// Capability for materializing directory junctions.
pub trait LinkStore {
  /// Create a junction at `link` pointing at `target`.
  ///
  /// With `overwrite`, an existing junction at `link` is replaced. A real
  /// directory or file at `link` is never deleted; that is
  /// [`StoreError::Occupied`] regardless of `overwrite`.
  fn create(&self, link: &Path, target: &Path, overwrite: bool) -> Result<(), StoreError>;

  /// Whether `path` is a junction.
  fn exists(&self, path: &Path) -> bool;

  /// Remove the junction entry at `path`, leaving its target untouched.
  fn remove(&self, path: &Path) -> Result<(), StoreError>;
}

/// Filesystem-backed link store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLinkStore;

impl LinkStore for FsLinkStore {
  fn create(&self, link: &Path, target: &Path, overwrite: bool) -> Result<(), StoreError> {
    if link.symlink_metadata().is_ok() {
      if !self.exists(link) {
        return Err(StoreError::Occupied {
          path: link.to_path_buf(),
        });
      }
      if !overwrite {
        return Err(StoreError::Exists {
          path: link.to_path_buf(),
        });
      }
      self.remove(link)?;
    }

    if let Some(parent) = link.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Create {
          link: link.to_path_buf(),
          target: target.to_path_buf(),
          source,
        })?;
      }
    }

    create_dir_link(target, link).map_err(|source| StoreError::Create {
      link: link.to_path_buf(),
      target: target.to_path_buf(),
      source,
    })?;
    debug!(link = %link.display(), target = %target.display(), "created junction");
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    is_dir_link(path)
  }

  fn remove(&self, path: &Path) -> Result<(), StoreError> {
    remove_dir_link(path).map_err(|source| StoreError::Remove {
      path: path.to_path_buf(),
      source,
    })?;
    debug!(path = %path.display(), "removed junction");
    Ok(())
  }
}

/// Create a directory link on Windows.
///
/// Junctions require an absolute target, so relative targets are resolved
/// against the link's parent and the result canonicalized.
#[cfg(windows)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
  let absolute = if target.is_relative() {
    match link.parent() {
      Some(parent) => parent.join(target),
      None => target.to_path_buf(),
    }
  } else {
    target.to_path_buf()
  };
  let absolute = dunce::canonicalize(&absolute)?;
  junction::create(&absolute, link)
}

#[cfg(unix)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
  std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn is_dir_link(path: &Path) -> bool {
  junction::exists(path).unwrap_or(false)
}

/// A symlink counts as the junction analogue when it points at a
/// directory or dangles; a symlink to a file does not.
#[cfg(unix)]
fn is_dir_link(path: &Path) -> bool {
  let Ok(meta) = path.symlink_metadata() else {
    return false;
  };
  if !meta.file_type().is_symlink() {
    return false;
  }
  match fs::metadata(path) {
    Ok(target) => target.is_dir(),
    Err(_) => true,
  }
}

#[cfg(windows)]
fn remove_dir_link(path: &Path) -> io::Result<()> {
  // Removes the junction entry only; fails on a real populated directory.
  fs::remove_dir(path)
}

#[cfg(unix)]
fn remove_dir_link(path: &Path) -> io::Result<()> {
  fs::remove_file(path)
}
