//! Recursive junction cleanup.
//!
//! Walks a directory tree and removes every junction entry found. A
//! removed junction is never descended into, so link targets keep their
//! contents; ordinary directories are recursed into. The recursion is
//! hand-rolled because the no-descend rule is the whole algorithm.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::report::Reporter;
use crate::store::LinkStore;

/// Errors from walking the tree. Remove failures are reported through the
/// [`Reporter`] and do not abort the walk.
#[derive(Debug, Error)]
pub enum CleanError {
  #[error("failed to read directory {path}: {source}")]
  ReadDir { path: PathBuf, source: io::Error },
}

/// Remove every junction beneath `root`.
///
/// Returns `Ok(false)` when `root` does not exist. The root itself and
/// non-junction directories are never deleted, so re-running on a
/// junction-free tree removes nothing.
pub fn clean_directory(root: &Path, store: &impl LinkStore, reporter: &impl Reporter) -> Result<bool, CleanError> {
  if !root.is_dir() {
    return Ok(false);
  }
  let root = dunce::canonicalize(root).map_err(|source| CleanError::ReadDir {
    path: root.to_path_buf(),
    source,
  })?;

  let removed = clean_tree(&root, store, reporter)?;
  debug!(root = %root.display(), removed, "directory cleaned");
  Ok(true)
}

fn clean_tree(dir: &Path, store: &impl LinkStore, reporter: &impl Reporter) -> Result<usize, CleanError> {
  let mut removed = 0;

  let entries = fs::read_dir(dir).map_err(|source| CleanError::ReadDir {
    path: dir.to_path_buf(),
    source,
  })?;
  for entry in entries {
    let entry = entry.map_err(|source| CleanError::ReadDir {
      path: dir.to_path_buf(),
      source,
    })?;
    let path = entry.path();

    if store.exists(&path) {
      match store.remove(&path) {
        Ok(()) => {
          removed += 1;
          reporter.info(&format!("removed {}", path.display()));
        }
        Err(err) => reporter.error(&err.to_string()),
      }
    } else if path.is_dir() {
      removed += clean_tree(&path, store, reporter)?;
    }
  }

  Ok(removed)
}
