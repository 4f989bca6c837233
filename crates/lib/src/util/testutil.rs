//! Test doubles for the link store and reporter.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::report::Reporter;
use crate::store::{LinkStore, StoreError};

/// In-memory link store recording created pairs in call order.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
  created: RefCell<Vec<(PathBuf, PathBuf)>>,
  removed: RefCell<Vec<PathBuf>>,
  fail_on: Option<PathBuf>,
}

impl MemoryLinkStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make `create` fail for this link path.
  pub fn fail_on(mut self, link: &str) -> Self {
    self.fail_on = Some(PathBuf::from(link));
    self
  }

  /// Created pairs, in creation order.
  pub fn created(&self) -> Vec<(PathBuf, PathBuf)> {
    self.created.borrow().clone()
  }

  /// Removed link paths, in removal order.
  pub fn removed(&self) -> Vec<PathBuf> {
    self.removed.borrow().clone()
  }
}

impl LinkStore for MemoryLinkStore {
  fn create(&self, link: &Path, target: &Path, _overwrite: bool) -> Result<(), StoreError> {
    if self.fail_on.as_deref() == Some(link) {
      return Err(StoreError::Occupied {
        path: link.to_path_buf(),
      });
    }
    self
      .created
      .borrow_mut()
      .push((link.to_path_buf(), target.to_path_buf()));
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    self.created.borrow().iter().any(|(link, _)| link == path)
  }

  fn remove(&self, path: &Path) -> Result<(), StoreError> {
    self.removed.borrow_mut().push(path.to_path_buf());
    self.created.borrow_mut().retain(|(link, _)| link != path);
    Ok(())
  }
}

/// Reporter capturing messages for assertions.
#[derive(Debug, Default)]
pub struct CollectingReporter {
  pub errors: RefCell<Vec<String>>,
  pub infos: RefCell<Vec<String>>,
}

impl Reporter for CollectingReporter {
  fn error(&self, message: &str) {
    self.errors.borrow_mut().push(message.to_string());
  }

  fn info(&self, message: &str) {
    self.infos.borrow_mut().push(message.to_string());
  }
}
