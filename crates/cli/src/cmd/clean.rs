//! Implementation of the `--clean` operation.

use std::path::Path;

use anyhow::{Result, bail};

use juncture_lib::clean::clean_directory;
use juncture_lib::store::FsLinkStore;

use crate::output::{self, ColorReporter};

pub fn cmd_clean(dir: &Path) -> Result<()> {
  let store = FsLinkStore;
  let reporter = ColorReporter;

  if !clean_directory(dir, &store, &reporter)? {
    bail!("directory does not exist: {}", dir.display());
  }
  output::print_success(&format!("cleaned {}", dir.display()));

  Ok(())
}
