//! Implementation of the `--config` operation.
//!
//! Runs one pass over the config file: variable declarations extend the
//! pass's table, junction lines are expanded and materialized one pair at
//! a time. Per-line failures are printed and the pass keeps going.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use juncture_lib::config::ConfigProcessor;
use juncture_lib::store::FsLinkStore;

use crate::output::{self, ColorReporter};

pub fn cmd_apply(path: &Path) -> Result<()> {
  let store = FsLinkStore;
  let reporter = ColorReporter;

  let stats = ConfigProcessor::new(&store, &reporter)
    .process_file(path)
    .with_context(|| format!("failed to process {}", path.display()))?;

  println!();
  println!("Finished processing {}", path.display());
  println!("  Lines read: {}", stats.lines);
  println!("  Variables declared: {}", stats.variables);
  println!("  Junctions created: {}", stats.pairs_created);
  println!("  Errors: {}", stats.errors);

  if stats.errors == 0 {
    output::print_success("all lines processed");
  } else {
    output::print_warning(&format!("{} line(s) skipped with errors", stats.errors));
  }
  info!(path = %path.display(), created = stats.pairs_created, "config pass complete");

  Ok(())
}
