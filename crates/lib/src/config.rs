//! Line-oriented config processing.
//!
//! One pass over the config, strictly in file order, no backtracking:
//!
//! - blank lines and `#` comments are skipped
//! - `@:NAME=v1,v2,...` lines extend the [`VariableTable`]
//! - everything else must be a `link target` pair, expanded via
//!   [`crate::expand`] and materialized through the [`LinkStore`]
//!
//! Every per-line and per-pair failure is reported and the pass keeps
//! going; only failing to open or read the file aborts it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::expand::expand;
use crate::report::Reporter;
use crate::store::LinkStore;
use crate::vars::VariableTable;

/// Marker introducing a variable declaration line.
const VAR_MARKER: &str = "@:";

/// Fatal failures of a config pass.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to open config {path}: {source}")]
  Open { path: PathBuf, source: io::Error },

  #[error("failed to read config {path}: {source}")]
  Read { path: PathBuf, source: io::Error },
}

/// Counters accumulated over one config pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
  /// Lines read, including blanks and comments.
  pub lines: usize,
  /// Variable declarations recorded.
  pub variables: usize,
  /// Junctions successfully created.
  pub pairs_created: usize,
  /// Lines or pairs that failed and were skipped.
  pub errors: usize,
}

/// Drives one pass over a config.
///
/// Owns the pass's [`VariableTable`]; a processor is consumed by the pass
/// and not reused across files.
pub struct ConfigProcessor<'a, S: LinkStore, R: Reporter> {
  vars: VariableTable,
  store: &'a S,
  reporter: &'a R,
  stats: RunStats,
}

impl<'a, S: LinkStore, R: Reporter> ConfigProcessor<'a, S, R> {
  pub fn new(store: &'a S, reporter: &'a R) -> Self {
    Self {
      vars: VariableTable::new(),
      store,
      reporter,
      stats: RunStats::default(),
    }
  }

  /// Process a whole config file.
  ///
  /// The handle is scoped to this call and released on all paths.
  pub fn process_file(self, path: &Path) -> Result<RunStats, ConfigError> {
    debug!(path = %path.display(), "processing config");
    let file = File::open(path).map_err(|source| ConfigError::Open {
      path: path.to_path_buf(),
      source,
    })?;
    self
      .process_reader(BufReader::new(file))
      .map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
      })
  }

  /// Process config lines from any buffered source.
  pub fn process_reader(mut self, reader: impl BufRead) -> io::Result<RunStats> {
    for line in reader.lines() {
      self.process_line(&line?);
    }
    Ok(self.stats)
  }

  fn process_line(&mut self, line: &str) {
    self.stats.lines += 1;

    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      return;
    }

    if let Some(decl) = trimmed.strip_prefix(VAR_MARKER) {
      match self.vars.declare(decl) {
        Ok(()) => self.stats.variables += 1,
        Err(err) => self.report_error(&format!("line format error: {trimmed}: {err}")),
      }
      return;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [link, target] = tokens.as_slice() else {
      self.report_error(&format!("line format error: {trimmed}"));
      return;
    };
    self.create_pairs(link.trim(), target.trim());
  }

  fn create_pairs(&mut self, link: &str, target: &str) {
    let pairs = match expand(link, target, &self.vars) {
      Ok(pairs) => pairs,
      Err(err) => {
        self.report_error(&err.to_string());
        return;
      }
    };

    for pair in pairs {
      match self
        .store
        .create(Path::new(&pair.link), Path::new(&pair.target), true)
      {
        Ok(()) => {
          self.stats.pairs_created += 1;
          self.reporter.info(&format!("{} -> {}", pair.link, pair.target));
        }
        Err(err) => {
          self.report_error(&format!(
            "[source]: {}, [target]: {}, [error]: {}",
            pair.link, pair.target, err
          ));
        }
      }
    }
  }

  fn report_error(&mut self, message: &str) {
    self.stats.errors += 1;
    self.reporter.error(message);
  }
}
