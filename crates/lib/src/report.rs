//! Status reporting capability.
//!
//! Config processing emits human-readable status lines without knowing how
//! they are rendered. The CLI binds this to colored terminal output; the
//! library ships an implementation that forwards to the `tracing`
//! subscriber, which is also what headless callers want.

/// Sink for per-line and per-pair status messages.
///
/// Two levels only: `error` for skipped lines and failed pairs, `info` for
/// successfully materialized pairs and removed junctions.
pub trait Reporter {
  fn error(&self, message: &str);
  fn info(&self, message: &str);
}

/// Reporter that forwards to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceReporter;

impl Reporter for TraceReporter {
  fn error(&self, message: &str) {
    tracing::error!("{message}");
  }

  fn info(&self, message: &str) {
    tracing::info!("{message}");
  }
}
