//! CLI output formatting utilities.
//!
//! Colored status messages with Unicode symbols, falling back to plain
//! text when the stream is not a terminal.

use owo_colors::{OwoColorize, Stream};

use juncture_lib::report::Reporter;

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

/// Reporter backed by the colored printers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorReporter;

impl Reporter for ColorReporter {
  fn error(&self, message: &str) {
    print_error(message);
  }

  fn info(&self, message: &str) {
    println!("{message}");
  }
}
