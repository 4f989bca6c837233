use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// junc - declarative directory junction manager
///
/// Reads a line-oriented config of `link target` pairs, expands `{NAME}`
/// variable templates, and materializes each pair as a directory junction.
#[derive(Parser)]
#[command(name = "junc")]
#[command(author, version, about)]
#[command(group(ArgGroup::new("operation").required(true).args(["config", "clean"])))]
struct Cli {
  /// Config file describing the junctions to create
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Recursively remove every junction beneath this directory
  #[arg(long, value_name = "DIRECTORY")]
  clean: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .without_time()
    .init();

  match (&cli.config, &cli.clean) {
    (Some(config), _) => cmd::cmd_apply(config),
    (None, Some(dir)) => cmd::cmd_clean(dir),
    (None, None) => unreachable!("clap requires one of --config/--clean"),
  }
}
