//! `roster` — interactive command line for the Roster contact book.
//!
//! # Usage
//!
//! ```
//! roster --data-file ~/roster/addressbook.json
//! roster --config roster.toml
//! echo "group by ROLE Student" | roster
//! ```

mod app;
mod settings;

use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use app::{App, Flow};
use clap::Parser;
use roster_store_json::JsonStore;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Contact book for students, parents and staff")]
struct Cli {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Where the address book is stored (overrides the config file).
  #[arg(long, env = "ROSTER_DATA_FILE", value_name = "FILE")]
  data_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so they never interleave with command output.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings =
    Settings::load(cli.config.as_deref(), cli.data_file.as_deref())?;
  tracing::info!(data_file = %settings.data_file.display(), "starting");

  let mut app = App::open(JsonStore::new(&settings.data_file))
    .with_context(|| format!("opening {}", settings.data_file.display()))?;

  run_loop(&mut app, io::stdin().lock(), io::stdout().lock())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_loop<S, R, W>(app: &mut App<S>, input: R, mut output: W) -> Result<()>
where
  S: roster_core::store::AddressBookStore,
  R: BufRead,
  W: Write,
{
  write!(output, "> ")?;
  output.flush()?;

  for line in input.lines() {
    let line = line.context("reading input")?;
    if line.trim().is_empty() {
      write!(output, "> ")?;
      output.flush()?;
      continue;
    }

    let (reply, flow) = app.handle_line(&line);
    writeln!(output, "{reply}")?;
    if flow == Flow::Exit {
      return Ok(());
    }
    write!(output, "> ")?;
    output.flush()?;
  }

  writeln!(output)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn loop_stops_at_exit() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(JsonStore::new(dir.path().join("b.json"))).unwrap();
    let input = "list\n\nexit\nlist\n".as_bytes();
    let mut output = Vec::new();
    run_loop(&mut app, input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Listed all persons").count(), 1);
    assert!(text.contains("Exiting Address Book as requested ..."));
  }
}
