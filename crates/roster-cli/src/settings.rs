//! Layered configuration: defaults, then TOML file, then `ROSTER_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

const DEFAULT_DATA_FILE: &str = "data/addressbook.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Where the address book is persisted.
  pub data_file: PathBuf,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      data_file: PathBuf::from(DEFAULT_DATA_FILE),
    }
  }
}

impl Settings {
  /// Build settings from an optional config file plus an optional
  /// `--data-file` override.
  pub fn load(
    config_file: Option<&Path>,
    data_file: Option<&Path>,
  ) -> anyhow::Result<Self> {
    Self::load_with_env(
      config_file,
      data_file,
      config::Environment::with_prefix("ROSTER"),
    )
  }

  fn load_with_env(
    config_file: Option<&Path>,
    data_file: Option<&Path>,
    env: config::Environment,
  ) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = config_file {
      builder = builder.add_source(config::File::from(path).required(true));
    }
    let settings = builder
      .add_source(env)
      .set_override_option(
        "data_file",
        data_file.map(|p| p.to_string_lossy().into_owned()),
      )
      .context("invalid --data-file override")?
      .build()
      .context("failed to read configuration")?;

    let mut settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise Settings")?;
    settings.data_file = expand_tilde(&settings.data_file);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
