//! Multi-backend configuration file.
//!
//! ```yaml
//! petstore:
//!   file: specs/petstore.yaml
//!   output: src/api/petstore.ts
//!   pathParametersEncodingMode: rfc3986
//! billing:
//!   file: specs/billing.json
//!   output: src/api/billing.ts
//!   skipReact: true
//!   validation: true
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::style::Stylize;
use indexmap::IndexMap;
use oas3_ts_gen::{
  generator::{GenerationTarget, PathEncodingMode},
  utils::spec::SpecFormat,
};
use serde::Deserialize;
use tokio::task::JoinSet;

use super::generate::{GenerateConfig, generate_code};
use crate::ui::{Colors, GenerateCommand};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
  pub file: PathBuf,
  #[serde(default)]
  pub output: Option<PathBuf>,
  #[serde(default)]
  pub mode: Option<GenerationTarget>,
  /// Types only; ignored when `mode` is set.
  #[serde(default)]
  pub skip_react: bool,
  #[serde(default)]
  pub validation: bool,
  #[serde(default)]
  pub custom_import: Option<String>,
  #[serde(default)]
  pub path_parameters_encoding_mode: Option<PathEncodingMode>,
}

impl BackendConfig {
  fn target(&self) -> GenerationTarget {
    match self.mode {
      Some(mode) => mode,
      None if self.skip_react => GenerationTarget::Types,
      None => GenerationTarget::Client,
    }
  }

  /// Settings for one backend run. `verbose`, `quiet` and `strict` come from
  /// the command line and apply to every backend.
  pub fn into_generate_config(self, name: &str, command: &GenerateCommand) -> GenerateConfig {
    GenerateConfig {
      backend: Some(name.to_string()),
      target: self.target(),
      input: self.file,
      output: self.output,
      validation: self.validation || command.validation,
      strict: command.strict,
      path_encoding: self.path_parameters_encoding_mode,
      custom_import: self.custom_import,
      verbose: command.verbose,
      quiet: command.quiet,
    }
  }
}

pub async fn load_backends(path: &Path) -> anyhow::Result<IndexMap<String, BackendConfig>> {
  let content = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read configuration file {}", path.display()))?;

  let backends: IndexMap<String, BackendConfig> = match SpecFormat::from_path(path) {
    SpecFormat::Json => serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(&content))?,
    SpecFormat::Yaml => serde_path_to_error::deserialize(serde_yaml::Deserializer::from_str(&content))?,
  };
  Ok(backends)
}

/// Backends to run, in file order, and the requested names that do not exist.
/// An empty `names` selects every backend.
pub fn select_backends(
  backends: IndexMap<String, BackendConfig>,
  names: &[String],
) -> (Vec<(String, BackendConfig)>, Vec<String>) {
  if names.is_empty() {
    return (backends.into_iter().collect(), vec![]);
  }

  let unknown = names
    .iter()
    .filter(|name| !backends.contains_key(name.as_str()))
    .cloned()
    .collect();
  let selected = backends
    .into_iter()
    .filter(|(name, _)| names.contains(name))
    .collect();

  (selected, unknown)
}

/// Generates every selected backend concurrently.
pub async fn generate_backends(config_path: &Path, command: &GenerateCommand, colors: Colors) -> anyhow::Result<()> {
  let backends = load_backends(config_path).await?;
  let (selected, unknown) = select_backends(backends, &command.backends);

  for name in &unknown {
    eprintln!(
      "{} {}",
      "Warning:".with(colors.accent()),
      format!("backend `{name}` is not declared in {}", config_path.display()).with(colors.primary())
    );
  }

  let total = selected.len();
  let mut tasks = JoinSet::new();
  for (name, backend) in selected {
    let config = backend.into_generate_config(&name, command);
    tasks.spawn(async move { (name, generate_code(config, &colors).await) });
  }

  let mut failed = 0;
  while let Some(joined) = tasks.join_next().await {
    let (name, result) = joined?;
    if let Err(err) = result {
      failed += 1;
      eprintln!(
        "{} {}",
        format!("[{name}]").with(colors.accent()),
        format!("{err:#}").with(colors.primary())
      );
    }
  }

  if failed > 0 {
    anyhow::bail!("{failed} of {total} backend(s) failed");
  }
  Ok(())
}
