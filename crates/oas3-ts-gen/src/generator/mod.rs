pub mod ast;
pub mod codegen;
pub mod converter;
pub mod errors;
pub mod linter;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;

#[cfg(test)]
mod tests;

use serde::Deserialize;
use strum::Display;

pub use self::{
  errors::{GenerationError, GenerationResult},
  metrics::{GenerationStats, GenerationWarning},
};

/// What a run produces besides the type declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationTarget {
  /// Declarations only; DELETE routes keep their trailing id as a path parameter.
  Types,
  /// Declarations plus react-query hooks.
  #[default]
  Client,
}

impl GenerationTarget {
  #[must_use]
  pub const fn emits_hooks(self) -> bool {
    matches!(self, Self::Client)
  }

  /// DELETE routes ending in `/{id}` pass that id as the mutation argument.
  #[must_use]
  pub const fn extracts_delete_id(self) -> bool {
    matches!(self, Self::Client)
  }
}

/// Encoding applied to path parameters interpolated into request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PathEncodingMode {
  /// `encodeURIComponent`
  UriComponent,
  /// `encodeURIComponent` plus `!'()*`
  Rfc3986,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct CodegenConfig {
  #[builder(default)]
  pub target: GenerationTarget,
  pub path_encoding: Option<PathEncodingMode>,
  #[builder(into)]
  pub custom_import: Option<String>,
}
