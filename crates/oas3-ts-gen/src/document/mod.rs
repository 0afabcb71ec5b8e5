//! Serde model of the subset of an OpenAPI 3.0 document the generator reads.
//!
//! Maps are [`IndexMap`]s everywhere: declaration order in the source
//! document is the emission order of the generated code.

mod operation;
mod schema;


use indexmap::IndexMap;
use serde::Deserialize;

pub use self::{
  operation::{
    HttpMethod, MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response, StatusCode,
  },
  schema::{AdditionalProperties, CompositionKind, Discriminator, ScalarKind, Schema, SchemaNode, SchemaType},
};

/// Either an inline object or a `$ref` pointing at a component.
///
/// Any object carrying `$ref` is treated as a reference; sibling keywords are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

impl<T> ObjectOrReference<T> {
  #[must_use]
  pub fn as_object(&self) -> Option<&T> {
    match self {
      Self::Object(object) => Some(object),
      Self::Ref { .. } => None,
    }
  }

  #[must_use]
  pub fn ref_path(&self) -> Option<&str> {
    match self {
      Self::Ref { ref_path } => Some(ref_path),
      Self::Object(_) => None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Components {
  pub schemas: IndexMap<String, ObjectOrReference<Schema>>,
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
  pub parameters: IndexMap<String, ObjectOrReference<Parameter>>,
  pub request_bodies: IndexMap<String, ObjectOrReference<RequestBody>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
  pub openapi: String,
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Option<Components>,
}

impl Document {
  pub fn from_json_str(data: &str) -> anyhow::Result<Self> {
    let deserializer = &mut serde_json::Deserializer::from_str(data);
    Ok(serde_path_to_error::deserialize(deserializer)?)
  }

  pub fn from_yaml_str(data: &str) -> anyhow::Result<Self> {
    let deserializer = serde_yaml::Deserializer::from_str(data);
    Ok(serde_path_to_error::deserialize(deserializer)?)
  }

  /// The generator only understands 3.0.x documents; older versions have to be
  /// converted before they reach it.
  #[must_use]
  pub fn is_supported_version(&self) -> bool {
    self.openapi.starts_with("3.0")
  }

  /// Iterates every `(route, verb, operation)` in declaration order, including
  /// verbs the generator does not bind.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self.paths.iter().flat_map(|(route, item)| {
      item
        .operations
        .iter()
        .map(move |(method, operation)| (route.as_str(), *method, operation))
    })
  }
}
