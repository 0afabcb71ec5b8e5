use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString};

use super::ObjectOrReference;

/// Raw `type` keyword of a schema object, normalized into the categories the
/// type resolver dispatches on.
///
/// Besides the OpenAPI data types this also accepts the format names that
/// older documents put directly into `type` (`int64`, `dateTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum SchemaType {
  #[strum(
    serialize = "integer",
    serialize = "number",
    serialize = "int32",
    serialize = "int64",
    serialize = "long",
    serialize = "float",
    serialize = "double"
  )]
  Number,
  #[strum(serialize = "boolean")]
  Boolean,
  #[strum(
    serialize = "string",
    serialize = "byte",
    serialize = "binary",
    serialize = "date",
    serialize = "dateTime",
    serialize = "date-time",
    serialize = "password"
  )]
  String,
  #[strum(serialize = "null")]
  Null,
  #[strum(serialize = "array")]
  Array,
  #[strum(serialize = "object")]
  Object,
  #[strum(default)]
  Other(String),
}

impl From<String> for SchemaType {
  fn from(raw: String) -> Self {
    raw.parse().unwrap_or(Self::Other(raw))
  }
}

impl<'de> Deserialize<'de> for SchemaType {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    String::deserialize(deserializer).map(Self::from)
  }
}

/// `additionalProperties` is either a boolean or a nested schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Bool(bool),
  Schema(Box<ObjectOrReference<Schema>>),
}

impl AdditionalProperties {
  /// `false` behaves exactly like an absent keyword.
  #[must_use]
  pub fn is_enabled(&self) -> bool {
    !matches!(self, Self::Bool(false))
  }

  /// `true` and `{}` both allow any value without constraining it.
  #[must_use]
  pub fn is_unconstrained(&self) -> bool {
    match self {
      Self::Bool(allowed) => *allowed,
      Self::Schema(node) => matches!(node.as_ref(), ObjectOrReference::Object(schema) if schema.is_empty()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
  pub property_name: String,
  #[serde(default)]
  pub mapping: Option<IndexMap<String, String>>,
}

/// An OpenAPI 3.0 schema object, restricted to the keywords that influence
/// the generated types. Unknown keywords are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
  #[serde(rename = "type")]
  pub schema_type: Option<SchemaType>,
  pub format: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "enum")]
  pub enum_values: Option<Vec<Value>>,
  pub nullable: bool,
  pub items: Option<Box<ObjectOrReference<Schema>>>,
  pub min_items: Option<u64>,
  pub max_items: Option<u64>,
  pub properties: Option<IndexMap<String, ObjectOrReference<Schema>>>,
  pub required: Vec<String>,
  pub additional_properties: Option<AdditionalProperties>,
  pub all_of: Option<Vec<ObjectOrReference<Schema>>>,
  pub any_of: Option<Vec<ObjectOrReference<Schema>>>,
  pub one_of: Option<Vec<ObjectOrReference<Schema>>>,
  pub discriminator: Option<Discriminator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CompositionKind {
  AllOf,
  AnyOf,
  OneOf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
  Number,
  Boolean,
  String,
  Null,
}

/// Closed view over a schema node. Every consumer matches on this instead of
/// probing raw keywords, so a new node kind is a compile error everywhere it
/// matters.
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode<'a> {
  Reference(&'a str),
  Scalar {
    kind: ScalarKind,
    enum_values: Option<&'a [Value]>,
  },
  Array {
    items: Option<&'a ObjectOrReference<Schema>>,
    min_items: Option<u64>,
    max_items: Option<u64>,
  },
  Composition {
    kind: CompositionKind,
    members: &'a [ObjectOrReference<Schema>],
    required: &'a [String],
  },
  Object(&'a Schema),
}

impl Schema {
  #[must_use]
  pub fn node(&self) -> SchemaNode<'_> {
    let scalar = |kind| SchemaNode::Scalar {
      kind,
      enum_values: self.enum_values.as_deref().filter(|values| !values.is_empty()),
    };

    match &self.schema_type {
      Some(SchemaType::Number) => scalar(ScalarKind::Number),
      Some(SchemaType::Boolean) => scalar(ScalarKind::Boolean),
      Some(SchemaType::String) => scalar(ScalarKind::String),
      Some(SchemaType::Null) => scalar(ScalarKind::Null),
      Some(SchemaType::Array) => SchemaNode::Array {
        items: self.items.as_deref(),
        min_items: self.min_items,
        max_items: self.max_items,
      },
      Some(SchemaType::Object | SchemaType::Other(_)) | None => self.composition().unwrap_or(SchemaNode::Object(self)),
    }
  }

  fn composition(&self) -> Option<SchemaNode<'_>> {
    [
      (CompositionKind::AllOf, &self.all_of),
      (CompositionKind::AnyOf, &self.any_of),
      (CompositionKind::OneOf, &self.one_of),
    ]
    .into_iter()
    .find_map(|(kind, members)| {
      members
        .as_deref()
        .filter(|members| !members.is_empty())
        .map(|members| SchemaNode::Composition {
          kind,
          members,
          required: &self.required,
        })
    })
  }

  #[must_use]
  pub fn is_object_type(&self) -> bool {
    matches!(self.schema_type, Some(SchemaType::Object))
  }

  #[must_use]
  pub fn is_array_type(&self) -> bool {
    matches!(self.schema_type, Some(SchemaType::Array))
  }

  #[must_use]
  pub fn has_composition(&self) -> bool {
    self.composition().is_some()
  }

  /// True for `{}` and schemas that only carry unknown keywords.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }

  #[must_use]
  pub fn has_enabled_additional_properties(&self) -> bool {
    self
      .additional_properties
      .as_ref()
      .is_some_and(AdditionalProperties::is_enabled)
  }
}

impl ObjectOrReference<Schema> {
  #[must_use]
  pub fn node(&self) -> SchemaNode<'_> {
    match self {
      Self::Ref { ref_path } => SchemaNode::Reference(ref_path),
      Self::Object(schema) => schema.node(),
    }
  }
}
