use itertools::Itertools;
use strum::Display;

use crate::utils::{format_description, property_key, text::quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TsPrimitive {
  Number,
  Boolean,
  String,
  Null,
  Any,
  Void,
  Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsLiteral {
  String(String),
  /// Kept as the source text so `1`, `1.0` and `1e3` render as written.
  Number(String),
  Boolean(bool),
}

impl TsLiteral {
  fn render(&self) -> String {
    match self {
      Self::String(value) => quote(value),
      Self::Number(value) => value.clone(),
      Self::Boolean(value) => value.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySignature {
  pub name: String,
  pub optional: bool,
  pub ty: TsType,
  pub docs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectType {
  pub properties: Vec<PropertySignature>,
  pub index_signature: Option<Box<TsType>>,
}

impl ObjectType {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.properties.is_empty() && self.index_signature.is_none()
  }

  pub(crate) fn uses_require(&self) -> bool {
    self.properties.iter().any(|property| property.ty.uses_require())
      || self.index_signature.as_ref().is_some_and(|value| value.uses_require())
  }

  /// Renders the members of the object, one per line, indented for `depth`.
  pub(crate) fn render_members(&self, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let properties = self.properties.iter().map(|property| {
      let docs = property
        .docs
        .as_deref()
        .filter(|docs| !docs.is_empty())
        .map(|docs| format_description(docs, depth))
        .unwrap_or_default();
      format!(
        "{pad}{docs}{}{}: {};",
        property_key(&property.name),
        if property.optional { "?" } else { "" },
        property.ty.render_at(depth)
      )
    });
    let index = self
      .index_signature
      .iter()
      .map(|value| format!("{pad}[key: string]: {};", value.render_at(depth)));

    properties.chain(index).join("\n")
  }
}

/// A TypeScript type expression.
///
/// Constructors in this module normalize as they build: unions are flattened
/// and deduplicated, single-member unions and intersections collapse. Two
/// structurally equal trees always render to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
  Named(String),
  Primitive(TsPrimitive),
  Literal(TsLiteral),
  Array(Box<TsType>),
  Tuple(Vec<TsType>),
  Object(ObjectType),
  /// `{[key: string]: any}`
  FreeFormMap,
  Union(Vec<TsType>),
  Intersection(Vec<TsType>),
  /// `Require<base, "a" | "b">`
  Require {
    base: Box<TsType>,
    fields: Vec<String>,
  },
}

impl TsType {
  pub const ANY: Self = Self::Primitive(TsPrimitive::Any);
  pub const NULL: Self = Self::Primitive(TsPrimitive::Null);
  pub const STRING: Self = Self::Primitive(TsPrimitive::String);
  pub const UNKNOWN: Self = Self::Primitive(TsPrimitive::Unknown);
  pub const VOID: Self = Self::Primitive(TsPrimitive::Void);

  pub fn named(name: impl Into<String>) -> Self {
    Self::Named(name.into())
  }

  #[must_use]
  pub fn array(items: Self) -> Self {
    Self::Array(Box::new(items))
  }

  /// Flattened, deduplicated union preserving first occurrence. An empty
  /// union is `unknown`.
  #[must_use]
  pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
    let mut flat = members
      .into_iter()
      .flat_map(|member| match member {
        Self::Union(inner) => inner,
        other => vec![other],
      })
      .unique()
      .collect::<Vec<_>>();

    match flat.len() {
      0 => Self::UNKNOWN,
      1 => flat.remove(0),
      _ => Self::Union(flat),
    }
  }

  #[must_use]
  pub fn intersection(members: impl IntoIterator<Item = Self>) -> Self {
    let mut flat = members
      .into_iter()
      .flat_map(|member| match member {
        Self::Intersection(inner) => inner,
        other => vec![other],
      })
      .collect::<Vec<_>>();

    match flat.len() {
      0 => Self::UNKNOWN,
      1 => flat.remove(0),
      _ => Self::Intersection(flat),
    }
  }

  /// Wraps `self` in `Require<…>` when `fields` is non-empty.
  #[must_use]
  pub fn require(self, fields: &[String]) -> Self {
    if fields.is_empty() {
      return self;
    }
    Self::Require {
      base: Box::new(self),
      fields: fields.to_vec(),
    }
  }

  #[must_use]
  pub fn nullable(self) -> Self {
    Self::union([self, Self::NULL])
  }

  #[must_use]
  pub const fn is_void(&self) -> bool {
    matches!(self, Self::Primitive(TsPrimitive::Void))
  }

  /// True when the type can be the body of an `interface` declaration.
  #[must_use]
  pub const fn is_object_like(&self) -> bool {
    matches!(self, Self::Object(_) | Self::FreeFormMap)
  }

  /// True when an inline object shape appears anywhere in the tree.
  #[must_use]
  pub fn contains_inline_shape(&self) -> bool {
    match self {
      Self::Object(_) | Self::FreeFormMap => true,
      Self::Named(_) | Self::Primitive(_) | Self::Literal(_) => false,
      Self::Array(item) => item.contains_inline_shape(),
      Self::Require { base, .. } => base.contains_inline_shape(),
      Self::Tuple(members) | Self::Union(members) | Self::Intersection(members) => {
        members.iter().any(Self::contains_inline_shape)
      }
    }
  }

  /// True when rendering emits a reference to the `Require` helper.
  #[must_use]
  pub fn uses_require(&self) -> bool {
    match self {
      Self::Require { .. } => true,
      Self::Named(_) | Self::Primitive(_) | Self::Literal(_) | Self::FreeFormMap => false,
      Self::Array(item) => item.uses_require(),
      Self::Object(object) => object.uses_require(),
      Self::Tuple(members) | Self::Union(members) | Self::Intersection(members) => {
        members.iter().any(Self::uses_require)
      }
    }
  }

  #[must_use]
  pub fn render(&self) -> String {
    self.render_at(0)
  }

  /// Renders the type as if it started on a line indented by `depth` levels.
  pub(crate) fn render_at(&self, depth: usize) -> String {
    match self {
      Self::Named(name) => name.clone(),
      Self::Primitive(primitive) => primitive.to_string(),
      Self::Literal(literal) => literal.render(),
      Self::Array(item) => match item.as_ref() {
        Self::Union(_) | Self::Intersection(_) => format!("({})[]", item.render_at(depth)),
        other => format!("{}[]", other.render_at(depth)),
      },
      Self::Tuple(members) => format!("[{}]", members.iter().map(|member| member.render_at(depth)).join(", ")),
      Self::Object(object) if object.is_empty() => "{}".to_string(),
      Self::Object(object) => format!("{{\n{}\n{}}}", object.render_members(depth + 1), "  ".repeat(depth)),
      Self::FreeFormMap => "{[key: string]: any}".to_string(),
      Self::Union(members) => members.iter().map(|member| member.render_at(depth)).join(" | "),
      Self::Intersection(members) => members
        .iter()
        .map(|member| match member {
          Self::Union(_) => format!("({})", member.render_at(depth)),
          other => other.render_at(depth),
        })
        .join(" & "),
      Self::Require { base, fields } => format!(
        "Require<{}, {}>",
        base.render_at(depth),
        fields.iter().map(|field| quote(field)).join(" | ")
      ),
    }
  }
}

impl From<TsPrimitive> for TsType {
  fn from(primitive: TsPrimitive) -> Self {
    Self::Primitive(primitive)
  }
}
