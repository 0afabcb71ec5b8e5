use serde_json::Value;

use super::refs::reference_type_name;
use crate::{
  document::{
    AdditionalProperties, CompositionKind, ObjectOrReference, ScalarKind, Schema, SchemaNode, SchemaType,
  },
  generator::{
    GenerationError, GenerationResult,
    ast::{ObjectType, PropertySignature, TsLiteral, TsPrimitive, TsType},
  },
};

/// Resolves a schema node or a `$ref` to its type expression.
pub(crate) fn resolve(node: &ObjectOrReference<Schema>) -> GenerationResult<TsType> {
  match node {
    ObjectOrReference::Ref { ref_path } => reference_type_name(ref_path).map(TsType::Named),
    ObjectOrReference::Object(schema) => resolve_schema(schema),
  }
}

pub(crate) fn resolve_schema(schema: &Schema) -> GenerationResult<TsType> {
  let ty = match schema.node() {
    SchemaNode::Reference(reference) => return reference_type_name(reference).map(TsType::Named),
    SchemaNode::Scalar {
      kind: ScalarKind::Null, ..
    } => return Ok(TsType::NULL),
    SchemaNode::Scalar { kind, enum_values } => resolve_scalar(kind, enum_values),
    SchemaNode::Array {
      items,
      min_items,
      max_items,
    } => resolve_array(items, min_items, max_items)?,
    SchemaNode::Composition {
      kind,
      members,
      required,
    } => resolve_composition(kind, members, required)?,
    SchemaNode::Object(shape) => resolve_object(shape)?,
  };

  Ok(if schema.nullable { ty.nullable() } else { ty })
}

fn resolve_scalar(kind: ScalarKind, enum_values: Option<&[Value]>) -> TsType {
  let primitive = match kind {
    ScalarKind::Number => TsPrimitive::Number,
    ScalarKind::Boolean => TsPrimitive::Boolean,
    ScalarKind::String => TsPrimitive::String,
    ScalarKind::Null => TsPrimitive::Null,
  };

  match enum_values {
    Some(values) => TsType::union(values.iter().map(|value| enum_literal(kind, value))),
    None => primitive.into(),
  }
}

/// String enums quote every member; number and boolean enums keep numbers
/// and booleans bare. `null` is always the null type.
fn enum_literal(kind: ScalarKind, value: &Value) -> TsType {
  match (kind, value) {
    (_, Value::Null) => TsType::NULL,
    (_, Value::String(text)) => TsType::Literal(TsLiteral::String(text.clone())),
    (ScalarKind::String, other) => TsType::Literal(TsLiteral::String(other.to_string())),
    (_, Value::Number(number)) => TsType::Literal(TsLiteral::Number(number.to_string())),
    (_, Value::Bool(flag)) => TsType::Literal(TsLiteral::Boolean(*flag)),
    (_, other) => TsType::Literal(TsLiteral::String(other.to_string())),
  }
}

/// Fixed-length arrays longer than this are typed as plain lists.
const MAX_TUPLE_ARITY: u64 = 64;

fn resolve_array(
  items: Option<&ObjectOrReference<Schema>>,
  min_items: Option<u64>,
  max_items: Option<u64>,
) -> GenerationResult<TsType> {
  let items = items.ok_or(GenerationError::MissingArrayItems)?;
  let item_type = resolve(items)?;

  match (min_items, max_items) {
    (Some(min), Some(max)) if min == max && (1..=MAX_TUPLE_ARITY).contains(&min) => {
      let arity = usize::try_from(min).unwrap_or_default();
      Ok(TsType::Tuple(std::iter::repeat_n(item_type, arity).collect()))
    }
    _ => Ok(TsType::array(item_type)),
  }
}

fn resolve_composition(
  kind: CompositionKind,
  members: &[ObjectOrReference<Schema>],
  required: &[String],
) -> GenerationResult<TsType> {
  let resolved = members.iter().map(resolve).collect::<GenerationResult<Vec<_>>>()?;

  Ok(match kind {
    CompositionKind::AllOf => TsType::intersection(resolved).require(required),
    CompositionKind::AnyOf => TsType::union(resolved),
    CompositionKind::OneOf => TsType::union(resolved).require(required),
  })
}

fn resolve_object(schema: &Schema) -> GenerationResult<TsType> {
  let additional = schema.additional_properties.as_ref();
  let open = schema.has_enabled_additional_properties();

  if schema.schema_type.is_none() && schema.properties.is_none() && !open {
    return Ok(TsType::Object(ObjectType::default()));
  }

  let unconstrained = additional.is_none_or(|extra| !extra.is_enabled() || extra.is_unconstrained());
  if schema.is_object_type() && schema.properties.is_none() && unconstrained {
    return Ok(TsType::FreeFormMap);
  }

  if schema.properties.is_some() || open {
    return resolve_shape(schema).map(TsType::Object);
  }

  Ok(match schema.schema_type {
    Some(SchemaType::Object) => TsType::FreeFormMap,
    _ => TsType::ANY,
  })
}

fn resolve_shape(schema: &Schema) -> GenerationResult<ObjectType> {
  let properties = schema
    .properties
    .iter()
    .flatten()
    .map(|(name, node)| {
      Ok(PropertySignature {
        name: name.clone(),
        optional: !schema.required.contains(name),
        ty: resolve(node)?,
        docs: node.as_object().and_then(|property| property.description.clone()),
      })
    })
    .collect::<GenerationResult<Vec<_>>>()?;

  let index_signature = match &schema.additional_properties {
    Some(AdditionalProperties::Bool(true)) => Some(Box::new(TsType::ANY)),
    Some(AdditionalProperties::Schema(node)) => Some(Box::new(resolve(node)?)),
    Some(AdditionalProperties::Bool(false)) | None => None,
  };

  Ok(ObjectType {
    properties,
    index_signature,
  })
}
