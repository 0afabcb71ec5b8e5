use indexmap::IndexMap;
use serde_json::Value;

use super::refs::SCHEMA_REF_PREFIX;
use crate::{
  document::{Components, ObjectOrReference, Parameter, RequestBody, Response, Schema, SchemaType},
  generator::{GenerationError, GenerationResult, GenerationWarning},
};

/// Component collections after discriminator propagation.
///
/// Every schema targeted by a discriminator mapping carries a single-value
/// `enum` on the discriminator property, so the type resolver renders the
/// subtype with its literal tag without knowing about discriminators.
#[derive(Debug, Clone, Default)]
pub struct PreparedComponents {
  pub schemas: IndexMap<String, ObjectOrReference<Schema>>,
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
  pub parameters: IndexMap<String, ObjectOrReference<Parameter>>,
  pub request_bodies: IndexMap<String, ObjectOrReference<RequestBody>>,
}

impl PreparedComponents {
  /// Builds the augmented copy. Mappings are read from `components` and
  /// written into the copy, so a schema edited by one mapping never feeds
  /// another.
  pub fn prepare(components: Option<&Components>) -> GenerationResult<(Self, Vec<GenerationWarning>)> {
    let Some(components) = components else {
      return Ok((Self::default(), vec![]));
    };

    let mut prepared = Self {
      schemas: components.schemas.clone(),
      responses: components.responses.clone(),
      parameters: components.parameters.clone(),
      request_bodies: components.request_bodies.clone(),
    };
    let mut warnings = vec![];

    for (schema_name, node) in &components.schemas {
      let Some(discriminator) = node.as_object().and_then(|schema| schema.discriminator.as_ref()) else {
        continue;
      };
      let Some(mapping) = &discriminator.mapping else {
        continue;
      };

      for (value, target) in mapping {
        let Some(target_name) = target.strip_prefix(SCHEMA_REF_PREFIX) else {
          return Err(
            GenerationError::UnsupportedDiscriminatorTarget {
              value: value.clone(),
              target: target.clone(),
            }
            .in_component("schemas", schema_name),
          );
        };

        let skipped = |reason: &str| GenerationWarning::DiscriminatorMappingSkipped {
          schema_name: schema_name.clone(),
          value: value.clone(),
          target: target.clone(),
          reason: reason.to_string(),
        };

        match prepared.schemas.get_mut(target_name) {
          None => warnings.push(skipped("target schema is not declared")),
          Some(ObjectOrReference::Ref { .. }) => warnings.push(skipped("target schema is itself a reference")),
          Some(ObjectOrReference::Object(schema)) => {
            if let Err(reason) = tag_property(schema, &discriminator.property_name, value) {
              warnings.push(skipped(reason));
            }
          }
        }
      }
    }

    Ok((prepared, warnings))
  }
}

fn tag_property(schema: &mut Schema, property_name: &str, value: &str) -> Result<(), &'static str> {
  let tag = vec![Value::String(value.to_string())];
  let properties = schema.properties.get_or_insert_with(IndexMap::new);

  match properties.get_mut(property_name) {
    Some(ObjectOrReference::Ref { .. }) => Err("discriminator property is a reference"),
    Some(ObjectOrReference::Object(property)) => {
      property.enum_values = Some(tag);
      Ok(())
    }
    None => {
      properties.insert(
        property_name.to_string(),
        ObjectOrReference::Object(Schema {
          schema_type: Some(SchemaType::String),
          enum_values: Some(tag),
          ..Schema::default()
        }),
      );
      Ok(())
    }
  }
}
