use std::collections::HashSet;

use indexmap::IndexMap;

use super::{
  content::{request_body_type, response_type},
  discriminator::PreparedComponents,
  type_resolver::{resolve, resolve_schema},
};
use crate::{
  document::{ObjectOrReference, RequestBody, Response, Schema, SchemaType},
  generator::{
    GenerationError, GenerationResult,
    ast::{Declaration, DocBlock},
    naming::to_type_name,
  },
};

/// Names of every declaration emitted during one generation run, component
/// and synthetic alike.
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
  seen: HashSet<String>,
}

impl DeclarationRegistry {
  pub(crate) fn register(&mut self, declaration: &Declaration) -> GenerationResult<()> {
    if self.seen.insert(declaration.name().to_string()) {
      Ok(())
    } else {
      Err(GenerationError::DuplicateDeclaration {
        name: declaration.name().to_string(),
      })
    }
  }

  fn admit(&mut self, declaration: Declaration) -> GenerationResult<Declaration> {
    self.register(&declaration)?;
    Ok(declaration)
  }
}

pub(crate) fn emit_schemas(
  schemas: &IndexMap<String, ObjectOrReference<Schema>>,
  names: &mut DeclarationRegistry,
) -> GenerationResult<Vec<Declaration>> {
  schemas
    .iter()
    .map(|(name, node)| {
      emit_schema(name, node)
        .and_then(|declaration| names.admit(declaration))
        .map_err(|err| err.in_component("schemas", name))
    })
    .collect()
}

/// Plain object schemas become interfaces; everything else is an alias.
fn emit_schema(name: &str, node: &ObjectOrReference<Schema>) -> GenerationResult<Declaration> {
  let type_name = to_type_name(name);

  let ObjectOrReference::Object(schema) = node else {
    return Ok(Declaration::alias(type_name, resolve(node)?, DocBlock::default()));
  };

  let docs = DocBlock::new(schema.description.as_deref());
  let ty = resolve_schema(schema)?;
  let plain_object = matches!(schema.schema_type, None | Some(SchemaType::Object))
    && !schema.has_composition()
    && !schema.nullable;

  Ok(if plain_object && ty.is_object_like() {
    Declaration::for_type(type_name, ty, docs)
  } else {
    Declaration::alias(type_name, ty, docs)
  })
}

pub(crate) fn emit_request_bodies(
  bodies: &IndexMap<String, ObjectOrReference<RequestBody>>,
  names: &mut DeclarationRegistry,
) -> GenerationResult<Vec<Declaration>> {
  bodies
    .iter()
    .map(|(name, body)| {
      let docs = DocBlock::new(body.as_object().and_then(|body| body.description.as_deref()));
      request_body_type(Some(body))
        .map(|ty| Declaration::for_type(format!("{}RequestBody", to_type_name(name)), ty, docs))
        .and_then(|declaration| names.admit(declaration))
        .map_err(|err| err.in_component("requestBodies", name))
    })
    .collect()
}

pub(crate) fn emit_responses(
  responses: &IndexMap<String, ObjectOrReference<Response>>,
  names: &mut DeclarationRegistry,
) -> GenerationResult<Vec<Declaration>> {
  responses
    .iter()
    .map(|(name, response)| {
      let docs = DocBlock::new(response.as_object().and_then(|response| response.description.as_deref()));
      response_type(response)
        .map(|ty| Declaration::for_type(format!("{}Response", to_type_name(name)), ty, docs))
        .and_then(|declaration| names.admit(declaration))
        .map_err(|err| err.in_component("responses", name))
    })
    .collect()
}

/// Every component declaration, in collection order: schemas, request
/// bodies, responses. Two members that normalize to the same type name are
/// an error.
pub(crate) fn emit_components(
  components: &PreparedComponents,
  names: &mut DeclarationRegistry,
) -> GenerationResult<Vec<Declaration>> {
  let mut declarations = emit_schemas(&components.schemas, names)?;
  declarations.extend(emit_request_bodies(&components.request_bodies, names)?);
  declarations.extend(emit_responses(&components.responses, names)?);
  Ok(declarations)
}
