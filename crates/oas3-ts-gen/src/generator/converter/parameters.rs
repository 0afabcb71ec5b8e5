use super::{
  discriminator::PreparedComponents,
  refs::{ComponentKind, ComponentRef},
  type_resolver::resolve,
};
use crate::{
  document::{ObjectOrReference, Parameter, ParameterLocation},
  generator::{
    GenerationError, GenerationResult,
    ast::{ObjectType, PropertySignature, TsType},
  },
};

/// Route-level and operation-level parameters, references resolved.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParameterSet<'a> {
  parameters: Vec<&'a Parameter>,
}

impl<'a> ParameterSet<'a> {
  /// Merges both levels; an operation-level parameter replaces the
  /// route-level one with the same name and location in place.
  pub(crate) fn merge(
    route_level: &'a [ObjectOrReference<Parameter>],
    operation_level: &'a [ObjectOrReference<Parameter>],
    components: &'a PreparedComponents,
  ) -> GenerationResult<Self> {
    let mut parameters: Vec<&'a Parameter> = vec![];

    for node in route_level.iter().chain(operation_level) {
      let parameter = lookup(node, components)?;
      match parameters
        .iter_mut()
        .find(|existing| existing.name == parameter.name && existing.location == parameter.location)
      {
        Some(existing) => *existing = parameter,
        None => parameters.push(parameter),
      }
    }

    Ok(Self { parameters })
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.parameters.is_empty()
  }

  pub(crate) fn located(&self, location: ParameterLocation) -> impl Iterator<Item = &'a Parameter> + '_ {
    self
      .parameters
      .iter()
      .copied()
      .filter(move |parameter| parameter.location == location)
  }

  /// First parameter named `name`, whatever its location.
  pub(crate) fn named(&self, name: &str) -> Option<&'a Parameter> {
    self.parameters.iter().copied().find(|parameter| parameter.name == name)
  }

  pub(crate) fn path_parameter(&self, name: &str) -> Option<&'a Parameter> {
    self.located(ParameterLocation::Path).find(|parameter| parameter.name == name)
  }
}

fn lookup<'a>(
  node: &'a ObjectOrReference<Parameter>,
  components: &'a PreparedComponents,
) -> GenerationResult<&'a Parameter> {
  let reference = match node {
    ObjectOrReference::Object(parameter) => return Ok(parameter),
    ObjectOrReference::Ref { ref_path } => ref_path,
  };
  let unresolved = || GenerationError::UnresolvedParameterReference {
    reference: reference.clone(),
  };

  let parsed = ComponentRef::parse(reference).map_err(|_| unresolved())?;
  if parsed.kind != ComponentKind::Parameters {
    return Err(unresolved());
  }

  components
    .parameters
    .get(&parsed.name)
    .and_then(ObjectOrReference::as_object)
    .ok_or_else(unresolved)
}

/// Declared type of a parameter; `any` without a schema.
pub(crate) fn parameter_type(parameter: &Parameter) -> GenerationResult<TsType> {
  parameter.schema.as_ref().map_or(Ok(TsType::ANY), resolve)
}

pub(crate) fn parameter_property(parameter: &Parameter) -> GenerationResult<PropertySignature> {
  Ok(PropertySignature {
    name: parameter.name.clone(),
    optional: !parameter.required,
    ty: parameter_type(parameter)?,
    docs: parameter.description.clone(),
  })
}

pub(crate) fn parameters_object<'a>(parameters: impl IntoIterator<Item = &'a Parameter>) -> GenerationResult<ObjectType> {
  let properties = parameters
    .into_iter()
    .map(parameter_property)
    .collect::<GenerationResult<Vec<_>>>()?;

  Ok(ObjectType {
    properties,
    index_signature: None,
  })
}
