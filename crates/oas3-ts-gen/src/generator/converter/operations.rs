use std::collections::HashSet;

use super::{
  content::{request_body_type, responses_union},
  discriminator::PreparedComponents,
  parameters::{ParameterSet, parameter_property, parameter_type, parameters_object},
  path_template::{RouteTemplate, unsupported_placeholders},
};
use crate::{
  document::{HttpMethod, Operation, ParameterLocation, PathItem},
  generator::{
    GenerationError, GenerationResult, GenerationWarning,
    ast::{Declaration, DocBlock, ObjectType, PropertySignature, TsType},
    naming::to_component_name,
  },
};

/// Every `operationId` seen during one generation run.
#[derive(Debug, Default)]
pub struct OperationIdRegistry {
  seen: HashSet<String>,
}

impl OperationIdRegistry {
  pub(crate) fn register(&mut self, operation_id: &str) -> GenerationResult<()> {
    if self.seen.insert(operation_id.to_string()) {
      Ok(())
    } else {
      Err(GenerationError::DuplicateOperationId {
        operation_id: operation_id.to_string(),
      })
    }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.seen.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.seen.is_empty()
  }
}

/// The identifier a DELETE route ends with, passed to the mutation instead
/// of being part of the path params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
  pub name: String,
  pub ty: TsType,
}

/// The five generic slots shared by every generated hook:
/// `<Response, Error, QueryParams, Body, PathParams>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericsSignature {
  pub response: TsType,
  pub error: TsType,
  pub query_params: TsType,
  pub body: TsType,
  pub path_params: TsType,
}

impl GenericsSignature {
  #[must_use]
  pub fn slots(&self) -> [&TsType; 5] {
    [
      &self.response,
      &self.error,
      &self.query_params,
      &self.body,
      &self.path_params,
    ]
  }

  #[must_use]
  pub fn render(&self) -> String {
    self.slots().map(TsType::render).join(", ")
  }

  #[must_use]
  pub fn uses_require(&self) -> bool {
    self.slots().into_iter().any(TsType::uses_require)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMetadata {
  pub operation_id: String,
  pub component_name: String,
  pub verb: HttpMethod,
  /// Route with `${name}` placeholders and without the DELETE resource id.
  pub route: String,
  pub description: Option<String>,
  pub path_params: Vec<String>,
  pub resource_id: Option<ResourceId>,
  pub has_query_params: bool,
  pub has_request_body: bool,
  pub generics: GenericsSignature,
}

#[derive(Debug, Clone)]
pub struct BoundOperation {
  pub metadata: OperationMetadata,
  /// Synthetic declarations in emission order: response, query params, path
  /// params, request body.
  pub declarations: Vec<Declaration>,
  pub warnings: Vec<GenerationWarning>,
}

/// Binds `(route, verb, operation)` triples to their types.
pub struct OperationBinder<'a> {
  components: &'a PreparedComponents,
  extract_delete_id: bool,
}

impl<'a> OperationBinder<'a> {
  #[must_use]
  pub const fn new(components: &'a PreparedComponents, extract_delete_id: bool) -> Self {
    Self {
      components,
      extract_delete_id,
    }
  }

  pub fn bind(
    &self,
    route: &str,
    item: &PathItem,
    verb: HttpMethod,
    operation: &Operation,
    registry: &mut OperationIdRegistry,
  ) -> GenerationResult<BoundOperation> {
    self
      .bind_inner(route, item, verb, operation, registry)
      .map_err(|err| err.in_operation(verb, route))
  }

  fn bind_inner(
    &self,
    route: &str,
    item: &PathItem,
    verb: HttpMethod,
    operation: &Operation,
    registry: &mut OperationIdRegistry,
  ) -> GenerationResult<BoundOperation> {
    let operation_id = operation
      .operation_id
      .as_deref()
      .ok_or_else(|| GenerationError::MissingOperationId {
        verb,
        route: route.to_string(),
      })?;
    registry.register(operation_id)?;

    let component_name = to_component_name(operation_id);
    let template = RouteTemplate::new(route, verb, self.extract_delete_id);
    let parameters = ParameterSet::merge(&item.parameters, &operation.parameters, self.components)?;
    let resource_id = resolve_resource_id(&template, &parameters, operation_id)?;

    let mut warnings = vec![];
    let path_params = template.placeholders();
    let path_shape = ObjectType {
      properties: path_params
        .iter()
        .map(|name| match parameters.path_parameter(name) {
          Some(parameter) => parameter_property(parameter),
          None => {
            warnings.push(GenerationWarning::UndeclaredPathParameter {
              operation_id: operation_id.to_string(),
              param: name.clone(),
            });
            Ok(PropertySignature {
              name: name.clone(),
              optional: false,
              ty: TsType::STRING,
              docs: None,
            })
          }
        })
        .collect::<GenerationResult<Vec<_>>>()?,
      index_signature: None,
    };
    warnings.extend(
      unsupported_placeholders(route)
        .into_iter()
        .map(|placeholder| GenerationWarning::UnsupportedPathPlaceholder {
          operation_id: operation_id.to_string(),
          placeholder,
        }),
    );
    let query_shape = parameters_object(parameters.located(ParameterLocation::Query))?;

    let response = responses_union(operation.success_responses(), TsType::VOID)?;
    let error = responses_union(operation.error_responses(), TsType::UNKNOWN)?;
    let body = request_body_type(operation.request_body.as_ref())?;

    let mut declarations = vec![];
    let response_slot = if response.contains_inline_shape() {
      declarations.push(Declaration::for_type(
        format!("{component_name}Response"),
        response,
        DocBlock::default(),
      ));
      TsType::named(format!("{component_name}Response"))
    } else {
      response
    };

    let has_query_params = !query_shape.properties.is_empty();
    let query_slot = if has_query_params {
      declarations.push(Declaration::for_type(
        format!("{component_name}QueryParams"),
        TsType::Object(query_shape),
        DocBlock::default(),
      ));
      TsType::named(format!("{component_name}QueryParams"))
    } else {
      TsType::VOID
    };

    let path_slot = if path_shape.properties.is_empty() {
      TsType::VOID
    } else {
      declarations.push(Declaration::for_type(
        format!("{component_name}PathParams"),
        TsType::Object(path_shape),
        DocBlock::default(),
      ));
      TsType::named(format!("{component_name}PathParams"))
    };

    let has_request_body = !body.is_void();
    let body_type = if has_request_body {
      declarations.push(Declaration::alias(
        format!("{component_name}RequestBody"),
        body,
        DocBlock::default(),
      ));
      TsType::named(format!("{component_name}RequestBody"))
    } else {
      TsType::VOID
    };
    let body_slot = resource_id.as_ref().map_or(body_type, |id| id.ty.clone());

    Ok(BoundOperation {
      metadata: OperationMetadata {
        operation_id: operation_id.to_string(),
        component_name,
        verb,
        route: template.route().to_string(),
        description: operation.full_description(),
        path_params,
        resource_id,
        has_query_params,
        has_request_body,
        generics: GenericsSignature {
          response: response_slot,
          error,
          query_params: query_slot,
          body: body_slot,
          path_params: path_slot,
        },
      },
      declarations,
      warnings,
    })
  }
}

/// Type of the DELETE resource id: the matching declared parameter, `string`
/// when the operation declares no parameters at all.
fn resolve_resource_id(
  template: &RouteTemplate,
  parameters: &ParameterSet<'_>,
  operation_id: &str,
) -> GenerationResult<Option<ResourceId>> {
  let Some(name) = template.resource_id() else {
    return Ok(None);
  };

  let ty = match parameters.named(name) {
    Some(parameter) => parameter_type(parameter)?,
    None if parameters.is_empty() => TsType::STRING,
    None => {
      return Err(GenerationError::UnresolvableDeleteParameter {
        param: name.to_string(),
        operation_id: operation_id.to_string(),
      });
    }
  };

  Ok(Some(ResourceId {
    name: name.to_string(),
    ty,
  }))
}
