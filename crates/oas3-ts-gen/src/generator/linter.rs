//! Structural checks run before generation.
//!
//! Lint issues never change what the generator emits. Callers decide
//! whether an `Error` issue aborts the run.

use itertools::Itertools;
use strum::Display;

use super::converter::path_template::{placeholders, unsupported_placeholders};
use crate::document::{
  AdditionalProperties, Document, ObjectOrReference, Operation, Parameter, ParameterLocation, PathItem, Schema,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LintSeverity {
  #[strum(to_string = "error")]
  Error,
  #[strum(to_string = "warning")]
  Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
  pub severity: LintSeverity,
  pub message: String,
  /// Dotted location of the offending node, e.g. `paths./pets.get`.
  pub path: String,
}

impl LintIssue {
  fn error(message: impl Into<String>, path: impl Into<String>) -> Self {
    Self {
      severity: LintSeverity::Error,
      message: message.into(),
      path: path.into(),
    }
  }

  fn warning(message: impl Into<String>, path: impl Into<String>) -> Self {
    Self {
      severity: LintSeverity::Warning,
      message: message.into(),
      path: path.into(),
    }
  }

  #[must_use]
  pub const fn is_error(&self) -> bool {
    matches!(self.severity, LintSeverity::Error)
  }
}

pub trait SpecLinter {
  fn lint(&self, document: &Document) -> Vec<LintIssue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLinter;

impl SpecLinter for DefaultLinter {
  fn lint(&self, document: &Document) -> Vec<LintIssue> {
    let mut issues = vec![];

    if let Some(components) = &document.components {
      for (name, schema) in &components.schemas {
        lint_schema(schema, &format!("components.schemas.{name}"), &mut issues);
      }
    }

    for (route, item) in &document.paths {
      for (verb, operation) in &item.operations {
        let path = format!("paths.{route}.{verb}");
        lint_operation(document, route, item, operation, &path, &mut issues);
      }
    }

    issues
  }
}

fn lint_operation(
  document: &Document,
  route: &str,
  item: &PathItem,
  operation: &Operation,
  path: &str,
  issues: &mut Vec<LintIssue>,
) {
  if operation.operation_id.is_none() {
    issues.push(LintIssue::error("operation has no operationId", path));
  }

  if !operation.responses.keys().any(|code| code.is_success()) {
    issues.push(LintIssue::warning("operation declares no 2xx response", path));
  }

  let declared = item
    .parameters
    .iter()
    .chain(&operation.parameters)
    .filter_map(|node| resolve_parameter(document, node))
    .filter(|parameter| parameter.location == ParameterLocation::Path)
    .map(|parameter| parameter.name.as_str())
    .unique()
    .collect::<Vec<_>>();
  let in_template = placeholders(route);
  let literal = unsupported_placeholders(route);

  for placeholder in &literal {
    issues.push(LintIssue::warning(
      format!("path placeholder `{{{placeholder}}}` is not a valid identifier"),
      path,
    ));
  }

  for placeholder in &in_template {
    if !declared.contains(&placeholder.as_str()) {
      issues.push(LintIssue::warning(
        format!("path placeholder `{placeholder}` has no matching path parameter"),
        path,
      ));
    }
  }
  for name in declared {
    if !in_template.iter().chain(&literal).any(|placeholder| placeholder == name) {
      issues.push(LintIssue::warning(
        format!("path parameter `{name}` does not appear in the route"),
        path,
      ));
    }
  }

  for (index, node) in operation.parameters.iter().enumerate() {
    if let Some(schema) = node.as_object().and_then(|parameter| parameter.schema.as_ref()) {
      lint_schema(schema, &format!("{path}.parameters[{index}].schema"), issues);
    }
  }
  if let Some(body) = operation.request_body.as_ref().and_then(ObjectOrReference::as_object) {
    for (media_type, media) in body.content.iter().flatten() {
      if let Some(schema) = &media.schema {
        lint_schema(schema, &format!("{path}.requestBody.content.{media_type}.schema"), issues);
      }
    }
  }
  for (code, response) in &operation.responses {
    let Some(response) = response.as_object() else {
      continue;
    };
    for (media_type, media) in response.content.iter().flatten() {
      if let Some(schema) = &media.schema {
        lint_schema(
          schema,
          &format!("{path}.responses.{code}.content.{media_type}.schema"),
          issues,
        );
      }
    }
  }
}

fn resolve_parameter<'a>(document: &'a Document, node: &'a ObjectOrReference<Parameter>) -> Option<&'a Parameter> {
  match node {
    ObjectOrReference::Object(parameter) => Some(parameter),
    ObjectOrReference::Ref { ref_path } => {
      let name = ref_path.strip_prefix("#/components/parameters/")?;
      document.components.as_ref()?.parameters.get(name)?.as_object()
    }
  }
}

fn lint_schema(node: &ObjectOrReference<Schema>, path: &str, issues: &mut Vec<LintIssue>) {
  let Some(schema) = node.as_object() else {
    return;
  };

  if schema.is_array_type() && schema.items.is_none() {
    issues.push(LintIssue::error("array schema has no `items`", path));
  }

  if let Some(items) = &schema.items {
    lint_schema(items, &format!("{path}.items"), issues);
  }
  for (name, property) in schema.properties.iter().flatten() {
    lint_schema(property, &format!("{path}.properties.{name}"), issues);
  }
  if let Some(AdditionalProperties::Schema(extra)) = &schema.additional_properties {
    lint_schema(extra, &format!("{path}.additionalProperties"), issues);
  }
  for (keyword, members) in [
    ("allOf", &schema.all_of),
    ("anyOf", &schema.any_of),
    ("oneOf", &schema.one_of),
  ] {
    for (index, member) in members.iter().flatten().enumerate() {
      lint_schema(member, &format!("{path}.{keyword}[{index}]"), issues);
    }
  }
}
