use crate::generator::{GenerationError, GenerationResult, naming::to_type_name};

const COMPONENTS_PREFIX: &str = "#/components/";
pub(crate) const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ComponentKind {
  Schemas,
  Responses,
  Parameters,
  RequestBodies,
}

impl ComponentKind {
  fn from_segment(segment: &str) -> Option<Self> {
    match segment {
      "schemas" => Some(Self::Schemas),
      "responses" => Some(Self::Responses),
      "parameters" => Some(Self::Parameters),
      "requestBodies" => Some(Self::RequestBodies),
      _ => None,
    }
  }

  /// Suffix appended to the Pascal-cased component name.
  pub(crate) const fn suffix(self) -> &'static str {
    match self {
      Self::Schemas => "",
      Self::Responses => "Response",
      Self::Parameters => "Parameter",
      Self::RequestBodies => "RequestBody",
    }
  }
}

/// A parsed `#/components/<collection>/<name>` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComponentRef {
  pub(crate) kind: ComponentKind,
  /// Collection key, JSON-pointer escapes resolved.
  pub(crate) name: String,
  /// Last pointer segment, escapes resolved.
  last_segment: String,
}

impl ComponentRef {
  pub(crate) fn parse(reference: &str) -> GenerationResult<Self> {
    let malformed = || GenerationError::MalformedReference {
      reference: reference.to_string(),
    };

    let (segment, name) = reference
      .strip_prefix(COMPONENTS_PREFIX)
      .and_then(|rest| rest.split_once('/'))
      .ok_or_else(malformed)?;
    let kind = ComponentKind::from_segment(segment).ok_or_else(malformed)?;
    if name.is_empty() {
      return Err(malformed());
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);

    Ok(Self {
      kind,
      name: unescape_pointer(name),
      last_segment: unescape_pointer(last_segment),
    })
  }

  /// Declaration name the reference points at.
  pub(crate) fn type_name(&self) -> String {
    format!("{}{}", to_type_name(&self.last_segment), self.kind.suffix())
  }
}

fn unescape_pointer(segment: &str) -> String {
  segment.replace("~1", "/").replace("~0", "~")
}

/// Resolves `reference` straight to its declaration name.
pub(crate) fn reference_type_name(reference: &str) -> GenerationResult<String> {
  ComponentRef::parse(reference).map(|parsed| parsed.type_name())
}
