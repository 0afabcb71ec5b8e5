use crate::document::HttpMethod;

/// Conditions that abort generation of a whole document.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
  #[error("malformed reference `{reference}`: expected `#/components/{{schemas|responses|parameters|requestBodies}}/<name>`")]
  MalformedReference { reference: String },

  #[error("every operation needs an `operationId`, `{verb} {route}` has none")]
  MissingOperationId { verb: HttpMethod, route: String },

  #[error("`operationId` `{operation_id}` is used more than once")]
  DuplicateOperationId { operation_id: String },

  #[error("array schema without `items`")]
  MissingArrayItems,

  #[error("discriminator value `{value}` maps to `{target}`, only `#/components/schemas/` targets are supported")]
  UnsupportedDiscriminatorTarget { value: String, target: String },

  #[error("`{operation_id}` deletes by `{param}` but declares no parameter with that name")]
  UnresolvableDeleteParameter { param: String, operation_id: String },

  #[error("parameter reference `{reference}` does not resolve to a declared component")]
  UnresolvedParameterReference { reference: String },

  #[error("type `{name}` is already declared")]
  DuplicateDeclaration { name: String },

  #[error("{collection} `{name}`: {source}")]
  Component {
    collection: &'static str,
    name: String,
    #[source]
    source: Box<GenerationError>,
  },

  #[error("operation `{verb} {route}`: {source}")]
  Operation {
    verb: HttpMethod,
    route: String,
    #[source]
    source: Box<GenerationError>,
  },
}

impl GenerationError {
  pub(crate) fn in_component(self, collection: &'static str, name: &str) -> Self {
    Self::Component {
      collection,
      name: name.to_string(),
      source: Box::new(self),
    }
  }

  pub(crate) fn in_operation(self, verb: HttpMethod, route: &str) -> Self {
    Self::Operation {
      verb,
      route: route.to_string(),
      source: Box::new(self),
    }
  }

  /// Innermost error below the context wrappers.
  #[must_use]
  pub fn root_cause(&self) -> &GenerationError {
    match self {
      Self::Component { source, .. } | Self::Operation { source, .. } => source.root_cause(),
      other => other,
    }
  }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
