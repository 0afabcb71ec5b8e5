use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::document::HttpMethod;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());
static BRACED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());
static TRAILING_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\$\{(\w+)\}/?$").unwrap());

/// An OpenAPI route rewritten as a TypeScript template literal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteTemplate {
  route: String,
  resource_id: Option<String>,
}

impl RouteTemplate {
  /// `/pets/{petId}` becomes `/pets/${petId}`. Placeholders that are not
  /// identifiers (`{pet-id}`) stay literal. With `extract_trailing_id`, a
  /// DELETE route ending in a placeholder loses that segment, which becomes
  /// the resource identifier.
  pub(crate) fn new(route: &str, verb: HttpMethod, extract_trailing_id: bool) -> Self {
    let templated = PLACEHOLDER_RE
      .replace_all(route, |captures: &Captures| format!("${{{}}}", &captures[1]))
      .into_owned();

    if extract_trailing_id
      && verb == HttpMethod::Delete
      && let Some(captures) = TRAILING_ID_RE.captures(&templated)
    {
      let resource_id = captures[1].to_string();
      let trimmed = TRAILING_ID_RE.replace(&templated, "").into_owned();
      return Self {
        route: trimmed,
        resource_id: Some(resource_id),
      };
    }

    Self {
      route: templated,
      resource_id: None,
    }
  }

  pub(crate) fn route(&self) -> &str {
    &self.route
  }

  pub(crate) fn resource_id(&self) -> Option<&str> {
    self.resource_id.as_deref()
  }

  /// Placeholder names left in the route, in order of appearance.
  pub(crate) fn placeholders(&self) -> Vec<String> {
    placeholders(&self.route)
  }
}

/// Names of every `{name}` placeholder in `route`.
pub(crate) fn placeholders(route: &str) -> Vec<String> {
  PLACEHOLDER_RE
    .captures_iter(route)
    .map(|captures| captures[1].to_string())
    .collect()
}

/// Braced segments of `route` that cannot become template slots, such as
/// `{pet-id}` or `{}`.
pub(crate) fn unsupported_placeholders(route: &str) -> Vec<String> {
  BRACED_RE
    .captures_iter(route)
    .filter(|captures| !PLACEHOLDER_RE.is_match(&captures[0]))
    .map(|captures| captures[1].to_string())
    .collect()
}
