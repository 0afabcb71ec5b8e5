use std::fmt;

use indexmap::IndexMap;
use serde::{
  Deserialize, Deserializer,
  de::{self, IgnoredAny, MapAccess, Visitor},
};
use strum::{AsRefStr, Display, EnumString};

use super::{ObjectOrReference, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

impl HttpMethod {
  /// Verbs that produce bindings. Everything else is skipped silently.
  #[must_use]
  pub const fn is_bindable(self) -> bool {
    matches!(self, Self::Get | Self::Post | Self::Patch | Self::Put | Self::Delete)
  }

  #[must_use]
  pub const fn is_query(self) -> bool {
    matches!(self, Self::Get)
  }

  #[must_use]
  pub const fn sends_body(self) -> bool {
    matches!(self, Self::Post | Self::Put | Self::Patch)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Query,
  Path,
  Header,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub schema: Option<ObjectOrReference<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaType {
  #[serde(default)]
  pub schema: Option<ObjectOrReference<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: Option<IndexMap<String, MediaType>>,
  #[serde(default)]
  pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: Option<IndexMap<String, MediaType>>,
}

/// Key of the `responses` map. YAML documents routinely write status codes as
/// bare integers, so both integers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusCode(String);

impl StatusCode {
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  #[must_use]
  pub fn is_success(&self) -> bool {
    self.0.starts_with('2')
  }

  #[must_use]
  pub fn is_error(&self) -> bool {
    self.0.starts_with('4') || self.0.starts_with('5') || self.0 == "default"
  }
}

impl From<&str> for StatusCode {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl fmt::Display for StatusCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for StatusCode {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct StatusCodeVisitor;

    impl Visitor<'_> for StatusCodeVisitor {
      type Value = StatusCode;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an HTTP status code or `default`")
      }

      fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(StatusCode(value.to_string()))
      }

      fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(StatusCode(value.to_string()))
      }

      fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(StatusCode(value.to_string()))
      }
    }

    deserializer.deserialize_any(StatusCodeVisitor)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  #[serde(default)]
  pub request_body: Option<ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<StatusCode, ObjectOrReference<Response>>,
}

impl Operation {
  /// `summary` and `description` joined by a blank line, or whichever exists.
  #[must_use]
  pub fn full_description(&self) -> Option<String> {
    match (self.summary.as_deref(), self.description.as_deref()) {
      (Some(summary), Some(description)) => Some(format!("{summary}\n\n{description}")),
      (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
      (None, None) => None,
    }
    .filter(|text| !text.is_empty())
  }

  pub fn success_responses(&self) -> impl Iterator<Item = &ObjectOrReference<Response>> {
    self
      .responses
      .iter()
      .filter(|(code, _)| code.is_success())
      .map(|(_, response)| response)
  }

  pub fn error_responses(&self) -> impl Iterator<Item = &ObjectOrReference<Response>> {
    self
      .responses
      .iter()
      .filter(|(code, _)| code.is_error())
      .map(|(_, response)| response)
  }
}

/// A path item. Operations keep the order in which the verbs were declared,
/// which a struct with one field per verb would lose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  pub operations: Vec<(HttpMethod, Operation)>,
}

impl PathItem {
  pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
    self
      .operations
      .iter()
      .find(|(candidate, _)| *candidate == method)
      .map(|(_, operation)| operation)
  }
}

impl<'de> Deserialize<'de> for PathItem {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct PathItemVisitor;

    impl<'de> Visitor<'de> for PathItemVisitor {
      type Value = PathItem;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an OpenAPI path item object")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut item = PathItem::default();

        while let Some(key) = map.next_key::<String>()? {
          if key == "parameters" {
            item.parameters = map.next_value()?;
          } else if let Ok(method) = key.parse::<HttpMethod>() {
            item.operations.push((method, map.next_value()?));
          } else {
            map.next_value::<IgnoredAny>()?;
          }
        }

        Ok(item)
      }
    }

    deserializer.deserialize_map(PathItemVisitor)
  }
}
