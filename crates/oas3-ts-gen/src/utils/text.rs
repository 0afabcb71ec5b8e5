use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap());

/// True when `name` can be used as a bare TypeScript property key.
#[must_use]
pub(crate) fn is_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name)
}

/// Renders `name` as an object key, quoting it when it is not a plain identifier.
#[must_use]
pub(crate) fn property_key(name: &str) -> String {
  if is_identifier(name) {
    name.to_string()
  } else {
    quote(name)
  }
}

/// Double-quoted TypeScript string literal.
#[must_use]
pub(crate) fn quote(value: &str) -> String {
  serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

/// Breaks up `*/` so `text` can sit inside a block comment.
#[must_use]
pub(crate) fn escape_comment(text: &str) -> String {
  text.replace("*/", "*\\/")
}

/// Formats `description` as a JSDoc block indented by `depth` levels of two
/// spaces. The returned text ends with a newline followed by the indentation,
/// ready to be followed by the documented declaration.
#[must_use]
pub(crate) fn format_description(description: &str, depth: usize) -> String {
  let pad = "  ".repeat(depth);
  let body = escape_comment(description)
    .lines()
    .map(|line| format!("{pad} * {line}").trim_end().to_string())
    .collect::<Vec<_>>()
    .join("\n");

  format!("/**\n{body}\n{pad} */\n{pad}")
}
