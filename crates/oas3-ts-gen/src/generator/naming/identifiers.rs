use std::sync::LazyLock;

use any_ascii::any_ascii;
use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

const CONTROLLER_MARKER: &str = "Controller";

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

/// Converts a component or operation name into a TypeScript type name
/// (`PascalCase`).
///
/// # Rules:
/// 1. Transliterates to ASCII.
/// 2. A name without any lowercase letter is lowercased first, so `PET_ID`
///    becomes `PetId`.
/// 3. Splits on every non-alphanumeric character and uppercases the first
///    letter of each word. The rest of each word keeps its case, so `listPets`
///    stays `ListPets` and `XMLHttp` stays `XMLHttp`.
/// 4. If the result starts with a digit, it's prefixed with `T`.
/// 5. If the result is empty, it becomes `Unnamed`.
pub(crate) fn to_type_name(name: &str) -> String {
  let ascii = any_ascii(name);
  let source = if ascii.chars().any(|c| c.is_ascii_lowercase()) {
    ascii
  } else {
    ascii.to_ascii_lowercase()
  };

  let mut ident = WORD_RE
    .find_iter(&source)
    .map(|word| capitalize(word.as_str()))
    .collect::<String>();

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

/// Type-name prefix shared by every declaration and hook of an operation:
/// the Pascal-cased `operationId` with its first `Controller` removed.
pub(crate) fn to_component_name(operation_id: &str) -> String {
  let name = to_type_name(operation_id);
  match name.replacen(CONTROLLER_MARKER, "", 1) {
    stripped if stripped.is_empty() => name,
    stripped => stripped,
  }
}
