use crate::utils::format_description;

/// Optional JSDoc attached to a top-level declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock(Option<String>);

impl DocBlock {
  #[must_use]
  pub fn new(text: Option<&str>) -> Self {
    Self(text.map(str::trim_end).filter(|text| !text.is_empty()).map(String::from))
  }

  #[must_use]
  pub fn text(&self) -> Option<&str> {
    self.0.as_deref()
  }

  #[must_use]
  pub fn render(&self) -> String {
    self.0.as_deref().map(|text| format_description(text, 0)).unwrap_or_default()
  }
}
