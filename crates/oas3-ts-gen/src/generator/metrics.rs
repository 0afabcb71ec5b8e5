use strum::Display;

use super::ast::Declaration;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub declarations_generated: usize,
  pub interfaces_generated: usize,
  pub empty_interfaces_generated: usize,
  pub type_aliases_generated: usize,
  pub operations_bound: usize,
  pub query_hooks_generated: usize,
  pub mutation_hooks_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_declaration(&mut self, declaration: &Declaration) {
    self.declarations_generated += 1;
    match declaration {
      Declaration::Interface(interface) => {
        self.interfaces_generated += 1;
        if interface.is_empty() {
          self.empty_interfaces_generated += 1;
        }
      }
      Declaration::TypeAlias(_) => self.type_aliases_generated += 1,
    }
  }

  pub fn record_declarations<'a>(&mut self, declarations: impl IntoIterator<Item = &'a Declaration>) {
    for declaration in declarations {
      self.record_declaration(declaration);
    }
  }

  pub fn record_operation(&mut self) {
    self.operations_bound += 1;
  }

  pub fn record_query_hook(&mut self) {
    self.query_hooks_generated += 1;
  }

  pub fn record_mutation_hook(&mut self) {
    self.mutation_hooks_generated += 1;
  }

  #[must_use]
  pub const fn hooks_generated(&self) -> usize {
    self.query_hooks_generated + self.mutation_hooks_generated
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Discriminator `{schema_name}` maps `{value}` to `{target}`: {reason}")]
  DiscriminatorMappingSkipped {
    schema_name: String,
    value: String,
    target: String,
    reason: String,
  },
  #[strum(to_string = "[{operation_id}] path parameter `{param}` is not declared, typing it as string")]
  UndeclaredPathParameter { operation_id: String, param: String },
  #[strum(to_string = "[{operation_id}] path placeholder `{placeholder}` is not an identifier, kept as literal text")]
  UnsupportedPathPlaceholder { operation_id: String, placeholder: String },
}

impl GenerationWarning {
  /// Warnings that dropped part of the input rather than approximating it.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::DiscriminatorMappingSkipped { .. })
  }
}
