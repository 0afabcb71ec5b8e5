pub mod header;
pub mod hooks;

#[cfg(test)]
mod tests;

pub use header::HeaderRequirements;
pub use hooks::HookKind;

use super::{
  CodegenConfig,
  ast::DocBlock,
  converter::{BoundOperation, OperationMetadata},
};

/// Appends custom text after each generated operation.
///
/// Receives the fully bound metadata of the operation; returning `None`
/// leaves the block unchanged.
pub trait OperationRenderer: Send + Sync {
  fn render(&self, metadata: &OperationMetadata) -> Option<String>;
}

/// Text emitted for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOperation {
  pub code: String,
  pub hook: Option<HookKind>,
}

/// Synthetic declarations, then (for the client target) the JSDoc
/// description and the react-query hooks.
pub(crate) fn render_operation(
  bound: &BoundOperation,
  config: &CodegenConfig,
  custom: Option<&dyn OperationRenderer>,
) -> RenderedOperation {
  let mut parts = bound
    .declarations
    .iter()
    .map(super::ast::Declaration::render)
    .collect::<Vec<_>>();

  let hook = config.target.emits_hooks().then(|| {
    let (hooks, kind) = hooks::render_hooks(&bound.metadata, config.path_encoding.is_some());
    let docs = DocBlock::new(bound.metadata.description.as_deref()).render();
    parts.push(format!("{docs}{hooks}"));
    kind
  });

  if let Some(extra) = custom.and_then(|renderer| renderer.render(&bound.metadata)) {
    parts.push(extra);
  }

  RenderedOperation {
    code: parts.join("\n"),
    hook,
  }
}
