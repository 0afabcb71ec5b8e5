//! Schema resolution and operation binding.

pub(crate) mod components;
pub(crate) mod content;
pub mod discriminator;
pub mod operations;
pub(crate) mod parameters;
pub(crate) mod path_template;
pub(crate) mod refs;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

pub use discriminator::PreparedComponents;
pub use operations::{
  BoundOperation, GenericsSignature, OperationBinder, OperationIdRegistry, OperationMetadata, ResourceId,
};
