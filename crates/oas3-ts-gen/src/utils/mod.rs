pub mod spec;
pub mod text;

#[cfg(test)]
mod tests;

pub(crate) use text::{escape_comment, format_description, property_key};
