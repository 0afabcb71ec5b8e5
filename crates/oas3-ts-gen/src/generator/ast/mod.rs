mod declarations;
mod documentation;
mod types;

#[cfg(test)]
mod tests;

pub use declarations::{Declaration, InterfaceBody, InterfaceDecl, TypeAliasDecl};
pub use documentation::DocBlock;
pub use types::{ObjectType, PropertySignature, TsLiteral, TsPrimitive, TsType};
