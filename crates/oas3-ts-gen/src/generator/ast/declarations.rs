use super::{
  documentation::DocBlock,
  types::{ObjectType, TsType},
};

const EMPTY_INTERFACE_LINT: &str = "// tslint:disable-next-line:no-empty-interface";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
  pub name: String,
  pub docs: DocBlock,
  pub body: InterfaceBody,
}

/// Interfaces only ever wrap an object literal or the free-form map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceBody {
  Shape(ObjectType),
  FreeForm,
}

impl InterfaceDecl {
  /// `{}` bodies still produce a declaration and carry a lint suppression.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    matches!(&self.body, InterfaceBody::Shape(shape) if shape.is_empty())
  }

  fn render(&self) -> String {
    let body = match &self.body {
      InterfaceBody::Shape(shape) if shape.is_empty() => "{}".to_string(),
      InterfaceBody::Shape(shape) => format!("{{\n{}\n}}", shape.render_members(1)),
      InterfaceBody::FreeForm => "{[key: string]: any}".to_string(),
    };
    let lint = if self.is_empty() {
      format!("{EMPTY_INTERFACE_LINT}\n")
    } else {
      String::new()
    };

    format!("{}{lint}export interface {} {body}\n", self.docs.render(), self.name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDecl {
  pub name: String,
  pub docs: DocBlock,
  pub target: TsType,
}

impl TypeAliasDecl {
  fn render(&self) -> String {
    format!(
      "{}export type {} = {};\n",
      self.docs.render(),
      self.name,
      self.target.render()
    )
  }
}

/// A named, exported TypeScript declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
  Interface(InterfaceDecl),
  TypeAlias(TypeAliasDecl),
}

impl Declaration {
  /// An interface when `ty` is object-like, a type alias otherwise.
  #[must_use]
  pub fn for_type(name: impl Into<String>, ty: TsType, docs: DocBlock) -> Self {
    let name = name.into();
    match ty {
      TsType::Object(shape) => Self::Interface(InterfaceDecl {
        name,
        docs,
        body: InterfaceBody::Shape(shape),
      }),
      TsType::FreeFormMap => Self::Interface(InterfaceDecl {
        name,
        docs,
        body: InterfaceBody::FreeForm,
      }),
      target => Self::TypeAlias(TypeAliasDecl { name, docs, target }),
    }
  }

  #[must_use]
  pub fn alias(name: impl Into<String>, target: TsType, docs: DocBlock) -> Self {
    Self::TypeAlias(TypeAliasDecl {
      name: name.into(),
      docs,
      target,
    })
  }

  #[must_use]
  pub fn name(&self) -> &str {
    match self {
      Self::Interface(interface) => &interface.name,
      Self::TypeAlias(alias) => &alias.name,
    }
  }

  #[must_use]
  pub fn uses_require(&self) -> bool {
    match self {
      Self::Interface(InterfaceDecl {
        body: InterfaceBody::Shape(shape),
        ..
      }) => shape.uses_require(),
      Self::Interface(_) => false,
      Self::TypeAlias(alias) => alias.target.uses_require(),
    }
  }

  #[must_use]
  pub fn render(&self) -> String {
    match self {
      Self::Interface(interface) => interface.render(),
      Self::TypeAlias(alias) => alias.render(),
    }
  }
}
