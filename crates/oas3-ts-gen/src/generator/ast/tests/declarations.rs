use crate::generator::ast::{Declaration, DocBlock, ObjectType, PropertySignature, TsType};

#[test]
fn test_object_type_becomes_interface() {
  let shape = TsType::Object(ObjectType {
    properties: vec![PropertySignature {
      name: "name".to_string(),
      optional: false,
      ty: TsType::STRING,
      docs: None,
    }],
    index_signature: None,
  });
  let declaration = Declaration::for_type("Pet", shape, DocBlock::new(Some("A pet")));

  assert!(matches!(declaration, Declaration::Interface(_)));
  assert_eq!(
    declaration.render(),
    "/**\n * A pet\n */\nexport interface Pet {\n  name: string;\n}\n"
  );
}

#[test]
fn test_empty_interface_carries_lint_comment() {
  let declaration = Declaration::for_type("Empty", TsType::Object(ObjectType::default()), DocBlock::default());

  assert_eq!(
    declaration.render(),
    "// tslint:disable-next-line:no-empty-interface\nexport interface Empty {}\n"
  );
}

#[test]
fn test_free_form_interface() {
  let declaration = Declaration::for_type("Bag", TsType::FreeFormMap, DocBlock::default());
  assert_eq!(declaration.render(), "export interface Bag {[key: string]: any}\n");
}

#[test]
fn test_other_types_become_aliases() {
  let declaration = Declaration::for_type("Pets", TsType::array(TsType::named("Pet")), DocBlock::default());

  assert!(matches!(declaration, Declaration::TypeAlias(_)));
  assert_eq!(declaration.name(), "Pets");
  assert_eq!(declaration.render(), "export type Pets = Pet[];\n");
}

#[test]
fn test_blank_docs_are_dropped() {
  assert_eq!(DocBlock::new(Some("  ")).text(), None);
  assert_eq!(DocBlock::new(Some("")).render(), "");
}
