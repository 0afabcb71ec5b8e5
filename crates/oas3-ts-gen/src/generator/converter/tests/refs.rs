use crate::generator::{
  GenerationError,
  converter::refs::{ComponentKind, ComponentRef, reference_type_name},
};

#[test]
fn test_type_names_carry_collection_suffix() {
  let cases = [
    ("#/components/schemas/Pet", "Pet"),
    ("#/components/schemas/pet_status", "PetStatus"),
    ("#/components/responses/NotFound", "NotFoundResponse"),
    ("#/components/parameters/limit", "LimitParameter"),
    ("#/components/requestBodies/NewPet", "NewPetRequestBody"),
  ];

  for (reference, expected) in cases {
    assert_eq!(
      reference_type_name(reference).expect("valid reference"),
      expected,
      "reference {reference}"
    );
  }
}

#[test]
fn test_escaped_names() {
  let parsed = ComponentRef::parse("#/components/schemas/a~1b~0c").expect("valid reference");

  assert_eq!(parsed.kind, ComponentKind::Schemas);
  assert_eq!(parsed.name, "a/b~c");
  assert_eq!(parsed.type_name(), "ABC");
}

#[test]
fn test_nested_pointer_uses_last_segment() {
  let parsed = ComponentRef::parse("#/components/schemas/Outer/properties/inner").expect("valid reference");

  assert_eq!(parsed.name, "Outer/properties/inner");
  assert_eq!(parsed.type_name(), "Inner");
}

#[test]
fn test_malformed_references() {
  for reference in [
    "#/definitions/Pet",
    "#/components/headers/RateLimit",
    "#/components/schemas/",
    "#/components/schemas",
    "Pet.yaml",
  ] {
    let err = reference_type_name(reference).expect_err("reference should be rejected");
    assert!(
      matches!(&err, GenerationError::MalformedReference { reference: found } if found == reference),
      "unexpected error for {reference}: {err}"
    );
  }
}
