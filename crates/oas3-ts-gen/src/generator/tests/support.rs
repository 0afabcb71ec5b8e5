use crate::{
  document::Document,
  generator::{
    CodegenConfig, GenerationTarget,
    orchestrator::{GeneratedOutput, Orchestrator},
  },
};

pub(super) fn parse_json(spec_json: &str) -> Document {
  Document::from_json_str(spec_json).expect("failed to parse test spec")
}

pub(super) fn parse_yaml(spec_yaml: &str) -> Document {
  Document::from_yaml_str(spec_yaml).expect("failed to parse test spec")
}

pub(super) fn types_config() -> CodegenConfig {
  CodegenConfig::builder().target(GenerationTarget::Types).build()
}

pub(super) fn client_config() -> CodegenConfig {
  CodegenConfig::builder().target(GenerationTarget::Client).build()
}

pub(super) fn generate(document: Document, config: CodegenConfig) -> GeneratedOutput {
  Orchestrator::new(document, config)
    .generate()
    .expect("generation should succeed")
}

pub(super) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(
    code.contains(expected),
    "missing {context}: expected '{expected}'\n--- generated ---\n{code}"
  );
}

pub(super) fn assert_not_contains(code: &str, unexpected: &str, context: &str) {
  assert!(
    !code.contains(unexpected),
    "unexpected {context}: found '{unexpected}'\n--- generated ---\n{code}"
  );
}

pub(super) fn assert_contains_all(code: &str, expectations: &[(&str, &str)]) {
  for (expected, context) in expectations {
    assert_contains(code, expected, context);
  }
}
