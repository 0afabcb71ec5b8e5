use crate::generator::{
  CodegenConfig, PathEncodingMode,
  codegen::{HeaderRequirements, header::render_preamble},
};

const BANNER: &str = "/* banner */";

#[test]
fn test_banner_only() {
  let preamble = render_preamble(BANNER, HeaderRequirements::default(), &CodegenConfig::default());
  assert_eq!(preamble, "/* banner */\n");
}

#[test]
fn test_sections_in_order() {
  let requirements = HeaderRequirements {
    require_helper: true,
    path_encoding_helper: true,
    query_hooks: true,
    mutation_hooks: false,
    custom_import: true,
  };
  let config = CodegenConfig::builder()
    .path_encoding(PathEncodingMode::UriComponent)
    .custom_import("import { client } from \"./client\";")
    .build();

  let preamble = render_preamble(BANNER, requirements, &config);
  let positions = [
    "/* banner */",
    "import { useQuery, useQueryClient, UseQueryOptions } from \"react-query\";\nimport axios from \"axios\";",
    "import { client } from \"./client\";",
    "type Require<T, R extends keyof T> = T & Required<Pick<T, R>>;",
    "const useInvalidateQuery = (queryKey: unknown[]) => {",
    "const encodingFn = encodeURIComponent;",
    "const encode = encodingTagFactory(encodingFn);",
  ]
  .map(|section| {
    preamble
      .find(section)
      .unwrap_or_else(|| panic!("missing section '{section}' in:\n{preamble}"))
  });

  assert!(positions.is_sorted(), "sections out of order in:\n{preamble}");
  assert!(preamble.ends_with("const encode = encodingTagFactory(encodingFn);\n"));
}

#[test]
fn test_mutation_only_imports() {
  let requirements = HeaderRequirements {
    mutation_hooks: true,
    ..HeaderRequirements::default()
  };
  let preamble = render_preamble(BANNER, requirements, &CodegenConfig::default());

  assert_eq!(
    preamble,
    "/* banner */\n\nimport { useMutation, UseMutationOptions } from \"react-query\";\nimport axios from \"axios\";\n"
  );
}

#[test]
fn test_rfc3986_encoder() {
  let requirements = HeaderRequirements {
    path_encoding_helper: true,
    ..HeaderRequirements::default()
  };
  let config = CodegenConfig::builder().path_encoding(PathEncodingMode::Rfc3986).build();
  let preamble = render_preamble(BANNER, requirements, &config);

  assert!(preamble.contains("replace(/[!'()*]/g"));
  assert!(!preamble.contains("const encodingFn = encodeURIComponent;"));
}

#[test]
fn test_flags_without_config_emit_nothing() {
  let requirements = HeaderRequirements {
    path_encoding_helper: true,
    custom_import: true,
    ..HeaderRequirements::default()
  };
  let preamble = render_preamble(BANNER, requirements, &CodegenConfig::default());
  assert_eq!(preamble, "/* banner */\n");
}
