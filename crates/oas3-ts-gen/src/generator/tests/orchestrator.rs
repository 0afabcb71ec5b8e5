use std::sync::Arc;

use super::support::{assert_contains, assert_not_contains, client_config, generate, parse_json, parse_yaml};
use crate::generator::{
  CodegenConfig, GenerationWarning, PathEncodingMode,
  codegen::OperationRenderer,
  converter::OperationMetadata,
  orchestrator::Orchestrator,
};

const PETSTORE: &str = include_str!("../../../fixtures/petstore.yaml");

struct OperationIdComment;

impl OperationRenderer for OperationIdComment {
  fn render(&self, metadata: &OperationMetadata) -> Option<String> {
    metadata
      .verb
      .is_query()
      .then(|| format!("// {} -> {}\n", metadata.operation_id, metadata.generics.render()))
  }
}

#[test]
fn test_custom_operation_renderer() {
  let output = Orchestrator::new(parse_yaml(PETSTORE), client_config())
    .with_operation_renderer(Arc::new(OperationIdComment))
    .generate()
    .expect("generation should succeed");
  let code = output.code();

  assert_contains(
    &code,
    "// listPets -> Pets, Error, ListPetsQueryParams, void, void\n",
    "custom renderer output",
  );
  assert_contains(
    &code,
    "// showPetById -> Pet, ErrorResponseResponse, void, void, ShowPetByIdPathParams\n",
    "custom renderer output for path params",
  );
  assert_not_contains(&code, "// createPets", "renderer returning None");
}

#[test]
fn test_path_encoding_tags_urls() {
  let config = CodegenConfig::builder().path_encoding(PathEncodingMode::Rfc3986).build();
  let output = generate(parse_yaml(PETSTORE), config);
  let code = output.code();

  assert!(output.header.path_encoding_helper);
  assert_contains(&code, "encodeURIComponent(uriComponent).replace(/[!'()*]/g", "rfc3986 encoder");
  assert_contains(&code, "const encode = encodingTagFactory(encodingFn);", "encoding tag");
  assert_contains(&code, "axios.get<Pet>(encode`/pets/${petId}`)", "tagged url");
  assert_contains(&code, "useInvalidateQuery([encode`/pets`])", "tagged invalidate key");
}

#[test]
fn test_path_encoding_without_hooks_emits_no_helper() {
  let config = CodegenConfig::builder()
    .target(crate::generator::GenerationTarget::Types)
    .path_encoding(PathEncodingMode::UriComponent)
    .build();
  let output = generate(parse_yaml(PETSTORE), config);

  assert!(!output.header.path_encoding_helper);
  assert_not_contains(&output.code(), "encodingFn", "encoder without hooks");
}

#[test]
fn test_custom_import_follows_react_query_imports() {
  let config = CodegenConfig::builder()
    .custom_import("import { api } from \"./api\";\n")
    .build();
  let output = generate(parse_yaml(PETSTORE), config);

  assert_contains(
    &output.preamble,
    "import axios from \"axios\";\n\nimport { api } from \"./api\";\n\nconst useInvalidateQuery",
    "custom import placement",
  );
}

#[test]
fn test_only_query_hooks_import_query_names() {
  let spec = r#"{
    "openapi": "3.0.0",
    "info": { "title": "Read only", "version": "1" },
    "paths": {
      "/status": {
        "get": {
          "operationId": "getStatus",
          "responses": {
            "200": {
              "description": "ok",
              "content": { "application/json": { "schema": { "type": "string" } } }
            }
          }
        }
      }
    }
  }"#;

  let output = generate(parse_json(spec), client_config());
  let code = output.code();

  assert_contains(
    &output.preamble,
    "import { useQuery, useQueryClient, UseQueryOptions } from \"react-query\";",
    "query-only imports",
  );
  assert_contains(
    &code,
    "export interface UseGetStatusProps {\n  queryOptions?: UseQueryOptions<string, unknown>;\n}\n",
    "props without params",
  );
  assert_contains(
    &code,
    "export const useGetStatus = ({ queryOptions }: UseGetStatusProps = {}) =>",
    "defaulted props",
  );
}

#[test]
fn test_inline_required_response_needs_require_helper() {
  let spec = r#"{
    "openapi": "3.0.0",
    "info": { "title": "Require", "version": "1" },
    "paths": {
      "/me": {
        "get": {
          "operationId": "getMe",
          "responses": {
            "200": {
              "description": "ok",
              "content": {
                "application/json": {
                  "schema": {
                    "allOf": [
                      { "type": "object", "properties": { "id": { "type": "string" } } }
                    ],
                    "required": ["id"]
                  }
                }
              }
            }
          }
        }
      }
    }
  }"#;

  let output = generate(parse_json(spec), client_config());

  assert!(output.header.require_helper);
  assert_contains(
    &output.code(),
    "export type GetMeResponse = Require<{\n  id?: string;\n}, \"id\">;",
    "hoisted response alias",
  );
}

#[test]
fn test_empty_document() {
  let spec = r#"{ "openapi": "3.0.0", "info": { "title": "Empty", "version": "0" } }"#;
  let output = generate(parse_json(spec), client_config());

  assert_eq!(output.code(), "/* Generated by oas3-ts-gen */\n");
  assert!(output.blocks.is_empty());
  assert!(output.operations.is_empty());
}

#[test]
fn test_non_identifier_placeholder_is_kept_literal_with_warning() {
  let spec = r##"{
    "openapi": "3.0.3",
    "info": { "title": "Dashes", "version": "1.0.0" },
    "paths": {
      "/pets/{pet-id}": {
        "get": {
          "operationId": "getPet",
          "parameters": [{ "name": "pet-id", "in": "path", "required": true, "schema": { "type": "string" } }],
          "responses": { "200": { "description": "ok" } }
        }
      }
    }
  }"##;

  let output = generate(parse_json(spec), client_config());

  assert_eq!(output.operations[0].route, "/pets/{pet-id}");
  assert!(output.operations[0].path_params.is_empty());
  assert_not_contains(&output.code(), "${pet-id}", "interpolated non-identifier");
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::UnsupportedPathPlaceholder {
      operation_id: "getPet".to_string(),
      placeholder: "pet-id".to_string(),
    }]
  );
  assert_eq!(
    output.stats.warnings[0].to_string(),
    "[getPet] path placeholder `pet-id` is not an identifier, kept as literal text"
  );
}
