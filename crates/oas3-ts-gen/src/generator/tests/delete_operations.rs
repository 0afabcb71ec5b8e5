use super::support::{
  assert_contains, assert_contains_all, assert_not_contains, client_config, generate, parse_json, types_config,
};
use crate::{
  document::HttpMethod,
  generator::{GenerationError, GenerationWarning, orchestrator::Orchestrator},
};

const DELETE_OPERATIONS: &str = include_str!("../../../fixtures/delete_operations.json");

#[test]
fn test_trailing_id_becomes_mutation_argument() {
  let output = generate(parse_json(DELETE_OPERATIONS), client_config());
  let code = output.code();

  assert_contains_all(
    &code,
    &[
      (
        "export interface UseDeleteUserVariables {\n  userId: number;\n}\n",
        "id typed from its parameter",
      ),
      (
        "    ({ userId }) => axios.delete<void>(`/users/${userId}`).then((response) => response.data),",
        "trailing slash dropped with the id",
      ),
    ],
  );
  assert_not_contains(&code, "DeleteUserPathParams", "path params for extracted id");
  assert_eq!(output.operations[0].route, "/users");
}

#[test]
fn test_remaining_path_params_stay_in_path_params() {
  let output = generate(parse_json(DELETE_OPERATIONS), client_config());
  let code = output.code();

  assert_contains_all(
    &code,
    &[
      (
        "export interface RemoveMemberResponse {\n  removed?: boolean;\n}\n",
        "inline response hoisted",
      ),
      (
        "export interface RemoveMemberPathParams {\n  orgId: string;\n}\n",
        "route-level path param",
      ),
      (
        "export interface UseRemoveMemberVariables extends RemoveMemberPathParams {\n  memberId: string;\n}\n",
        "variables extend path params",
      ),
      (
        "    ({ orgId, memberId }) => axios.delete<RemoveMemberResponse>(`/orgs/${orgId}/members/${memberId}`).then((response) => response.data),",
        "path params and id in url",
      ),
    ],
  );
  assert_eq!(
    output.operations[1].generics.render(),
    "RemoveMemberResponse, unknown, void, string, RemoveMemberPathParams"
  );
}

#[test]
fn test_id_without_any_parameters_is_string() {
  let code = generate(parse_json(DELETE_OPERATIONS), client_config()).code();

  assert_contains(
    &code,
    "export interface UseEndSessionVariables {\n  sessionId: string;\n}\n",
    "undeclared delete id",
  );
}

#[test]
fn test_types_target_keeps_path_params() {
  let output = generate(parse_json(DELETE_OPERATIONS), types_config());
  let code = output.code();

  assert_contains_all(
    &code,
    &[
      ("export interface DeleteUserPathParams {\n  userId: number;\n}\n", "id kept"),
      (
        "export interface RemoveMemberPathParams {\n  orgId: string;\n  memberId: string;\n}\n",
        "both levels merged",
      ),
      (
        "export interface EndSessionPathParams {\n  sessionId: string;\n}\n",
        "undeclared placeholder typed as string",
      ),
    ],
  );
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::UndeclaredPathParameter {
      operation_id: "endSession".to_string(),
      param: "sessionId".to_string(),
    }]
  );
}

#[test]
fn test_unresolvable_delete_parameter() {
  let spec = r#"{
    "openapi": "3.0.0",
    "info": { "title": "Bad", "version": "1" },
    "paths": {
      "/items/{itemId}": {
        "delete": {
          "operationId": "deleteItem",
          "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }],
          "responses": { "204": { "description": "deleted" } }
        }
      }
    }
  }"#;

  let err = Orchestrator::new(parse_json(spec), client_config())
    .generate()
    .expect_err("mismatched id should abort");

  assert!(matches!(
    &err,
    GenerationError::Operation { verb: HttpMethod::Delete, route, .. } if route == "/items/{itemId}"
  ));
  assert!(matches!(
    err.root_cause(),
    GenerationError::UnresolvableDeleteParameter { param, operation_id }
      if param == "itemId" && operation_id == "deleteItem"
  ));

  // Without extraction the same document only warns.
  let output = generate(parse_json(spec), types_config());
  assert_eq!(output.stats.warnings.len(), 1);
}
