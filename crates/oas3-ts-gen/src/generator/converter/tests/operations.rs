use serde_json::json;

use crate::{
  document::{HttpMethod, Operation, PathItem},
  generator::{
    GenerationError,
    ast::{TsPrimitive, TsType},
    converter::{BoundOperation, OperationBinder, OperationIdRegistry, PreparedComponents},
  },
};

fn bind(route: &str, item: serde_json::Value, verb: HttpMethod, extract_delete_id: bool) -> BoundOperation {
  let item: PathItem = serde_json::from_value(item).expect("valid path item");
  let operation = item.operation(verb).expect("operation exists").clone();
  let components = PreparedComponents::default();
  let mut registry = OperationIdRegistry::default();

  OperationBinder::new(&components, extract_delete_id)
    .bind(route, &item, verb, &operation, &mut registry)
    .expect("operation should bind")
}

#[test]
fn test_registry_rejects_reuse() {
  let mut registry = OperationIdRegistry::default();
  assert!(registry.is_empty());

  registry.register("listPets").expect("first use");
  registry.register("getPet").expect("first use");
  assert_eq!(registry.len(), 2);

  assert!(matches!(
    registry.register("listPets"),
    Err(GenerationError::DuplicateOperationId { operation_id }) if operation_id == "listPets"
  ));
}

#[test]
fn test_component_name_and_description() {
  let bound = bind(
    "/users",
    json!({
      "get": {
        "operationId": "UserController_list",
        "summary": "List users",
        "description": "Paged.\nSorted by name.",
        "responses": { "200": { "description": "ok" } }
      }
    }),
    HttpMethod::Get,
    true,
  );

  assert_eq!(bound.metadata.component_name, "UserList");
  assert_eq!(
    bound.metadata.description.as_deref(),
    Some("List users\n\nPaged.\nSorted by name.")
  );
  assert!(bound.declarations.is_empty());
  assert_eq!(bound.metadata.generics.render(), "void, unknown, void, void, void");
}

#[test]
fn test_response_and_error_unions() {
  let bound = bind(
    "/things",
    json!({
      "get": {
        "operationId": "getThings",
        "responses": {
          "200": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Thing" } } } },
          "206": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Partial" } } } },
          "302": { "description": "redirect" },
          "404": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NotFound" } } } },
          "default": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Problem" } } } }
        }
      }
    }),
    HttpMethod::Get,
    true,
  );

  assert_eq!(bound.metadata.generics.response.render(), "Thing | Partial");
  assert_eq!(bound.metadata.generics.error.render(), "NotFound | Problem");
}

#[test]
fn test_synthetic_declaration_order() {
  let bound = bind(
    "/things/{thingId}",
    json!({
      "put": {
        "operationId": "updateThing",
        "parameters": [
          { "name": "thingId", "in": "path", "required": true, "schema": { "type": "string" } },
          { "name": "dryRun", "in": "query", "schema": { "type": "boolean" } },
          { "name": "X-Trace", "in": "header", "schema": { "type": "string" } }
        ],
        "requestBody": {
          "content": { "application/json": { "schema": { "type": "object", "properties": { "name": { "type": "string" } } } } }
        },
        "responses": {
          "200": { "content": { "application/json": { "schema": { "type": "object", "properties": { "ok": { "type": "boolean" } } } } } }
        }
      }
    }),
    HttpMethod::Put,
    true,
  );

  let names = bound
    .declarations
    .iter()
    .map(|declaration| declaration.name())
    .collect::<Vec<_>>();
  assert_eq!(
    names,
    [
      "UpdateThingResponse",
      "UpdateThingQueryParams",
      "UpdateThingPathParams",
      "UpdateThingRequestBody"
    ]
  );
  assert_eq!(
    bound.declarations[3].render(),
    "export type UpdateThingRequestBody = {\n  name?: string;\n};\n"
  );
  assert_eq!(
    bound.metadata.generics.render(),
    "UpdateThingResponse, unknown, UpdateThingQueryParams, UpdateThingRequestBody, UpdateThingPathParams"
  );
  assert!(bound.metadata.has_query_params);
  assert!(bound.metadata.has_request_body);
}

#[test]
fn test_delete_body_slot_prefers_resource_id() {
  let bound = bind(
    "/things/{thingId}",
    json!({
      "delete": {
        "operationId": "deleteThing",
        "parameters": [{ "name": "thingId", "in": "path", "required": true, "schema": { "type": "integer" } }],
        "requestBody": {
          "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Reason" } } }
        },
        "responses": { "204": { "description": "deleted" } }
      }
    }),
    HttpMethod::Delete,
    true,
  );

  assert_eq!(bound.metadata.generics.body, TsType::from(TsPrimitive::Number));
  assert_eq!(bound.declarations.len(), 1);
  assert_eq!(
    bound.declarations[0].render(),
    "export type DeleteThingRequestBody = Reason;\n"
  );
}

#[test]
fn test_binding_errors_carry_operation_context() {
  let item: PathItem = serde_json::from_value(json!({
    "get": {
      "operationId": "broken",
      "responses": {
        "200": { "content": { "application/json": { "schema": { "type": "array" } } } }
      }
    }
  }))
  .expect("valid path item");
  let operation: &Operation = item.operation(HttpMethod::Get).expect("operation exists");
  let components = PreparedComponents::default();

  let err = OperationBinder::new(&components, true)
    .bind("/broken", &item, HttpMethod::Get, operation, &mut OperationIdRegistry::default())
    .expect_err("array without items");

  assert_eq!(err.to_string(), "operation `get /broken`: array schema without `items`");
  assert!(matches!(err.root_cause(), GenerationError::MissingArrayItems));
}
