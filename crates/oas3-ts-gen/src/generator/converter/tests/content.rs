use indexmap::IndexMap;
use serde_json::json;

use crate::{
  document::{MediaType, ObjectOrReference, RequestBody, Response},
  generator::{
    ast::TsType,
    converter::content::{request_body_type, response_type, responses_union, select_media_type},
  },
};

fn content(value: serde_json::Value) -> IndexMap<String, MediaType> {
  serde_json::from_value(value).expect("valid content map")
}

fn response(value: serde_json::Value) -> ObjectOrReference<Response> {
  serde_json::from_value(value).expect("valid response")
}

#[test]
fn test_media_type_priority() {
  let map = content(json!({
    "application/xml": { "schema": { "type": "boolean" } },
    "application/octet-stream": { "schema": { "type": "string" } },
    "application/json": { "schema": { "type": "number" } }
  }));
  let selected = select_media_type(&map).and_then(|media| media.schema.clone());
  assert_eq!(
    selected,
    Some(serde_json::from_value(json!({ "type": "number" })).expect("valid schema"))
  );

  let wildcard = content(json!({
    "application/json": { "schema": { "type": "number" } },
    "*/*": { "schema": { "type": "string" } }
  }));
  let selected = select_media_type(&wildcard).and_then(|media| media.schema.clone());
  assert_eq!(
    selected,
    Some(serde_json::from_value(json!({ "type": "string" })).expect("valid schema"))
  );

  assert!(select_media_type(&content(json!({ "text/plain": {} }))).is_none());
}

#[test]
fn test_response_types() {
  assert_eq!(
    response_type(&response(json!({ "description": "no body" }))).expect("resolves"),
    TsType::VOID
  );
  assert_eq!(
    response_type(&response(json!({
      "description": "no schema",
      "content": { "application/json": {} }
    })))
    .expect("resolves"),
    TsType::VOID
  );
  assert_eq!(
    response_type(&response(json!({ "$ref": "#/components/responses/NotFound" }))).expect("resolves"),
    TsType::named("NotFoundResponse")
  );
}

#[test]
fn test_request_body_types() {
  assert_eq!(request_body_type(None).expect("resolves"), TsType::VOID);

  let body: ObjectOrReference<RequestBody> = serde_json::from_value(json!({
    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
  }))
  .expect("valid body");
  assert_eq!(request_body_type(Some(&body)).expect("resolves"), TsType::named("Pet"));
}

#[test]
fn test_responses_union() {
  let responses = [
    response(json!({ "content": { "application/json": { "schema": { "$ref": "#/components/schemas/A" } } } })),
    response(json!({ "content": { "application/json": { "schema": { "$ref": "#/components/schemas/B" } } } })),
    response(json!({ "content": { "application/json": { "schema": { "$ref": "#/components/schemas/A" } } } })),
  ];

  assert_eq!(
    responses_union(&responses, TsType::VOID).expect("resolves").render(),
    "A | B"
  );
  assert_eq!(responses_union([], TsType::UNKNOWN).expect("resolves"), TsType::UNKNOWN);
}
