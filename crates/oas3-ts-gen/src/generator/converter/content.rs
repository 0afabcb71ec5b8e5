use indexmap::IndexMap;

use super::{refs::reference_type_name, type_resolver::resolve};
use crate::{
  document::{MediaType, ObjectOrReference, RequestBody, Response},
  generator::{GenerationResult, ast::TsType},
};

/// Media type prefixes tried in order; the first key matching a prefix wins.
const MEDIA_TYPE_PRIORITY: [&str; 3] = ["*/*", "application/json", "application/octet-stream"];

pub(crate) fn select_media_type(content: &IndexMap<String, MediaType>) -> Option<&MediaType> {
  MEDIA_TYPE_PRIORITY.iter().find_map(|prefix| {
    content
      .iter()
      .find(|(media_type, _)| media_type.starts_with(prefix))
      .map(|(_, media)| media)
  })
}

/// Body type of a content map; `void` when nothing usable is declared.
pub(crate) fn content_type(content: Option<&IndexMap<String, MediaType>>) -> GenerationResult<TsType> {
  match content.and_then(select_media_type).and_then(|media| media.schema.as_ref()) {
    Some(schema) => resolve(schema),
    None => Ok(TsType::VOID),
  }
}

pub(crate) fn response_type(response: &ObjectOrReference<Response>) -> GenerationResult<TsType> {
  match response {
    ObjectOrReference::Ref { ref_path } => reference_type_name(ref_path).map(TsType::Named),
    ObjectOrReference::Object(response) => content_type(response.content.as_ref()),
  }
}

pub(crate) fn request_body_type(body: Option<&ObjectOrReference<RequestBody>>) -> GenerationResult<TsType> {
  match body {
    None => Ok(TsType::VOID),
    Some(ObjectOrReference::Ref { ref_path }) => reference_type_name(ref_path).map(TsType::Named),
    Some(ObjectOrReference::Object(body)) => content_type(body.content.as_ref()),
  }
}

/// Deduplicated union of every response type; `fallback` when there are none.
pub(crate) fn responses_union<'a>(
  responses: impl IntoIterator<Item = &'a ObjectOrReference<Response>>,
  fallback: TsType,
) -> GenerationResult<TsType> {
  let types = responses
    .into_iter()
    .map(response_type)
    .collect::<GenerationResult<Vec<_>>>()?;

  Ok(if types.is_empty() { fallback } else { TsType::union(types) })
}
