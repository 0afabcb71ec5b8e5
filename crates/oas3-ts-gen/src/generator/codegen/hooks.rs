//! react-query bindings for a bound operation.

use itertools::Itertools;

use crate::{document::HttpMethod, generator::converter::OperationMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
  Query,
  Mutation,
}

impl HookKind {
  #[must_use]
  pub const fn for_verb(verb: HttpMethod) -> Self {
    if verb.is_query() { Self::Query } else { Self::Mutation }
  }
}

/// Template literal for the request URL, optionally tagged with `encode`.
fn url_literal(route: &str, encode: bool) -> String {
  let tag = if encode { "encode" } else { "" };
  format!("{tag}`{route}`")
}

pub(crate) fn render_hooks(metadata: &OperationMetadata, encode: bool) -> (String, HookKind) {
  let kind = HookKind::for_verb(metadata.verb);
  let text = match kind {
    HookKind::Query => render_query_hook(metadata, encode),
    HookKind::Mutation => render_mutation_hook(metadata, encode),
  };
  (text, kind)
}

fn render_query_hook(metadata: &OperationMetadata, encode: bool) -> String {
  let name = &metadata.component_name;
  let response = metadata.generics.response.render();
  let error = metadata.generics.error.render();
  let url = url_literal(&metadata.route, encode);
  let has_path_params = !metadata.path_params.is_empty();

  let extends = if has_path_params {
    format!(" extends {name}PathParams")
  } else {
    String::new()
  };
  let mut lines = vec![format!("export interface Use{name}Props{extends} {{")];
  if metadata.has_query_params {
    lines.push(format!("  params: {name}QueryParams;"));
  }
  lines.push(format!("  queryOptions?: UseQueryOptions<{response}, {error}>;"));
  lines.push("}".to_string());
  lines.push(String::new());

  let destructured = metadata
    .path_params
    .iter()
    .map(String::as_str)
    .chain(metadata.has_query_params.then_some("params"))
    .chain(["queryOptions"])
    .join(", ");
  let props_default = if has_path_params || metadata.has_query_params {
    ""
  } else {
    " = {}"
  };
  let (query_key, request_config) = if metadata.has_query_params {
    (format!("[{url}, params]"), ", { params }")
  } else {
    (format!("[{url}]"), "")
  };

  lines.extend([
    format!("export const use{name} = ({{ {destructured} }}: Use{name}Props{props_default}) =>"),
    format!("  useQuery<{response}, {error}>("),
    format!("    {query_key},"),
    format!("    () => axios.get<{response}>({url}{request_config}).then((response) => response.data),"),
    "    { refetchOnMount: false, ...queryOptions },".to_string(),
    "  );".to_string(),
    String::new(),
  ]);

  let invalidate_args = if has_path_params {
    format!("{{ {} }}: {name}PathParams", metadata.path_params.join(", "))
  } else {
    String::new()
  };
  lines.push(format!(
    "export const useInvalidate{name} = ({invalidate_args}) => useInvalidateQuery([{url}]);"
  ));

  lines.iter().map(|line| format!("{line}\n")).collect()
}

fn render_mutation_hook(metadata: &OperationMetadata, encode: bool) -> String {
  let name = &metadata.component_name;
  let response = metadata.generics.response.render();
  let error = metadata.generics.error.render();
  let has_path_params = !metadata.path_params.is_empty();

  let route = match &metadata.resource_id {
    Some(id) => format!("{}/${{{}}}", metadata.route, id.name),
    None => metadata.route.clone(),
  };
  let url = url_literal(&route, encode);

  let mut fields = vec![];
  if let Some(id) = &metadata.resource_id {
    fields.push(format!("  {}: {};", id.name, id.ty.render()));
  }
  if metadata.has_query_params {
    fields.push(format!("  params: {name}QueryParams;"));
  }
  if metadata.has_request_body {
    fields.push(format!("  body: {name}RequestBody;"));
  }

  let variables_are_void = fields.is_empty() && !has_path_params;
  let mut lines = if variables_are_void {
    vec![format!("export type Use{name}Variables = void;")]
  } else {
    let extends = if has_path_params {
      format!(" extends {name}PathParams")
    } else {
      String::new()
    };
    let mut interface = vec![format!("export interface Use{name}Variables{extends} {{")];
    interface.extend(fields);
    interface.push("}".to_string());
    interface
  };
  lines.push(String::new());

  let destructured = metadata
    .path_params
    .iter()
    .map(String::as_str)
    .chain(metadata.resource_id.as_ref().map(|id| id.name.as_str()))
    .chain(metadata.has_query_params.then_some("params"))
    .chain(metadata.has_request_body.then_some("body"))
    .join(", ");
  let arguments = if variables_are_void {
    "()".to_string()
  } else {
    format!("({{ {destructured} }})")
  };

  let mut request_args = vec![url];
  if metadata.verb.sends_body() {
    request_args.push(if metadata.has_request_body { "body" } else { "undefined" }.to_string());
  }
  if metadata.has_query_params {
    request_args.push("{ params }".to_string());
  }

  lines.extend([
    format!(
      "export const use{name} = (mutationOptions?: UseMutationOptions<{response}, {error}, Use{name}Variables>) =>"
    ),
    format!("  useMutation<{response}, {error}, Use{name}Variables>("),
    format!(
      "    {arguments} => axios.{}<{response}>({}).then((response) => response.data),",
      metadata.verb,
      request_args.join(", ")
    ),
    "    mutationOptions,".to_string(),
    "  );".to_string(),
  ]);

  lines.iter().map(|line| format!("{line}\n")).collect()
}
