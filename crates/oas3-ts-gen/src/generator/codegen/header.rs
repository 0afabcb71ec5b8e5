use crate::generator::{CodegenConfig, PathEncodingMode};

pub(crate) const GENERATED_BANNER: &str = "/* Generated by oas3-ts-gen */";

const REQUIRE_HELPER: &str = "type Require<T, R extends keyof T> = T & Required<Pick<T, R>>;";

const INVALIDATE_QUERY_HELPER: &str = "const useInvalidateQuery = (queryKey: unknown[]) => {
  const queryClient = useQueryClient();
  return () => queryClient.invalidateQueries(queryKey);
};";

const URI_COMPONENT_ENCODER: &str = "const encodingFn = encodeURIComponent;";

const RFC3986_ENCODER: &str = "const encodingFn = (uriComponent: string | number | boolean) =>
  encodeURIComponent(uriComponent).replace(/[!'()*]/g, (c: string) => `%${c.charCodeAt(0).toString(16)}`);";

const ENCODING_TAG: &str = "const encodingTagFactory =
  (encoder: typeof encodeURIComponent) =>
  (strings: TemplateStringsArray, ...params: (string | number | boolean)[]) =>
    strings.reduce(
      (accumulatedPath, pathPart, idx) =>
        `${accumulatedPath}${pathPart}${idx < params.length ? encoder(params[idx]) : \"\"}`,
      \"\",
    );

const encode = encodingTagFactory(encodingFn);";

/// Shared helpers the generated module needs, derived from what was
/// actually emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct HeaderRequirements {
  pub require_helper: bool,
  pub path_encoding_helper: bool,
  pub query_hooks: bool,
  pub mutation_hooks: bool,
  pub custom_import: bool,
}

impl HeaderRequirements {
  fn react_query_imports(self) -> Vec<&'static str> {
    let mut imports = vec![];
    if self.query_hooks {
      imports.extend(["useQuery", "useQueryClient", "UseQueryOptions"]);
    }
    if self.mutation_hooks {
      imports.extend(["useMutation", "UseMutationOptions"]);
    }
    imports
  }
}

/// Renders everything that precedes the first declaration: banner, imports,
/// custom import and helpers.
pub(crate) fn render_preamble(banner: &str, requirements: HeaderRequirements, config: &CodegenConfig) -> String {
  let mut sections = vec![banner.to_string()];

  let imports = requirements.react_query_imports();
  if !imports.is_empty() {
    sections.push(format!(
      "import {{ {} }} from \"react-query\";\nimport axios from \"axios\";",
      imports.join(", ")
    ));
  }

  if requirements.custom_import
    && let Some(custom_import) = &config.custom_import
  {
    sections.push(custom_import.trim_end().to_string());
  }

  if requirements.require_helper {
    sections.push(REQUIRE_HELPER.to_string());
  }

  if requirements.query_hooks {
    sections.push(INVALIDATE_QUERY_HELPER.to_string());
  }

  if requirements.path_encoding_helper
    && let Some(mode) = config.path_encoding
  {
    let encoder = match mode {
      PathEncodingMode::UriComponent => URI_COMPONENT_ENCODER,
      PathEncodingMode::Rfc3986 => RFC3986_ENCODER,
    };
    sections.push(format!("{encoder}\n\n{ENCODING_TAG}"));
  }

  sections.join("\n\n") + "\n"
}
