//! Orchestration for the OpenAPI to TypeScript generation pipeline.
//!
//! ## Usage
//!
//! ```no_run
//! use oas3_ts_gen::{
//!   document::Document,
//!   generator::{CodegenConfig, orchestrator::Orchestrator},
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let spec = std::fs::read_to_string("openapi.json")?;
//! let document = Document::from_json_str(&spec)?;
//!
//! let orchestrator = Orchestrator::new(document, CodegenConfig::default());
//! let output = orchestrator.generate_with_header("openapi.json")?;
//!
//! println!("Bound {} operations with {} warnings", output.stats.operations_bound, output.stats.warnings.len());
//! std::fs::write("api.ts", output.code())?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use super::{
  CodegenConfig, GenerationResult, GenerationStats,
  codegen::{
    HeaderRequirements, HookKind, OperationRenderer,
    header::{GENERATED_BANNER, render_preamble},
    render_operation,
  },
  converter::{
    OperationBinder, OperationIdRegistry, OperationMetadata, PreparedComponents,
    components::{DeclarationRegistry, emit_components},
  },
};
use crate::{document::Document, utils::escape_comment};

/// Drives one document through the whole pipeline.
pub struct Orchestrator {
  document: Document,
  config: CodegenConfig,
  operation_renderer: Option<Arc<dyn OperationRenderer>>,
}

/// Metadata about the OpenAPI document for the file header.
#[derive(Debug, Clone)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  /// Banner, imports and shared helpers.
  pub preamble: String,
  /// One block per component declaration, then one per operation.
  pub blocks: Vec<String>,
  pub operations: Vec<OperationMetadata>,
  pub header: HeaderRequirements,
  pub stats: GenerationStats,
}

impl GeneratedOutput {
  /// The complete TypeScript module.
  #[must_use]
  pub fn code(&self) -> String {
    let mut code = self.preamble.clone();
    for block in &self.blocks {
      code.push('\n');
      code.push_str(block);
    }
    code
  }
}

impl Orchestrator {
  #[must_use]
  pub fn new(document: Document, config: CodegenConfig) -> Self {
    Self {
      document,
      config,
      operation_renderer: None,
    }
  }

  #[must_use]
  pub fn with_operation_renderer(mut self, renderer: Arc<dyn OperationRenderer>) -> Self {
    self.operation_renderer = Some(renderer);
    self
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.document.info.title.clone(),
      version: self.document.info.version.clone(),
      description: self.document.info.description.clone(),
    }
  }

  /// Runs the pipeline:
  /// 1. Propagates discriminators into a prepared copy of the components
  /// 2. Emits schemas, request bodies and responses
  /// 3. Binds every `get post patch put delete` operation in document order
  /// 4. Derives the preamble from what was emitted
  ///
  /// Any fatal error aborts the whole document; nothing is returned.
  pub fn generate(&self) -> GenerationResult<GeneratedOutput> {
    self.run(GENERATED_BANNER)
  }

  /// Like [`Self::generate`], with a banner naming the API and its source.
  pub fn generate_with_header(&self, source_path: &str) -> GenerationResult<GeneratedOutput> {
    let metadata = self.metadata();
    let description = metadata
      .description
      .as_deref()
      .map(|text| escape_comment(text).replace('\n', "\n * "))
      .unwrap_or_else(|| String::from("No description provided"));

    let banner = format!(
      "/*\n * AUTO-GENERATED CODE - DO NOT EDIT!\n *\n * {}\n * Source: {}\n * Version: {}\n * Generated by `oas3-ts-gen`\n *\n * {description}\n */",
      escape_comment(&metadata.title),
      escape_comment(source_path),
      escape_comment(&metadata.version)
    );

    self.run(&banner)
  }

  fn run(&self, banner: &str) -> GenerationResult<GeneratedOutput> {
    let mut stats = GenerationStats::default();
    let mut header = HeaderRequirements {
      custom_import: self.config.custom_import.is_some(),
      ..HeaderRequirements::default()
    };

    let (components, warnings) = PreparedComponents::prepare(self.document.components.as_ref())?;
    stats.record_warnings(warnings);

    let mut names = DeclarationRegistry::default();
    let declarations = emit_components(&components, &mut names)?;
    stats.record_declarations(&declarations);
    header.require_helper = declarations.iter().any(|declaration| declaration.uses_require());
    let mut blocks = declarations.iter().map(|declaration| declaration.render()).collect::<Vec<_>>();

    let binder = OperationBinder::new(&components, self.config.target.extracts_delete_id());
    let mut registry = OperationIdRegistry::default();
    let mut operations = vec![];

    for (route, item) in &self.document.paths {
      for (verb, operation) in &item.operations {
        if !verb.is_bindable() {
          continue;
        }

        let bound = binder.bind(route, item, *verb, operation, &mut registry)?;
        for declaration in &bound.declarations {
          names
            .register(declaration)
            .map_err(|err| err.in_operation(*verb, route))?;
        }
        stats.record_operation();
        stats.record_declarations(&bound.declarations);
        stats.record_warnings(bound.warnings.iter().cloned());
        header.require_helper |= bound.declarations.iter().any(|declaration| declaration.uses_require())
          || (self.config.target.emits_hooks() && bound.metadata.generics.uses_require());

        let rendered = render_operation(&bound, &self.config, self.operation_renderer.as_deref());
        match rendered.hook {
          Some(HookKind::Query) => {
            stats.record_query_hook();
            header.query_hooks = true;
          }
          Some(HookKind::Mutation) => {
            stats.record_mutation_hook();
            header.mutation_hooks = true;
          }
          None => {}
        }
        if !rendered.code.is_empty() {
          blocks.push(rendered.code);
        }
        operations.push(bound.metadata);
      }
    }

    header.path_encoding_helper =
      self.config.path_encoding.is_some() && (header.query_hooks || header.mutation_hooks);

    Ok(GeneratedOutput {
      preamble: render_preamble(banner, header, &self.config),
      blocks,
      operations,
      header,
      stats,
    })
  }
}
