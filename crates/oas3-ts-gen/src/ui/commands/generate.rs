use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use oas3_ts_gen::{
  document::Document,
  generator::{
    CodegenConfig, GenerationStats, GenerationTarget, PathEncodingMode,
    linter::{DefaultLinter, LintIssue, SpecLinter},
    orchestrator::Orchestrator,
  },
  utils::spec::SpecLoader,
};
use tokio::io::AsyncWriteExt;

use crate::ui::{Colors, GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  /// Backend name when the run comes from a configuration file.
  pub backend: Option<String>,
  pub target: GenerationTarget,
  pub input: PathBuf,
  /// `None` prints the generated module to stdout.
  pub output: Option<PathBuf>,
  pub validation: bool,
  pub strict: bool,
  pub path_encoding: Option<PathEncodingMode>,
  pub custom_import: Option<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      mode,
      input,
      output,
      validation,
      strict,
      path_encoding,
      custom_import,
      verbose,
      quiet,
      config: _,
      backends: _,
    } = command;

    let Some(input) = input else {
      anyhow::bail!("Input path (-i) is required unless --config is given");
    };

    Ok(Self {
      backend: None,
      target: mode,
      input,
      output,
      validation,
      strict,
      path_encoding,
      custom_import,
      verbose,
      quiet,
    })
  }

  pub fn codegen_config(&self) -> CodegenConfig {
    CodegenConfig::builder()
      .target(self.target)
      .maybe_path_encoding(self.path_encoding)
      .maybe_custom_import(self.custom_import.clone())
      .build()
  }

  const fn lints(&self) -> bool {
    self.validation || self.strict
  }

  async fn load_spec(&self) -> anyhow::Result<Document> {
    SpecLoader::open(&self.input).await?.parse()
  }

  async fn write_output(path: &Path, code: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, code).await?;
    Ok(())
  }

  async fn write_stdout(code: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(code.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  /// Progress goes to stderr when stdout carries the generated code.
  fn emit(&self, line: &str) {
    if self.config.output.is_some() {
      println!("{line}");
    } else {
      eprintln!("{line}");
    }
  }

  fn info(&self, message: &str) {
    if self.config.quiet {
      return;
    }
    let prefix = self
      .config
      .backend
      .as_deref()
      .map(|name| format!(" {}", format!("[{name}]").with(self.colors.info())))
      .unwrap_or_default();
    self.emit(&format!(
      "{}{prefix} {message}",
      format_timestamp().with(self.colors.timestamp())
    ));
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      self.emit(&format!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      ));
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_linting(&self) {
    self.info(&"Validating specification...".with(self.colors.primary()).to_string());
  }

  fn print_lint_issues(&self, issues: &[LintIssue]) {
    if issues.is_empty() {
      self.info(&"No lint issues found".with(self.colors.success()).to_string());
      return;
    }

    for issue in issues {
      if !issue.is_error() && self.config.quiet {
        continue;
      }
      eprintln!(
        "{}\n  {} {}\n  {} {}",
        format!("[{}]", issue.severity).with(self.colors.severity(issue.severity)),
        "Message :".with(self.colors.label()),
        issue.message.as_str().with(self.colors.primary()),
        "Path    :".with(self.colors.label()),
        issue.path.as_str().with(self.colors.info())
      );
    }
  }

  fn log_generating(&self) {
    let message = match self.config.target {
      GenerationTarget::Types => "Generating TypeScript types...",
      GenerationTarget::Client => "Generating TypeScript types and react-query hooks...",
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Declarations generated:", stats.declarations_generated.to_string());
    if stats.empty_interfaces_generated > 0 {
      self.stat(
        "",
        format!(
          "{} interfaces, {} empty",
          stats.interfaces_generated, stats.empty_interfaces_generated
        ),
      );
    } else {
      self.stat("", format!("{} interfaces", stats.interfaces_generated));
    }
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    self.stat("Operations bound:", stats.operations_bound.to_string());
    if self.config.target.emits_hooks() {
      self.stat("Hooks generated:", stats.hooks_generated().to_string());
      self.stat(
        "",
        format!(
          "{} queries, {} mutations",
          stats.query_hooks_generated, stats.mutation_hooks_generated
        ),
      );
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    let mut printed_header = false;
    for warning in &stats.warnings {
      let should_print = warning.is_skipped_item() || self.config.verbose;
      if !should_print {
        continue;
      }

      if !printed_header {
        eprintln!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, path: &Path) {
    self.info(
      &format!("Writing to: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if self.config.quiet {
      return;
    }
    let message = match self.config.target {
      GenerationTarget::Types => "Successfully generated TypeScript types",
      GenerationTarget::Client => "Successfully generated TypeScript client",
    };
    self.emit("");
    self.info(&message.with(self.colors.success()).to_string());
  }

  fn log_stdout_notice(&self) {
    if !self.config.quiet {
      eprintln!(
        "\n{}",
        "Output written to stdout, pass -o <FILE> to write it to a file".with(self.colors.info())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_spec().await?;

  if config.lints() {
    logger.log_linting();
    let issues = DefaultLinter.lint(&document);
    logger.print_lint_issues(&issues);

    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    if config.strict && errors > 0 {
      anyhow::bail!(
        "{} has {errors} lint error(s), nothing was generated",
        config.input.display()
      );
    }
  }

  logger.log_generating();
  let source_path = config.input.display().to_string();
  let output = Orchestrator::new(document, config.codegen_config()).generate_with_header(&source_path)?;
  logger.print_statistics(&output.stats);

  let code = output.code();
  match &config.output {
    Some(path) => {
      logger.log_writing(path);
      GenerateConfig::write_output(path, &code).await?;
      logger.log_success();
    }
    None => {
      GenerateConfig::write_stdout(&code).await?;
      logger.log_stdout_notice();
    }
  }

  Ok(())
}
