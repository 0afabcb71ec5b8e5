use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oas3_ts_gen::generator::{GenerationTarget, PathEncodingMode};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-ts-gen")]
#[command(
  author,
  version,
  about = "OpenAPI 3.0 to TypeScript types and react-query hooks",
  styles = Colors::clap_styles()
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript code from OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
  /// Generation mode (types or client)
  #[arg(short, long, value_enum, default_value_t = GenerationTarget::Client)]
  pub mode: GenerationTarget,

  /// Path to the OpenAPI JSON or YAML specification file
  #[arg(short, long, value_name = "FILE", conflicts_with = "config")]
  pub input: Option<PathBuf>,

  /// Path where the generated TypeScript will be written (stdout when omitted)
  #[arg(short, long, value_name = "FILE", conflicts_with = "config")]
  pub output: Option<PathBuf>,

  /// Lint the specification before generating
  #[arg(long, default_value_t = false)]
  pub validation: bool,

  /// Abort when linting reports an error (implies --validation)
  #[arg(long, default_value_t = false)]
  pub strict: bool,

  /// Encode path parameters interpolated into request URLs
  #[arg(long, value_enum, value_name = "MODE")]
  pub path_encoding: Option<PathEncodingMode>,

  /// Text inserted verbatim after the imports, e.g. an import statement
  #[arg(long, value_name = "TEXT")]
  pub custom_import: Option<String>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,

  /// Multi-backend configuration file (JSON or YAML)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Backends from the configuration file to generate (all when omitted)
  #[arg(value_name = "BACKEND", requires = "config")]
  pub backends: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the OpenAPI specification
  Operations {
    /// Path to the OpenAPI JSON or YAML specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
