pub mod config;
pub mod generate;
pub mod list;

pub use config::generate_backends;
pub use generate::{GenerateConfig, generate_code};
pub use list::list_operations;
