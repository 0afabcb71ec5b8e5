#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod document;
pub mod generator;
pub mod utils;
