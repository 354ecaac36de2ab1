//! CSV Tree to JSON Converter
//!
//! A Rust CLI tool that converts tabular data files found under an input
//! directory tree (the root plus its immediate subdirectories) into a
//! mirrored tree of JSON record files at a new output root.

// Allow dead code for library exports that may not be used by the binary
#![allow(dead_code)]

pub mod conversion;
pub mod discovery;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, DelimiterType, RunSummary};
pub use discovery::{enumerate_data_dirs, list_tabular_files};
pub use error::{ConversionError, ConversionResult};
pub use parser::{Record, RecordSet, TabularParser};

use std::path::Path;

/// Convert an input directory tree to JSON with default configuration.
pub fn convert_tree(input_root: &Path, output_root: &Path) -> ConversionResult<RunSummary> {
    let data_dirs = enumerate_data_dirs(input_root)?;
    let engine = ConversionEngine::new(ConversionConfig::default());
    engine.convert(&data_dirs, input_root, output_root)
}
