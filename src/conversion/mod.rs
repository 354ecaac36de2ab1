//! CSV to JSON conversion module
//!
//! Contains the pipeline configuration, output path mapping, and the engine
//! that drives the per-directory, per-file conversion loop.

pub mod config;
pub mod engine;
pub mod path_mapping;

pub use config::{ConversionConfig, DelimiterType};
pub use engine::{ConversionEngine, RunSummary};
