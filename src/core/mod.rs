//! Conversion pipeline.
//!
//! Leaf to root: `parser` (SWC adapter) → `bindings` (dependency
//! extraction) → `imports`/`merge` (cross-module compilation unit) →
//! `sequencer` (topological order) → `eval` (literal evaluation) →
//! `writer` (JSON output). `pipeline` ties them together per module and
//! `run` drives a whole scan.

pub mod bindings;
pub mod error;
pub mod eval;
pub mod imports;
pub mod merge;
pub mod parser;
pub mod pipeline;
pub mod run;
pub mod scanner;
pub mod sequencer;
pub mod writer;

pub use error::ConvertError;
pub use pipeline::{ConvertedModule, convert_module};
pub use run::{RunSummary, run_conversion};
