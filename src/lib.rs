//! ts2json - TypeScript translation module converter
//!
//! ts2json is a CLI tool and library that batch-converts translation
//! dictionaries declared in TypeScript modules into plain JSON files. It
//! statically locates top-level value bindings, resolves their sibling-module
//! imports, orders them so dependencies are materialized first, evaluates the
//! literal data they declare, and writes one JSON file per binding.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Conversion pipeline (parse, merge, sequence, evaluate, write)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
