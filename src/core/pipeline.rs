//! Per-module conversion pipeline.
//!
//! source file → parse → (if imports) resolve+merge → re-parse →
//! collect bindings+deps → sequence → evaluate → select named values.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::bindings::collect_bindings;
use super::error::ConvertError;
use super::eval::evaluate_bindings;
use super::merge::merge_imports;
use super::parser::parse_module_source;
use super::sequencer::sequence;

/// The evaluated output of one module: binding name → value, in selection
/// order. Produced fresh per conversion and discarded after serialization.
pub struct ConvertedModule {
    pub path: PathBuf,
    pub values: Vec<(String, Value)>,
}

/// Convert a single translation module.
///
/// `selection` restricts which binding names are materialized (used in
/// aggregator-driven mode). When `None`, the module's own bindings are
/// selected: for a merged unit that means the importer's pre-merge
/// declarations, not the imported ones.
pub fn convert_module(
    path: &Path,
    selection: Option<&[String]>,
) -> Result<ConvertedModule, ConvertError> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_module_source(text, path)?;

    // The importer's own declarations, recorded before merging pulls in
    // imported ones under the same roof.
    let own_names: Vec<String> = collect_bindings(&parsed)
        .iter()
        .map(|binding| binding.name.clone())
        .collect();

    let merged = merge_imports(path, &parsed)?;
    let had_imports = merged.is_some();
    let unit = merged.unwrap_or(parsed);

    let bindings = collect_bindings(&unit);
    let ordered = sequence(&bindings);
    let scope = evaluate_bindings(&ordered, path)?;

    let selected: Vec<String> = match selection {
        Some(names) => names.to_vec(),
        None if had_imports => own_names,
        None => bindings.iter().map(|binding| binding.name.clone()).collect(),
    };

    let mut values = Vec::with_capacity(selected.len());
    for name in selected {
        match scope.get(&name) {
            Some(value) => values.push((name, value.clone())),
            None => {
                return Err(ConvertError::Evaluation {
                    path: path.to_path_buf(),
                    message: format!("`{}` was not produced by evaluation", name),
                });
            }
        }
    }

    Ok(ConvertedModule {
        path: path.to_path_buf(),
        values,
    })
}
