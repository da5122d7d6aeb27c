//! Cross-module merger: fold a module's imports into one compilation unit.

use std::fs;
use std::path::Path;

use super::error::ConvertError;
use super::imports::{import_clause, resolve_sibling};
use super::parser::{ParsedModule, parse_module_source};

/// Merge a module with the modules its imports reference.
///
/// Each resolved import's full text is read and concatenated, in
/// import-statement order, followed by the importing module's own text; the
/// blob is re-parsed as the compilation unit. This makes every binding
/// visible as a top-level declaration in a single scope, so the dependency
/// extractor and sequencer treat them uniformly without real cross-file
/// symbol resolution. Import statements survive in the blob as text but are
/// never bindings.
///
/// Resolution depth is fixed at one level: imports of imports are not
/// followed. Returns `None` when the module has no imports.
pub fn merge_imports(
    path: &Path,
    parsed: &ParsedModule,
) -> Result<Option<ParsedModule>, ConvertError> {
    let clauses: Vec<_> = parsed.import_decls().filter_map(import_clause).collect();
    if clauses.is_empty() {
        return Ok(None);
    }

    let mut sources = Vec::with_capacity(clauses.len() + 1);
    for clause in &clauses {
        let target = resolve_sibling(path, &clause.specifier)?;
        let text = fs::read_to_string(&target).map_err(|source| ConvertError::DirectoryRead {
            path: target.clone(),
            source,
        })?;
        sources.push(text);
    }
    sources.push(parsed.source.clone());

    let merged = parse_module_source(sources.join("\n"), path)?;
    Ok(Some(merged))
}
