//! Import clause extraction and sibling-module path resolution.

use std::path::{Path, PathBuf};

use swc_ecma_ast::{ImportDecl, ImportSpecifier};

use super::error::ConvertError;

/// One import statement: the raw module specifier plus the local names it
/// introduces. Used only to locate source text to merge and to select
/// bindings in aggregator-driven mode; discarded afterwards.
#[derive(Debug, Clone)]
pub struct ImportClause {
    pub specifier: String,
    pub names: Vec<String>,
}

/// Extract the specifier and imported names from an import declaration.
///
/// Named imports contribute their local names, a default import its local
/// name. Returns `None` for specifiers that are not valid UTF-8.
pub fn import_clause(decl: &ImportDecl) -> Option<ImportClause> {
    let specifier = decl.src.value.as_str()?.to_string();
    let mut names = Vec::new();
    for spec in &decl.specifiers {
        match spec {
            ImportSpecifier::Named(named) => names.push(named.local.sym.to_string()),
            ImportSpecifier::Default(default) => names.push(default.local.sym.to_string()),
            ImportSpecifier::Namespace(ns) => names.push(ns.local.sym.to_string()),
        }
    }
    Some(ImportClause { specifier, names })
}

/// Resolve an import specifier to an on-disk sibling module path.
///
/// The specifier is resolved against the importing module's directory with
/// the `.ts` extension appended to the specifier text, so dotted specifiers
/// like `./common.helpers` resolve intact. A missing target aborts the
/// current module's conversion only.
pub fn resolve_sibling(importer: &Path, specifier: &str) -> Result<PathBuf, ConvertError> {
    let base_dir = importer.parent().unwrap_or_else(|| Path::new("."));
    let normalized = specifier.strip_prefix("./").unwrap_or(specifier);
    let resolved = base_dir.join(format!("{}.ts", normalized));
    if resolved.exists() {
        Ok(resolved)
    } else {
        Err(ConvertError::Resolution {
            importer: importer.to_path_buf(),
            target: resolved,
        })
    }
}
