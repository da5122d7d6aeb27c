use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort conversion of a single module.
///
/// Every variant is scoped to one module: the run reports the failing path
/// and moves on to the next module. Nothing here is fatal to the whole run,
/// and nothing is retried.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Filesystem read/stat failure while scanning or loading a module.
    #[error("failed to read {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module (or merged compilation unit) is not valid TypeScript.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// An import statement points at a sibling module that does not exist.
    #[error("{}: cannot resolve import target {}", importer.display(), target.display())]
    Resolution { importer: PathBuf, target: PathBuf },

    /// The literal evaluator hit an expression it cannot materialize, or a
    /// referenced name had no value in the compilation unit.
    #[error("failed to evaluate {}: {message}", path.display())]
    Evaluation { path: PathBuf, message: String },

    /// A value could not be serialized or written as JSON.
    #[error("failed to write output for {}: {message}", path.display())]
    Serialization { path: PathBuf, message: String },
}
