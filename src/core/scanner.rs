//! Translation directory discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::utils::normalize_slashes;

/// Conventional aggregator (barrel) file name.
pub const INDEX_FILE: &str = "index.ts";

/// A directory holding translation modules.
#[derive(Debug)]
pub struct TranslationDir {
    pub path: PathBuf,
    /// The aggregator file, when present.
    pub index: Option<PathBuf>,
    /// The `.ts` modules in the directory, aggregator excluded, sorted.
    pub modules: Vec<PathBuf>,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path suffixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Find translation directories under each scan root.
///
/// A directory matches when its slash-normalized path ends with `suffix` on
/// a path-segment boundary; a suffix containing wildcards is matched as a
/// glob pattern against the whole path instead. Unreadable subtrees are
/// logged and skipped; they never abort the scan.
pub fn find_translation_dirs(
    root: &Path,
    scan_roots: &[String],
    suffix: &str,
    verbose: bool,
) -> Vec<TranslationDir> {
    let pattern = if is_glob_pattern(suffix) {
        Pattern::new(suffix).ok()
    } else {
        None
    };
    let literal_suffix = normalize_slashes(suffix);

    let scan_dirs: Vec<PathBuf> = if scan_roots.is_empty() {
        vec![root.to_path_buf()]
    } else {
        scan_roots.iter().map(|sub| root.join(sub)).collect()
    };

    let mut dirs = Vec::new();
    for dir in scan_dirs {
        if !dir.is_dir() {
            if verbose {
                eprintln!(
                    "{} Scan root does not exist: {}",
                    "warning:".bold().yellow(),
                    dir.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(&dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let normalized = normalize_slashes(&entry.path().to_string_lossy());
            let matched = match &pattern {
                Some(pattern) => pattern.matches(&normalized),
                None => {
                    normalized == literal_suffix
                        || normalized.ends_with(&format!("/{}", literal_suffix))
                }
            };
            if !matched {
                continue;
            }

            match read_translation_dir(entry.path()) {
                Ok(translation_dir) => dirs.push(translation_dir),
                Err(err) => {
                    eprintln!(
                        "{} Cannot read directory {}: {}",
                        "error:".bold().red(),
                        entry.path().display(),
                        err
                    );
                }
            }
        }
    }
    dirs
}

fn read_translation_dir(path: &Path) -> io::Result<TranslationDir> {
    let mut modules = Vec::new();
    let mut index = None;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.extension().and_then(|ext| ext.to_str()) != Some("ts") {
            continue;
        }
        if entry_path.file_name().and_then(|name| name.to_str()) == Some(INDEX_FILE) {
            index = Some(entry_path);
        } else {
            modules.push(entry_path);
        }
    }
    modules.sort();
    Ok(TranslationDir {
        path: path.to_path_buf(),
        index,
        modules,
    })
}
