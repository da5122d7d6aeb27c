//! Whole-run orchestration: scan, plan, convert, write.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;

use crate::config::ConvertConfig;

use super::error::ConvertError;
use super::imports::{import_clause, resolve_sibling};
use super::parser::parse_module_source;
use super::pipeline::convert_module;
use super::scanner::{TranslationDir, find_translation_dirs};
use super::writer::{rewrite_index_import, write_binding};

/// One module conversion job, produced by planning a translation directory.
struct Job {
    module: PathBuf,
    /// Binding names to materialize; `None` selects the module's own.
    selection: Option<Vec<String>>,
    /// Aggregator that referenced this module, when index-driven.
    index: Option<PathBuf>,
}

/// Outcome of a whole conversion run.
pub struct RunSummary {
    pub dirs_found: usize,
    pub modules_converted: usize,
    pub files_written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run a full conversion over `root`.
///
/// Module conversions are independent; they run in parallel and may
/// complete in any order. A failure in one module is recorded and never
/// aborts the others. Aggregator rewrites are applied after the parallel
/// section because the index file is shared between its modules.
pub fn run_conversion(root: &Path, config: &ConvertConfig, verbose: bool) -> RunSummary {
    let dirs = find_translation_dirs(root, &config.scan_roots, &config.translations_suffix, verbose);

    let mut jobs = Vec::new();
    let mut failures = Vec::new();
    for dir in &dirs {
        plan_dir(dir, config, &mut jobs, &mut failures);
    }

    let out_dir = root.join(&config.output_dir);
    let results: Vec<Result<Vec<PathBuf>, ConvertError>> = jobs
        .par_iter()
        .map(|job| execute_job(job, &out_dir, config))
        .collect();

    let mut modules_converted = 0;
    let mut files_written = Vec::new();
    let mut rewrites: Vec<(&Path, String, &[String])> = Vec::new();
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(written) => {
                modules_converted += 1;
                files_written.extend(written);
                if config.rewrite_index_imports
                    && let Some(index) = &job.index
                    && let Some(names) = &job.selection
                    && let Some(stem) = job.module.file_stem().and_then(|stem| stem.to_str())
                {
                    rewrites.push((index.as_path(), stem.to_string(), names.as_slice()));
                }
            }
            Err(err) => failures.push((job.module.clone(), err)),
        }
    }

    for (index, stem, names) in rewrites {
        if let Err(err) = rewrite_index_import(index, &stem, names) {
            eprintln!("{} {}", "warning:".bold().yellow(), err);
        }
    }

    RunSummary {
        dirs_found: dirs.len(),
        modules_converted,
        files_written,
        failures,
    }
}

/// Plan the jobs for one translation directory.
///
/// With an aggregator and index mode on, the aggregator's imports decide
/// which sibling modules and binding names are converted; otherwise every
/// non-aggregator module converts individually. Planning failures are
/// isolated per aggregator/import, like conversion failures.
fn plan_dir(
    dir: &TranslationDir,
    config: &ConvertConfig,
    jobs: &mut Vec<Job>,
    failures: &mut Vec<(PathBuf, ConvertError)>,
) {
    if config.index_mode && let Some(index) = &dir.index {
        let text = match fs::read_to_string(index) {
            Ok(text) => text,
            Err(source) => {
                failures.push((
                    index.clone(),
                    ConvertError::DirectoryRead {
                        path: index.clone(),
                        source,
                    },
                ));
                return;
            }
        };
        let parsed = match parse_module_source(text, index) {
            Ok(parsed) => parsed,
            Err(err) => {
                failures.push((index.clone(), err));
                return;
            }
        };
        for decl in parsed.import_decls() {
            let Some(clause) = import_clause(decl) else {
                continue;
            };
            match resolve_sibling(index, &clause.specifier) {
                Ok(target) => jobs.push(Job {
                    module: target,
                    selection: Some(clause.names),
                    index: Some(index.clone()),
                }),
                Err(err) => failures.push((index.clone(), err)),
            }
        }
        return;
    }

    for module in &dir.modules {
        jobs.push(Job {
            module: module.clone(),
            selection: None,
            index: None,
        });
    }
}

fn execute_job(
    job: &Job,
    out_dir: &Path,
    config: &ConvertConfig,
) -> Result<Vec<PathBuf>, ConvertError> {
    let converted = convert_module(&job.module, job.selection.as_deref())?;

    let mut written = Vec::with_capacity(converted.values.len());
    for (name, value) in &converted.values {
        written.push(write_binding(out_dir, name, value, &job.module)?);
        if config.alongside_source
            && let Some(parent) = job.module.parent()
        {
            written.push(write_binding(parent, name, value, &job.module)?);
        }
    }

    if config.delete_source {
        fs::remove_file(&job.module).map_err(|source| ConvertError::DirectoryRead {
            path: job.module.clone(),
            source,
        })?;
    }

    Ok(written)
}
