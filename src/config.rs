use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ts2jsonrc.json";

/// Configuration for a conversion run.
///
/// All behavior toggles live here and are passed explicitly into the
/// pipeline entry point; there is no ambient/global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertConfig {
    /// Folder the generated JSON files are written to, relative to the
    /// project root unless absolute.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Also write each JSON file next to the source module it came from.
    #[serde(default)]
    pub alongside_source: bool,
    /// Rewrite the aggregator's import line for a converted binding to
    /// import the generated JSON file instead of the source module.
    #[serde(default)]
    pub rewrite_index_imports: bool,
    /// Delete source modules after successful conversion.
    #[serde(default)]
    pub delete_source: bool,
    /// Sub-path suffix that marks a translation directory. Plain suffixes
    /// are matched literally; `*`/`?` make it a glob pattern.
    #[serde(default = "default_translations_suffix")]
    pub translations_suffix: String,
    /// Sub-paths of the project root to scan. Empty means the root itself.
    #[serde(default)]
    pub scan_roots: Vec<String>,
    /// When an `index.ts` aggregator is present in a translation directory,
    /// its imports decide which modules and binding names are converted.
    #[serde(default = "default_index_mode")]
    pub index_mode: bool,
}

fn default_output_dir() -> String {
    "json".to_string()
}

fn default_translations_suffix() -> String {
    "translations/en".to_string()
}

fn default_index_mode() -> bool {
    true
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            alongside_source: false,
            rewrite_index_imports: false,
            delete_source: false,
            translations_suffix: default_translations_suffix(),
            scan_roots: Vec::new(),
            index_mode: default_index_mode(),
        }
    }
}

impl ConvertConfig {
    /// Validate configuration values.
    ///
    /// Returns an error if the translations suffix is a malformed glob
    /// pattern. Suffixes without wildcards are literal and always valid.
    pub fn validate(&self) -> Result<()> {
        if self.translations_suffix.contains('*') || self.translations_suffix.contains('?') {
            Pattern::new(&self.translations_suffix).with_context(|| {
                format!(
                    "Invalid glob pattern in 'translationsSuffix': \"{}\"",
                    self.translations_suffix
                )
            })?;
        }

        if self.translations_suffix.is_empty() {
            anyhow::bail!("'translationsSuffix' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = ConvertConfig::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: ConvertConfig,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: ConvertConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: ConvertConfig::default(),
            from_file: false,
        }),
    }
}
