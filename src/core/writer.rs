//! JSON output writing and aggregator import rewriting.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;

use super::error::ConvertError;

/// Write one binding's value as `<name>.json` under `dir`.
///
/// Pretty-printed with 2-space indentation and a trailing newline; key order
/// is the source object's property order. Parent directories are created.
pub fn write_binding(
    dir: &Path,
    name: &str,
    value: &Value,
    source: &Path,
) -> Result<PathBuf, ConvertError> {
    let content = serde_json::to_string_pretty(value).map_err(|err| {
        ConvertError::Serialization {
            path: source.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    fs::create_dir_all(dir).map_err(|err| ConvertError::Serialization {
        path: source.to_path_buf(),
        message: format!("cannot create {}: {}", dir.display(), err),
    })?;

    let target = dir.join(format!("{}.json", name));
    fs::write(&target, format!("{}\n", content)).map_err(|err| ConvertError::Serialization {
        path: source.to_path_buf(),
        message: format!("cannot write {}: {}", target.display(), err),
    })?;

    Ok(target)
}

/// Rewrite the aggregator's import of `module_stem` to import the generated
/// JSON file(s) instead of the source module.
///
/// `import { en } from './en-translations';` becomes
/// `import en from './en.json';` (one line per converted binding). Failure
/// here is post-conversion glue, reported as a warning by the caller rather
/// than failing the module.
pub fn rewrite_index_import(index_path: &Path, module_stem: &str, names: &[String]) -> Result<()> {
    let text = fs::read_to_string(index_path)
        .with_context(|| format!("Failed to read aggregator: {}", index_path.display()))?;

    let pattern = Regex::new(&format!(
        r#"(?m)^[^\S\n]*import\s[^\n]*from\s+['"]\./{}['"];?[^\S\n]*$"#,
        regex::escape(module_stem)
    ))
    .expect("escaped module stem always forms a valid pattern");

    if !pattern.is_match(&text) {
        return Ok(());
    }

    let replacement = names
        .iter()
        .map(|name| format!("import {} from './{}.json';", name, name))
        .collect::<Vec<_>>()
        .join("\n");
    let rewritten = pattern.replace(&text, replacement.as_str());

    fs::write(index_path, rewritten.as_ref())
        .with_context(|| format!("Failed to rewrite aggregator: {}", index_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_binding_pretty_with_trailing_newline() {
        let dir = tempdir().unwrap();
        let value = json!({ "hello": "hi", "sub": { "bye": "later" } });

        let target = write_binding(dir.path(), "en", &value, Path::new("en.ts")).unwrap();
        assert_eq!(target, dir.path().join("en.json"));

        let content = fs::read_to_string(&target).unwrap();
        assert!(content.ends_with("}\n"));
        insta::assert_snapshot!(content.trim_end(), @r#"
        {
          "hello": "hi",
          "sub": {
            "bye": "later"
          }
        }
        "#);
    }

    #[test]
    fn test_write_binding_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("resources");

        let target = write_binding(&nested, "en", &json!({}), Path::new("en.ts")).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn test_rewrite_named_import() {
        let dir = tempdir().unwrap();
        let index = dir.path().join("index.ts");
        fs::write(
            &index,
            "import { en } from './en-translations';\nexport { en };\n",
        )
        .unwrap();

        rewrite_index_import(&index, "en-translations", &["en".to_string()]).unwrap();
        let text = fs::read_to_string(&index).unwrap();
        assert_eq!(text, "import en from './en.json';\nexport { en };\n");
    }

    #[test]
    fn test_rewrite_multiple_names() {
        let dir = tempdir().unwrap();
        let index = dir.path().join("index.ts");
        fs::write(&index, "import { cart, checkout } from './features';\n").unwrap();

        rewrite_index_import(
            &index,
            "features",
            &["cart".to_string(), "checkout".to_string()],
        )
        .unwrap();
        let text = fs::read_to_string(&index).unwrap();
        assert_eq!(
            text,
            "import cart from './cart.json';\nimport checkout from './checkout.json';\n"
        );
    }

    #[test]
    fn test_rewrite_leaves_other_imports_alone() {
        let dir = tempdir().unwrap();
        let index = dir.path().join("index.ts");
        fs::write(
            &index,
            "import { en } from './en-translations';\nimport { de } from './de-translations';\n",
        )
        .unwrap();

        rewrite_index_import(&index, "en-translations", &["en".to_string()]).unwrap();
        let text = fs::read_to_string(&index).unwrap();
        assert!(text.contains("import en from './en.json';"));
        assert!(text.contains("import { de } from './de-translations';"));
    }

    #[test]
    fn test_rewrite_without_match_is_noop() {
        let dir = tempdir().unwrap();
        let index = dir.path().join("index.ts");
        let original = "import { de } from './de-translations';\n";
        fs::write(&index, original).unwrap();

        rewrite_index_import(&index, "en-translations", &["en".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&index).unwrap(), original);
    }
}
