use anyhow::Result;
use serde_json::json;

use crate::CliTest;

#[test]
fn test_converts_standalone_module() -> Result<()> {
    let test = CliTest::with_file(
        "feature-libs/cart/translations/en/en.ts",
        "export const en = { hello: 'hi' };\n",
    )?;

    let output = test.convert_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_json("json/en.json")?, json!({ "hello": "hi" }));
    Ok(())
}

#[test]
fn test_aggregator_driven_conversion() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en-translations.ts",
        r#"
const common = { ok: 'OK', cancel: 'Cancel' };
export const en = { hello: 'hi', common };
export const internal = { x: 1 };
"#,
    )?;
    test.write_file(
        "translations/en/index.ts",
        "import { en } from './en-translations';\nexport { en };\n",
    )?;

    let output = test.convert_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_json("json/en.json")?,
        json!({ "hello": "hi", "common": { "ok": "OK", "cancel": "Cancel" } })
    );
    // Only the aggregator's exports are converted
    assert!(!test.exists("json/internal.json"));
    assert!(!test.exists("json/common.json"));
    Ok(())
}

#[test]
fn test_sibling_import_is_merged() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/common.ts",
        "export const common = { save: 'Save' };\n",
    )?;
    test.write_file(
        "translations/en/en.ts",
        "import { common } from './common';\nexport const en = { greeting: 'hi', common };\n",
    )?;

    let output = test.convert_command().arg("--no-index").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_json("json/en.json")?,
        json!({ "greeting": "hi", "common": { "save": "Save" } })
    );
    Ok(())
}

#[test]
fn test_broken_module_fails_without_aborting_siblings() -> Result<()> {
    let test = CliTest::with_file("translations/en/good.ts", "export const good = { a: 1 };\n")?;
    test.write_file("translations/en/broken.ts", "const = {\n")?;

    let output = test.convert_command().output()?;
    // Some modules failed: exit code 1, but the good one converted
    assert_eq!(output.status.code(), Some(1));
    assert!(test.exists("json/good.json"));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("broken.ts"));
    assert!(stdout.contains("1 failed"));
    Ok(())
}

#[test]
fn test_missing_root_reports_and_exits_zero() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.convert_command().arg("does-not-exist").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Folder does not exist"));
    Ok(())
}

#[test]
fn test_no_translation_dirs_warns() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const app = {};\n")?;

    let output = test.convert_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No translation directories found"));
    Ok(())
}

#[test]
fn test_delete_source_flag() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en.ts",
        "export const en = { hello: 'hi' };\n",
    )?;

    let output = test.convert_command().arg("--delete-source").output()?;
    assert!(output.status.success());

    assert!(!test.exists("translations/en/en.ts"));
    assert!(test.exists("json/en.json"));
    Ok(())
}

#[test]
fn test_rewrite_index_flag() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en-translations.ts",
        "export const en = { hello: 'hi' };\n",
    )?;
    test.write_file(
        "translations/en/index.ts",
        "import { en } from './en-translations';\n",
    )?;

    let output = test.convert_command().arg("--rewrite-index").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("translations/en/index.ts")?,
        "import en from './en.json';\n"
    );
    Ok(())
}

#[test]
fn test_out_dir_flag() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en.ts",
        "export const en = { hello: 'hi' };\n",
    )?;

    let output = test
        .convert_command()
        .args(["--out-dir", "generated/resources"])
        .output()?;
    assert!(output.status.success());

    assert!(test.exists("generated/resources/en.json"));
    Ok(())
}

#[test]
fn test_custom_suffix_flag() -> Result<()> {
    let test = CliTest::with_file("i18n/en/en.ts", "export const en = { hello: 'hi' };\n")?;

    let output = test.convert_command().args(["--suffix", "i18n/en"]).output()?;
    assert!(output.status.success());

    assert!(test.exists("json/en.json"));
    Ok(())
}

#[test]
fn test_config_file_is_loaded() -> Result<()> {
    let test = CliTest::with_file("i18n/en/en.ts", "export const en = { hello: 'hi' };\n")?;
    test.write_file(
        ".ts2jsonrc.json",
        r#"{ "translationsSuffix": "i18n/en", "outputDir": "out" }"#,
    )?;

    let output = test.convert_command().output()?;
    assert!(output.status.success());

    assert!(test.exists("out/en.json"));
    Ok(())
}

#[test]
fn test_verbose_lists_written_files() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en.ts",
        "export const en = { hello: 'hi' };\n",
    )?;

    let output = test.convert_command().arg("--verbose").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("wrote"));
    assert!(stdout.contains("en.json"));
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file(
        "translations/en/en.ts",
        "const other = { bye: 'later' };\nexport const en = { hello: 'hi', sub: other };\n",
    )?;

    assert!(test.convert_command().output()?.status.success());
    let first = test.read_file("json/en.json")?;

    assert!(test.convert_command().output()?.status.success());
    let second = test.read_file("json/en.json")?;

    assert_eq!(first, second);
    Ok(())
}
