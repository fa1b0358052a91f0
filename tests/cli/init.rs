use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert!(test.root().join(".langsysrc.json").exists());

    let content = test.read_file(".langsysrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["catalog"], "languages.xml");
    assert_eq!(parsed["defaultLanguage"], "english");
    assert_eq!(parsed["strict"], false);
    assert_eq!(parsed["maxImportDepth"], 16);
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".langsysrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".langsysrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".langsysrc.json", r#"{ "maxImportDepth": 0 }"#)?;

    assert_cmd_snapshot!(test.command().arg("languages"));

    Ok(())
}
