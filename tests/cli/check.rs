use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CATALOG, CliTest};

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_reports_untranslated_entries() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages>
    <language value="english">
        <translated value="greeting"><value>Hello</value></translated>
        <translated value="farewell"><value>Bye</value></translated>
    </language>
    <language value="portuguese">
        <translated value="greeting"><value>Olá</value></translated>
    </language>
</languages>"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_reports_failed_import() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages>
    <import-language file="missing.xml"/>
    <language value="english">
        <translated value="greeting"><value>Hello</value></translated>
    </language>
</languages>"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_strict_rejects_failed_import() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages><import-language file="missing.xml"/></languages>"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("--strict"));

    Ok(())
}

#[test]
fn test_check_reports_import_cycle() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages>
    <import-language file="a.xml"/>
    <language value="english">
        <translated value="greeting"><value>Hello</value></translated>
    </language>
</languages>"#,
    )?;
    test.write_file(
        "a.xml",
        r#"<languages><import-language file="languages.xml"/></languages>"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_malformed_catalog() -> Result<()> {
    let test = CliTest::with_catalog("<languages><language value=\"english\">")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_latin1_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes(
        "languages.xml",
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
          <languages><language value=\"portugu\xEAs\">\
          <translated value=\"hello\"><value>Ol\xE1</value></translated>\
          </language></languages>",
    )?;

    assert_cmd_snapshot!(test.check_command());
    assert_cmd_snapshot!(test.command().args(["get", "hello", "--lang", "português"]));

    Ok(())
}
