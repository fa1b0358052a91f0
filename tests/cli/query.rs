use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CATALOG, CliTest};

#[test]
fn test_languages_lists_in_document_order() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().arg("languages"));

    Ok(())
}

#[test]
fn test_keys_of_language() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["keys", "portuguese"]));
    assert_cmd_snapshot!(test.command().args(["keys", "klingon"]));

    Ok(())
}

#[test]
fn test_get_formats_placeholders() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["get", "presentation", "Cassamo"]));
    assert_cmd_snapshot!(
        test.command()
            .args(["get", "presentation", "Ana", "--lang", "portuguese"])
    );
    // no values: placeholder stays as-is
    assert_cmd_snapshot!(test.command().args(["get", "presentation"]));

    Ok(())
}

#[test]
fn test_get_uses_configured_default_language() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;
    test.write_file(".langsysrc.json", r#"{ "defaultLanguage": "portuguese" }"#)?;

    assert_cmd_snapshot!(test.command().args(["get", "hello_world"]));

    Ok(())
}

#[test]
fn test_get_missing_key() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["get", "nope"]));
    assert_cmd_snapshot!(
        test.command()
            .args(["get", "hello_world", "--lang", "klingon"])
    );

    Ok(())
}

#[test]
fn test_get_tense_variant() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages>
    <language value="english">
        <translated value="eat">
            <value>eat</value>
            <value tense="past">ate</value>
        </translated>
    </language>
</languages>"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["get", "eat~past"]));
    assert_cmd_snapshot!(test.command().args(["get", "eat"]));

    Ok(())
}

#[test]
fn test_imports_resolve_next_to_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsysrc.json", r#"{ "catalog": "i18n/main.xml" }"#)?;
    test.write_file(
        "i18n/main.xml",
        r#"<languages>
    <import-language file="extra.xml"/>
    <language value="english">
        <translated value="greeting"><value>Hello</value></translated>
    </language>
</languages>"#,
    )?;
    test.write_file(
        "i18n/extra.xml",
        r#"<languages>
    <language value="english">
        <translated value="farewell"><value>Goodbye</value></translated>
    </language>
</languages>"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["keys", "english"]));

    Ok(())
}

#[test]
fn test_catalog_flag_and_env() -> Result<()> {
    let test = CliTest::with_file("other.xml", CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["get", "hello_world", "--catalog", "other.xml"])
    );
    assert_cmd_snapshot!(
        test.command()
            .args(["get", "hello_world"])
            .env("LANGSYS_CATALOG", "other.xml")
    );

    Ok(())
}
