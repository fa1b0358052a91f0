use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CATALOG, CliTest, stdout};

#[test]
fn test_put_creates_catalog() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["put", "english", "greeting", "Hello"]));
    let content = test.read_file("languages.xml")?;
    insta::assert_snapshot!(content);

    assert_eq!(stdout(&test.run(&["get", "greeting"])?), "Hello\n");

    Ok(())
}

#[test]
fn test_put_escapes_markup() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["put", "english", "menu", "Fish & <Chips>"])
    );
    assert!(
        test.read_file("languages.xml")?
            .contains("<value>Fish &amp; &lt;Chips&gt;</value>")
    );

    assert_cmd_snapshot!(test.command().args(["get", "menu"]));
    // the new key now exists, untranslated, in portuguese too
    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_remove_translation_keeps_key_for_other_languages() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["remove", "portuguese", "hello_world"]));

    // re-added by normalization, at the end
    assert_cmd_snapshot!(test.command().args(["keys", "portuguese"]));
    assert_cmd_snapshot!(
        test.command()
            .args(["get", "hello_world", "--lang", "portuguese"])
    );

    Ok(())
}

#[test]
fn test_remove_key_from_all_languages() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["remove-key", "hello_world"]));

    assert_eq!(stdout(&test.run(&["keys", "english"])?), "presentation\n");
    assert_eq!(stdout(&test.run(&["keys", "portuguese"])?), "presentation\n");

    Ok(())
}

#[test]
fn test_remove_language() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["remove", "portuguese"]));
    assert_eq!(stdout(&test.run(&["languages"])?), "english\n");
    assert!(test.read_file("languages.xml")?.contains("<!--LANGUAGES: 1-->"));

    Ok(())
}

#[test]
fn test_add_language_gets_every_key() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["add-language", "french"]));
    assert_eq!(
        stdout(&test.run(&["keys", "french"])?),
        "hello_world\npresentation\n"
    );

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_edit_refuses_partially_loaded_catalog() -> Result<()> {
    let malformed = "<languages><language value=\"english\">";
    let test = CliTest::with_catalog(malformed)?;

    assert_cmd_snapshot!(test.command().args(["put", "english", "greeting", "Hello"]));
    assert_eq!(test.read_file("languages.xml")?, malformed);

    Ok(())
}

#[test]
fn test_edit_flattens_imports() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<languages>
    <import-language file="extra.xml"/>
</languages>"#,
    )?;
    test.write_file(
        "extra.xml",
        r#"<languages>
    <language value="english">
        <translated value="farewell"><value>Goodbye</value></translated>
    </language>
</languages>"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["put", "english", "greeting", "Hello"]));
    let content = test.read_file("languages.xml")?;
    insta::assert_snapshot!(content);

    Ok(())
}
