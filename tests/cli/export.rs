use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CATALOG, CliTest};

#[test]
fn test_export_to_stdout() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().arg("export"));

    Ok(())
}

#[test]
fn test_export_to_file_round_trips() -> Result<()> {
    let test = CliTest::with_catalog(CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["export", "--output", "out/flat.xml"]));
    assert_cmd_snapshot!(
        test.command()
            .args(["get", "presentation", "Ana", "--catalog", "out/flat.xml"])
    );

    Ok(())
}
