use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .gqlvarsrc.json

    ----- stderr -----
    ");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".gqlvarsrc.json")?)?;
    assert_eq!(config["hooks"], serde_json::json!(["useQuery"]));
    assert_eq!(config["resultSuffix"], "Query");
    assert_eq!(config["variablesSuffix"], "Variables");
    assert_eq!(config["targetExtension"], ".ts");
    assert_eq!(config["exportLookup"], "textual");
    assert_eq!(config["ignoreTestFiles"], true);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".gqlvarsrc.json", r#"{ "hooks": ["useGraph"] }"#)?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".gqlvarsrc.json already exists"));
    assert_eq!(
        test.read_file(".gqlvarsrc.json")?,
        r#"{ "hooks": ["useGraph"] }"#
    );

    Ok(())
}

#[test]
fn test_init_then_check() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    test.write_file(
        "src/Foo.tsx",
        "import { FooQuery } from \"./types/FooQuery\";\nuseQuery<FooQuery>(FOO);\n",
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));

    Ok(())
}
