use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const FOO_COMPONENT: &str = r#"import { FooQuery } from "./types/FooQuery";

export function Foo() {
  const { data } = useQuery<FooQuery>(FOO_QUERY);
  return data;
}
"#;

#[test]
fn test_missing_variables_type() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file("src/Foo.tsx", FOO_COMPONENT)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "`useQuery<FooQuery>(...)` should be `useQuery<FooQuery, FooQueryVariables>(...)`"  missing-graphql-variables-type
      --> ./src/Foo.tsx:4:20
      |
    4 |   const { data } = useQuery<FooQuery>(FOO_QUERY);
      |                    ^
      = note: FooQueryVariables is exported from ./src/types/FooQuery.ts

    ✘ 1 problem

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file(
        "src/Foo.tsx",
        r#"import { FooQuery, FooQueryVariables } from "./types/FooQuery";
const { data } = useQuery<FooQuery, FooQueryVariables>(FOO_QUERY);
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_wrong_variables_type() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file(
        "src/Foo.tsx",
        r#"import { FooQuery } from "./types/FooQuery";
import { BarVariables } from "./types/Bar";
const { data } = useQuery<FooQuery, BarVariables>(FOO_QUERY);
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("`useQuery<FooQuery, FooQueryVariables>(...)`"));
    assert!(output.stdout.contains(
        "= hint: second type argument is `BarVariables`, expected `FooQueryVariables`"
    ));

    Ok(())
}

#[test]
fn test_no_generated_variables_type() -> Result<()> {
    let test = CliTest::with_file(
        "src/types/FooQuery.ts",
        "export interface FooQuery {\n  id: string;\n}\n",
    )?;
    test.write_file("src/Foo.tsx", FOO_COMPONENT)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_unresolved_call_sites_are_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "src/Foo.tsx",
        r#"import { FooQuery } from "@generated/graphql";
import { BarQuery } from "./types/BarQuery";
const a = useQuery<FooQuery>(FOO_QUERY);
const b = useQuery<BarQuery>(BAR_QUERY);
const c = useQuery<LocalQuery>(LOCAL_QUERY);
"#,
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));
    assert_eq!(
        output.stderr,
        "warning: 3 call site(s) skipped, types could not be resolved (use -v for details)\n"
    );

    let output = run({
        let mut cmd = test.check_command();
        cmd.arg("--verbose");
        cmd
    })?;
    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains(
        "warning: skipped: `FooQuery` is imported from non-relative module \"@generated/graphql\"\n  --> ./src/Foo.tsx:3:11\n"
    ));
    assert!(output.stderr.contains("warning: skipped: cannot read ./src/types/BarQuery.ts"));
    assert!(output.stderr.contains(
        "warning: skipped: no named import binds `LocalQuery`\n  --> ./src/Foo.tsx:5:11\n"
    ));

    Ok(())
}

#[test]
fn test_suppression_directives() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file(
        "src/Foo.tsx",
        r#"import { FooQuery } from "./types/FooQuery";

// gqlvars-disable-next-line
const a = useQuery<FooQuery>(FOO_QUERY);

/* gqlvars-disable */
const b = useQuery<FooQuery>(FOO_QUERY);
const c = useQuery<FooQuery>(FOO_QUERY);
/* gqlvars-enable */

const d = useQuery<FooQuery>(FOO_QUERY);
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("./src/Foo.tsx:11:11"));
    assert!(output.stdout.contains("✘ 1 problem\n"));

    Ok(())
}

#[test]
fn test_config_hooks_and_ignores() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file(
        ".gqlvarsrc.json",
        r#"{
  "hooks": ["useQuery", "useLazyQuery"],
  "ignores": ["**/generated/**"]
}"#,
    )?;
    test.write_file(
        "src/Foo.tsx",
        r#"import { FooQuery } from "./types/FooQuery";
const [load] = useLazyQuery<FooQuery>(FOO_QUERY);
"#,
    )?;
    test.write_file(
        "src/generated/Bar.tsx",
        r#"import { FooQuery } from "../types/FooQuery";
useQuery<FooQuery>(FOO_QUERY);
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("`useLazyQuery<FooQuery>(...)`"));
    assert!(!output.stdout.contains("generated"));

    Ok(())
}

#[test]
fn test_test_files_are_skipped() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file(
        "src/Foo.test.tsx",
        r#"import { FooQuery } from "./types/FooQuery";
useQuery<FooQuery>(FOO_QUERY);
"#,
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::with_foo_types()?;
    test.write_file("src/Foo.tsx", FOO_COMPONENT)?;

    let output = run({
        let mut cmd = test.command();
        cmd.current_dir(std::env::temp_dir());
        cmd.arg("check").arg("--source-root").arg(test.root());
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    let expected = format!("{}:4:20", test.root().join("src/Foo.tsx").display());
    assert!(output.stdout.contains(&expected));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = ;\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("  --> ./src/broken.tsx\n"));
    assert!(
        output
            .stderr
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".gqlvarsrc.json", r#"{ "hooks": [] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error:"));
    assert!(output.stderr.contains("'hooks' must list at least one non-empty hook name"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));
    assert!(output.stdout.contains("serve"));

    Ok(())
}
