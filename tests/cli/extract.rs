use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, HELLO_GO, stderr, stdout};

#[test]
fn test_extract_writes_catalogs() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Extracted 2 strings from 1 file"));

    let extracted = test.read_json("main.go.extracted.json")?;
    let entries = extracted.as_array().expect("catalog should be an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["value"], "Hello, world!");
    assert_eq!(entries[0]["offset"], 55);
    assert_eq!(entries[0]["line"], 6);
    assert_eq!(entries[0]["column"], 14);
    assert!(
        entries[0]["filename"]
            .as_str()
            .is_some_and(|name| name.ends_with("main.go"))
    );
    assert_eq!(entries[1]["value"], "%d items\n");

    assert_eq!(
        test.read_json("main.go.en.json")?,
        json!([
            {"id": "Hello, world!", "translation": "Hello, world!"},
            {"id": "%d items\n", "translation": "%d items\n"}
        ])
    );
    assert!(!test.root().join("main.go.en.po").exists());

    Ok(())
}

#[test]
fn test_extract_po_and_locale() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;

    let output = test
        .extract_command()
        .args(["--po", "--locale", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    assert!(test.root().join("main.go.fr.json").exists());
    let po = test.read_file("main.go.fr.po")?;
    assert!(po.contains("msgid \"Hello, world!\"\nmsgstr \"Hello, world!\"\n"));
    assert!(po.contains("msgid \"%d items\\n\""));
    assert!(po.contains("line: 6, column: 14"));

    Ok(())
}

#[test]
fn test_extract_recursive() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;
    test.write_file("pkg/util/util.go", "package util\n\nconst Name = \"util\"\n")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("pkg/util/util.go.en.json").exists());

    let output = test.extract_command().arg("-r").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Extracted 3 strings from 2 files"));
    assert_eq!(
        test.read_json("pkg/util/util.go.en.json")?,
        json!([{"id": "util", "translation": "util"}])
    );

    Ok(())
}

#[test]
fn test_extract_with_exclusion_list() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;
    test.write_file(
        "excluded.json",
        r#"{ "excludedStrings": ["Hello, world!"] }"#,
    )?;

    let output = test
        .extract_command()
        .args(["-e", "excluded.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_json("main.go.en.json")?,
        json!([{"id": "%d items\n", "translation": "%d items\n"}])
    );

    Ok(())
}

#[test]
fn test_extract_exclusion_list_from_config() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;
    test.write_file("excluded.json", r#"{ "excludedRegexps": ["^%d"] }"#)?;
    test.write_file(".i18nizerc.json", r#"{ "excludedStringsFile": "excluded.json" }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Extracted 1 string from 1 file"));

    Ok(())
}

#[test]
fn test_extract_unreadable_exclusion_list_is_fatal() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;
    test.write_file("excluded.json", "not json")?;

    let output = test
        .extract_command()
        .args(["-e", "excluded.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));
    assert!(!test.root().join("main.go.en.json").exists());

    Ok(())
}

#[test]
fn test_extract_missing_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().args(["-d", "missing"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing"));

    Ok(())
}

#[test]
fn test_extract_parse_error_continues() -> Result<()> {
    let test = CliTest::with_file("a_broken.go", "package main\n\nfunc main( {\n")?;
    test.write_file("b_main.go", HELLO_GO)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("a_broken.go"));
    assert!(stderr(&output).contains("1 file could not be processed"));
    assert!(test.root().join("b_main.go.en.json").exists());

    Ok(())
}

#[test]
fn test_extract_skip_test_files() -> Result<()> {
    let test = CliTest::with_file("main_test.go", HELLO_GO)?;

    let output = test.extract_command().arg("--skip-test-files").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("main_test.go.en.json").exists());

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("main_test.go.en.json").exists());

    Ok(())
}

#[test]
fn test_extract_dry_run() -> Result<()> {
    let test = CliTest::with_file("main.go", HELLO_GO)?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Would extract 2 strings from 1 file"));
    assert!(!test.root().join("main.go.extracted.json").exists());

    Ok(())
}

#[test]
fn test_extract_is_deterministic() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nvar a, b, c = \"x\", \"y\", \"x\"\n",
    )?;

    test.extract_command().output()?;
    let first = test.read_file("main.go.extracted.json")?;
    test.extract_command().output()?;
    assert_eq!(test.read_file("main.go.extracted.json")?, first);

    let extracted = test.read_json("main.go.extracted.json")?;
    let entries = extracted.as_array().expect("catalog should be an array");
    // The later "x" keeps its position.
    assert_eq!(entries[0]["value"], "y");
    assert_eq!(entries[1]["value"], "x");
    assert_eq!(entries[1]["column"], 25);

    Ok(())
}
