use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    // 1. Parse as JSON
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    // 2. Verify expected fields and defaults
    assert_eq!(parsed["locale"], "en");
    assert_eq!(parsed["wrapperSymbol"], "T");
    assert_eq!(parsed["runtimePackage"], "github.com/i18nize/i18nize/i18n");
    assert_eq!(parsed["extractTestFiles"], true);
    assert_eq!(parsed["po"], false);
    assert!(parsed["ignores"].is_array());

    // 3. Verify formatting (2-space indentation)
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .i18nizerc.json"));

    // Verify file exists
    assert!(test.root().join(".i18nizerc.json").exists());

    // Verify content is valid and has expected structure
    let content = test.read_file(".i18nizerc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nizerc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(test.read_file(".i18nizerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_generated_config_is_loadable() -> Result<()> {
    let test = CliTest::with_file("main.go", crate::HELLO_GO)?;

    test.command().arg("init").output()?;
    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("main.go.en.json").exists());

    Ok(())
}
