use anyhow::Result;

use crate::CliTest;

#[test]
fn test_check_clean_project_exits_zero() -> Result<()> {
    let test = CliTest::with_basic_project()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_missing_translation_exits_one() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/_locales/fr/message.yml", "")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("missing translation"));
    assert!(stdout.contains("fr"));
    assert!(stdout.contains("greeting"));

    Ok(())
}

#[test]
fn test_check_stale_key_is_warning_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file(
        "src/_locales/en/message.yml",
        "greeting: Hello\nold_key: Old\n",
    )?;

    let output = test.check_command().output()?;
    // Warnings alone do not fail the check.
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stale key"));
    assert!(stdout.contains("old_key"));

    Ok(())
}

#[test]
fn test_check_does_not_write() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/popup.js", "i18n('farewell');")?;
    let before = test.read_file("src/_locales/en/message.yml")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(test.read_file("src/_locales/en/message.yml")?, before);
    assert!(!test.has_file("dist"));

    Ok(())
}

#[test]
fn test_check_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sync"));
    assert!(stdout.contains("build"));
    assert!(stdout.contains("check"));

    Ok(())
}
