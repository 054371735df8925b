use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let status = test.command().arg("init").status()?;
    assert!(status.success());

    let config = test.read_file(".lingorc.json")?;
    assert!(config.contains("sourceRoot"));
    assert!(config.contains("keyPatterns"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));

    // The existing file is untouched.
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_generated_config_is_usable() -> Result<()> {
    let test = CliTest::new()?;
    assert!(test.command().arg("init").status()?.success());

    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file("src/_locales/en/message.yml", "greeting: Hello\n")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));

    Ok(())
}
