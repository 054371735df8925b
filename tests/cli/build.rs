use anyhow::Result;

use crate::CliTest;

#[test]
fn test_build_writes_json_to_out_dir() -> Result<()> {
    let test = CliTest::with_basic_project()?;

    let status = test.build_command().status()?;
    assert!(status.success());

    let en = test.read_file("dist/_locales/en/message.json")?;
    assert!(en.contains("\"greeting\": \"Hello\""));

    // The source tree is left alone.
    assert!(!test.has_file("src/_locales/en/message.json"));

    Ok(())
}

#[test]
fn test_build_backfills_from_default_language() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/_locales/fr/message.yml", "")?;

    let status = test.build_command().status()?;
    assert!(status.success());

    let fr = test.read_file("dist/_locales/fr/message.json")?;
    assert!(fr.contains("\"greeting\": \"Hello\""));

    Ok(())
}

#[test]
fn test_build_keeps_existing_translations() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/_locales/fr/message.yml", "greeting: Bonjour\n")?;

    let status = test.build_command().status()?;
    assert!(status.success());

    let fr = test.read_file("dist/_locales/fr/message.json")?;
    assert!(fr.contains("\"greeting\": \"Bonjour\""));

    Ok(())
}

#[test]
fn test_build_drops_unreferenced_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file(
        "src/_locales/en/message.yml",
        "greeting: Hello\nold_key: Old\n",
    )?;

    let status = test.build_command().status()?;
    assert!(status.success());

    let en = test.read_file("dist/_locales/en/message.json")?;
    assert!(en.contains("greeting"));
    assert!(!en.contains("old_key"));

    Ok(())
}

#[test]
fn test_build_honors_out_dir_flag() -> Result<()> {
    let test = CliTest::with_basic_project()?;

    let status = test
        .build_command()
        .args(["--out-dir", "target/web"])
        .status()?;
    assert!(status.success());

    assert!(test.has_file("target/web/_locales/en/message.json"));
    assert!(!test.has_file("dist/_locales/en/message.json"));

    Ok(())
}

#[test]
fn test_build_unknown_format_fails_fast() -> Result<()> {
    let test = CliTest::with_basic_project()?;

    let output = test.build_command().args(["--format", "toml"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".toml"));

    // Nothing was written.
    assert!(!test.has_file("dist"));

    Ok(())
}
