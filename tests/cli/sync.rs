use anyhow::Result;

use crate::CliTest;

#[test]
fn test_sync_adds_new_keys_with_empty_values() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/popup.js", "i18n('farewell');")?;

    let status = test.sync_command().status()?;
    assert!(status.success());

    let en = test.read_file("src/_locales/en/message.yml")?;
    assert!(en.contains("greeting: Hello"));
    assert!(en.contains("farewell: ''"));

    Ok(())
}

#[test]
fn test_sync_flags_stale_keys_without_deleting() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file(
        "src/_locales/en/message.yml",
        "greeting: Hello\nold_key: Old\n",
    )?;

    let status = test.sync_command().status()?;
    assert!(status.success());

    let en = test.read_file("src/_locales/en/message.yml")?;
    assert!(en.contains("old_key: '[untouched] Old'"));

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file(
        "src/_locales/en/message.yml",
        "old_key: Old\ngreeting: Hello\n",
    )?;

    assert!(test.sync_command().status()?.success());
    let first = test.read_file("src/_locales/en/message.yml")?;

    assert!(test.sync_command().status()?.success());
    let second = test.read_file("src/_locales/en/message.yml")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_sync_updates_every_language() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/_locales/fr/message.yml", "greeting: Bonjour\n")?;
    test.write_file("src/options.js", "i18n('farewell');")?;

    let status = test.sync_command().status()?;
    assert!(status.success());

    let fr = test.read_file("src/_locales/fr/message.yml")?;
    assert!(fr.contains("greeting: Bonjour"));
    assert!(fr.contains("farewell: ''"));

    Ok(())
}

#[test]
fn test_sync_touched_only_prunes_stale_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file(
        "src/_locales/en/message.yml",
        "greeting: Hello\nold_key: Old\n",
    )?;

    let status = test.sync_command().arg("--touched-only").status()?;
    assert!(status.success());

    let en = test.read_file("src/_locales/en/message.yml")?;
    assert!(en.contains("greeting: Hello"));
    assert!(!en.contains("old_key"));

    Ok(())
}

#[test]
fn test_sync_use_default_lang_backfills() -> Result<()> {
    let test = CliTest::with_basic_project()?;
    test.write_file("src/_locales/fr/message.yml", "")?;

    let status = test.sync_command().arg("--use-default-lang").status()?;
    assert!(status.success());

    let fr = test.read_file("src/_locales/fr/message.yml")?;
    assert!(fr.contains("greeting: Hello"));

    Ok(())
}

#[test]
fn test_sync_format_json_writes_json() -> Result<()> {
    let test = CliTest::with_basic_project()?;

    let status = test.sync_command().args(["--format", "json"]).status()?;
    assert!(status.success());

    let en = test.read_file("src/_locales/en/message.json")?;
    assert!(en.contains("\"greeting\": \"Hello\""));

    Ok(())
}

#[test]
fn test_sync_corrupt_locale_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "i18n('greeting');")?;
    test.write_file("src/_locales/en/message.json", "{ not json")?;

    let output = test.sync_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("message.json"));

    // The corrupt file must survive untouched.
    assert_eq!(test.read_file("src/_locales/en/message.json")?, "{ not json");

    Ok(())
}

#[test]
fn test_sync_respects_config_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingorc.json",
        r#"{ "sourceRoot": "./app", "localesDir": "locales", "defaultLocale": "de" }"#,
    )?;
    test.write_file("app/main.js", "i18n('greeting');")?;

    let status = test.sync_command().status()?;
    assert!(status.success());

    // The default locale's record is created even without an existing file.
    let de = test.read_file("app/locales/de/message.yml")?;
    assert!(de.contains("greeting: ''"));

    Ok(())
}

#[test]
fn test_sync_scans_all_template_kinds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/_locales/en/message.yml", "")?;
    test.write_file("src/popup.vue", "<div v-text=\"i18n('fromVue')\"></div>")?;
    test.write_file("src/options.html", "<script>i18n('fromHtml')</script>")?;
    test.write_file("src/style.css", "/* i18n('notScanned') */")?;

    let status = test.sync_command().status()?;
    assert!(status.success());

    let en = test.read_file("src/_locales/en/message.yml")?;
    assert!(en.contains("fromVue"));
    assert!(en.contains("fromHtml"));
    assert!(!en.contains("notScanned"));

    Ok(())
}
