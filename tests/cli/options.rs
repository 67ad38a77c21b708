use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_lines};

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--localization-root"));
    assert!(stdout.contains("--ignore-key"));
    Ok(())
}

#[test]
fn test_custom_layout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.lproj/Main.strings", "\"Title\" = \"Title\";\n")?;
    test.write_file("i18n/de.lproj/Main.strings", "\"Title\" = \"Title\";\n")?;
    test.write_file("App/Main.swift", r#"NSLocalizedString("Title", comment: "")"#)?;

    let output = test.run(&[
        "--localization-root",
        "i18n",
        "--table-name",
        "Main.strings",
        "--source-root",
        "App",
        "--locale",
        "de",
    ])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            "i18n/de.lproj/Main.strings:1: warning [Potentially Untranslated] \"Title\" in DE file doesn't seem to be localized".to_string(),
            "Number of warnings : 1".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_all_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"A\" = \"a\";\n")?;
    test.write_table("it", "")?;
    test.write_table("de", "\"A\" = \"a-de\";\n")?;

    let output = test.run(&["--all-locales", "--ignore-key", "A"])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            "Resources/Languages/it.lproj/Localizable.strings:1: error [Missing] \"A\" is missing from IT file".to_string(),
            "Number of warnings : 0".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_custom_pattern_and_ignore() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"Greeting\" = \"Hello\";\n\"Vendor\" = \"Vendor\";\n")?;
    test.write_file("Sources/App.swift", r#"L10n.tr("Greeting")"#)?;
    test.write_file("Pods/Lib/Vendor.swift", r#"L10n.tr("Vendor")"#)?;

    let output = test.run(&[
        "--locale",
        "en",
        "--pattern",
        r#"L10n\.tr\("(\w+)"\)"#,
        "--ignore",
        "Pods",
    ])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            "Resources/Languages/en.lproj/Localizable.strings:2: error [Unused Key] \"Vendor\" is never used".to_string(),
            "\"(Vendor)\" = \".*\";".to_string(),
            "Number of warnings : 0".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_invalid_pattern_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--pattern", "(unclosed"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Invalid key pattern"));
    Ok(())
}

#[test]
fn test_verbose_reports_unreadable_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"A\" = \"a\";\n")?;

    let output = test.run(&["--verbose", "--locale", "fr", "--ignore-key", "A"])?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: Cannot read string table"));
    assert!(stderr.contains("fr.lproj"));
    assert!(stderr.contains("info: Scanned 0 source file(s), found 0 key reference(s)"));
    Ok(())
}
