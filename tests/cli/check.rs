use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_lines};

const EN: &str = "Resources/Languages/en.lproj/Localizable.strings";
const FR: &str = "Resources/Languages/fr.lproj/Localizable.strings";
const ES: &str = "Resources/Languages/es.lproj/Localizable.strings";

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "/* Greeting */\n\"Hello\" = \"Hello\";\n")?;
    test.write_table("fr", "\"Hello\" = \"Bonjour\";\n")?;
    test.write_table("es", "\"Hello\" = \"Hola\";\n")?;
    test.write_file(
        "Sources/App.swift",
        r#"let title = NSLocalizedString("Hello", comment: "")"#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["Number of warnings : 0"]);
    Ok(())
}

#[test]
fn test_duplicate_key_first_wins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"A\" = \"Apple\";\n\"A\" = \"Banana\";\n")?;
    test.write_table("fr", "\"A\" = \"Pomme\";\n")?;
    test.write_table("es", "\"A\" = \"Manzana\";\n")?;
    test.write_file("Sources/App.swift", r#"NSLocalizedString("A", comment: "")"#)?;

    let output = test.run(&[])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("{EN}:1: error [Redundant] \"A\" is redundant in EN file"),
            "Number of warnings : 1".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_untranslated_and_suppression() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"Hi\" = \"Hi\";\n\"OK\" = \"OK\";\n")?;
    test.write_table(
        "fr",
        "\"Hi\" = \"Hi\";\n\"OK\" = \"OK\"; // ignore-same-translation-warning\n",
    )?;
    test.write_table("es", "\"Hi\" = \"Hola\";\n\"OK\" = \"Vale\";\n")?;
    test.write_file(
        "Sources/View.m",
        "NSLocalizedString(@\"Hi\", nil);\nNSLocalizedString(@\"OK\", nil);\n",
    )?;

    let output = test.run(&[])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            format!(
                "{FR}:1: warning [Potentially Untranslated] \"Hi\" in FR file doesn't seem to be localized"
            ),
            "Number of warnings : 1".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("en", "\"Hello\" = \"Hello\";\n\"Bye\" = \"Bye\";\n")?;
    test.write_table("fr", "\"Hello\" = \"Bonjour\";\n\"Bye\" = \"Au revoir\";\n")?;
    test.write_table("es", "\"Hello\" = \"Hola\";\n")?;
    test.write_file(
        "Sources/App.swift",
        "Localizations.Hello\nLocalizations.Bye\n",
    )?;

    let output = test.run(&[])?;

    // Missing keys are errors, not warnings
    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("{ES}:2: error [Missing] \"Bye\" is missing from ES file"),
            "Number of warnings : 0".to_string(),
        ]
    );
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_unused_keys_and_bulk_delete_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table(
        "en",
        "\"Used\" = \"Used\";\n\"Unused1\" = \"One\";\n\"Unused2\" = \"Two\";\n",
    )?;
    test.write_table(
        "fr",
        "\"Used\" = \"Utilisé\";\n\"Unused1\" = \"Un\";\n\"Unused2\" = \"Deux\";\n",
    )?;
    test.write_table(
        "es",
        "\"Used\" = \"Usado\";\n\"Unused1\" = \"Uno\";\n\"Unused2\" = \"Dos\";\n",
    )?;
    test.write_file("Sources/App.swift", r#"NSLocalizedString("Used", comment: "")"#)?;

    let output = test.run(&[])?;

    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("{EN}:2: error [Unused Key] \"Unused1\" is never used"),
            format!("{EN}:3: error [Unused Key] \"Unused2\" is never used"),
            "\"(Unused1|Unused2)\" = \".*\";".to_string(),
            "Number of warnings : 0".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_missing_tables_still_complete() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["Number of warnings : 0"]);
    Ok(())
}

#[test]
fn test_malformed_lines_are_ignored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table(
        "en",
        "// comment\n\"Broken\" = \"no semicolon\"\n\n\"Ok\" = \"Ok\";\n",
    )?;
    test.write_table("fr", "\"Ok\" = \"D'accord\";\n")?;
    test.write_table("es", "\"Ok\" = \"Vale\";\n")?;
    test.write_file("Sources/App.swift", r#"NSLocalizedString("Ok", comment: "")"#)?;

    let output = test.run(&[])?;

    assert_eq!(stdout_lines(&output), vec!["Number of warnings : 0"]);
    Ok(())
}
