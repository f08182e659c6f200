use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CATALOG, CliTest};

#[test]
fn xml_catalog_lands_in_language_subdirectory() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "pseudotranslation",
            "-i",
            "catalog.xml",
            "-b",
            "out",
            "-l",
            "de",
            "-d",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let translated = test.read_file("out/de/catalog.xml")?;
    assert!(translated.contains("[de] "));
    assert!(translated.contains(" [/de]"));
    // Structure survives; only text nodes change.
    assert!(translated.contains(r#"<Message ID="CWLNA0007">"#));
    assert!(translated.contains("ö") || translated.contains("ä"));
    Ok(())
}

#[test]
fn js_source_translates_only_the_root_stanza() -> Result<()> {
    let test = CliTest::with_file(
        "strings.js",
        r#"define({
  root : ({
    GREETING: "Hello"
  }),
  "de": true
});
"#,
    )?;
    let output = test
        .command()
        .args([
            "-m",
            "pseudotranslation",
            "-i",
            "strings.js",
            "-b",
            "out",
            "-l",
            "fr",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    // Suffix placement with the raw code for non-XML sources.
    let translated = test.read_file("out/strings_fr.js")?;
    assert!(translated.contains(r#"GREETING: "[fr] Héllô~ [/fr]""#));
    // Availability flags outside root are untouched.
    assert!(translated.contains(r#""de": true"#));
    Ok(())
}

#[test]
fn unsupported_source_type_fails_the_run() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "plain text\n")?;
    let output = test
        .command()
        .args([
            "-m",
            "pseudotranslation",
            "-i",
            "notes.txt",
            "-b",
            "out",
            "-l",
            "de",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(!test.exists("out/notes_de.txt"));
    Ok(())
}

#[test]
fn one_output_per_language_in_supply_order() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "pseudotranslation",
            "-i",
            "catalog.xml",
            "-b",
            "out",
            "-s",
            "de fr",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("out/catalog_de.xml"));
    assert!(test.exists("out/catalog_fr.xml"));
    Ok(())
}

#[test]
fn fixclassname_renames_the_class_declaration() -> Result<()> {
    let test = CliTest::with_file(
        "Messages_de.java",
        "package com.example;\n\npublic class Messages_de extends ListResourceBundle {\n}\n",
    )?;
    let output = test
        .command()
        .args([
            "-m",
            "fixclassname",
            "-i",
            "Messages_de.java",
            "-o",
            "Messages_de_DE.java",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let fixed = test.read_file("Messages_de_DE.java")?;
    assert!(fixed.contains("public class Messages_de_DE extends ListResourceBundle {"));
    assert!(!fixed.contains("class Messages_de "));
    Ok(())
}

#[test]
fn fixclassname_refuses_a_second_input() -> Result<()> {
    // Both inputs would land in the same output file; the run must stop
    // before anything is written instead of keeping only the last result.
    let test = CliTest::with_file("Alpha.java", "public class Alpha {}\n")?;
    test.write_file("Beta.java", "public class Beta {}\n")?;
    let output = test
        .command()
        .args([
            "-m",
            "fixclassname",
            "-i",
            "Alpha.java",
            "-i",
            "Beta.java",
            "-o",
            "Renamed.java",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly one"));
    assert!(!test.exists("Renamed.java"));
    Ok(())
}
