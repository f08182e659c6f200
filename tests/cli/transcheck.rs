use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const SOURCE: &str = r#"define({
  root : ({
    GREETING: "Hello"
  }),
  "de": true,
  "fr": true
});
"#;

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file("nls/strings.js", SOURCE)?;
    // fr has a translation, de does not.
    test.write_file("trans/fr/strings.js", "define({ GREETING: \"Bonjour\" });\n")?;
    fs::create_dir_all(test.root().join("trans/de"))?;
    Ok(test)
}

#[test]
fn missing_translation_flips_the_availability_flag() -> Result<()> {
    let test = setup()?;
    let output = test
        .command()
        .args([
            "-m",
            "checkjstrans",
            "-i",
            "nls/strings.js",
            "--translationrootdir",
            "trans",
        ])
        .output()?;
    // Missing translations are warnings, not failures.
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("de"));

    let rewritten = test.read_file("nls/strings.js")?;
    assert!(rewritten.contains(r#""de": false,"#));
    assert!(rewritten.contains(r#""fr": true"#));
    // Only the flag changed.
    assert_eq!(rewritten, SOURCE.replace("\"de\": true", "\"de\": false"));
    Ok(())
}

#[test]
fn rerun_leaves_the_source_unchanged() -> Result<()> {
    let test = setup()?;
    let args = [
        "-m",
        "checkjstrans",
        "-i",
        "nls/strings.js",
        "--translationrootdir",
        "trans",
    ];
    test.command().args(args).output()?;
    let first = test.read_file("nls/strings.js")?;

    let output = test.command().args(args).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("nls/strings.js")?, first);
    Ok(())
}

#[test]
fn empty_translation_root_is_fatal() -> Result<()> {
    let test = CliTest::with_file("nls/strings.js", SOURCE)?;
    fs::create_dir_all(test.root().join("trans"))?;
    let output = test
        .command()
        .args([
            "-m",
            "checkjstrans",
            "-i",
            "nls/strings.js",
            "--translationrootdir",
            "trans",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    // The run aborted, but the summary of what was attempted still prints.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("checkjstrans"));
    assert!(stdout.contains("0 action(s)"));
    Ok(())
}
