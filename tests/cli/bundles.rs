use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CATALOG, CliTest};

#[test]
fn icu_bundle_uses_the_container_as_table_name() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "icu",
            "-i",
            "catalog.xml",
            "-o",
            "messages.txt",
            "-c",
            "root",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let bundle = test.read_file("messages.txt")?;
    assert!(bundle.contains("root:table {"));
    assert!(bundle.contains(r#"CWLNA0007 { "Hello \"world\"" }"#));
    Ok(())
}

#[test]
fn lrb_emits_a_list_resource_bundle_class() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "lrb",
            "-i",
            "catalog.xml",
            "-o",
            "Messages.java",
            "-c",
            "Messages",
            "-p",
            "com.example.msgcatalog",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let source = test.read_file("Messages.java")?;
    assert!(source.starts_with("package com.example.msgcatalog;\n"));
    assert!(source.contains("public class Messages extends ListResourceBundle {"));
    assert!(source.contains(r#"{ "CWLNA0007", "Hello \"world\"" },"#));
    Ok(())
}

#[test]
fn prb_writes_properties_with_escaped_non_ascii() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.xml",
        r#"<Messages>
  <Message ID="CWLNA0003"><MsgText>Größe = big</MsgText></Message>
</Messages>"#,
    )?;
    let output = test
        .command()
        .args([
            "-m",
            "prb",
            "-i",
            "catalog.xml",
            "-o",
            "messages.properties",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let props = test.read_file("messages.properties")?;
    assert!(props.contains("CWLNA0003=Gr\\u00F6\\u00DFe \\= big\n"));
    Ok(())
}

#[test]
fn zipoutput_redirects_the_bundle_into_the_collection_dir() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "prb",
            "-i",
            "catalog.xml",
            "-o",
            "bundles/messages.properties",
            "-z",
            "collect",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("collect/messages.properties"));
    assert!(!test.exists("bundles/messages.properties"));
    Ok(())
}

#[test]
fn varsfile_substitutes_references_before_parsing() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.xml",
        r#"<Messages>
  <Message ID="CWLNA0004"><MsgText>${PRODUCT} started.</MsgText></Message>
</Messages>"#,
    )?;
    test.write_file("build.vars", "# build variables\nPRODUCT=MessageSight\n")?;
    let output = test
        .command()
        .args([
            "-m",
            "prb",
            "-i",
            "catalog.xml",
            "-o",
            "messages.properties",
            "--varsfile",
            "build.vars",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let props = test.read_file("messages.properties")?;
    assert!(props.contains("CWLNA0004=MessageSight started.\n"));
    Ok(())
}

#[test]
fn unknown_variable_reference_is_left_intact() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.xml",
        r#"<Messages>
  <Message ID="CWLNA0005"><MsgText>${NOT_DEFINED} stays.</MsgText></Message>
</Messages>"#,
    )?;
    let output = test
        .command()
        .args([
            "-m",
            "prb",
            "-i",
            "catalog.xml",
            "-o",
            "messages.properties",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let props = test.read_file("messages.properties")?;
    assert!(props.contains("CWLNA0005=${NOT_DEFINED} stays.\n"));
    Ok(())
}

#[test]
fn missing_varsfile_is_fatal() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args([
            "-m",
            "prb",
            "-i",
            "catalog.xml",
            "-o",
            "messages.properties",
            "--varsfile",
            "absent.vars",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(!test.exists("messages.properties"));
    Ok(())
}
