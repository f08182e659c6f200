use anyhow::Result;

use crate::{CATALOG, CliTest};

#[test]
fn dita_writes_one_topic_per_message() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args(["-m", "dita", "-i", "catalog.xml", "-b", "out"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let topic = test.read_file("out/CWLNA0007.dita")?;
    assert!(topic.contains("<msgText>Hello \"world\"</msgText>"));
    assert!(topic.contains("<searchtitle>0007</searchtitle>"));
    assert!(topic.contains("<msgNumber>CWLNA0007</msgNumber>"));
    // No category, no msgOther block.
    assert!(!topic.contains("<msgOther>"));

    let topic = test.read_file("out/CWLNA0050.dita")?;
    // Escaped markup characters in the catalog stay escaped in DITA.
    assert!(topic.contains("<msgText>Connection limit is &gt; expected.</msgText>"));
    assert!(topic.contains("<msgExplanation>Check the \"limits\" section.</msgExplanation>"));
    assert!(topic.contains("<msgUserResponse>Reduce connections.</msgUserResponse>"));
    assert!(topic.contains("<msgOther>Server</msgOther>"));
    Ok(())
}

#[test]
fn toc_orders_topics_by_message_number() -> Result<()> {
    // Catalog order is 0050 then 0007; the TOC must sort numerically.
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args(["-m", "toc", "-i", "catalog.xml", "-b", "out"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let toc = test.read_file("out/toc.xml")?;
    let p7 = toc.find("CWLNA0007").unwrap();
    let p50 = toc.find("CWLNA0050").unwrap();
    assert!(p7 < p50);
    assert!(toc.contains(r#"<topic label="CWLNA0007" href="CWLNA0007.dita"/>"#));
    Ok(())
}

#[test]
fn html_lists_every_message() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    let output = test
        .command()
        .args(["-m", "html", "-i", "catalog.xml", "-o", "messages.html"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let page = test.read_file("messages.html")?;
    assert!(page.contains(r#"<dt id="CWLNA0050">CWLNA0050 (Server)</dt>"#));
    assert!(page.contains(r#"<dt id="CWLNA0007">CWLNA0007</dt>"#));
    assert!(page.contains(r#"<p class="response">Reduce connections.</p>"#));
    Ok(())
}

#[test]
fn malformed_message_is_a_warning_not_a_failure() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.xml",
        r#"<Messages>
  <Message ID="CWLNA0001"><MsgText>Good.</MsgText></Message>
  <Message category="Server"><MsgText>No identifier.</MsgText></Message>
</Messages>"#,
    )?;
    let output = test
        .command()
        .args(["-m", "dita", "-i", "catalog.xml", "-b", "out"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("out/CWLNA0001.dita"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ID"));
    Ok(())
}
