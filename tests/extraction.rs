// tests/extraction.rs
use crm_synth::error::ExtractError;
use crm_synth::record::{ PAGE_HEADERS, ScrapedPage, Tabular };
use crm_synth::specs::wikipedia::{ CONTENT_ID, TITLE_ID, extract };

const URL: &str = "https://en.wikipedia.org/wiki/X";

#[test]
fn minimal_article() {
    let doc = r#"<h1 id="firstHeading">X</h1><div id="mw-content-text"><p>A</p><p>B</p></div>"#;
    let page = extract(doc, URL).unwrap();
    assert_eq!(
        page,
        ScrapedPage { title: "X".into(), content: "A\nB\n".into(), url: URL.into() }
    );
    assert_eq!(page.to_row(), vec!["X", "A\nB\n", URL]);
    assert_eq!(PAGE_HEADERS, ["title", "content", "url"]);
}

#[test]
fn article_shaped_page() {
    let doc = r#"<!DOCTYPE html>
<html lang="en"><head><title>Kerala - Wikipedia</title>
<script>document.write("<p>not content</p>")</script></head>
<body>
<h1 id="firstHeading" class="firstHeading mw-first-heading"><span class="mw-page-title-main">Kerala</span></h1>
<div id="bodyContent">
<div id="mw-content-text" class="mw-body-content"><div class="mw-parser-output">
<table class="infobox"><tr><td>Capital</td><td>Thiruvananthapuram</td></tr></table>
<p><b>Kerala</b> is a state on the <a href="/wiki/Malabar_Coast">Malabar Coast</a> of India.<sup>[1]</sup></p>
<p class="mw-empty-elt"></p>
<p>Tea &amp; spices.</p>
</div></div></div>
<div id="footer"><p>Text is available under a licence.</p></div>
</body></html>"#;
    let page = extract(doc, URL).unwrap();
    assert_eq!(page.title, "Kerala");
    assert_eq!(
        page.content,
        "Kerala is a state on the Malabar Coast of India.[1]\n\nTea & spices.\n"
    );
    assert!(!page.content.contains("licence"));
    assert!(!page.content.contains("not content"));
}

#[test]
fn missing_heading_is_an_error() {
    let doc = r#"<div id="mw-content-text"><p>A</p></div>"#;
    assert_eq!(extract(doc, URL), Err(ExtractError::MissingElement(TITLE_ID)));
}

#[test]
fn missing_content_is_an_error() {
    let doc = r#"<h1 id="firstHeading">X</h1>"#;
    assert_eq!(extract(doc, URL), Err(ExtractError::MissingElement(CONTENT_ID)));
}
