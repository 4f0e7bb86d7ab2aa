// src/specs/wikipedia.rs
//! Scraping *spec* for encyclopedia articles.
//!
//! Ground truth on an article page:
//! - title: the element with id `firstHeading`
//! - body: every `<p>` inside the element with id `mw-content-text`
//!
//! Paragraph text is joined with a trailing `\n` after each paragraph, so a
//! page with paragraphs "A" and "B" yields `"A\nB\n"`. No caching here.

use crate::core::html;
use crate::error::ExtractError;
use crate::record::ScrapedPage;

pub const TITLE_ID: &str = "firstHeading";
pub const CONTENT_ID: &str = "mw-content-text";

/// Fixed page list, in scrape order. Bihar appears twice and is fetched twice.
pub const URLS: &[&str] = &[
    "https://en.wikipedia.org/wiki/Culture_of_India",
    "https://en.wikipedia.org/wiki/Ministry_of_Culture_(India)",
    "https://en.wikipedia.org/wiki/Uttarakhand",
    "https://en.wikipedia.org/wiki/Kerala",
    "https://en.wikipedia.org/wiki/Tamil_Nadu",
    "https://en.wikipedia.org/wiki/Tourism_in_India_by_state",
    "https://en.wikipedia.org/wiki/Outline_of_ancient_India",
    "https://en.wikipedia.org/wiki/Punjab,_India",
    "https://en.wikipedia.org/wiki/Haryana",
    "https://en.wikipedia.org/wiki/Nagaland",
    "https://en.wikipedia.org/wiki/Hyderabad",
    "https://en.wikipedia.org/wiki/Bihar",
    "https://en.wikipedia.org/wiki/India",
    "https://en.wikipedia.org/wiki/Telangana",
    "https://en.wikipedia.org/wiki/North_India",
    "https://en.wikipedia.org/wiki/Arunachal_Pradesh",
    "https://en.wikipedia.org/wiki/Goa",
    "https://en.wikipedia.org/wiki/Rajasthan",
    "https://en.wikipedia.org/wiki/Jammu_and_Kashmir",
    "https://en.wikipedia.org/wiki/Andaman_and_Nicobar_Islands",
    "https://en.wikipedia.org/wiki/Mizoram",
    "https://en.wikipedia.org/wiki/Meghalaya",
    "https://en.wikipedia.org/wiki/Manipur",
    "https://en.wikipedia.org/wiki/Chandigarh",
    "https://en.wikipedia.org/wiki/Puducherry",
    "https://en.wikipedia.org/wiki/Tripura",
    "https://en.wikipedia.org/wiki/Assam",
    "https://en.wikipedia.org/wiki/West_Bengal",
    "https://en.wikipedia.org/wiki/Odisha",
    "https://en.wikipedia.org/wiki/Jharkhand",
    "https://en.wikipedia.org/wiki/Bihar",
    "https://en.wikipedia.org/wiki/Chhattisgarh",
    "https://en.wikipedia.org/wiki/Madhya_Pradesh",
    "https://en.wikipedia.org/wiki/Uttar_Pradesh",
];

/// Pull title and paragraph text out of one fetched article.
pub fn extract(doc: &str, url: &str) -> Result<ScrapedPage, ExtractError> {
    let root = html::document(doc);
    let title = root
        .by_id(TITLE_ID)
        .ok_or(ExtractError::MissingElement(TITLE_ID))?
        .text();
    let body = root
        .by_id(CONTENT_ID)
        .ok_or(ExtractError::MissingElement(CONTENT_ID))?;

    let mut content = String::new();
    for p in body.find_all("p") {
        content.push_str(&p.text());
        content.push('\n');
    }

    Ok(ScrapedPage { title, content, url: s!(url) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_gives_empty_content() {
        let doc = r#"<h1 id="firstHeading">Goa</h1><div id="mw-content-text"><table></table></div>"#;
        let page = extract(doc, "u").unwrap();
        assert_eq!(page.title, "Goa");
        assert_eq!(page.content, "");
    }

    #[test]
    fn missing_body_is_an_error() {
        let doc = r#"<h1 id="firstHeading">Goa</h1><p>stray</p>"#;
        assert_eq!(extract(doc, "u"), Err(ExtractError::MissingElement(CONTENT_ID)));
    }

    #[test]
    fn list_keeps_duplicate_entry() {
        assert_eq!(URLS.len(), 34);
        let bihar = URLS.iter().filter(|u| u.ends_with("/Bihar")).count();
        assert_eq!(bihar, 2);
    }
}
