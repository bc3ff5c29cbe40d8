//! HTML extraction helpers.
//!
//! Parsing is done by `scraper` (html5ever underneath), which is tolerant of
//! broken markup, so parsing itself never fails. What can be missing is the
//! element we are looking for.
use crate::errors::FetchError;
use log::debug;
use scraper::{Html, Selector};

/// Text of the first `<title>` element, or `None` when the page has none.
///
/// Text nodes are concatenated as-is, surrounding whitespace included.
pub fn first_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    let title = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>());
    debug!("extracted title: {title:?}");
    title
}

/// Like [`first_title`], but a missing title is an error.
pub fn require_title(html: &str) -> Result<String, FetchError> {
    first_title(html).ok_or(FetchError::ElementNotFound("title"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_first_title() {
        let html = "<html><head><title>All products | Books to Scrape - Sandbox</title></head>\
                    <body><svg><title>icon</title></svg></body></html>";
        assert_eq!(
            first_title(html).as_deref(),
            Some("All products | Books to Scrape - Sandbox")
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let html = "<html><head><title>\n    Shelf\n</title></head></html>";
        assert_eq!(first_title(html).as_deref(), Some("\n    Shelf\n"));
    }

    #[test]
    fn entities_are_decoded() {
        let html = "<title>Fish &amp; Chips</title>";
        assert_eq!(first_title(html).as_deref(), Some("Fish & Chips"));
    }

    #[test]
    fn missing_title_is_an_error() {
        let html = "<html><body><p>no title here</p></body></html>";
        assert!(first_title(html).is_none());
        assert!(matches!(require_title(html), Err(FetchError::ElementNotFound("title"))));
    }

    #[test]
    fn empty_title_is_found_but_empty() {
        assert_eq!(first_title("<title></title>").as_deref(), Some(""));
    }
}
