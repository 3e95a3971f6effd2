//! HTML extraction: title, abstract container and main text from a landing page.
//!
//! Sections are never populated for HTML sources.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::record::{PaperRecord, Sections, UNKNOWN_TITLE};

const ABSTRACT_CLASS_MARKER: &str = "abstract";

/// Compiles a CSS selector at static init; panics on invalid pattern.
fn compile_static_selector(pattern: &str) -> Selector {
    Selector::parse(pattern).unwrap_or_else(|e| panic!("invalid static selector '{pattern}': {e:?}"))
}

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("h1, h2"));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("title"));
static ARTICLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("article"));
static CONTENT_ID_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("#content"));
static CONTENT_CLASS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(".content"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("p"));
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("body"));

/// Abstract containers, searched in priority order.
static ABSTRACT_CONTAINER_SELECTORS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        compile_static_selector("div[class]"),
        compile_static_selector("section[class]"),
        compile_static_selector("p[class]"),
    ]
});

/// Builds a record from an HTML document.
#[must_use]
pub fn parse_html(html: &str, source_url: &str) -> PaperRecord {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let abstract_text = extract_abstract(&document);
    let full_text = extract_main_text(&document);
    debug!(
        title = %title,
        abstract_len = abstract_text.len(),
        text_len = full_text.len(),
        "parsed HTML document"
    );

    PaperRecord {
        title,
        abstract_text,
        sections: Sections::new(),
        full_text,
        source_url: source_url.to_string(),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn extract_title(document: &Html) -> String {
    let heading = document
        .select(&HEADING_SELECTOR)
        .map(|el| element_text(el).trim().to_string())
        .find(|text| !text.is_empty());
    if let Some(title) = heading {
        return title;
    }

    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

fn has_abstract_class(element: ElementRef<'_>) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| class.to_lowercase().contains(ABSTRACT_CLASS_MARKER))
}

fn extract_abstract(document: &Html) -> String {
    ABSTRACT_CONTAINER_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).find(|el| has_abstract_class(*el)))
        .map(|el| element_text(el).trim().to_string())
        .unwrap_or_default()
}

fn extract_main_text(document: &Html) -> String {
    for selector in [&*ARTICLE_SELECTOR, &*CONTENT_ID_SELECTOR, &*CONTENT_CLASS_SELECTOR] {
        if let Some(element) = document.select(selector).next() {
            return element_text(element);
        }
    }

    let paragraphs = document
        .select(&PARAGRAPH_SELECTOR)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ");
    if !paragraphs.trim().is_empty() {
        return paragraphs;
    }

    // Bare pages with neither containers nor paragraphs still carry body text
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/paper";

    #[test]
    fn test_parse_minimal_paper_page() {
        let html = "<html><head><title>Test Paper</title></head><body><h1>Test Paper</h1>\
                    <div class='abstract'>This is an abstract.</div></body></html>";
        let record = parse_html(html, URL);
        assert_eq!(record.title, "Test Paper");
        assert_eq!(record.abstract_text, "This is an abstract.");
        assert!(record.sections.is_empty());
        assert!(!record.full_text.trim().is_empty());
        assert_eq!(record.source_url, URL);
    }

    #[test]
    fn test_title_first_non_empty_heading_in_document_order() {
        let html = "<body><h2>  </h2><h2>Second Level</h2><h1>First Level</h1></body>";
        assert_eq!(parse_html(html, URL).title, "Second Level");
    }

    #[test]
    fn test_title_falls_back_to_title_element() {
        let html = "<html><head><title> Page Title </title></head><body><p>x</p></body></html>";
        assert_eq!(parse_html(html, URL).title, "Page Title");
    }

    #[test]
    fn test_title_sentinel() {
        assert_eq!(parse_html("<body><p>x</p></body>", URL).title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_abstract_prefers_div_over_earlier_section() {
        let html = "<body><section class='abstract'>from section</section>\
                    <div class='c-Abstract__body'>from div</div></body>";
        assert_eq!(parse_html(html, URL).abstract_text, "from div");
    }

    #[test]
    fn test_abstract_section_then_paragraph() {
        let html = "<body><p class='ABSTRACT'>from p</p><section class='x abstract'>from section</section></body>";
        assert_eq!(parse_html(html, URL).abstract_text, "from section");

        let html = "<body><p class='abstract-text'> from p </p></body>";
        assert_eq!(parse_html(html, URL).abstract_text, "from p");
    }

    #[test]
    fn test_abstract_empty_when_missing() {
        let html = "<body><div class='summary'>nope</div></body>";
        assert!(parse_html(html, URL).abstract_text.is_empty());
    }

    #[test]
    fn test_full_text_prefers_article() {
        let html = "<body><div id='content'>content div</div><article>article body</article></body>";
        assert_eq!(parse_html(html, URL).full_text, "article body");
    }

    #[test]
    fn test_full_text_content_id_then_class() {
        let html = "<body><div class='content'>by class</div><div id='content'>by id</div></body>";
        assert_eq!(parse_html(html, URL).full_text, "by id");

        let html = "<body><p>para</p><div class='main content'>by class</div></body>";
        assert_eq!(parse_html(html, URL).full_text, "by class");
    }

    #[test]
    fn test_full_text_joins_paragraphs() {
        let html = "<body><p>one</p><div><p>two</p></div></body>";
        assert_eq!(parse_html(html, URL).full_text, "one two");
    }
}
