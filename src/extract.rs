use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub const SET_LIST_MARKER: &str = "SET LIST";
pub const MUSICIANS_MARKER: &str = "MUSICIANS";

/// The two lists as they read on the page, cleaned but not yet numbered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExtraction {
    pub set_list: Vec<String>,
    pub musicians: Vec<String>,
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector(format!("{css} ({e:?})")))
}

/// Pull the set list and musicians out of the container matched by `container`.
///
/// Each section is the `<ul>` directly after the first `<p>` whose text
/// contains the marker. A missing container, marker or list yields an empty
/// section rather than an error.
pub fn extract(document: &Html, container: &Selector) -> RawExtraction {
    let Some(container) = document.select(container).next() else {
        return RawExtraction::default();
    };

    let paragraph_selector = Selector::parse("p").unwrap();

    RawExtraction {
        set_list: section(container, &paragraph_selector, SET_LIST_MARKER),
        musicians: section(container, &paragraph_selector, MUSICIANS_MARKER),
    }
}

fn section(container: ElementRef, paragraph_selector: &Selector, marker: &str) -> Vec<String> {
    let Some(paragraph) = container
        .select(paragraph_selector)
        .find(|p| text_of(*p).contains(marker))
    else {
        return Vec::new();
    };

    // Only the element right after the marker counts; text nodes are skipped.
    match paragraph.next_siblings().find_map(ElementRef::wrap) {
        Some(list) if list.value().name() == "ul" => list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|item| item.value().name() == "li")
            .map(|item| clean_item(&text_of(item)))
            .collect(),
        _ => {
            warn!("Found {marker} but it is not followed by a list");
            Vec::new()
        }
    }
}

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

/// Trim, drop one leading and one trailing quote (`"` or `'`), trim again.
///
/// The two ends are handled independently, so `"Song'` loses both quotes
/// and `""Song""` keeps one on each side.
pub fn clean_item(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    let text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    text.trim().to_string()
}
