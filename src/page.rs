use std::collections::HashMap;

use log::debug;
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::extract::parse_selector;
use crate::settings::Settings;

/// A loaded document and the URL it came from.
pub struct Page {
    pub url: String,
    pub document: Html,
}

impl Page {
    pub fn parse(url: &str, html: &str) -> Self {
        Self { url: url.to_string(), document: Html::parse_document(html) }
    }

    /// Text of the `<title>` element with whitespace runs collapsed to one
    /// space, or an empty string without one.
    pub fn title(&self) -> String {
        let title_selector = Selector::parse("title").unwrap();
        self.document
            .select(&title_selector)
            .next()
            .map(|title| {
                let text: String = title.text().collect();
                text.split_whitespace().collect::<Vec<_>>().join(" ")
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.document.select(selector).next().is_some()
    }
}

/// Something that can load pages for a run.
///
/// The run owns the source and calls [`PageSource::close`] exactly once when
/// it ends, whether or not it succeeded.
#[allow(async_fn_in_trait)]
pub trait PageSource: Sized {
    async fn navigate(&mut self, url: &str) -> Result<Page>;

    /// Resolves once `selector` is present in the page.
    ///
    /// A fully loaded document either has the element or never will, so the
    /// default fails straight away. The caller bounds the wait with its own
    /// timeout.
    async fn wait_for_selector(&mut self, page: &Page, selector: &str) -> Result<()> {
        if page.contains(&parse_selector(selector)?) {
            Ok(())
        } else {
            Err(ScrapeError::SelectorNotFound(selector.to_string()))
        }
    }

    async fn close(self) {}
}

/// Fetches pages over HTTP and parses the returned HTML.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn navigate(&mut self, url: &str) -> Result<Page> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("{} responded with {}", url, response.status());

        let body = response.text().await?;
        debug!("Read {} bytes from {}", body.len(), url);

        Ok(Page::parse(url, &body))
    }

    async fn close(self) {
        debug!("Closing HTTP client");
    }
}

/// Serves HTML held in memory, keyed by URL.
#[derive(Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl PageSource for StaticSource {
    async fn navigate(&mut self, url: &str) -> Result<Page> {
        self.pages
            .get(url)
            .map(|html| Page::parse(url, html))
            .ok_or_else(|| ScrapeError::UnknownPage(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/concert";

    #[test]
    fn title_is_trimmed_text() {
        let page = Page::parse(URL, "<html><head><title>\n  The Band: Tiny Desk \n</title></head></html>");
        assert_eq!(page.title(), "The Band: Tiny Desk");
    }

    #[test]
    fn title_spanning_lines_is_collapsed() {
        let page = Page::parse(URL, "<title>Pearl\n   Jam: Tiny  Desk</title>");
        assert_eq!(page.title(), "Pearl Jam: Tiny Desk");
    }

    #[test]
    fn missing_title_is_empty() {
        let page = Page::parse(URL, "<html><body><p>hi</p></body></html>");
        assert_eq!(page.title(), "");
    }

    #[tokio::test]
    async fn static_source_serves_known_pages() {
        let mut source = StaticSource::new().with_page(URL, "<div id=\"storytext\"></div>");
        let page = source.navigate(URL).await.unwrap();

        assert_eq!(page.url, URL);
        source.wait_for_selector(&page, "#storytext").await.unwrap();
    }

    #[tokio::test]
    async fn static_source_rejects_unknown_pages() {
        let mut source = StaticSource::new();
        assert!(matches!(source.navigate(URL).await, Err(ScrapeError::UnknownPage(_))));
    }

    #[tokio::test]
    async fn absent_selector_fails_wait() {
        let mut source = StaticSource::new().with_page(URL, "<p>no container</p>");
        let page = source.navigate(URL).await.unwrap();

        let result = source.wait_for_selector(&page, "#storytext").await;
        assert!(matches!(result, Err(ScrapeError::SelectorNotFound(s)) if s == "#storytext"));
    }
}
