use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Failures that end a run. A page missing its set list or musicians is
/// not one of them.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timed out after {timeout:?} waiting for {selector}")]
    Timeout { selector: String, timeout: Duration },

    #[error("Page has no element matching {0}")]
    SelectorNotFound(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("No page loaded for {0}")]
    UnknownPage(String),

    #[error("Failed to serialize concert info: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
