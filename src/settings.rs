use std::path::PathBuf;
use std::time::Duration;

pub const CONTAINER_SELECTOR: &str = "#storytext";
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const OUTPUT_SUFFIX: &str = "_info.json";
pub const USER_AGENT: &str = concat!("tiny-desk-scrape/", env!("CARGO_PKG_VERSION"));

/// Knobs for a single run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Element holding the story paragraphs and lists
    pub container_selector: String,
    /// Upper bound on finding the container once the page is loaded
    pub wait_timeout: Duration,
    /// Upper bound on the HTTP request, body included
    pub request_timeout: Duration,
    pub output_dir: PathBuf,
    pub output_suffix: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            container_selector: CONTAINER_SELECTOR.to_string(),
            wait_timeout: WAIT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            output_dir: PathBuf::from("."),
            output_suffix: OUTPUT_SUFFIX.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
