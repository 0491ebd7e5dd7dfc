use std::env;
use std::process::ExitCode;

use log::error;

use tiny_desk_scrape::page::HttpSource;
use tiny_desk_scrape::run;
use tiny_desk_scrape::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger, RUST_LOG overrides the default level
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter(None, log::LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let Some(url) = get_arg(1) else {
        eprintln!("Please provide a URL as an argument");
        eprintln!("Usage: tiny-desk-scrape <URL>");
        return ExitCode::from(2);
    };

    let settings = Settings::default();

    let result = match HttpSource::new(&settings) {
        Ok(source) => run::scrape(source, url.trim(), &settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Get the nth command line argument
fn get_arg(index: usize) -> Option<String> {
    env::args().nth(index).filter(|arg| !arg.trim().is_empty())
}
