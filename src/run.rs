use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::artist::{artist_from_title, output_file_name};
use crate::error::{Result, ScrapeError};
use crate::extract::{extract, parse_selector, RawExtraction};
use crate::output_record::ConcertRecord;
use crate::page::{Page, PageSource};
use crate::settings::Settings;

/// Scrape `url` and write its concert record, returning the written path.
///
/// The source is closed before returning on every path. Nothing is written
/// unless the page loaded and the record was built.
pub async fn scrape<S: PageSource>(mut source: S, url: &str, settings: &Settings) -> Result<PathBuf> {
    let outcome = scrape_page(&mut source, url, settings).await;
    source.close().await;
    outcome
}

async fn scrape_page<S: PageSource>(source: &mut S, url: &str, settings: &Settings) -> Result<PathBuf> {
    let container = parse_selector(&settings.container_selector)?;

    info!("Navigating to {}...", url);
    let page = load(source, url, settings).await?;

    let artist = artist_from_title(&page.title());
    info!("Artist: {}", artist);

    let raw = extract(&page.document, &container);
    log_summary(&raw);

    let record = ConcertRecord::build(&artist, url, &raw);
    let path = write_record(&record, &settings.output_dir, &settings.output_suffix)?;
    info!("Information saved to {}", path.display());

    Ok(path)
}

/// Navigate, then wait up to `settings.wait_timeout` for the container.
async fn load<S: PageSource>(source: &mut S, url: &str, settings: &Settings) -> Result<Page> {
    let selector = settings.container_selector.as_str();
    let page = source.navigate(url).await?;

    tokio::time::timeout(settings.wait_timeout, source.wait_for_selector(&page, selector))
        .await
        .map_err(|_| ScrapeError::Timeout {
            selector: selector.to_string(),
            timeout: settings.wait_timeout,
        })??;

    Ok(page)
}

fn log_summary(raw: &RawExtraction) {
    if raw.set_list.is_empty() {
        info!("No set list found");
    } else {
        info!("Set list:");
        for (index, song) in raw.set_list.iter().enumerate() {
            info!("{}. {}", index + 1, song);
        }
    }

    if raw.musicians.is_empty() {
        info!("No musicians list found");
    } else {
        info!("Musicians:");
        for (index, musician) in raw.musicians.iter().enumerate() {
            info!("{}. {}", index + 1, musician);
        }
    }
}

/// Write the record as pretty JSON into `dir`.
///
/// The JSON goes to a `.tmp` sibling first and is renamed into place.
pub fn write_record(record: &ConcertRecord, dir: &Path, suffix: &str) -> Result<PathBuf> {
    let json = record.to_json()?;
    let path = dir.join(output_file_name(&record.artist, suffix));

    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lands_under_sanitized_name() {
        let dir = tempfile::tempdir().unwrap();
        let record = ConcertRecord::build("Pearl Jam", "https://example.com", &RawExtraction::default());

        let path = write_record(&record, dir.path(), "_info.json").unwrap();

        assert_eq!(path, dir.path().join("pearl_jam_info.json"));
        let written: ConcertRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, record);
        assert!(!dir.path().join("pearl_jam_info.json.tmp").exists());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let record = ConcertRecord::build("X", "u", &RawExtraction::default());

        let result = write_record(&record, &dir.path().join("missing"), "_info.json");
        assert!(matches!(result, Err(ScrapeError::Io(_))));
    }
}
