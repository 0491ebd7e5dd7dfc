use serde::{Deserialize, Serialize};

use crate::extract::RawExtraction;
use crate::musician::MusicianEntry;
use crate::song::SetListEntry;

/// Everything written to `<artist>_info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertRecord {
    pub artist: String,
    pub source: String,
    pub set_list: Vec<SetListEntry>,
    pub musicians: Vec<MusicianEntry>,
}

impl ConcertRecord {
    /// Number both lists by their position in the page, starting at 1.
    pub fn build(artist: &str, source: &str, raw: &RawExtraction) -> Self {
        let set_list = raw
            .set_list
            .iter()
            .enumerate()
            .map(|(index, title)| SetListEntry::new(index + 1, title))
            .collect();

        let musicians = raw
            .musicians
            .iter()
            .enumerate()
            .map(|(index, line)| MusicianEntry::parse(index + 1, line))
            .collect();

        Self {
            artist: artist.trim().to_string(),
            source: source.trim().to_string(),
            set_list,
            musicians,
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
