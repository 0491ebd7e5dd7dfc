use serde::{Deserialize, Serialize};

/// One song of the set list, numbered from 1 in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetListEntry {
    pub song_number: usize,
    pub title: String,
}

impl SetListEntry {
    pub fn new(song_number: usize, title: &str) -> Self {
        Self { song_number, title: title.trim().to_string() }
    }
}
