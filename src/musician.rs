use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianEntry {
    pub musician_number: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

impl MusicianEntry {
    /// Parse a `Name: Instrument` line.
    ///
    /// Only a line with exactly one colon is split. Lines with none, or with
    /// several, keep the whole text as the name and carry no instrument.
    pub fn parse(musician_number: usize, line: &str) -> Self {
        let parts: Vec<&str> = line.split(':').collect();

        match parts.as_slice() {
            [name, instrument] => Self {
                musician_number,
                name: name.trim().to_string(),
                instrument: Some(instrument.trim().to_string()),
            },
            _ => Self {
                musician_number,
                name: line.trim().to_string(),
                instrument: None,
            },
        }
    }
}
