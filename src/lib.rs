pub mod artist;
pub mod error;
pub mod extract;
pub mod musician;
pub mod output_record;
pub mod page;
pub mod run;
pub mod settings;
pub mod song;

pub use error::{Result, ScrapeError};
pub use output_record::ConcertRecord;
