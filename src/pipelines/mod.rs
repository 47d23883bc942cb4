pub mod pages;
mod scrape;

pub use pages::{page_count, parse_total_count};
pub use scrape::Scraper;

use crate::error::ScrapeError;

/// What happened to one results page
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The page was fetched and `rows` recipes were written
    Completed { rows: usize },
    /// The API call failed; nothing from this page was written
    Skipped(SkipReason),
}

/// Why a results page was skipped
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Transport(String),
    Status(u16),
    InvalidJson(String),
}

impl SkipReason {
    /// The skip reason for errors that only cost one page, `None` otherwise.
    pub fn from_error(error: &ScrapeError) -> Option<Self> {
        match error {
            ScrapeError::Http(e) => Some(SkipReason::Transport(e.to_string())),
            ScrapeError::Status(status) => Some(SkipReason::Status(status.as_u16())),
            ScrapeError::InvalidJson(e) => Some(SkipReason::InvalidJson(e.to_string())),
            _ => None,
        }
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub pages: u32,
    pub completed: u32,
    pub skipped: u32,
    pub rows: usize,
}
