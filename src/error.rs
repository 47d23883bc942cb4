use thiserror::Error;

/// Errors that can occur while scraping recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Search API request failed at the transport level
    #[error("Failed to reach search API: {0}")]
    Http(#[from] reqwest::Error),

    /// Search API answered with a non-success status
    #[error("Search API returned status {0}")]
    Status(reqwest::StatusCode),

    /// Search API body was not the expected JSON envelope
    #[error("Response content is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Browser could not be configured or started
    #[error("Failed to launch browser: {0}")]
    BrowserLaunch(String),

    /// Browser automation failed
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// A page element the run depends on was missing
    #[error("Element '{selector}' not found on {url}")]
    ElementNotFound { selector: String, url: String },

    /// The total recipe count text could not be read as a number
    #[error("Could not parse recipe count from '{0}'")]
    CountParse(String),

    /// Failed to write a spreadsheet row
    #[error("Spreadsheet error: {0}")]
    Csv(#[from] csv::Error),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScrapeError {
    /// Whether this error only costs the current results page rather than the run
    pub fn is_page_skippable(&self) -> bool {
        matches!(
            self,
            ScrapeError::Http(_) | ScrapeError::Status(_) | ScrapeError::InvalidJson(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
