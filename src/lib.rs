pub mod browser;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipelines;
pub mod search;
pub mod sheet;

pub use browser::{ChromeSession, PageRenderer};
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use model::{Recipe, RecipeDetails, SearchRecord};
pub use pipelines::{PageOutcome, RunSummary, Scraper, SkipReason};

/// Launch headless Chrome and scrape every listed page into `config.output`.
pub async fn scrape_recipes(config: ScraperConfig) -> Result<RunSummary, ScrapeError> {
    let session = ChromeSession::launch(&config.browser).await?;
    let scraper = Scraper::new(config, session)?;
    scraper.run().await
}
