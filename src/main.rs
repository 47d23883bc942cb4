use log::info;
use recipe_scrape::{scrape_recipes, ScraperConfig};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ScraperConfig::load()?;

    // Optional output path as the only argument
    if let Some(output) = env::args().nth(1) {
        config.output = PathBuf::from(output);
    }

    let summary = scrape_recipes(config).await?;
    info!(
        "Scraped {} recipes from {} of {} pages",
        summary.rows, summary.completed, summary.pages
    );

    Ok(())
}
