use super::pages::{page_count, parse_total_count};
use super::{PageOutcome, RunSummary, SkipReason};
use crate::browser::PageRenderer;
use crate::config::ScraperConfig;
use crate::error::Result;
use crate::extractors::DetailExtractor;
use crate::model::Recipe;
use crate::search::SearchClient;
use crate::sheet::SpreadsheetWriter;
use log::{debug, info, warn};

/// Drives one scraping run: count pages, walk the API page by page, render
/// each record's detail page and append it to the spreadsheet.
pub struct Scraper<R: PageRenderer> {
    config: ScraperConfig,
    client: SearchClient,
    renderer: R,
    writer: SpreadsheetWriter,
    extractor: DetailExtractor,
}

impl<R: PageRenderer> Scraper<R> {
    pub fn new(config: ScraperConfig, renderer: R) -> Result<Self> {
        let client = SearchClient::from_config(&config)?;
        let writer = SpreadsheetWriter::open(&config.output)?;

        Ok(Self {
            config,
            client,
            renderer,
            writer,
            extractor: DetailExtractor::new(),
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn writer(&self) -> &SpreadsheetWriter {
        &self.writer
    }

    /// Read the result count from the search page and turn it into pages to visit.
    pub async fn total_pages(&mut self) -> Result<u32> {
        let text = self
            .renderer
            .read_text(&self.config.search_url, &self.config.count_selector)
            .await?;
        let total = parse_total_count(&text)?;
        let pages = page_count(total, self.config.page_size);
        info!("{} recipes listed, {} pages", total, pages);

        Ok(match self.config.max_pages {
            Some(cap) if cap < pages => {
                info!("Limiting run to {} pages", cap);
                cap
            }
            _ => pages,
        })
    }

    /// Fetch one results page and write a row for every record that links to
    /// a detail page.
    ///
    /// API failures skip the page; browser and file errors are returned.
    pub async fn scrape_page(&mut self, page: u32) -> Result<PageOutcome> {
        let records = match self.client.fetch_page(page).await {
            Ok(records) => records,
            Err(e) => match SkipReason::from_error(&e) {
                Some(reason) => {
                    warn!("Skipping page {}: {}", page, e);
                    return Ok(PageOutcome::Skipped(reason));
                }
                None => return Err(e),
            },
        };

        let mut rows = 0;
        for record in &records {
            let Some(url) = record.url() else {
                debug!("Record without usable record_url on page {}", page);
                continue;
            };

            let html = self
                .renderer
                .render_detail(url, &self.config.nutrition_selector)
                .await?;
            let details = self.extractor.parse_html(url, &html);
            let recipe = Recipe::from_parts(record, url, details);

            self.writer.append(&recipe)?;
            rows += 1;
        }

        info!("Page {}: {} rows written", page, rows);
        Ok(PageOutcome::Completed { rows })
    }

    /// Run every page, then close the browser session.
    pub async fn run(mut self) -> Result<RunSummary> {
        let result = self.run_pages().await;

        if let Err(e) = self.renderer.shutdown().await {
            warn!("Browser shutdown failed: {}", e);
        }
        result
    }

    async fn run_pages(&mut self) -> Result<RunSummary> {
        let pages = self.total_pages().await?;
        let mut summary = RunSummary {
            pages,
            ..Default::default()
        };

        for page in 1..=pages {
            match self.scrape_page(page).await? {
                PageOutcome::Completed { rows } => {
                    summary.completed += 1;
                    summary.rows += rows;
                }
                PageOutcome::Skipped(_) => summary.skipped += 1,
            }
        }

        info!(
            "Finished: {} pages ({} skipped), {} rows written to {}",
            summary.pages,
            summary.skipped,
            summary.rows,
            self.writer.path().display()
        );
        Ok(summary)
    }
}
