mod chrome;

pub use chrome::ChromeSession;

use crate::error::Result;
use async_trait::async_trait;
use log::warn;

/// A browser session that can render pages for the scraper.
///
/// The session owns one long-lived tab for the search page; detail pages are
/// rendered in short-lived tabs that are closed before the call returns.
#[async_trait]
pub trait PageRenderer: Send {
    /// Load `url` in the main tab and return the text of the first element
    /// matching `selector`.
    async fn read_text(&mut self, url: &str, selector: &str) -> Result<String>;

    /// Open `url` in a new tab, click `reveal_selector`, and return the
    /// rendered HTML. A missing control is an error.
    async fn render_detail(&mut self, url: &str, reveal_selector: &str) -> Result<String>;

    /// Close the session.
    async fn shutdown(&mut self) -> Result<()>;
}

/// Tab operations behind [`render_in_new_tab`].
#[async_trait]
pub trait TabHost: Send + Sync {
    type Tab: Send + Sync;

    async fn open_tab(&self) -> Result<Self::Tab>;

    /// Navigate `tab` to `url`, click `reveal_selector`, return the HTML.
    async fn load_and_reveal(
        &self,
        tab: &Self::Tab,
        url: &str,
        reveal_selector: &str,
    ) -> Result<String>;

    async fn close_tab(&self, tab: Self::Tab) -> Result<()>;
}

/// Render `url` in a fresh tab. The tab is closed whether or not rendering
/// worked; a rendering error is still returned.
pub async fn render_in_new_tab<H: TabHost>(
    host: &H,
    url: &str,
    reveal_selector: &str,
) -> Result<String> {
    let tab = host.open_tab().await?;
    let rendered = host.load_and_reveal(&tab, url, reveal_selector).await;

    if let Err(e) = host.close_tab(tab).await {
        warn!("Failed to close tab for {}: {}", url, e);
    }
    rendered
}
