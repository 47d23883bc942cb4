use super::{render_in_new_tab, PageRenderer, TabHost};
use crate::config::BrowserSettings;
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Handler, Page};
use futures::StreamExt;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::task::JoinHandle;

/// One Chrome process driven over the DevTools protocol.
pub struct ChromeSession {
    browser: Browser,
    home: Page,
    handler_task: JoinHandle<()>,
    settle: Duration,
}

impl ChromeSession {
    pub async fn launch(settings: &BrowserSettings) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !settings.headless {
            builder = builder.with_head();
        }
        if settings.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(executable) = &settings.executable {
            builder = builder.chrome_executable(executable);
        }
        let config = builder.build().map_err(ScrapeError::BrowserLaunch)?;

        info!("Launching Chrome (headless: {})", settings.headless);
        let (browser, handler) = Browser::launch(config).await?;
        let handler_task = spawn_handler_task(handler);
        let home = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            home,
            handler_task,
            settle: Duration::from_millis(settings.settle_ms),
        })
    }
}

#[async_trait]
impl TabHost for ChromeSession {
    type Tab = Page;

    async fn open_tab(&self) -> Result<Page> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    async fn load_and_reveal(&self, page: &Page, url: &str, reveal_selector: &str) -> Result<String> {
        page.goto(url).await?;

        let control = page
            .find_element(reveal_selector)
            .await
            .map_err(|_| ScrapeError::ElementNotFound {
                selector: reveal_selector.to_string(),
                url: url.to_string(),
            })?;
        control.click().await?;

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        Ok(page.content().await?)
    }

    async fn close_tab(&self, page: Page) -> Result<()> {
        Ok(page.close().await?)
    }
}

#[async_trait]
impl PageRenderer for ChromeSession {
    async fn read_text(&mut self, url: &str, selector: &str) -> Result<String> {
        debug!("Loading {} in main tab", url);
        self.home.goto(url).await?;

        let element = self
            .home
            .find_element(selector)
            .await
            .map_err(|_| ScrapeError::ElementNotFound {
                selector: selector.to_string(),
                url: url.to_string(),
            })?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    async fn render_detail(&mut self, url: &str, reveal_selector: &str) -> Result<String> {
        debug!("Opening {} in new tab", url);
        render_in_new_tab(&*self, url, reveal_selector).await
    }

    async fn shutdown(&mut self) -> Result<()> {
        info!("Closing browser session");
        self.browser.close().await?;
        self.browser.wait().await?;
        self.handler_task.abort();
        Ok(())
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

fn spawn_handler_task(mut handler: Handler) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                warn!("chromiumoxide handler event error: {}", e);
            }
        }
    })
}
