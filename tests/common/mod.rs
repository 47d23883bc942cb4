use async_trait::async_trait;
use recipe_scrape::error::Result;
use recipe_scrape::{PageRenderer, ScrapeError, ScraperConfig};
use std::path::Path;

pub const DETAIL_PAGE: &str = include_str!("../fixtures/detail_page.html");
pub const API_PATH: &str = "/external/v1/nlp/search";

/// In-memory stand-in for Chrome: serves the same detail page for every URL.
pub struct ScriptedRenderer {
    pub count_text: String,
    pub detail_html: String,
    pub visited: Vec<String>,
    pub shut_down: bool,
}

impl ScriptedRenderer {
    pub fn new(count_text: &str) -> Self {
        Self {
            count_text: count_text.to_string(),
            detail_html: DETAIL_PAGE.to_string(),
            visited: Vec::new(),
            shut_down: false,
        }
    }

    /// A detail page without the nutrition control
    pub fn without_nutrition_control(mut self) -> Self {
        self.detail_html = self.detail_html.replace("facts__nutrition", "facts__other");
        self
    }
}

#[async_trait]
impl PageRenderer for ScriptedRenderer {
    async fn read_text(&mut self, _url: &str, _selector: &str) -> Result<String> {
        Ok(self.count_text.clone())
    }

    async fn render_detail(&mut self, url: &str, reveal_selector: &str) -> Result<String> {
        self.visited.push(url.to_string());
        if reveal_selector == "button.link.facts__nutrition"
            && !self.detail_html.contains("facts__nutrition")
        {
            return Err(ScrapeError::ElementNotFound {
                selector: reveal_selector.to_string(),
                url: url.to_string(),
            });
        }
        Ok(self.detail_html.clone())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.shut_down = true;
        Ok(())
    }
}

pub fn config_for(server: &mockito::Server, output: &Path) -> ScraperConfig {
    ScraperConfig {
        api_url: format!("{}{}", server.url(), API_PATH),
        output: output.to_path_buf(),
        timeout: 5,
        ..Default::default()
    }
}

pub fn data_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}
