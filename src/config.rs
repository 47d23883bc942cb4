use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main scraper configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Search page loaded once to read the total recipe count
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Paginated search API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Output spreadsheet path
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Number of records the API returns per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Optional cap on the number of pages visited
    #[serde(default)]
    pub max_pages: Option<u32>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Element holding the "1,234 Recipes" text on the search page
    #[serde(default = "default_count_selector")]
    pub count_selector: String,
    /// Control that reveals the nutrition modal on a detail page
    #[serde(default = "default_nutrition_selector")]
    pub nutrition_selector: String,
    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserSettings,
}

/// Configuration for the headless browser session
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserSettings {
    /// Run Chrome without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,
    /// Explicit Chrome/Chromium binary; auto-detected when unset
    #[serde(default)]
    pub executable: Option<PathBuf>,
    /// Pass --no-sandbox (needed in most containers)
    #[serde(default)]
    pub no_sandbox: bool,
    /// Pause after clicking the nutrition control so the modal can render
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            executable: None,
            no_sandbox: false,
            settle_ms: default_settle_ms(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            api_url: default_api_url(),
            output: default_output(),
            page_size: default_page_size(),
            max_pages: None,
            timeout: default_timeout(),
            count_selector: default_count_selector(),
            nutrition_selector: default_nutrition_selector(),
            browser: BrowserSettings::default(),
        }
    }
}

// Default value functions
fn default_search_url() -> String {
    "https://www.food.com/search/".to_string()
}

fn default_api_url() -> String {
    "https://api.food.com/external/v1/nlp/search".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("recipes.csv")
}

fn default_page_size() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_count_selector() -> String {
    "#searchModuleTitle".to_string()
}

fn default_nutrition_selector() -> String {
    "button.link.facts__nutrition".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_settle_ms() -> u64 {
    500
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPE__ prefix
    /// 2. scraper.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPE__BROWSER__HEADLESS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for the source priority.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("scraper").required(false))
        // Use double underscore for nested: RECIPE_SCRAPE__BROWSER__SETTLE_MS
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
