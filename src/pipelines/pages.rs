use crate::error::{Result, ScrapeError};

/// Read the total from the search header, e.g. `"1,234 Recipes"` → 1234.
pub fn parse_total_count(text: &str) -> Result<u64> {
    let first = text
        .split_whitespace()
        .next()
        .ok_or_else(|| ScrapeError::CountParse(text.to_string()))?;

    first
        .replace(',', "")
        .parse()
        .map_err(|_| ScrapeError::CountParse(text.to_string()))
}

/// Number of full pages the API serves for `total` results.
///
/// Integer division: a trailing partial page is not visited.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total / u64::from(page_size)).unwrap_or(u32::MAX)
}
