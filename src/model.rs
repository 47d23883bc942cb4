use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label → text pairs in page order
pub type FieldMap = IndexMap<String, String>;

/// Fields pulled out of a rendered detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub facts: FieldMap,
    pub directions: Vec<String>,
    pub ingredients: Vec<String>,
    pub nutrition: FieldMap,
}

/// One entry of the search API's result list.
///
/// Fields are kept as raw JSON so one oddly typed value only affects its own
/// cell (or, for `record_url`, its own record) instead of the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRecord {
    #[serde(default)]
    pub record_url: Option<Value>,
    #[serde(default)]
    pub main_title: Option<Value>,
    #[serde(default)]
    pub main_description: Option<Value>,
    #[serde(default)]
    pub main_rating: Option<Value>,
    #[serde(default)]
    pub primary_category_name: Option<Value>,
}

impl SearchRecord {
    /// The detail page link; anything but a non-empty string has none.
    pub fn url(&self) -> Option<&str> {
        match &self.record_url {
            Some(Value::String(url)) if !url.is_empty() => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<String> {
        self.main_title.as_ref().and_then(scalar_text)
    }

    pub fn description(&self) -> Option<String> {
        self.main_description.as_ref().and_then(scalar_text)
    }

    pub fn rating(&self) -> Option<String> {
        self.main_rating.as_ref().and_then(scalar_text)
    }

    pub fn category(&self) -> Option<String> {
        self.primary_category_name.as_ref().and_then(scalar_text)
    }
}

/// `{"response": {"results": [...]}}`
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub response: SearchResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchRecord>,
}

/// A complete recipe row, ready for the spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub name: Option<String>,
    pub description: Option<String>,
    pub facts: FieldMap,
    pub directions: Vec<String>,
    pub ingredients: Vec<String>,
    pub nutrition: FieldMap,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub url: String,
}

impl Recipe {
    /// Merge an API record with the details scraped from its page.
    ///
    /// The API's title and description win; the page's are only used when the
    /// record has none.
    pub fn from_parts(record: &SearchRecord, url: &str, details: RecipeDetails) -> Self {
        Recipe {
            name: record.title().or(details.title),
            description: record.description().or(details.description),
            facts: details.facts,
            directions: details.directions,
            ingredients: details.ingredients,
            nutrition: details.nutrition,
            category: record.category(),
            rating: record.rating(),
            url: url.to_string(),
        }
    }
}

/// Text for a JSON scalar; null has none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
