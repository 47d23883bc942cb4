use crate::error::Result;
use crate::model::{FieldMap, Recipe};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 9] = [
    "Name",
    "Description",
    "Facts",
    "Directions",
    "Ingredients",
    "Nutrition",
    "Category",
    "Rating",
    "URL",
];

const MISSING: &str = "N/A";

/// Appends one row per recipe to a CSV spreadsheet.
///
/// The file is opened in append mode, so each row costs one write and a
/// flush regardless of how many rows the file already holds. The header is
/// written only when the file is new or empty.
pub struct SpreadsheetWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl SpreadsheetWriter {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let is_new = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            info!("Creating {} with header row", path.display());
            writer.write_record(HEADERS)?;
            writer.flush()?;
        } else {
            debug!("Appending to existing {}", path.display());
        }

        Ok(Self {
            path,
            writer,
            rows: 0,
        })
    }

    /// Write one recipe and flush it to disk.
    pub fn append(&mut self, recipe: &Recipe) -> Result<()> {
        self.writer.write_record(row(recipe))?;
        self.writer.flush()?;
        self.rows += 1;
        debug!("Wrote row {} ({})", self.rows, recipe.url);
        Ok(())
    }

    /// Rows appended through this writer (not counting earlier runs)
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render a recipe as the nine spreadsheet cells.
pub fn row(recipe: &Recipe) -> [String; 9] {
    [
        or_missing(recipe.name.as_deref()),
        or_missing(recipe.description.as_deref()),
        map_cell(&recipe.facts),
        recipe.directions.join("\n"),
        recipe.ingredients.join("\n"),
        map_cell(&recipe.nutrition),
        or_missing(recipe.category.as_deref()),
        or_missing(recipe.rating.as_deref()),
        recipe.url.clone(),
    ]
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

fn map_cell(map: &FieldMap) -> String {
    // A map of strings always serializes
    serde_json::to_string(map).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_defaults_and_joins() {
        let mut recipe = Recipe {
            url: "https://www.food.com/recipe/x-1".to_string(),
            directions: vec!["Boil water".to_string(), "Add pasta".to_string()],
            ..Default::default()
        };
        recipe.facts.insert("Serves:".to_string(), "4".to_string());

        let cells = row(&recipe);
        assert_eq!(cells[0], "N/A");
        assert_eq!(cells[1], "N/A");
        assert_eq!(cells[2], r#"{"Serves:":"4"}"#);
        assert_eq!(cells[3], "Boil water\nAdd pasta");
        assert_eq!(cells[4], "");
        assert_eq!(cells[5], "{}");
        assert_eq!(cells[6], "N/A");
        assert_eq!(cells[7], "N/A");
        assert_eq!(cells[8], "https://www.food.com/recipe/x-1");
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recipes.csv");

        let writer = SpreadsheetWriter::open(&path).unwrap();
        assert_eq!(writer.rows_written(), 0);
        assert!(path.exists());
    }
}
