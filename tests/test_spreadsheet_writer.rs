use recipe_scrape::sheet::{SpreadsheetWriter, HEADERS};
use recipe_scrape::Recipe;
use std::path::Path;

fn recipe(name: &str) -> Recipe {
    let mut recipe = Recipe {
        name: Some(name.to_string()),
        description: Some("A test recipe, with a comma".to_string()),
        directions: vec!["Mix".to_string(), "Bake".to_string()],
        ingredients: vec!["1 cup \"self-raising\" flour".to_string()],
        category: Some("Dessert".to_string()),
        rating: Some("5".to_string()),
        url: format!("https://www.food.com/recipe/{}", name.to_lowercase()),
        ..Default::default()
    };
    recipe.facts.insert("Serves:".to_string(), "4".to_string());
    recipe
        .nutrition
        .insert("Calories".to_string(), "120".to_string());
    recipe
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_new_file_gets_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");

    let mut writer = SpreadsheetWriter::open(&path).unwrap();
    writer.append(&recipe("Cake")).unwrap();
    writer.append(&recipe("Pie")).unwrap();
    assert_eq!(writer.rows_written(), 2);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], HEADERS.to_vec());
    assert_eq!(rows[1][0], "Cake");
    assert_eq!(rows[2][0], "Pie");
}

#[test]
fn test_cells_round_trip_through_csv_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");

    let mut writer = SpreadsheetWriter::open(&path).unwrap();
    writer.append(&recipe("Cake")).unwrap();

    let rows = read_rows(&path);
    let row = &rows[1];
    assert_eq!(row.len(), 9);
    assert_eq!(row[1], "A test recipe, with a comma");
    assert_eq!(row[2], r#"{"Serves:":"4"}"#);
    assert_eq!(row[3], "Mix\nBake");
    assert_eq!(row[4], "1 cup \"self-raising\" flour");
    assert_eq!(row[5], r#"{"Calories":"120"}"#);
    assert_eq!(row[6], "Dessert");
    assert_eq!(row[7], "5");
    assert_eq!(row[8], "https://www.food.com/recipe/cake");
}

#[test]
fn test_reopen_appends_without_second_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");

    {
        let mut writer = SpreadsheetWriter::open(&path).unwrap();
        writer.append(&recipe("Cake")).unwrap();
    }
    {
        let mut writer = SpreadsheetWriter::open(&path).unwrap();
        writer.append(&recipe("Cake")).unwrap();
        assert_eq!(writer.rows_written(), 1);
    }

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Name");
    // No deduplication: the same recipe appears twice
    assert_eq!(rows[1], rows[2]);
    assert_eq!(rows.iter().filter(|r| r[0] == "Name").count(), 1);
}

#[test]
fn test_empty_existing_file_gets_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");
    std::fs::write(&path, "").unwrap();

    let mut writer = SpreadsheetWriter::open(&path).unwrap();
    writer.append(&recipe("Cake")).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows[0], HEADERS.to_vec());
    assert_eq!(rows.len(), 2);
}
