use super::{clean_text, element_text, ParsingContext};
use crate::model::{FieldMap, RecipeDetails};
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Pulls facts, directions, ingredients and nutrition out of a rendered
/// food.com detail page. Every group is optional: a missing container gives
/// an empty map or list.
pub struct DetailExtractor {
    facts: Selector,
    fact_item: Selector,
    dt: Selector,
    dd: Selector,
    directions: Selector,
    ingredients: Selector,
    list_item: Selector,
    modal: Selector,
    nutrition_line: Selector,
    nutrition_label: Selector,
    title: Selector,
    description: Selector,
    description_text: Selector,
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailExtractor {
    pub fn new() -> Self {
        // Static selectors; parse cannot fail
        let css = |s: &str| Selector::parse(s).unwrap();
        Self {
            facts: css("div.facts"),
            fact_item: css("div.facts__item"),
            dt: css("dt"),
            dd: css("dd"),
            directions: css("section.directions"),
            ingredients: css("section.ingredients"),
            list_item: css("li"),
            modal: css("div.modal"),
            nutrition_line: css("p.svelte-epeb0m"),
            nutrition_label: css("span.svelte-epeb0m"),
            title: css("h1"),
            description: css("div.recipe-description"),
            description_text: css("div.text"),
        }
    }

    pub fn parse(&self, context: &ParsingContext) -> RecipeDetails {
        debug!("Extracting recipe details from {}", context.url);
        let document = &context.document;

        let details = RecipeDetails {
            title: self.title(document),
            description: self.description(document),
            facts: self.facts(document),
            directions: self.list_in(document, &self.directions),
            ingredients: self.list_in(document, &self.ingredients),
            nutrition: self.nutrition(document),
        };

        debug!(
            "{}: {} facts, {} directions, {} ingredients, {} nutrition values",
            context.url,
            details.facts.len(),
            details.directions.len(),
            details.ingredients.len(),
            details.nutrition.len()
        );
        details
    }

    /// Convenience for callers holding raw HTML.
    pub fn parse_html(&self, url: &str, html: &str) -> RecipeDetails {
        self.parse(&ParsingContext::new(url, html))
    }

    fn facts(&self, document: &Html) -> FieldMap {
        let mut facts = FieldMap::new();
        let Some(container) = document.select(&self.facts).next() else {
            return facts;
        };

        for item in container.select(&self.fact_item) {
            let label = item.select(&self.dt).next();
            let value = item.select(&self.dd).next();
            // Label is kept as rendered; only the value is cleaned
            if let (Some(label), Some(value)) = (label, value) {
                facts.insert(element_text(label), clean_text(&element_text(value)));
            }
        }
        facts
    }

    fn list_in(&self, document: &Html, section: &Selector) -> Vec<String> {
        document
            .select(section)
            .next()
            .map(|container| {
                container
                    .select(&self.list_item)
                    .map(|li| clean_text(&element_text(li)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn nutrition(&self, document: &Html) -> FieldMap {
        let mut nutrition = FieldMap::new();
        let Some(modal) = document.select(&self.modal).next() else {
            return nutrition;
        };

        for line in modal.select(&self.nutrition_line) {
            if let Some((label, value)) = self.nutrition_pair(line) {
                nutrition.insert(label, value);
            }
        }
        nutrition
    }

    /// `<p><span>Calories:</span> 231.4</p>` → ("Calories", "231.4")
    fn nutrition_pair(&self, line: ElementRef) -> Option<(String, String)> {
        let label_el = line.select(&self.nutrition_label).next()?;
        let label_text = element_text(label_el);

        let label = clean_text(label_text.replace(':', "").trim());
        let value = element_text(line).replace(&label_text, "");
        Some((label, clean_text(value.trim())))
    }

    fn title(&self, document: &Html) -> Option<String> {
        document
            .select(&self.title)
            .next()
            .map(|el| clean_text(&element_text(el)))
            .filter(|t| !t.is_empty())
    }

    fn description(&self, document: &Html) -> Option<String> {
        document
            .select(&self.description)
            .next()
            .and_then(|el| el.select(&self.description_text).next())
            .map(|el| clean_text(&element_text(el)))
            .filter(|t| !t.is_empty())
    }
}
