use scraper::{ElementRef, Html};

mod detail;

pub use detail::DetailExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

/// Trim, drop newlines and collapse runs of whitespace to a single space.
pub fn clean_text(text: &str) -> String {
    text.replace('\n', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// All text under `element`, concatenated as rendered.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Preheat   oven\n to 350F  "), "Preheat oven to 350F");
        assert_eq!(clean_text("\n\n"), "");
        assert_eq!(clean_text("1\tcup"), "1 cup");
    }

    #[test]
    fn test_newline_is_dropped_not_spaced() {
        // "\n" disappears before whitespace is collapsed
        assert_eq!(clean_text("30\nmins"), "30mins");
    }
}
