//! Extraction of description and nutrition fields from product detail pages.

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::debug;

use super::compile;
use super::dom::{first_child_element, next_sibling_element, parent_element};

/// Parser for the fields that only exist on a product's detail page.
pub struct DetailExtractor {
    heading_selector: Selector,
    nutrition_selector: Selector,
    header_cell_selector: Selector,
}

impl DetailExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading_selector: compile("h3")?,
            nutrition_selector: compile(".nutritionTable")?,
            header_cell_selector: compile("th")?,
        })
    }

    /// The first line of the product description: the element following the
    /// first `h3` whose text contains "Description". A missing heading or a
    /// heading with no following sibling element yields `None`.
    pub fn extract_description(&self, document: &Html) -> Option<String> {
        let heading = document
            .select(&self.heading_selector)
            .find(|h| h.text().collect::<String>().contains("Description"))?;

        let sibling = next_sibling_element(heading)?;
        Some(sibling.text().collect::<String>().trim().to_string())
    }

    /// Calories (kcal) from the first nutrition table, digits only.
    ///
    /// Header cells are scanned in document order and the first `Energy` or
    /// `Energy kcal` match wins; the two labels sit in differently shaped
    /// rows and need different navigation from the header cell.
    pub fn extract_calories(&self, document: &Html) -> Option<String> {
        let table = document.select(&self.nutrition_selector).next()?;

        for header in table.select(&self.header_cell_selector) {
            let label = header.text().collect::<String>();
            let label = label.trim();

            if label == "Energy" {
                // Value lives in the first cell of the row below.
                let row = parent_element(header)?;
                let next_row = next_sibling_element(row)?;
                let cell = first_child_element(next_row)?;
                return Some(strip_non_digits(&cell.text().collect::<String>()));
            } else if label == "Energy kcal" {
                // Value lives in the cell next to the header.
                let cell = next_sibling_element(header)?;
                return Some(strip_non_digits(&cell.text().collect::<String>()));
            }
        }

        debug!("No energy row found in nutrition table");
        None
    }
}

/// Retain only digits, in order. Drops `kcal` suffixes and the like.
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extractor() -> DetailExtractor {
        DetailExtractor::new().unwrap()
    }

    #[rstest]
    #[case("55kcal", "55")]
    #[case("139kJ", "139")]
    #[case("kcal", "")]
    fn non_digits_are_stripped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_non_digits(input), expected);
    }

    #[test]
    fn description_is_the_element_after_the_heading() {
        let html = Html::parse_document(
            r#"<h3>Description</h3><p> Ripe and ready to eat </p><p>Second line</p>"#,
        );
        assert_eq!(
            extractor().extract_description(&html).as_deref(),
            Some("Ripe and ready to eat")
        );
    }

    #[test]
    fn missing_description_heading_yields_none() {
        let html = Html::parse_document(r#"<h3>Nutrition</h3><p>Not a description</p>"#);
        assert!(extractor().extract_description(&html).is_none());
    }

    #[test]
    fn description_heading_without_siblings_yields_none() {
        let html = Html::parse_document(r#"<div><h3>Description</h3></div>"#);
        assert!(extractor().extract_description(&html).is_none());
    }

    #[test]
    fn calories_from_energy_row_below() {
        // "Energy" header: the kcal figure sits in the first cell of the
        // following row.
        let html = Html::parse_document(
            r#"<table class="nutritionTable">
                 <tr><th>Energy</th><td>139kJ</td></tr>
                 <tr><td>33kcal</td><td>-</td></tr>
               </table>"#,
        );
        assert_eq!(extractor().extract_calories(&html).as_deref(), Some("33"));
    }

    #[test]
    fn calories_from_energy_kcal_cell_beside() {
        let html = Html::parse_document(
            r#"<table class="nutritionTable">
                 <tr><th>Energy kcal</th><td>55kcal</td></tr>
               </table>"#,
        );
        assert_eq!(extractor().extract_calories(&html).as_deref(), Some("55"));
    }

    #[test]
    fn first_matching_header_wins() {
        let html = Html::parse_document(
            r#"<table class="nutritionTable">
                 <tr><th>Energy kcal</th><td>55kcal</td></tr>
                 <tr><th>Energy</th><td>139kJ</td></tr>
                 <tr><td>999kcal</td></tr>
               </table>"#,
        );
        assert_eq!(extractor().extract_calories(&html).as_deref(), Some("55"));
    }

    #[test]
    fn no_nutrition_table_yields_none() {
        let html = Html::parse_document(r#"<table><tr><th>Energy</th></tr></table>"#);
        assert!(extractor().extract_calories(&html).is_none());
    }

    #[test]
    fn energy_row_without_following_row_yields_none() {
        let html = Html::parse_document(
            r#"<table class="nutritionTable"><tr><th>Energy</th><td>139kJ</td></tr></table>"#,
        );
        assert!(extractor().extract_calories(&html).is_none());
    }
}
