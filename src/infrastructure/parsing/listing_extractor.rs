//! Extraction of per-product fields from the catalogue listing page.

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

use super::compile;

/// Fields scraped from a single product element on the listing page.
///
/// Built fresh for every element; nothing carries over from the previous
/// one, so a missing field can never leak a stale value.
#[derive(Debug, Clone, Default)]
pub struct ListingEntry {
    /// Trimmed text of the first anchor-with-href descendant.
    pub name: Option<String>,
    /// Raw `href` of that anchor; usually relative to the listing URL.
    pub href: Option<String>,
    /// Price text with everything but digits and `.` stripped.
    pub price: Option<String>,
}

/// Parser for extracting product entries from listing pages
pub struct ListingExtractor {
    product_selector: Selector,
    link_selector: Selector,
    price_selector: Selector,
}

impl ListingExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            product_selector: compile(".product")?,
            link_selector: compile("a[href]")?,
            price_selector: compile("p.pricePerUnit")?,
        })
    }

    /// One entry per product element, in document order.
    pub fn extract_entries(&self, document: &Html) -> Vec<ListingEntry> {
        document
            .select(&self.product_selector)
            .map(|element| self.extract_entry(&element))
            .collect()
    }

    fn extract_entry(&self, element: &ElementRef) -> ListingEntry {
        let (name, href) = self.extract_name_and_link(element);
        let price = self.extract_price(element);
        ListingEntry { name, href, price }
    }

    /// The first anchor-with-href descendant supplies both the product name
    /// and the forward link to its detail page.
    fn extract_name_and_link(&self, element: &ElementRef) -> (Option<String>, Option<String>) {
        match element.select(&self.link_selector).next() {
            Some(anchor) => {
                let name = anchor.text().collect::<String>().trim().to_string();
                let href = anchor.value().attr("href").map(str::to_string);
                (Some(name), href)
            }
            None => (None, None),
        }
    }

    fn extract_price(&self, element: &ElementRef) -> Option<String> {
        element
            .select(&self.price_selector)
            .next()
            .map(|pricing| strip_price_noise(&pricing.text().collect::<String>()))
    }
}

/// Retain only digits and `.`, in order. Drops currency symbols and unit
/// suffixes from scraped price text.
pub fn strip_price_noise(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
