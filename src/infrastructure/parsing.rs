//! HTML extraction for listing and detail pages
//!
//! Selector-based extractors with compiled CSS selectors. Every extraction
//! returns `Option`; a missing node or attribute is normal and never fails
//! the crawl.

pub mod detail_extractor;
pub mod dom;
pub mod listing_extractor;

// Re-export public types
pub use detail_extractor::DetailExtractor;
pub use listing_extractor::{ListingEntry, ListingExtractor};

use anyhow::{anyhow, Result};
use scraper::Selector;

/// Compile a CSS selector string into a `Selector`.
pub(crate) fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow!("Failed to compile selector '{}': {}", selector, e))
}
