//! grocery-crawl - grocery catalogue scraping with a JSON pricing summary
//!
//! Crawls a catalogue listing page, follows each product's detail link for
//! its description and nutrition data, and aggregates the results into a
//! single JSON document with gross/VAT totals.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::transform::JsonTransformer;
pub use domain::product::{Product, ProductKind};
pub use infrastructure::crawler::ProductCrawler;
pub use infrastructure::error::{FetchError, FetchResult};
pub use infrastructure::http_client::{HtmlFetcher, HttpClient};
