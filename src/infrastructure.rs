//! Infrastructure layer for HTTP fetching, HTML parsing, and crawling
//!
//! Provides the fetch-and-parse collaborator, the selector-based field
//! extractors, and the two-stage crawler that ties them together.

pub mod crawler;
pub mod error;
pub mod http_client;
pub mod parsing;

// Re-export commonly used items
pub use crawler::ProductCrawler;
pub use error::{FetchError, FetchResult};
pub use http_client::{HtmlFetcher, HttpClient};
