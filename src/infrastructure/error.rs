//! Fatal error types for the crawl
//!
//! Any fetch or URL-resolution failure aborts the whole run; a missing
//! field during extraction is never an error and is modeled as `Option`
//! by the extractors instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status}: {url}")]
    Status { status: u16, url: String },

    #[error("failed to resolve '{href}' against {base}: {reason}")]
    UrlResolution {
        href: String,
        base: String,
        reason: String,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;
