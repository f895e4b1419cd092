//! Two-stage catalogue crawl: one listing fetch, then one detail fetch per
//! product element, strictly in document order.

use anyhow::Result;
use tracing::{debug, info, warn};
use url::Url;

use super::error::{FetchError, FetchResult};
use super::http_client::HtmlFetcher;
use super::parsing::{DetailExtractor, ListingEntry, ListingExtractor};
use crate::domain::product::Product;

/// Orchestrates the crawl over any `HtmlFetcher`, materializing one
/// `Product` per listing element that yields a name.
pub struct ProductCrawler<F> {
    fetcher: F,
    listing: ListingExtractor,
    detail: DetailExtractor,
}

impl<F: HtmlFetcher> ProductCrawler<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            listing: ListingExtractor::new()?,
            detail: DetailExtractor::new()?,
        })
    }

    /// Crawl the listing page at `url`. Any transport failure or malformed
    /// link resolution aborts the whole run; there are no partial results.
    pub async fn crawl(&self, url: &str) -> FetchResult<Vec<Product>> {
        info!("Crawling catalogue listing: {}", url);

        let entries = {
            let listing_page = self.fetcher.fetch_html(url).await?;
            self.listing.extract_entries(&listing_page)
        };
        debug!("Found {} product elements", entries.len());

        let mut products = Vec::new();
        for entry in entries {
            if let Some(product) = self.crawl_entry(url, entry).await? {
                products.push(product);
            }
        }

        info!("Crawl complete: {} products", products.len());
        Ok(products)
    }

    /// Follow one listing entry to its detail page and build the product.
    /// Entries without a named detail link contribute nothing.
    async fn crawl_entry(
        &self,
        listing_url: &str,
        entry: ListingEntry,
    ) -> FetchResult<Option<Product>> {
        let name = entry.name.filter(|n| !n.is_empty());
        let (Some(name), Some(href)) = (name, entry.href) else {
            debug!("Skipping product element without a named detail link");
            return Ok(None);
        };

        let detail_url = resolve_url(listing_url, &href)?;
        let (description, calories) = {
            let detail_page = self.fetcher.fetch_html(detail_url.as_str()).await?;
            (
                self.detail.extract_description(&detail_page),
                self.detail.extract_calories(&detail_page),
            )
        };

        let unit_price = parse_unit_price(&name, entry.price.as_deref());

        let product = match calories.filter(|c| !c.is_empty()) {
            Some(calories) => Product::food(name, description, unit_price, calories),
            None => Product::new(name, description, unit_price),
        };
        Ok(Some(product))
    }
}

/// Resolve a detail link against the listing page's own URL. A failure here
/// is fatal to the run, like any other fetch failure.
fn resolve_url(base: &str, href: &str) -> FetchResult<Url> {
    let base_url = Url::parse(base).map_err(|e| FetchError::UrlResolution {
        href: href.to_string(),
        base: base.to_string(),
        reason: e.to_string(),
    })?;

    base_url.join(href).map_err(|e| FetchError::UrlResolution {
        href: href.to_string(),
        base: base.to_string(),
        reason: e.to_string(),
    })
}

fn parse_unit_price(name: &str, price: Option<&str>) -> f64 {
    match price.and_then(|p| p.parse::<f64>().ok()) {
        Some(value) => value,
        None => {
            warn!("Price for '{}' missing or unparseable, using 0.00", name);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_links_resolve_against_the_listing_url() {
        let url = resolve_url("https://example.com/shop/berries.html", "product1.html").unwrap();
        assert_eq!(url.as_str(), "https://example.com/shop/product1.html");

        let url = resolve_url("https://example.com/shop/berries.html", "/product2.html").unwrap();
        assert_eq!(url.as_str(), "https://example.com/product2.html");

        let url = resolve_url("https://example.com/shop/", "https://other.com/p.html").unwrap();
        assert_eq!(url.as_str(), "https://other.com/p.html");
    }

    #[test]
    fn malformed_base_url_is_a_fetch_error() {
        let err = resolve_url("not a url", "product1.html").unwrap_err();
        assert!(matches!(err, FetchError::UrlResolution { .. }));
    }

    #[test]
    fn unparseable_price_defaults_to_zero() {
        assert_eq!(parse_unit_price("Berries", Some("3.50")), 3.50);
        assert_eq!(parse_unit_price("Berries", Some("..")), 0.0);
        assert_eq!(parse_unit_price("Berries", None), 0.0);
    }
}
