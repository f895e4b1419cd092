//! CLI entry point: crawl each catalogue URL and print its JSON summary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grocery_crawl::application::transform::JsonTransformer;
use grocery_crawl::infrastructure::crawler::ProductCrawler;
use grocery_crawl::infrastructure::http_client::HttpClient;

/// Catalogue page scraped when no URLs are given.
const DEFAULT_URL: &str = "https://jsainsburyplc.github.io/serverside-test/site/www.sainsburys.co.uk/webapp/wcs/stores/servlet/gb/groceries/berries-cherries-currants6039.html";

#[derive(Parser, Debug)]
#[command(name = "grocery-crawl")]
#[command(about = "Scrape a grocery catalogue page into a JSON pricing summary", long_about = None)]
struct Args {
    /// Catalogue listing URL(s) to scrape; a built-in page is used when empty
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let urls = if args.urls.is_empty() {
        vec![DEFAULT_URL.to_string()]
    } else {
        args.urls
    };

    let crawler = ProductCrawler::new(HttpClient::new()?)?;
    for url in &urls {
        let products = crawler.crawl(url).await?;
        let document = JsonTransformer::new().transform(&products);
        println!("{document}");
    }

    Ok(())
}
