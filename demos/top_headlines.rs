//! Prints the current top headlines for a country and category.
//!
//! Run with: NEWS_API_KEY=... cargo run --example top_headlines -- gb science
//! Set LOUD_WIRE=1 to see the raw request and response.

use newsapi::{Client, NewsApiError};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 1. Build the client from NEWS_API_KEY
    let client = Client::from_env()?;

    let mut args = env::args().skip(1);
    let country = args.next().unwrap_or_else(|| "us".to_string());
    let category = args.next().unwrap_or_else(|| "technology".to_string());

    println!("Top {category} headlines for {country}\n");

    // 2. Send the request; bad codes are rejected before anything goes out
    match client
        .top_headlines()
        .with_country(&country)
        .with_category(&category)
        .with_page_size(10)
        .send()
        .await
    {
        Ok(response) => {
            let articles = response["articles"].as_array().cloned().unwrap_or_default();
            for article in &articles {
                let source = article["source"]["name"].as_str().unwrap_or("unknown");
                let title = article["title"].as_str().unwrap_or("(untitled)");
                println!("- [{source}] {title}");
            }
            println!("\n{} of {} results", articles.len(), response["totalResults"]);
        }
        Err(e) => {
            match &e {
                NewsApiError::InvalidArgument { parameter, value } => {
                    eprintln!("{value:?} is not a valid {parameter}");
                }
                NewsApiError::Api { code, message, .. } => {
                    eprintln!("API Error ({}): {}", code.as_deref().unwrap_or("-"), message);
                }
                other => eprintln!("Error: {other}"),
            }
            return Err(e.into());
        }
    }

    Ok(())
}
