//! Searches every indexed article for a keyword over the last week.
//!
//! Run with: NEWS_API_KEY=... cargo run --example everything -- bitcoin

use chrono::{Duration, Utc};
use newsapi::{Client, SortBy};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = Client::from_env()?;
    let keyword = env::args().nth(1).unwrap_or_else(|| "rust".to_string());
    let week_ago = (Utc::now() - Duration::days(7)).date_naive();

    let response = client
        .everything()
        .with_keyword(&keyword)
        .with_from(week_ago)
        .with_languages(["en"])
        .with_sort_by(SortBy::Popularity)
        .with_page_size(20)
        .send()
        .await?;

    println!("{} articles mention {keyword:?} since {week_ago}", response["totalResults"]);
    for article in response["articles"].as_array().into_iter().flatten() {
        println!(
            "{}  {}",
            article["publishedAt"].as_str().unwrap_or(""),
            article["title"].as_str().unwrap_or("(untitled)")
        );
    }

    Ok(())
}
