//! Import a recipe from a URL and print the normalized JSON record.
//!
//! Usage: cargo run --example import_from_url -- https://example.com/recipe

use recipe_import::fetch::PageFetcher;
use recipe_import::import_recipe;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .ok_or("Please provide a URL as an argument")?;

    let fetcher = PageFetcher::new(None)?;
    let recipe = import_recipe(&fetcher, &url).await?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
