pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod id;
pub mod model;
pub mod server;

use log::debug;

use crate::error::ImportError;
use crate::fetch::PageFetcher;
use crate::model::Recipe;

/// Fetch a web page and extract a normalized recipe record from it.
pub async fn import_recipe(fetcher: &PageFetcher, url: &str) -> Result<Recipe, ImportError> {
    let body = fetcher.fetch(url).await?;
    let recipe = extractors::extract_recipe(&body)?;
    debug!("Imported \"{}\" from {url}", recipe.title);
    Ok(recipe)
}
