use log::debug;
use scraper::Html;

use crate::error::ImportError;
use crate::model::Recipe;

mod heuristic;
mod json_ld;

pub use self::heuristic::HeuristicExtractor;
pub use self::json_ld::JsonLdExtractor;

/// An extraction strategy over a parsed page.
pub trait Extractor {
    /// Cheap check whether this strategy has anything to work with.
    fn can_extract(&self, document: &Html) -> bool;
    /// Produce a normalized record from the page.
    fn extract(&self, document: &Html) -> Result<Recipe, ImportError>;
}

/// Extract a recipe from raw HTML. Strategies are tried in order: structured
/// JSON-LD data first, then the low-confidence heuristic scraper, which
/// volunteers for any document. The error branch is only reachable if every
/// strategy declines.
pub fn extract_recipe(html: &str) -> Result<Recipe, ImportError> {
    let document = Html::parse_document(html);

    let extractors: Vec<Box<dyn Extractor>> =
        vec![Box::new(JsonLdExtractor), Box::new(HeuristicExtractor)];

    for extractor in extractors {
        if extractor.can_extract(&document) {
            return extractor.extract(&document);
        }
    }

    debug!("No extractor volunteered for this document");
    Err(ImportError::NoExtractorMatched)
}
