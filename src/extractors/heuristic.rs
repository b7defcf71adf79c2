use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ImportError;
use crate::extractors::Extractor;
use crate::id::generate_id;
use crate::model::{Ingredient, Recipe, DEFAULT_TITLE};

/// Last-resort scraper for pages without usable structured data.
///
/// Works off blunt surface heuristics (class-name substrings and literal
/// "ingredient"/"step" text matches) and is known to both over- and
/// under-match; treat its output as low-confidence. Timing, servings,
/// nutrition, difficulty, cuisine and tags are never recovered here and
/// keep their documented defaults.
pub struct HeuristicExtractor;

impl Extractor for HeuristicExtractor {
    fn can_extract(&self, _document: &Html) -> bool {
        // There is always something to scrape; this strategy never declines.
        true
    }

    fn extract(&self, document: &Html) -> Result<Recipe, ImportError> {
        debug!("Falling back to heuristic DOM scraping");

        let title = first_h1_text(document).unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Recipe {
            id: generate_id(&title),
            thumbnail: og_image(document).unwrap_or_default(),
            ingredients: collect_matches(document, "[class*='ingredient']", "ingredient")
                .into_iter()
                .map(Ingredient::from_line)
                .collect(),
            instructions: collect_matches(
                document,
                "[class*='instruction'], [class*='step']",
                "step",
            ),
            title,
            ..Recipe::default()
        })
    }
}

fn first_h1_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").unwrap();
    let heading = document.select(&selector).next()?;
    let text = element_text(heading);
    (!text.is_empty()).then_some(text)
}

/// Text of every element matching `class_selector`, plus every `li` whose
/// own text contains `text_needle` (case-sensitive, whole-page scan).
/// Trimmed, with empty strings dropped. An element caught by both passes is
/// collected twice; that over-matching is part of the contract.
fn collect_matches(document: &Html, class_selector: &str, text_needle: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if let Ok(selector) = Selector::parse(class_selector) {
        for element in document.select(&selector) {
            let text = element_text(element);
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }

    let li_selector = Selector::parse("li").unwrap();
    for element in document.select(&li_selector) {
        let text = element_text(element);
        if !text.is_empty() && text.contains(text_needle) {
            lines.push(text);
        }
    }

    lines
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn og_image(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(|content| content.to_string())
}
