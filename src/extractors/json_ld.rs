use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::ImportError;
use crate::extractors::Extractor;
use crate::id::generate_id;
use crate::model::{Ingredient, Nutrition, Recipe, DEFAULT_CUISINE, DEFAULT_TITLE};

/// Extracts recipes from schema.org JSON-LD script blocks.
pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn can_extract(&self, document: &Html) -> bool {
        find_recipe_value(document).is_some()
    }

    fn extract(&self, document: &Html) -> Result<Recipe, ImportError> {
        let recipe = find_recipe_value(document).ok_or(ImportError::NoExtractorMatched)?;
        debug!("Found JSON-LD recipe: {:?}", recipe.get("name"));
        Ok(map_recipe(&recipe))
    }
}

/// Walk all JSON-LD blocks in document order and return the first value that
/// describes a Recipe. Blocks that fail to parse are skipped; whether to fall
/// back is the caller's decision.
fn find_recipe_value(document: &Html) -> Option<Value> {
    let selector = Selector::parse("script[type='application/ld+json']").unwrap();

    document.select(&selector).find_map(|script| {
        let cleaned_json = sanitize_json(&script.inner_html());
        match serde_json::from_str::<Value>(&cleaned_json) {
            Ok(block) => locate_recipe(&block).cloned(),
            Err(e) => {
                debug!("Skipping JSON-LD block that does not parse: {e}");
                None
            }
        }
    })
}

/// The Recipe entity within one parsed block: the block itself, the first
/// matching element of a top-level array, or the first matching element of a
/// `@graph` container.
fn locate_recipe(block: &Value) -> Option<&Value> {
    if is_recipe_type(block) {
        return Some(block);
    }
    if let Some(items) = block.as_array() {
        return items.iter().find(|item| is_recipe_type(item));
    }
    if let Some(graph) = block.get("@graph").and_then(Value::as_array) {
        return graph.iter().find(|item| is_recipe_type(item));
    }
    None
}

/// `@type` may be a single string or an array of types. Matching is
/// case-insensitive since plenty of sites emit `recipe` or `RECIPE`.
fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|type_str| type_str.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// Clean up common JSON-LD malformations before parsing
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    // Some sites prepend comment markers or CDATA noise
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // Trailing commas before a closing brace/bracket
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    cleaned.replace("<!--", "").replace("-->", "")
}

/// Map a Recipe value onto the normalized record. Every field is defaulted
/// independently; one malformed field never discards the rest.
fn map_recipe(recipe: &Value) -> Recipe {
    let title = recipe
        .get("name")
        .and_then(Value::as_str)
        .map(decode_html_symbols)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    Recipe {
        id: generate_id(&title),
        thumbnail: map_thumbnail(recipe.get("image")),
        cook_time: recipe
            .get("cookTime")
            .and_then(Value::as_str)
            .map(parse_duration_minutes)
            .unwrap_or(0),
        prep_time: recipe
            .get("prepTime")
            .and_then(Value::as_str)
            .map(parse_duration_minutes)
            .unwrap_or(0),
        servings: map_servings(recipe.get("recipeYield")),
        cuisine: recipe
            .get("recipeCuisine")
            .and_then(Value::as_str)
            .map(decode_html_symbols)
            .filter(|cuisine| !cuisine.is_empty())
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
        tags: map_tags(recipe.get("keywords")),
        nutrition: map_nutrition(recipe.get("nutrition")),
        ingredients: map_ingredients(recipe.get("recipeIngredient")),
        instructions: map_instructions(recipe.get("recipeInstructions")),
        title,
        ..Recipe::default()
    }
}

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// ISO 8601 duration, hours and minutes only: "PT1H30M" -> 90, "PT45M" -> 45,
/// "PT2H" -> 120. Both segments are optional and anything after them (a
/// seconds segment, most commonly) is ignored. Strings without the leading
/// "PT" yield 0; oversized values clamp at `u32::MAX` minutes.
fn parse_duration_minutes(duration: &str) -> u32 {
    let Some(rest) = duration.strip_prefix("PT") else {
        return 0;
    };

    let (hours, rest) = leading_segment(rest, 'H');
    let (minutes, _) = leading_segment(rest, 'M');

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Split a leading `<digits><marker>` segment off `text`. Without one, the
/// value is 0 and nothing is consumed. A digit run beyond `u32` saturates.
fn leading_segment(text: &str, marker: char) -> (u32, &str) {
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());

    match text[digits_end..].strip_prefix(marker) {
        Some(tail) if digits_end > 0 => {
            let value = text[..digits_end].parse().unwrap_or(u32::MAX);
            (value, tail)
        }
        _ => (0, text),
    }
}

/// `image` is either a single URL or an ordered list of URLs; only the first
/// is kept. Object forms are ignored.
fn map_thumbnail(image: Option<&Value>) -> String {
    match image {
        Some(Value::String(url)) => decode_html_symbols(url),
        Some(Value::Array(urls)) => urls
            .first()
            .and_then(Value::as_str)
            .map(decode_html_symbols)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// `recipeYield` variants seen in the wild: "4", "4 servings", a bare
/// number, or an array of those. Non-positive or unparseable yields 1.
fn map_servings(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::String(s)) => leading_digits(s),
        Some(Value::Number(n)) => n.as_f64().map(|n| n as u32),
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .and_then(leading_digits),
        _ => None,
    };

    parsed.filter(|&servings| servings > 0).unwrap_or(1)
}

fn leading_digits(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// `keywords` is a comma-separated string or an array of strings. Tokens are
/// trimmed but otherwise kept verbatim, empty ones included.
fn map_tags(keywords: Option<&Value>) -> Vec<String> {
    match keywords {
        Some(Value::String(tags)) => tags
            .split(',')
            .map(|tag| decode_html_symbols(tag.trim()))
            .collect(),
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .map(|tag| decode_html_symbols(tag.trim()))
            .collect(),
        _ => Vec::new(),
    }
}

fn map_nutrition(nutrition: Option<&Value>) -> Nutrition {
    let Some(nutrition) = nutrition else {
        return Nutrition::default();
    };

    Nutrition {
        calories: nutrient(nutrition, "calories"),
        protein: nutrient(nutrition, "proteinContent"),
        carbs: nutrient(nutrition, "carbohydrateContent"),
        fat: nutrient(nutrition, "fatContent"),
    }
}

/// Nutrition values come as strings like "250 calories" or "12 g"; strip
/// everything but the digits and parse what is left.
fn nutrient(nutrition: &Value, key: &str) -> u32 {
    match nutrition.get(key) {
        Some(Value::String(amount)) => {
            let digits: String = amount.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        }
        Some(Value::Number(amount)) => amount.as_f64().map(|n| n as u32).unwrap_or(0),
        _ => 0,
    }
}

/// Each ingredient line is carried verbatim as the name; no quantity or
/// unit decomposition happens here.
fn map_ingredients(value: Option<&Value>) -> Vec<Ingredient> {
    match value {
        Some(Value::Array(lines)) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(|line| Ingredient::from_line(decode_html_symbols(line)))
            .collect(),
        _ => Vec::new(),
    }
}

/// `recipeInstructions` is a bare string (one step) or an array whose
/// entries are plain strings or HowToStep-like objects with a `text` field.
fn map_instructions(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(step)) => vec![decode_html_symbols(step)],
        Some(Value::Array(entries)) => entries.iter().map(instruction_text).collect(),
        _ => Vec::new(),
    }
}

fn instruction_text(entry: &Value) -> String {
    match entry {
        Value::String(step) => decode_html_symbols(step),
        Value::Object(step) => step
            .get("text")
            .and_then(Value::as_str)
            .map(decode_html_symbols)
            .unwrap_or_default(),
        _ => String::new(),
    }
}
