use serde::Serialize;

/// Title used when a page yields no usable name.
pub const DEFAULT_TITLE: &str = "Untitled Recipe";

/// Difficulty is never computed; every record carries this placeholder.
pub const DEFAULT_DIFFICULTY: &str = "unknown";

/// Cuisine used when the page does not declare one.
pub const DEFAULT_CUISINE: &str = "Unknown";

/// A recipe normalized from a web page. Field names follow the JSON wire
/// format (`cookTime`, `prepTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Slugified title plus a random numeric suffix. Neither unique nor
    /// stable across repeated imports of the same page.
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Minutes, 0 when the page gives none.
    pub cook_time: u32,
    /// Minutes, 0 when the page gives none.
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub nutrition: Nutrition,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            id: String::new(),
            title: DEFAULT_TITLE.to_string(),
            thumbnail: String::new(),
            cook_time: 0,
            prep_time: 0,
            servings: 1,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            cuisine: DEFAULT_CUISINE.to_string(),
            tags: Vec::new(),
            nutrition: Nutrition::default(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// One ingredient line. The raw text is never decomposed, so quantity and
/// unit stay at their fixed placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

impl Ingredient {
    pub fn from_line(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            quantity: 1,
            unit: String::new(),
        }
    }
}
