/// Derive a record identifier from a recipe title: the lowercased title
/// with whitespace runs collapsed to underscores, plus a random numeric
/// suffix in [0, 10000).
///
/// The suffix makes ids neither stable across calls nor collision-free;
/// callers must not treat them as unique keys.
pub fn generate_id(title: &str) -> String {
    format!("{}_{}", slugify(title), fastrand::u32(..10_000))
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
