/// Keeps only the numeric characters of a raw ISBN field.
///
/// Goodreads wraps identifiers as `="9780441013593"` and some exports
/// hyphenate them; anything that is not a number is dropped.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars().filter(|c| c.is_numeric()).collect()
}
