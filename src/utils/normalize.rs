use crate::types::NormalizedName;

/// Lowercases `raw` and drops every character that is not a letter, digit, or whitespace.
///
/// Periods in abbreviations are stripped as well (`"Inc."` becomes `"inc"`). Internal whitespace
/// is left untouched; collapsing happens later, once components have been removed.
pub fn normalize(raw: &str) -> NormalizedName {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Normalizes a dictionary key so it compares equal to generated word combinations.
pub fn normalize_key(key: &str) -> String {
    // Combinations are always single-space joined, so keys must be too
    normalize(key)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
