//! Query phrase tokenization.

/// Split a search phrase into lower-cased tokens.
///
/// Pieces are separated by any Unicode whitespace. Repeated words are kept,
/// so "chair chair" yields two tokens and counts twice during matching.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(str::to_lowercase).collect()
}
