//! Name tokenizer and token-overlap similarity score.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel-case regex"));

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid non-letter regex"));

/// Comparable token set of a name.
///
/// `"JohnSmith99"` → `{"john", "smith"}`; `"O'Neil, A."` → `{"neil"}`.
/// Anything outside ASCII letters becomes a word break, so `"José García"`
/// → `{"jos", "garc"}`, which still overlaps the unaccented spelling.
/// Single-letter tokens are dropped.
pub fn name_tokens(name: &str) -> BTreeSet<String> {
    let split = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    let letters = NON_LETTER.replace_all(&split, " ").to_lowercase();

    letters
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Number of tokens of `tx` contained in, or containing, some token of `ty`.
fn matched_tokens(tx: &BTreeSet<String>, ty: &BTreeSet<String>) -> usize {
    tx.iter()
        .filter(|a| ty.iter().any(|b| b.contains(a.as_str()) || a.contains(b.as_str())))
        .count()
}

/// Similarity of two pre-tokenized names, in [0, 1].
pub fn token_score(tx: &BTreeSet<String>, ty: &BTreeSet<String>) -> f64 {
    if tx.is_empty() || ty.is_empty() {
        return 0.0;
    }
    matched_tokens(tx, ty) as f64 / tx.len().max(ty.len()) as f64
}

/// Similarity of two names, in [0, 1]. Iterates the tokens of `x`, so the
/// result is deterministic per ordered pair.
pub fn similarity(x: &str, y: &str) -> f64 {
    token_score(&name_tokens(x), &name_tokens(y))
}
