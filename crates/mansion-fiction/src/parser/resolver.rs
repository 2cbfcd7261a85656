//! Name suggestions with fuzzy matching.
//!
//! Suggestions are only ever offered back to the player. A misspelt name
//! never silently resolves to an item or direction.

use mansion_core::{Direction, Item};
use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Suggest the candidate item closest to `input`, if any is close enough.
pub fn suggest_item(input: &str, candidates: impl IntoIterator<Item = Item>) -> Option<Item> {
    best_match(input, candidates, |item| item.name())
}

/// Suggest the direction closest to `input`, if any is close enough.
pub fn suggest_direction(input: &str) -> Option<Direction> {
    best_match(input, Direction::ALL, |dir| dir.name())
}

fn best_match<T: Copy>(
    input: &str,
    candidates: impl IntoIterator<Item = T>,
    name: impl Fn(T) -> &'static str,
) -> Option<T> {
    let input_lower = input.trim().to_lowercase();
    let mut best: Option<(T, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(&input_lower, name(candidate));
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
