//! Ingredient-name matching used to pick a fallback search term.

use std::collections::HashMap;

/// Minimum similarity (exclusive) a suggestion needs to be offered as a fallback.
pub const FALLBACK_THRESHOLD: f64 = 0.6;

/// What: Positional character-match ratio between two strings.
///
/// Inputs:
/// - `a`, `b`: Strings to compare (case is ignored).
///
/// Output:
/// - `matches / max(len a, len b)` in `0.0..=1.0`; `0.0` when both are empty.
///
/// Details:
/// - Counts positions `i < min(len a, len b)` where both strings hold the same char.
/// - Not an edit distance: an inserted letter shifts every later position.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = matches as f64 / longest as f64;
    ratio
}

/// What: Best suggestion for `word` if it scores above [`FALLBACK_THRESHOLD`].
///
/// Inputs:
/// - `word`: The query that returned nothing.
/// - `list`: Candidate names in priority order.
///
/// Output:
/// - `Some(name)` for the first entry with the strictly highest score, `None` otherwise.
#[must_use]
pub fn closest_match<'a>(word: &str, list: &'a [String]) -> Option<&'a str> {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0;
    for item in list {
        let score = similarity(word, item);
        if score > best_score {
            best_score = score;
            best = Some(item.as_str());
        }
    }
    best.filter(|_| best_score > FALLBACK_THRESHOLD)
}

/// What: Decide the substitute term to try when `query` returned no recipes.
///
/// Inputs:
/// - `query`: Raw query (non-empty after trimming).
/// - `suggestions`: Known ingredient names.
/// - `synonyms`: Lowercase alternate name to related name.
///
/// Output:
/// - The synonym for `query` when one exists, else the closest suggestion, else `None`.
///
/// Details:
/// - The synonym lookup uses the lowercased query as-is; a synonym hit wins even when a
///   suggestion would also match.
#[must_use]
pub fn resolve_fallback(
    query: &str,
    suggestions: &[String],
    synonyms: &HashMap<String, String>,
) -> Option<String> {
    if let Some(related) = synonyms.get(&query.to_lowercase()) {
        return Some(related.clone());
    }
    closest_match(query, suggestions).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Catalog;

    fn resolve(q: &str) -> Option<String> {
        let c = Catalog::default();
        resolve_fallback(q, &c.suggestions, &c.synonyms)
    }

    #[test]
    /// What: Similarity counts equal chars at equal positions over the longer length.
    ///
    /// Inputs:
    /// - Identical, shifted, one-off and empty pairs.
    ///
    /// Output:
    /// - Ratios match the positional definition.
    fn similarity_is_positional_ratio() {
        assert!((similarity("Chicken", "chicken") - 1.0).abs() < f64::EPSILON);
        // c,h,i match; the missing 'c' shifts the rest
        assert!((similarity("chiken", "chicken") - 3.0 / 7.0).abs() < 1e-9);
        assert!((similarity("chickem", "chicken") - 6.0 / 7.0).abs() < 1e-9);
        assert!(similarity("", "").abs() < f64::EPSILON);
        assert!(similarity("", "rice").abs() < f64::EPSILON);
    }

    #[test]
    fn synonym_hit_wins() {
        assert_eq!(resolve("paneer").as_deref(), Some("cheese"));
        assert_eq!(resolve("PANEER").as_deref(), Some("cheese"));
        // beef is itself a suggestion, the synonym still takes precedence
        assert_eq!(resolve("beef").as_deref(), Some("chicken"));
    }

    #[test]
    /// What: Similarity fallback only fires above the threshold.
    ///
    /// Inputs:
    /// - A dropped-letter typo, a same-length typo and garbage.
    ///
    /// Output:
    /// - Only the same-length typo resolves.
    fn similarity_fallback_respects_threshold() {
        assert_eq!(resolve("chiken"), None);
        assert_eq!(resolve("chickem").as_deref(), Some("chicken"));
        assert_eq!(resolve("tomatp").as_deref(), Some("tomato"));
        assert_eq!(resolve("xyz123"), None);
    }

    #[test]
    fn ties_resolve_to_first_entry_in_list_order() {
        let list: Vec<String> = vec!["abcx".into(), "abcy".into()];
        assert_eq!(closest_match("abcz", &list), Some("abcx"));
    }

    #[test]
    fn exactly_threshold_is_not_enough() {
        // 3 of 5 positions = 0.6
        let list: Vec<String> = vec!["abcde".into()];
        assert_eq!(closest_match("abcxy", &list), None);
    }
}
