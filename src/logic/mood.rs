//! Mood filter over already-fetched recipes.

use crate::logic::MoodTable;

/// Anything the mood filter can inspect: a name and, when known, a category.
pub trait Categorized {
    /// Display name of the recipe.
    fn name(&self) -> &str;
    /// Category such as "Seafood"; `None` when the record has none.
    fn category(&self) -> Option<&str>;
}

/// What: Narrow `recipes` to those matching `mood`.
///
/// Inputs:
/// - `recipes`: Fetched recipes, in display order.
/// - `mood`: Selected mood label, `None` when unset.
/// - `moods`: Mood table.
///
/// Output:
/// - `(kept, used_fallback_all)`. `used_fallback_all` is `true` only when a known mood
///   matched nothing and the original list was returned.
///
/// Details:
/// - A recipe matches when its category or its name contains any keyword, ignoring case.
/// - Unset or unknown moods return the input untouched with `false`.
#[must_use]
pub fn apply_mood_filter<T: Categorized>(
    recipes: Vec<T>,
    mood: Option<&str>,
    moods: &MoodTable,
) -> (Vec<T>, bool) {
    let Some(keywords) = mood.and_then(|m| moods.keywords(m)) else {
        return (recipes, false);
    };
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let matches = |r: &T| {
        let name = r.name().to_lowercase();
        let category = r.category().map(str::to_lowercase);
        needles.iter().any(|k| {
            category.as_deref().is_some_and(|c| c.contains(k.as_str())) || name.contains(k.as_str())
        })
    };
    if !recipes.iter().any(&matches) {
        return (recipes, true);
    }
    (recipes.into_iter().filter(|r| matches(r)).collect(), false)
}
