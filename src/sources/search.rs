use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::logic::{MoodTable, apply_mood_filter};
use crate::state::RecipeDetail;

use super::{RecipeSource, Result};

/// Outcome of one ingredient search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchBatch {
    /// The API had no meals for the term.
    Empty,
    /// Meals found, already mood-filtered.
    Found {
        /// Recipes to display, in API order.
        recipes: Vec<RecipeDetail>,
        /// The mood matched nothing and all recipes were kept.
        used_fallback_all: bool,
    },
}

/// What: Search by ingredient, load every hit in full, then apply the mood filter.
///
/// Inputs:
/// - `source`: Recipe source.
/// - `term`: Ingredient to search for.
/// - `mood`: Selected mood label.
/// - `moods`: Mood table.
/// - `concurrency`: Maximum parallel lookups.
///
/// Output:
/// - `SearchBatch::Empty` when the search has no meals, else the filtered recipes.
///
/// # Errors
/// - The search call fails, or any single lookup fails
///
/// Details:
/// - Lookups keep the order of the search results; lookups returning no record are dropped.
pub async fn run_search<S: RecipeSource>(
    source: &S,
    term: &str,
    mood: Option<&str>,
    moods: &MoodTable,
    concurrency: usize,
) -> Result<SearchBatch> {
    let summaries = source.search_by_ingredient(term).await?;
    if summaries.is_empty() {
        return Ok(SearchBatch::Empty);
    }
    let hits = summaries.len();
    let ids: Vec<String> = summaries.into_iter().map(|s| s.id).collect();
    let looked_up: Vec<Result<Option<RecipeDetail>>> = stream::iter(ids)
        .map(|id| async move { source.lookup(&id).await })
        .buffered(concurrency.max(1))
        .collect()
        .await;
    let mut recipes = Vec::with_capacity(looked_up.len());
    for detail in looked_up {
        if let Some(d) = detail? {
            recipes.push(d);
        }
    }
    debug!(
        term,
        hits,
        loaded = recipes.len(),
        "loaded recipe details"
    );
    let (recipes, used_fallback_all) = apply_mood_filter(recipes, mood, moods);
    Ok(SearchBatch::Found {
        recipes,
        used_fallback_all,
    })
}
