//! Command-line search: the same fetch/fallback plan as the TUI, printed once.

use crate::app::workers::SearchTuning;
use crate::config::Settings;
use crate::logic::{Catalog, QueryPlan, SearchStatus, plan_after_empty, plan_query};
use crate::sources::{self, MealDbClient, RecipeSource, SearchBatch};
use crate::state::RecipeDetail;

/// Everything a one-shot search produced.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SearchOutcome {
    /// Fallback notice shown before the retry, if one happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<SearchStatus>,
    /// Final status.
    pub status: SearchStatus,
    /// Recipes to print.
    pub recipes: Vec<RecipeDetail>,
}

/// What: Run a search to completion, following at most one fallback hop.
///
/// Inputs:
/// - `source`: Recipe source.
/// - `catalog`: Planner tables.
/// - `query`: Raw ingredient text.
/// - `mood`: Canonical mood label, if any.
/// - `tuning`: Fallback delay and lookup concurrency.
///
/// Output:
/// - `None` for blank input; otherwise the outcome. Fetch errors become `SearchStatus::Failed`.
///
/// Details:
/// - Sleeps the fallback delay before retrying, like the interactive search.
pub async fn search_once<S: RecipeSource>(
    source: &S,
    catalog: &Catalog,
    query: &str,
    mood: Option<&str>,
    tuning: SearchTuning,
) -> Option<SearchOutcome> {
    let QueryPlan::Fetch {
        mut term,
        mut fallback,
    } = plan_query(query, false)
    else {
        return None;
    };
    let mut notice = None;
    loop {
        let batch = sources::run_search(
            source,
            &term,
            mood,
            &catalog.moods,
            tuning.lookup_concurrency,
        )
        .await;
        let (status, recipes) = match batch {
            Err(e) => {
                tracing::warn!(term = %term, error = %e, "recipe search failed");
                (SearchStatus::Failed, Vec::new())
            }
            Ok(SearchBatch::Found {
                recipes,
                used_fallback_all,
            }) => (SearchStatus::found(&term, mood, used_fallback_all), recipes),
            Ok(SearchBatch::Empty) => {
                match plan_after_empty(&term, fallback, catalog, tuning.fallback_delay) {
                    QueryPlan::RetryAfterDelay { delay, term: next } => {
                        notice = Some(SearchStatus::TryingFallback {
                            query: term,
                            next: next.clone(),
                        });
                        tokio::time::sleep(delay).await;
                        term = next;
                        fallback = true;
                        continue;
                    }
                    _ => (SearchStatus::NoResults { query: term }, Vec::new()),
                }
            }
        };
        return Some(SearchOutcome {
            notice,
            status,
            recipes,
        });
    }
}

/// One output row: id, name, category and area separated by tabs.
fn row(r: &RecipeDetail) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        r.id,
        r.name,
        r.category.as_deref().unwrap_or("-"),
        r.area.as_deref().unwrap_or("-")
    )
}

/// What: Render an outcome as text lines.
#[must_use]
pub fn render_text(outcome: &SearchOutcome) -> Vec<String> {
    let mut out = Vec::with_capacity(outcome.recipes.len() + 2);
    if let Some(n) = &outcome.notice {
        out.push(n.to_string());
    }
    out.push(outcome.status.to_string());
    out.extend(outcome.recipes.iter().map(row));
    out
}

/// What: Handle `--search`, printing the results.
///
/// Inputs:
/// - `query`: Ingredient text.
/// - `mood`: Mood label from `--mood`, matched case-insensitively.
/// - `json`: Print JSON instead of text.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Exit code: 0 on results or no results, 1 on errors or an unknown mood.
pub async fn handle_search(
    query: &str,
    mood: Option<&str>,
    json: bool,
    settings: &Settings,
) -> i32 {
    tracing::info!(query = %query, mood = ?mood, "search mode requested from CLI");
    let catalog = settings.catalog();
    let mood = match mood.map(|m| catalog.moods.position_of(m).ok_or(m)) {
        None => None,
        Some(Ok(i)) => catalog.moods.label_at(i).map(str::to_string),
        Some(Err(m)) => {
            let known: Vec<&str> = catalog.moods.labels().collect();
            eprintln!("error: unknown mood \"{m}\" (expected one of: {})", known.join(", "));
            return 1;
        }
    };
    let client = match MealDbClient::new(settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let Some(outcome) = search_once(
        &client,
        &catalog,
        query,
        mood.as_deref(),
        SearchTuning::from(settings),
    )
    .await
    else {
        eprintln!("error: ingredient must not be empty");
        return 1;
    };

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    } else {
        for line in render_text(&outcome) {
            println!("{line}");
        }
    }
    i32::from(outcome.status == SearchStatus::Failed)
}
