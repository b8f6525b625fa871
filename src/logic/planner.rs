//! Query planning: what to fetch for a query, and what to do when it finds nothing.

use std::time::Duration;

use crate::logic::{Catalog, resolve_fallback};

/// Delay before the single fallback retry fires.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(800);

/// Next step for the search box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryPlan {
    /// Input is blank: drop results and message.
    Clear,
    /// Query the API for `term`.
    Fetch {
        /// Trimmed search term.
        term: String,
        /// Whether this fetch is already the fallback hop.
        fallback: bool,
    },
    /// Nothing found; try `term` once after `delay`.
    RetryAfterDelay {
        /// Wait before the retry.
        delay: Duration,
        /// Substitute term.
        term: String,
    },
    /// Nothing found and nothing left to try.
    NoResults {
        /// The term that found nothing.
        term: String,
    },
}

/// What: Plan the fetch for a freshly submitted query.
///
/// Inputs:
/// - `query`: Raw input text.
/// - `previous_attempt_was_fallback`: `true` when this query is itself the fallback hop.
///
/// Output:
/// - `Clear` for blank input, else `Fetch` with the trimmed term.
#[must_use]
pub fn plan_query(query: &str, previous_attempt_was_fallback: bool) -> QueryPlan {
    let term = query.trim();
    if term.is_empty() {
        return QueryPlan::Clear;
    }
    QueryPlan::Fetch {
        term: term.to_string(),
        fallback: previous_attempt_was_fallback,
    }
}

/// What: Plan the follow-up for a fetch that returned zero recipes.
///
/// Inputs:
/// - `term`: The term that found nothing.
/// - `previous_attempt_was_fallback`: Whether that fetch was already the fallback hop.
/// - `catalog`: Suggestion and synonym tables.
/// - `delay`: Wait before a retry.
///
/// Output:
/// - `RetryAfterDelay` with a substitute term, or `NoResults`.
///
/// Details:
/// - A fallback fetch never schedules another retry, so there is at most one hop.
#[must_use]
pub fn plan_after_empty(
    term: &str,
    previous_attempt_was_fallback: bool,
    catalog: &Catalog,
    delay: Duration,
) -> QueryPlan {
    if previous_attempt_was_fallback {
        return QueryPlan::NoResults {
            term: term.to_string(),
        };
    }
    match resolve_fallback(term, &catalog.suggestions, &catalog.synonyms) {
        Some(next) => QueryPlan::RetryAfterDelay { delay, term: next },
        None => QueryPlan::NoResults {
            term: term.to_string(),
        },
    }
}
