//! User-visible outcome messages of a search.

use std::fmt;

/// Message shown under the search box after a search step.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchStatus {
    /// Recipes found (and, with a mood, at least one matched it).
    Showing {
        /// Selected mood, if any.
        mood: Option<String>,
        /// Term that produced the results.
        query: String,
    },
    /// A mood was selected but nothing matched; all recipes are shown.
    NoMoodMatch {
        /// Selected mood.
        mood: String,
        /// Term that produced the results.
        query: String,
    },
    /// Nothing found; a substitute term is about to be tried.
    TryingFallback {
        /// Term that found nothing.
        query: String,
        /// Term tried next.
        next: String,
    },
    /// Nothing found and nothing else to try.
    NoResults {
        /// Term that found nothing.
        query: String,
    },
    /// Network or parse failure.
    Failed,
}

impl SearchStatus {
    /// What: Status for a search that returned recipes.
    ///
    /// Inputs:
    /// - `query`: Term that produced the results.
    /// - `mood`: Mood captured with the query.
    /// - `used_fallback_all`: The mood filter matched nothing and all recipes were kept.
    ///
    /// Output:
    /// - `NoMoodMatch` when a mood was set and matched nothing, `Showing` otherwise.
    #[must_use]
    pub fn found(query: &str, mood: Option<&str>, used_fallback_all: bool) -> Self {
        match mood {
            Some(mood) if used_fallback_all => Self::NoMoodMatch {
                mood: mood.to_string(),
                query: query.to_string(),
            },
            _ => Self::Showing {
                mood: mood.map(str::to_string),
                query: query.to_string(),
            },
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Showing { mood, query } => match mood {
                Some(m) => write!(f, "Showing {m} recipes for \"{query}\"."),
                None => write!(f, "Showing recipes for \"{query}\"."),
            },
            Self::NoMoodMatch { mood, query } => write!(
                f,
                "No {mood} recipes found. Showing all recipes for \"{query}\"."
            ),
            Self::TryingFallback { query, next } => write!(
                f,
                "No recipes found for \"{query}\". Trying \"{next}\" instead..."
            ),
            Self::NoResults { query } => write!(
                f,
                "No recipes found for \"{query}\". Try another ingredient."
            ),
            Self::Failed => f.write_str("Something went wrong. Please try again later."),
        }
    }
}
