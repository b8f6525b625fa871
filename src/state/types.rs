//! Core value types used by Happy Tummy state.

use crate::logic::{Categorized, SearchStatus};

/// Maximum ingredient/measure slots in a TheMealDB record.
pub const MAX_INGREDIENTS: usize = 20;

/// Minimal recipe entry from an ingredient search, used in result lists.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecipeSummary {
    /// TheMealDB meal id (`idMeal`).
    pub id: String,
    /// Recipe name (`strMeal`).
    pub name: String,
    /// Thumbnail image URL (`strMealThumb`); may be empty.
    pub thumbnail: String,
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IngredientLine {
    /// Ingredient name.
    pub ingredient: String,
    /// Quantity text such as "1 tbs", when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl std::fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.measure {
            Some(m) => write!(f, "{} - {m}", self.ingredient),
            None => f.write_str(&self.ingredient),
        }
    }
}

/// Full recipe record from `lookup.php`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecipeDetail {
    /// TheMealDB meal id.
    pub id: String,
    /// Recipe name.
    pub name: String,
    /// Category such as "Seafood".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine area such as "Italian".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Cooking instructions.
    pub instructions: String,
    /// Thumbnail image URL; may be empty.
    pub thumbnail: String,
    /// Ordered ingredient lines, at most [`MAX_INGREDIENTS`].
    pub ingredients: Vec<IngredientLine>,
    /// Comma-separated tags split into a list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Video link (YouTube), when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Original recipe page, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RecipeDetail {
    /// Card view of this recipe.
    #[must_use]
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

impl Categorized for RecipeDetail {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Search request sent from the UI to the search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic id; the newest id owns the session.
    pub id: u64,
    /// Raw input text.
    pub text: String,
    /// Selected mood label, if any.
    pub mood: Option<String>,
}

/// Progress report from the search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// A fetch for query `id` started.
    Started {
        /// Query id.
        id: u64,
    },
    /// Blank query: results and message dropped.
    Cleared {
        /// Query id.
        id: u64,
    },
    /// Intermediate notice (fallback about to be tried); results are left alone.
    Notice {
        /// Query id.
        id: u64,
        /// Message to show.
        status: SearchStatus,
    },
    /// Terminal outcome with the recipes to display (possibly empty).
    Finished {
        /// Query id.
        id: u64,
        /// Recipes to display.
        recipes: Vec<RecipeDetail>,
        /// Message to show.
        status: SearchStatus,
    },
}

impl SearchEvent {
    /// Query id this event belongs to.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Started { id }
            | Self::Cleared { id }
            | Self::Notice { id, .. }
            | Self::Finished { id, .. } => *id,
        }
    }
}

/// Content of the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailPayload {
    /// Lookup in flight for this id.
    Loading(String),
    /// Record loaded.
    Loaded(Box<RecipeDetail>),
    /// Lookup failed or the id does not exist.
    NotFound,
}
