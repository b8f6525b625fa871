//! Application state and the value types it is built from.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, Focus, View};
pub use types::{
    DetailPayload, IngredientLine, MAX_INGREDIENTS, QueryInput, RecipeDetail, RecipeSummary,
    SearchEvent,
};
