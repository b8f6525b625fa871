//! Ingredient matching and query planning, free of I/O.

pub mod catalog;
pub mod matcher;
pub mod mood;
pub mod planner;
pub mod status;
pub mod suggest;

pub use catalog::{Catalog, MoodEntry, MoodTable};
pub use matcher::{FALLBACK_THRESHOLD, closest_match, resolve_fallback, similarity};
pub use mood::{Categorized, apply_mood_filter};
pub use planner::{DEFAULT_FALLBACK_DELAY, QueryPlan, plan_after_empty, plan_query};
pub use status::SearchStatus;
pub use suggest::{SuggestMode, filter_suggestions};
