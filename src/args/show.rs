//! Command-line recipe detail.

use crate::args::utils::plain_lines;
use crate::config::Settings;
use crate::sources::{MealDbClient, RecipeSource};
use crate::ui::detail_lines;

/// What: Handle `--show`, printing one recipe.
///
/// Inputs:
/// - `id`: Meal id.
/// - `json`: Print the record as JSON (`null` when missing).
/// - `settings`: Loaded settings.
///
/// Output:
/// - Exit code: 0 when printed, 1 when the recipe is missing or the lookup fails.
///
/// Details:
/// - Text output uses the same lines as the TUI detail view.
pub async fn handle_show(id: &str, json: bool, settings: &Settings) -> i32 {
    tracing::info!(id = %id, "show mode requested from CLI");
    let client = match MealDbClient::new(settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let detail = match client.lookup(id.trim()).await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "recipe lookup failed");
            None
        }
    };
    if json {
        match serde_json::to_string_pretty(&detail) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
        return i32::from(detail.is_none());
    }
    let Some(detail) = detail else {
        println!("Recipe not found.");
        return 1;
    };
    for line in plain_lines(&detail_lines(&detail)) {
        println!("{line}");
    }
    0
}
