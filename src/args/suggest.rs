//! Command-line autocomplete.

use crate::config::Settings;
use crate::logic::filter_suggestions;

/// What: Handle `--suggest`, printing matching ingredients.
///
/// Inputs:
/// - `prefix`: Typed text.
/// - `json`: Print a JSON array.
/// - `settings`: Supplies the suggestion mode.
///
/// Output:
/// - Exit code 0; 1 only when JSON encoding fails.
pub fn handle_suggest(prefix: &str, json: bool, settings: &Settings) -> i32 {
    let catalog = settings.catalog();
    let matches = filter_suggestions(prefix, &catalog.suggestions, settings.suggest_mode);
    tracing::debug!(prefix = %prefix, count = matches.len(), "suggestions requested from CLI");
    if json {
        match serde_json::to_string(&matches) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    } else {
        for m in matches {
            println!("{m}");
        }
    }
    0
}
