//! Command-line argument definition and processing.

use clap::Parser;

use crate::config::Settings;

/// Happy Tummy - find what to cook from the ingredients in your fridge
#[derive(Parser, Debug, Default)]
#[command(name = "happytummy")]
#[command(version)]
#[command(about = "Find what to cook from the ingredients in your fridge", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search recipes for an ingredient and print them
    #[arg(short, long, value_name = "INGREDIENT")]
    pub search: Option<String>,

    /// Mood filter for --search (e.g. "Light Meal")
    #[arg(short, long, requires = "search")]
    pub mood: Option<String>,

    /// Print the full recipe for a meal id
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// Print autocomplete suggestions for a prefix
    #[arg(long, value_name = "PREFIX")]
    pub suggest: Option<String>,

    /// Print one-shot output as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the recipe API base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

impl Args {
    /// Whether a one-shot mode was requested instead of the TUI.
    #[must_use]
    pub const fn is_one_shot(&self) -> bool {
        self.search.is_some() || self.show.is_some() || self.suggest.is_some()
    }
}

/// What: Apply command-line overrides on top of loaded settings.
///
/// Details:
/// - `--api-base` replaces the configured base URL; a trailing `/` is dropped.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(base) = &args.api_base {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            settings.api_base_url = base.to_string();
        }
    }
}

/// What: Run the requested one-shot mode, if any.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings after overrides.
///
/// Output:
/// - `Some(exit_code)` when a one-shot mode ran; `None` to continue into the TUI.
///
/// Details:
/// - Precedence: `--search`, then `--show`, then `--suggest`.
pub async fn process_args(args: &Args, settings: &Settings) -> Option<i32> {
    use crate::args::{search, show, suggest};

    if let Some(query) = &args.search {
        return Some(search::handle_search(query, args.mood.as_deref(), args.json, settings).await);
    }
    if let Some(id) = &args.show {
        return Some(show::handle_show(id, args.json, settings).await);
    }
    if let Some(prefix) = &args.suggest {
        return Some(suggest::handle_suggest(prefix, args.json, settings));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: One-shot flags parse and the mood requires a search.
    ///
    /// Inputs:
    /// - `-s rice -m "Light Meal" --json`, then `-m "Light Meal"` alone.
    ///
    /// Output:
    /// - The first parses into a one-shot search; the second is rejected.
    fn parses_search_with_mood() {
        let a = Args::try_parse_from(["happytummy", "-s", "rice", "-m", "Light Meal", "--json"])
            .expect("parse");
        assert_eq!(a.search.as_deref(), Some("rice"));
        assert_eq!(a.mood.as_deref(), Some("Light Meal"));
        assert!(a.json && a.is_one_shot());
        assert_eq!(a.log_level, "info");

        assert!(Args::try_parse_from(["happytummy", "-m", "Light Meal"]).is_err());
        assert!(!Args::try_parse_from(["happytummy"]).expect("parse").is_one_shot());
    }

    #[test]
    fn api_base_override_trims_slash() {
        let a = Args::try_parse_from(["happytummy", "--api-base", "http://localhost:9/api/"])
            .expect("parse");
        let mut s = Settings::default();
        apply_overrides(&a, &mut s);
        assert_eq!(s.api_base_url, "http://localhost:9/api");
    }
}
