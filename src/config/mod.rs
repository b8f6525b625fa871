//! User settings loaded from `settings.conf`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::logic::{Catalog, DEFAULT_FALLBACK_DELAY, SuggestMode};

mod parse_settings;
mod paths;

pub use parse_settings::parse_settings;
pub use paths::{CONFIG_PATH_ENV, config_dir, logs_dir};

/// TheMealDB free-tier API root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Runtime settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// API root without trailing slash.
    pub api_base_url: String,
    /// Whole-request timeout for API calls.
    pub request_timeout_secs: u64,
    /// Wait before the fallback retry.
    pub fallback_delay_ms: u64,
    /// Parallel `lookup.php` calls per search.
    pub lookup_concurrency: usize,
    /// Recipe details kept in memory.
    pub detail_cache_size: usize,
    /// Autocomplete matching strategy.
    pub suggest_mode: SuggestMode,
    /// Mood preselected at startup.
    pub default_mood: Option<String>,
    /// Extra `(alternate, target)` synonyms.
    pub synonyms: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 15,
            fallback_delay_ms: u64::try_from(DEFAULT_FALLBACK_DELAY.as_millis()).unwrap_or(800),
            lookup_concurrency: 8,
            detail_cache_size: 256,
            suggest_mode: SuggestMode::Contains,
            default_mood: None,
            synonyms: Vec::new(),
        }
    }
}

impl Settings {
    /// Delay before the fallback retry.
    #[must_use]
    pub const fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    /// Request timeout for API calls.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Planner tables including user synonyms.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::with_synonyms(&self.synonyms)
    }

    /// What: Clamp values that would make the app unusable.
    ///
    /// Details:
    /// - Concurrency, cache size and timeout have a floor of 1.
    pub fn normalize(&mut self) {
        self.lookup_concurrency = self.lookup_concurrency.max(1);
        self.detail_cache_size = self.detail_cache_size.max(1);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings.conf path.
///
/// Output:
/// - Parsed and normalized settings; defaults when the file is unreadable.
#[must_use]
pub fn load_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf unreadable, using defaults"
            );
        }
    }
    out.normalize();
    out
}

/// What: Load user settings from the config directory.
///
/// Inputs:
/// - None (reads `$HAPPYTUMMY_CONFIG` or `settings.conf` under HOME/XDG if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing.
#[must_use]
pub fn settings() -> Settings {
    paths::resolve_settings_config_path().map_or_else(
        || {
            debug!("[Config] No settings.conf found, using defaults");
            Settings::default()
        },
        |p| load_from(&p),
    )
}
