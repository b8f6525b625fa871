//! TheMealDB retrieval: HTTP client, payload parsing and the search pipeline.

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::state::{RecipeDetail, RecipeSummary};
use crate::util::percent_encode;

mod parse;
mod search;

pub use parse::{parse_detail, parse_meal, parse_summaries};
pub use search::{SearchBatch, run_search};

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Where recipes come from.
///
/// Implemented by [`MealDbClient`] for the live API; tests provide in-memory sources.
pub trait RecipeSource: Send + Sync + 'static {
    /// What: Recipes that use `ingredient` (`filter.php?i=`).
    ///
    /// Output:
    /// - Summaries in API order; empty when the API reports no meals.
    ///
    /// # Errors
    /// - Transport failures, non-success status, undecodable body
    fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>>> + Send;

    /// What: Full record for a meal id (`lookup.php?i=`).
    ///
    /// Output:
    /// - `Ok(None)` when the API has no such meal.
    ///
    /// # Errors
    /// - Transport failures, non-success status, undecodable body
    fn lookup(&self, id: &str) -> impl Future<Output = Result<Option<RecipeDetail>>> + Send;
}

/// HTTP client for the TheMealDB JSON API with an in-memory detail cache.
#[derive(Clone)]
pub struct MealDbClient {
    /// Pooled reqwest client.
    http: reqwest::Client,
    /// API root without trailing slash.
    base_url: String,
    /// Recently looked-up recipes by meal id.
    cache: Arc<Mutex<LruCache<String, RecipeDetail>>>,
}

impl MealDbClient {
    /// What: Build a client from settings.
    ///
    /// Inputs:
    /// - `settings`: Base URL, timeout and cache size.
    ///
    /// Output:
    /// - A ready client.
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be built (TLS backend init failure).
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.request_timeout().min(std::time::Duration::from_secs(10)))
            .timeout(settings.request_timeout())
            .user_agent(format!("happytummy/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let capacity = NonZeroUsize::new(settings.detail_cache_size).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for an ingredient search.
    #[must_use]
    pub fn filter_url(&self, ingredient: &str) -> String {
        format!("{}/filter.php?i={}", self.base_url, percent_encode(ingredient))
    }

    /// URL for a meal lookup.
    #[must_use]
    pub fn lookup_url(&self, id: &str) -> String {
        format!("{}/lookup.php?i={}", self.base_url, percent_encode(id))
    }

    /// What: GET a URL and decode its JSON body.
    ///
    /// # Errors
    /// - Network failures, non-2xx status, invalid JSON
    async fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url, "mealdb returned non-success status");
            return Err(format!("mealdb status {status}").into());
        }
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), url, "fetched mealdb payload");
        Ok(serde_json::from_str(&body)?)
    }

    /// Cached detail for `id`, refreshing its recency.
    fn cached(&self, id: &str) -> Option<RecipeDetail> {
        self.cache.lock().ok()?.get(id).cloned()
    }

    /// Remember a fetched detail.
    fn remember(&self, detail: &RecipeDetail) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(detail.id.clone(), detail.clone());
        }
    }
}

impl RecipeSource for MealDbClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<RecipeSummary>> {
        let v = self.get_json(&self.filter_url(ingredient)).await?;
        let items = parse_summaries(&v);
        info!(ingredient, count = items.len(), "ingredient search finished");
        Ok(items)
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>> {
        if let Some(hit) = self.cached(id) {
            debug!(id, "detail cache hit");
            return Ok(Some(hit));
        }
        let v = self.get_json(&self.lookup_url(id)).await?;
        let detail = parse_detail(&v);
        if let Some(d) = &detail {
            self.remember(d);
        }
        Ok(detail)
    }
}
