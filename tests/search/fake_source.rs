//! In-memory recipe source used by the search tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use happytummy::sources::{RecipeSource, Result};
use happytummy::state::{RecipeDetail, RecipeSummary};

/// Recipes keyed by ingredient, with optional failures and latency for searches and lookups.
#[derive(Default)]
pub struct FakeSource {
    /// Ingredient (lowercase) to the recipes it finds.
    by_ingredient: HashMap<String, Vec<RecipeDetail>>,
    /// Ingredients whose search fails.
    failing: HashSet<String>,
    /// Delay applied to every search call.
    latency: Duration,
    /// Meal ids whose lookup fails.
    failing_lookups: HashSet<String>,
    /// Meal ids the search lists but the lookup cannot find.
    missing: HashSet<String>,
    /// Per-id delay applied to lookups.
    lookup_latency: HashMap<String, Duration>,
    /// Ids looked up so far, in call order.
    looked_up: Mutex<Vec<String>>,
    /// Terms searched so far, in call order.
    searched: Mutex<Vec<String>>,
}

/// Recipe with an id, name and category.
pub fn recipe(id: &str, name: &str, category: &str) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        name: name.to_string(),
        category: Some(category.to_string()),
        ..RecipeDetail::default()
    }
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ingredient: &str, recipes: Vec<RecipeDetail>) -> Self {
        self.by_ingredient.insert(ingredient.to_lowercase(), recipes);
        self
    }

    pub fn failing(mut self, ingredient: &str) -> Self {
        self.failing.insert(ingredient.to_lowercase());
        self
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing_lookup(mut self, id: &str) -> Self {
        self.failing_lookups.insert(id.to_string());
        self
    }

    pub fn missing(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    pub fn lookup_latency(mut self, id: &str, latency: Duration) -> Self {
        self.lookup_latency.insert(id.to_string(), latency);
        self
    }

    pub fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().expect("lock").clone()
    }

    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().expect("lock").clone()
    }

    fn find(&self, id: &str) -> Option<RecipeDetail> {
        self.by_ingredient
            .values()
            .flatten()
            .find(|r| r.id == id)
            .cloned()
    }
}

impl RecipeSource for FakeSource {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<RecipeSummary>> {
        let key = ingredient.to_lowercase();
        self.searched.lock().expect("lock").push(key.clone());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failing.contains(&key) {
            return Err(format!("search for {key} failed").into());
        }
        Ok(self
            .by_ingredient
            .get(&key)
            .map(|rs| rs.iter().map(RecipeDetail::summary).collect())
            .unwrap_or_default())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>> {
        self.looked_up.lock().expect("lock").push(id.to_string());
        if let Some(delay) = self.lookup_latency.get(id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_lookups.contains(id) {
            return Err(format!("lookup of {id} failed").into());
        }
        if self.missing.contains(id) {
            return Ok(None);
        }
        Ok(self.find(id))
    }
}
