//! Static ingredient tables: autocomplete suggestions, synonyms and moods.

use std::collections::HashMap;

/// Known ingredient names offered as autocomplete and used for similarity fallback.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "egg",
    "milk",
    "cheese",
    "banana",
    "tomato",
    "potato",
    "onion",
    "rice",
    "fish",
    "bread",
    "chocolate",
    "carrot",
    "spinach",
    "beans",
    "mushroom",
    "corn",
    "broccoli",
];

/// Alternate ingredient name (lowercase) mapped to a related name worth trying instead.
pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("paneer", "cheese"),
    ("curd", "yogurt"),
    ("yogurt", "milk"),
    ("mutton", "beef"),
    ("beef", "chicken"),
];

/// Mood labels in dropdown order with the category/name keywords each one keeps.
pub const DEFAULT_MOODS: &[(&str, &[&str])] = &[
    ("Comfort Food", &["Beef", "Pork", "Chicken", "Lamb", "Pasta"]),
    ("Light Meal", &["Seafood", "Vegetarian", "Salad"]),
    ("Quick Snack", &["Dessert", "Breakfast", "Side", "Snack"]),
];

/// One mood and the keywords a recipe must contain (category or name) to match it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodEntry {
    /// Label shown in the mood selector, e.g. "Light Meal".
    pub label: String,
    /// Keywords matched case-insensitively as substrings.
    pub keywords: Vec<String>,
}

/// Ordered mood label to keyword table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodTable {
    /// Entries in selector order.
    entries: Vec<MoodEntry>,
}

impl MoodTable {
    /// What: Build a table from `(label, keywords)` pairs, keeping their order.
    ///
    /// Inputs:
    /// - `entries`: Label and keyword slices.
    ///
    /// Output:
    /// - The mood table.
    #[must_use]
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(label, keywords)| MoodEntry {
                    label: (*label).to_string(),
                    keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Keywords for an exact mood label, `None` when the label is unknown.
    #[must_use]
    pub fn keywords(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.keywords.as_slice())
    }

    /// Mood labels in selector order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Number of moods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no moods at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label at `index` in selector order.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.label.as_str())
    }

    /// What: Find a mood by label, ignoring ASCII case.
    ///
    /// Inputs:
    /// - `label`: User-provided label (CLI flag or settings value).
    ///
    /// Output:
    /// - The position of the mood in selector order, or `None`.
    #[must_use]
    pub fn position_of(&self, label: &str) -> Option<usize> {
        let wanted = label.trim();
        self.entries
            .iter()
            .position(|e| e.label.eq_ignore_ascii_case(wanted))
    }
}

impl Default for MoodTable {
    fn default() -> Self {
        Self::new(DEFAULT_MOODS)
    }
}

/// Static tables the query planner consults.
///
/// Details:
/// - Built once at startup from the built-in constants plus user synonyms from settings.
/// - Shared read-only between the UI loop and the search worker.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Ordered autocomplete and similarity candidates.
    pub suggestions: Vec<String>,
    /// Lowercase alternate name to replacement term.
    pub synonyms: HashMap<String, String>,
    /// Mood filter table.
    pub moods: MoodTable,
}

impl Catalog {
    /// What: Build the built-in catalog extended with user synonyms.
    ///
    /// Inputs:
    /// - `extra_synonyms`: `(alternate, target)` pairs from settings.
    ///
    /// Output:
    /// - A catalog where user entries override built-in entries with the same key.
    ///
    /// Details:
    /// - Keys are lowercased and trimmed; empty keys or targets are skipped.
    #[must_use]
    pub fn with_synonyms(extra_synonyms: &[(String, String)]) -> Self {
        let mut catalog = Self::default();
        for (alt, target) in extra_synonyms {
            let key = alt.trim().to_lowercase();
            let value = target.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            catalog.synonyms.insert(key, value.to_string());
        }
        catalog
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect(),
            synonyms: DEFAULT_SYNONYMS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            moods: MoodTable::default(),
        }
    }
}
