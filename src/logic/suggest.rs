//! Autocomplete suggestions for the ingredient input.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// How the suggestion dropdown matches typed text against known ingredients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuggestMode {
    /// Case-insensitive substring, list order.
    #[default]
    Contains,
    /// fzf-style subsequence match, best score first.
    Fuzzy,
}

impl SuggestMode {
    /// Parse a settings value (`contains` / `fuzzy`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" | "substring" => Some(Self::Contains),
            "fuzzy" | "fzf" => Some(Self::Fuzzy),
            _ => None,
        }
    }

    /// Settings value for this mode.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// What: Suggestions to show for the current input.
///
/// Inputs:
/// - `input`: Text typed so far.
/// - `list`: Known ingredient names.
/// - `mode`: Matching strategy.
///
/// Output:
/// - Matching names; empty when the input is blank.
///
/// Details:
/// - `Fuzzy` sorts by descending skim score; equal scores keep list order.
#[must_use]
pub fn filter_suggestions(input: &str, list: &[String], mode: SuggestMode) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    match mode {
        SuggestMode::Contains => {
            let needle = input.to_lowercase();
            list.iter()
                .filter(|item| item.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        SuggestMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            let needle = input.trim();
            let mut scored: Vec<(i64, &String)> = list
                .iter()
                .filter_map(|item| matcher.fuzzy_match(item, needle).map(|s| (s, item)))
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored.into_iter().map(|(_, item)| item.clone()).collect()
        }
    }
}
