//! TheMealDB JSON payloads to typed records.

use serde_json::Value;

use crate::state::{IngredientLine, MAX_INGREDIENTS, RecipeDetail, RecipeSummary};
use crate::util::{opt_s, s};

/// Entries of the `meals` array; `meals: null` or a missing key reads as empty.
fn meals(v: &Value) -> &[Value] {
    v.get("meals")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}

/// What: Parse a `filter.php` response.
///
/// Inputs:
/// - `v`: Response body.
///
/// Output:
/// - Summaries in API order; entries without an id or name are skipped.
#[must_use]
pub fn parse_summaries(v: &Value) -> Vec<RecipeSummary> {
    meals(v)
        .iter()
        .filter_map(|m| {
            let id = opt_s(m, "idMeal")?;
            let name = opt_s(m, "strMeal")?;
            Some(RecipeSummary {
                id,
                name,
                thumbnail: s(m, "strMealThumb"),
            })
        })
        .collect()
}

/// What: Parse one full meal object.
///
/// Inputs:
/// - `m`: A `meals[i]` object from `lookup.php`.
///
/// Output:
/// - `Some(detail)`, or `None` when the object has no id.
///
/// Details:
/// - Reads `strIngredient1..=20` / `strMeasure1..=20`; a slot counts only when its
///   ingredient is non-blank, and order is kept.
#[must_use]
pub fn parse_meal(m: &Value) -> Option<RecipeDetail> {
    let id = opt_s(m, "idMeal")?;
    let ingredients = (1..=MAX_INGREDIENTS)
        .filter_map(|n| {
            let ingredient = opt_s(m, &format!("strIngredient{n}"))?;
            Some(IngredientLine {
                ingredient,
                measure: opt_s(m, &format!("strMeasure{n}")),
            })
        })
        .collect();
    let tags = opt_s(m, "strTags")
        .map(|t| {
            t.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some(RecipeDetail {
        id,
        name: s(m, "strMeal"),
        category: opt_s(m, "strCategory"),
        area: opt_s(m, "strArea"),
        instructions: s(m, "strInstructions"),
        thumbnail: s(m, "strMealThumb"),
        ingredients,
        tags,
        video: opt_s(m, "strYoutube"),
        source: opt_s(m, "strSource"),
    })
}

/// What: Parse a `lookup.php` response.
///
/// Inputs:
/// - `v`: Response body.
///
/// Output:
/// - The first meal, or `None` for `meals: null`, an empty array or an id-less record.
#[must_use]
pub fn parse_detail(v: &Value) -> Option<RecipeDetail> {
    meals(v).first().and_then(parse_meal)
}
