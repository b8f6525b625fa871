//! Fallback planning through the public API.

use std::time::Duration;

use happytummy::logic::{
    Catalog, MoodTable, QueryPlan, apply_mood_filter, plan_after_empty, plan_query,
    resolve_fallback,
};

use super::fake_source::recipe;

fn resolve(q: &str) -> Option<String> {
    let c = Catalog::default();
    resolve_fallback(q, &c.suggestions, &c.synonyms)
}

#[test]
/// What: Synonyms win, near-typos resolve, unrelated words do not.
///
/// Inputs:
/// - `paneer`, `chiken`, `chickem`, `xyz123`.
///
/// Output:
/// - `cheese`, `None`, `chicken`, `None`.
fn fallback_resolution() {
    assert_eq!(resolve("paneer").as_deref(), Some("cheese"));
    assert_eq!(resolve("PANEER").as_deref(), Some("cheese"));
    assert_eq!(resolve("chiken"), None);
    assert_eq!(resolve("chickem").as_deref(), Some("chicken"));
    assert_eq!(resolve("xyz123"), None);
}

#[test]
fn fallback_fetch_never_retries() {
    let c = Catalog::default();
    for term in ["paneer", "chickem", "xyz123", "beef"] {
        assert_eq!(
            plan_after_empty(term, true, &c, Duration::from_millis(800)),
            QueryPlan::NoResults {
                term: term.to_string()
            }
        );
    }
    assert_eq!(
        plan_after_empty("paneer", false, &c, Duration::from_millis(5)),
        QueryPlan::RetryAfterDelay {
            delay: Duration::from_millis(5),
            term: "cheese".into()
        }
    );
}

#[test]
fn blank_query_clears() {
    assert_eq!(plan_query("  \t", false), QueryPlan::Clear);
    assert_eq!(
        plan_query("  rice ", false),
        QueryPlan::Fetch {
            term: "rice".into(),
            fallback: false
        }
    );
}

#[test]
/// What: Light Meal keeps seafood, vegetarian and salad recipes only.
///
/// Inputs:
/// - Mixed categories; then a list with no light recipes.
///
/// Output:
/// - Filtered list without the flag; then the whole list with the flag.
fn light_meal_filter() {
    let moods = MoodTable::default();
    let all = vec![
        recipe("1", "Beef stew", "Beef"),
        recipe("2", "Garlic prawns", "Seafood"),
        recipe("3", "Greek salad", "Side"),
        recipe("4", "Pancakes", "Dessert"),
    ];
    let (kept, used_all) = apply_mood_filter(all, Some("Light Meal"), &moods);
    let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert!(!used_all);

    let heavy = vec![recipe("1", "Beef stew", "Beef"), recipe("5", "Pork pie", "Pork")];
    let (kept, used_all) = apply_mood_filter(heavy.clone(), Some("Light Meal"), &moods);
    assert_eq!(kept, heavy);
    assert!(used_all);
}
