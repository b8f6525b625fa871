//! Search-then-lookup pipeline against the in-memory source.

use std::time::Duration;

use happytummy::logic::MoodTable;
use happytummy::sources::{SearchBatch, run_search};

use super::fake_source::{FakeSource, recipe};

fn names(batch: &SearchBatch) -> Vec<&str> {
    match batch {
        SearchBatch::Found { recipes, .. } => recipes.iter().map(|r| r.name.as_str()).collect(),
        SearchBatch::Empty => panic!("expected recipes, got Empty"),
    }
}

fn three_lamb_recipes() -> FakeSource {
    FakeSource::new().with(
        "lamb",
        vec![
            recipe("1", "Lamb tagine", "Lamb"),
            recipe("2", "Lamb kofta", "Lamb"),
            recipe("3", "Lamb hotpot", "Lamb"),
        ],
    )
}

#[tokio::test]
/// What: Lookups finishing out of order still yield recipes in search order.
///
/// Inputs:
/// - Three hits whose lookups take 60 ms, 0 ms and 30 ms, run three at a time.
///
/// Output:
/// - Recipes in the order the search listed them.
async fn lookups_keep_search_order() {
    let source = three_lamb_recipes()
        .lookup_latency("1", Duration::from_millis(60))
        .lookup_latency("3", Duration::from_millis(30));
    let batch = run_search(&source, "lamb", None, &MoodTable::default(), 3)
        .await
        .expect("search");
    assert_eq!(names(&batch), vec!["Lamb tagine", "Lamb kofta", "Lamb hotpot"]);
    assert_eq!(source.looked_up().len(), 3);
}

#[tokio::test]
async fn missing_lookup_is_dropped() {
    let source = three_lamb_recipes().missing("2");
    let batch = run_search(&source, "lamb", None, &MoodTable::default(), 2)
        .await
        .expect("search");
    assert_eq!(names(&batch), vec!["Lamb tagine", "Lamb hotpot"]);
}

#[tokio::test]
/// What: One failing lookup fails the whole search.
///
/// Inputs:
/// - Three hits; the middle lookup errors.
///
/// Output:
/// - `Err` instead of a partial list.
async fn failed_lookup_fails_search() {
    let source = three_lamb_recipes().failing_lookup("2");
    let result = run_search(&source, "lamb", None, &MoodTable::default(), 3).await;
    assert!(result.is_err());
}
