//! Command-line search against the in-memory source.

use std::time::Duration;

use happytummy::app::workers::SearchTuning;
use happytummy::args::search::{render_text, search_once};
use happytummy::logic::{Catalog, SearchStatus};

use super::fake_source::{FakeSource, recipe};

const TUNING: SearchTuning = SearchTuning {
    fallback_delay: Duration::from_millis(5),
    lookup_concurrency: 2,
};

#[tokio::test]
/// What: One-shot search follows the same single fallback hop.
///
/// Inputs:
/// - `chickem` (typo, no recipes); `chicken` has two.
///
/// Output:
/// - Notice naming `chicken`, then both recipes in API order.
async fn one_shot_follows_fallback() {
    let source = FakeSource::new().with(
        "chicken",
        vec![
            recipe("10", "Chicken curry", "Chicken"),
            recipe("11", "Chicken salad", "Chicken"),
        ],
    );
    let out = search_once(&source, &Catalog::default(), "chickem", None, TUNING)
        .await
        .expect("non-blank");
    assert_eq!(
        out.notice,
        Some(SearchStatus::TryingFallback {
            query: "chickem".into(),
            next: "chicken".into()
        })
    );
    let lines = render_text(&out);
    assert_eq!(lines[1], "Showing recipes for \"chicken\".");
    assert_eq!(lines[2], "10\tChicken curry\tChicken\t-");
    assert_eq!(lines.len(), 4);
}

#[tokio::test]
async fn one_shot_blank_and_missing() {
    let source = FakeSource::new();
    let catalog = Catalog::default();
    assert!(search_once(&source, &catalog, "  ", None, TUNING).await.is_none());

    let out = search_once(&source, &catalog, "xyz123", None, TUNING)
        .await
        .expect("non-blank");
    assert_eq!(out.notice, None);
    assert_eq!(
        out.status.to_string(),
        "No recipes found for \"xyz123\". Try another ingredient."
    );
    assert_eq!(source.searched(), vec!["xyz123"]);
}
