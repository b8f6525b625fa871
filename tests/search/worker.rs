//! Search worker end to end: queries in, events out.

use std::sync::Arc;
use std::time::Duration;

use happytummy::app::workers::{SearchTuning, spawn_search_worker};
use happytummy::logic::{Catalog, SearchStatus, SuggestMode};
use happytummy::state::{AppState, QueryInput, SearchEvent};
use tokio::sync::mpsc;
use tokio::time::timeout;

use super::fake_source::{FakeSource, recipe};

/// Channels wired to a running worker.
struct Harness {
    source: Arc<FakeSource>,
    query_tx: mpsc::UnboundedSender<QueryInput>,
    event_rx: mpsc::UnboundedReceiver<SearchEvent>,
}

fn start(source: FakeSource, fallback_delay: Duration) -> Harness {
    let source = Arc::new(source);
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    spawn_search_worker(
        Arc::clone(&source),
        Arc::new(Catalog::default()),
        SearchTuning {
            fallback_delay,
            lookup_concurrency: 4,
        },
        query_rx,
        event_tx,
    );
    Harness {
        source,
        query_tx,
        event_rx,
    }
}

fn query(id: u64, text: &str, mood: Option<&str>) -> QueryInput {
    QueryInput {
        id,
        text: text.to_string(),
        mood: mood.map(str::to_string),
    }
}

impl Harness {
    async fn next(&mut self) -> SearchEvent {
        timeout(Duration::from_secs(5), self.event_rx.recv())
            .await
            .expect("event in time")
            .expect("worker alive")
    }

    /// Events up to and including the first `Finished` for `id`.
    async fn until_finished(&mut self, id: u64) -> Vec<SearchEvent> {
        let mut seen = Vec::new();
        loop {
            let ev = self.next().await;
            let done = matches!(&ev, SearchEvent::Finished { id: got, .. } if *got == id);
            seen.push(ev);
            if done {
                return seen;
            }
        }
    }
}

fn final_status(events: &[SearchEvent]) -> (&SearchStatus, Vec<&str>) {
    match events.last() {
        Some(SearchEvent::Finished {
            status, recipes, ..
        }) => (status, recipes.iter().map(|r| r.name.as_str()).collect()),
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[tokio::test]
/// What: A query with no hits announces and runs the synonym fallback.
///
/// Inputs:
/// - `paneer` (no recipes); `cheese` has one.
///
/// Output:
/// - Started, TryingFallback notice, Started, Finished showing the cheese recipe.
async fn empty_query_falls_back_once() {
    let mut h = start(
        FakeSource::new().with("cheese", vec![recipe("1", "Cheese toastie", "Snack")]),
        Duration::from_millis(10),
    );
    h.query_tx.send(query(1, "paneer", None)).expect("send");
    let events = h.until_finished(1).await;
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], SearchEvent::Started { id: 1 });
    assert_eq!(
        events[1],
        SearchEvent::Notice {
            id: 1,
            status: SearchStatus::TryingFallback {
                query: "paneer".into(),
                next: "cheese".into()
            }
        }
    );
    let (status, names) = final_status(&events);
    assert_eq!(
        status,
        &SearchStatus::Showing {
            mood: None,
            query: "cheese".into()
        }
    );
    assert_eq!(names, vec!["Cheese toastie"]);
    assert_eq!(h.source.searched(), vec!["paneer", "cheese"]);
}

#[tokio::test]
async fn failed_fallback_stops_after_one_hop() {
    let mut h = start(FakeSource::new(), Duration::from_millis(5));
    h.query_tx.send(query(1, "beef", None)).expect("send");
    let events = h.until_finished(1).await;
    let (status, names) = final_status(&events);
    assert_eq!(
        status,
        &SearchStatus::NoResults {
            query: "chicken".into()
        }
    );
    assert!(names.is_empty());
    assert_eq!(h.source.searched(), vec!["beef", "chicken"]);
}

#[tokio::test]
/// What: A new query cancels the pending fallback of the previous one.
///
/// Inputs:
/// - `paneer` with a long fallback delay, then `rice` right after the notice.
///
/// Output:
/// - `rice` finishes; `cheese` is never searched and no stray events follow.
async fn new_query_cancels_pending_fallback() {
    let mut h = start(
        FakeSource::new()
            .with("cheese", vec![recipe("1", "Cheese toastie", "Snack")])
            .with("rice", vec![recipe("2", "Kedgeree", "Seafood")]),
        Duration::from_millis(300),
    );
    h.query_tx.send(query(1, "paneer", None)).expect("send");
    loop {
        if matches!(h.next().await, SearchEvent::Notice { id: 1, .. }) {
            break;
        }
    }
    h.query_tx.send(query(2, "rice", None)).expect("send");
    let events = h.until_finished(2).await;
    assert_eq!(final_status(&events).1, vec!["Kedgeree"]);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(h.event_rx.try_recv().is_err());
    assert_eq!(h.source.searched(), vec!["paneer", "rice"]);
}

#[tokio::test]
async fn search_error_reports_failure() {
    let mut h = start(FakeSource::new().failing("salmon"), Duration::from_millis(5));
    h.query_tx.send(query(1, "salmon", None)).expect("send");
    let events = h.until_finished(1).await;
    let (status, names) = final_status(&events);
    assert_eq!(status, &SearchStatus::Failed);
    assert_eq!(
        status.to_string(),
        "Something went wrong. Please try again later."
    );
    assert!(names.is_empty());
}

#[tokio::test]
async fn failed_lookup_reports_failure() {
    let mut h = start(
        FakeSource::new()
            .with(
                "egg",
                vec![
                    recipe("1", "Shakshuka", "Vegetarian"),
                    recipe("2", "Egg fried rice", "Side"),
                ],
            )
            .failing_lookup("2"),
        Duration::from_millis(5),
    );
    h.query_tx.send(query(1, "egg", None)).expect("send");
    let events = h.until_finished(1).await;
    let (status, names) = final_status(&events);
    assert_eq!(status, &SearchStatus::Failed);
    assert!(names.is_empty());
}

#[tokio::test]
/// What: A query superseded by a blank one before it runs leaves the UI idle.
///
/// Inputs:
/// - `paneer` (empty, would fall back) and a blank query sent back to back.
///
/// Output:
/// - The folded state is not loading, has no results and no status; `cheese` is
///   never searched.
async fn superseded_query_does_not_leave_loading() {
    let mut h = start(
        FakeSource::new().with("cheese", vec![recipe("1", "Cheese toastie", "Snack")]),
        Duration::from_millis(10),
    );
    h.query_tx.send(query(1, "paneer", None)).expect("send");
    h.query_tx.send(query(2, "", None)).expect("send");

    let mut app = AppState::new(Arc::new(Catalog::default()), SuggestMode::Contains, None);
    let mut events = Vec::new();
    tokio::time::sleep(Duration::from_millis(150)).await;
    while let Ok(ev) = h.event_rx.try_recv() {
        events.push(ev.clone());
        app.apply_search_event(ev);
    }
    assert_eq!(
        events,
        vec![SearchEvent::Started { id: 1 }, SearchEvent::Cleared { id: 2 }]
    );
    assert!(!app.loading);
    assert!(app.results.is_empty());
    assert_eq!(app.status, None);
    assert_eq!(h.source.searched(), vec!["paneer"]);
}

#[tokio::test]
/// What: The mood captured with the query filters results, or reports no match.
///
/// Inputs:
/// - `fish` with Light Meal, then `pork` with Light Meal.
///
/// Output:
/// - Only seafood for fish; all pork recipes with the no-match message.
async fn mood_filters_or_reports_no_match() {
    let mut h = start(
        FakeSource::new()
            .with(
                "fish",
                vec![
                    recipe("1", "Fish pie", "Seafood"),
                    recipe("2", "Fish and chips", "Miscellaneous"),
                ],
            )
            .with("pork", vec![recipe("3", "Pork chops", "Pork")]),
        Duration::from_millis(5),
    );
    h.query_tx
        .send(query(1, "fish", Some("Light Meal")))
        .expect("send");
    let events = h.until_finished(1).await;
    let (status, names) = final_status(&events);
    assert_eq!(status.to_string(), "Showing Light Meal recipes for \"fish\".");
    assert_eq!(names, vec!["Fish pie"]);

    h.query_tx
        .send(query(2, "pork", Some("Light Meal")))
        .expect("send");
    let events = h.until_finished(2).await;
    let (status, names) = final_status(&events);
    assert_eq!(
        status.to_string(),
        "No Light Meal recipes found. Showing all recipes for \"pork\"."
    );
    assert_eq!(names, vec!["Pork chops"]);
}

#[tokio::test]
async fn blank_query_clears() {
    let mut h = start(FakeSource::new(), Duration::from_millis(5));
    h.query_tx.send(query(7, "   ", None)).expect("send");
    assert_eq!(h.next().await, SearchEvent::Cleared { id: 7 });
    assert!(h.source.searched().is_empty());
}
