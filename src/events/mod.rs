//! Event handling layer for the TUI.
//!
//! `handle_event` routes key presses to the search or detail view handlers.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput, View};

mod detail;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    details_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }
    match app.view {
        View::Search => search::handle_search_key(ke, app, query_tx, details_tx),
        View::Detail => detail::handle_detail_key(ke, app),
    }
    app.should_quit
}

/// Send a query for `text`, logging when the worker is gone.
fn submit_query(app: &mut AppState, text: &str, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let q = app.next_query(text);
    tracing::debug!(id = q.id, text = %q.text, mood = ?q.mood, "submitting query");
    if query_tx.send(q).is_err() {
        tracing::warn!("search worker is not running");
    }
}
