use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, QueryInput};

use super::submit_query;

/// What: Cycle the mood and re-run the search for the current input.
///
/// Details:
/// - Re-fetches only when the input is non-empty, using whatever is typed at that moment.
fn change_mood(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.cycle_mood();
    tracing::info!(mood = ?app.mood_label(), "mood changed");
    if !app.input.is_empty() {
        let text = app.input.clone();
        submit_query(app, &text, query_tx);
    }
}

/// Open the detail view for the selected result and request its full record.
fn open_selected(app: &mut AppState, details_tx: &mpsc::UnboundedSender<String>) {
    let Some(id) = app.selected_recipe().map(|r| r.id.clone()) else {
        return;
    };
    app.open_detail(&id);
    if details_tx.send(id).is_err() {
        tracing::warn!("details worker is not running");
    }
}

/// What: Handle a key press on the search view.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the search worker.
/// - `details_tx`: Channel to the details worker.
///
/// Details:
/// - Text keys edit the input and reopen the dropdown; `Enter` searches the input or the
///   highlighted suggestion; `Tab` moves arrow keys into the dropdown.
/// - `F2` / `Ctrl-O` cycle the mood; `Right` / `Ctrl-D` open the selected recipe.
/// - `Esc` closes the dropdown, or quits when it is already closed.
pub(super) fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    details_tx: &mpsc::UnboundedSender<String>,
) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let alt = ke.modifiers.contains(KeyModifiers::ALT);
    match ke.code {
        KeyCode::Esc => {
            if app.suggestions_visible() {
                app.hide_suggestions();
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::F(2) => change_mood(app, query_tx),
        KeyCode::Char('o') if ctrl => change_mood(app, query_tx),
        KeyCode::Char('d') if ctrl => open_selected(app, details_tx),
        KeyCode::Char(c) if !ctrl && !alt => {
            app.input.push(c);
            app.on_input_changed();
        }
        KeyCode::Backspace => {
            app.input.pop();
            app.on_input_changed();
        }
        KeyCode::Enter => {
            let text = match (app.focus, app.highlighted_suggestion()) {
                (Focus::Suggestions, Some(s)) => s.to_string(),
                _ => app.input.clone(),
            };
            app.input.clone_from(&text);
            app.hide_suggestions();
            submit_query(app, &text, query_tx);
        }
        KeyCode::Tab => {
            if app.focus == Focus::Suggestions {
                app.focus = Focus::Input;
            } else if app.suggestions_visible() {
                app.focus = Focus::Suggestions;
            }
        }
        KeyCode::Up | KeyCode::Down => {
            let delta = if ke.code == KeyCode::Up { -1 } else { 1 };
            if app.focus == Focus::Suggestions && app.suggestions_visible() {
                app.move_suggestion(delta);
            } else {
                app.move_selection(delta);
            }
        }
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Right => open_selected(app, details_tx),
        _ => {}
    }
}
