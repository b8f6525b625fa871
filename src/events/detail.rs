use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Handle a key press on the detail view.
///
/// Details:
/// - `Esc`, `Backspace`, `Left` and `q` go back to the results.
/// - Arrows and page keys scroll.
pub(super) fn handle_detail_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('q') => {
            app.close_detail();
        }
        KeyCode::Up => app.detail_scroll = app.detail_scroll.saturating_sub(1),
        KeyCode::Down => app.detail_scroll = app.detail_scroll.saturating_add(1),
        KeyCode::PageUp => app.detail_scroll = app.detail_scroll.saturating_sub(10),
        KeyCode::PageDown => app.detail_scroll = app.detail_scroll.saturating_add(10),
        KeyCode::Home => app.detail_scroll = 0,
        _ => {}
    }
}
