//! Rendering for the search and detail views.

use ratatui::{Frame, style::Color};

use crate::state::{AppState, View};

mod detail;
mod search;

pub use detail::detail_lines;

/// Catppuccin Mocha colors used across the UI.
pub(crate) mod palette {
    use super::Color;

    /// Background.
    pub const BASE: Color = Color::Rgb(30, 30, 46);
    /// Main text.
    pub const TEXT: Color = Color::Rgb(205, 214, 244);
    /// Secondary text.
    pub const SUBTEXT: Color = Color::Rgb(166, 173, 200);
    /// Muted labels.
    pub const OVERLAY: Color = Color::Rgb(127, 132, 156);
    /// Borders.
    pub const SURFACE: Color = Color::Rgb(88, 91, 112);
    /// Focus accent.
    pub const SAPPHIRE: Color = Color::Rgb(116, 199, 236);
    /// Selection background.
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254);
    /// Selection foreground.
    pub const CRUST: Color = Color::Rgb(17, 17, 27);
    /// Success / mood accent.
    pub const GREEN: Color = Color::Rgb(166, 227, 161);
    /// Warnings and notices.
    pub const YELLOW: Color = Color::Rgb(249, 226, 175);
    /// Errors.
    pub const RED: Color = Color::Rgb(243, 139, 168);
    /// Title accent.
    pub const PEACH: Color = Color::Rgb(250, 179, 135);
}

/// Draw the whole screen for the current view.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    match app.view {
        View::Search => search::render_search(f, app),
        View::Detail => detail::render_detail(f, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    use crate::logic::{Catalog, SearchStatus, SuggestMode};
    use crate::state::{DetailPayload, IngredientLine, RecipeDetail, SearchEvent};

    fn screen(app: &mut AppState) -> String {
        let mut term = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        term.draw(|f| ui(f, app)).expect("draw");
        term.backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: Search view shows title, mood, message and result names.
    ///
    /// Inputs:
    /// - App with a mood, two results and a "Showing" status.
    ///
    /// Output:
    /// - All of them appear in the rendered buffer.
    fn search_view_renders_results_and_message() {
        let mut app = AppState::new(
            Arc::new(Catalog::default()),
            SuggestMode::Contains,
            Some("Light Meal"),
        );
        app.apply_search_event(SearchEvent::Finished {
            id: 1,
            recipes: vec![
                RecipeDetail {
                    id: "52959".into(),
                    name: "Baked salmon with fennel".into(),
                    category: Some("Seafood".into()),
                    ..RecipeDetail::default()
                },
                RecipeDetail {
                    id: "52802".into(),
                    name: "Fish pie".into(),
                    category: Some("Seafood".into()),
                    ..RecipeDetail::default()
                },
            ],
            status: SearchStatus::Showing {
                mood: Some("Light Meal".into()),
                query: "fish".into(),
            },
        });
        let text = screen(&mut app);
        assert!(text.contains("Happy Tummy Recipe Finder"));
        assert!(text.contains("Light Meal"));
        assert!(text.contains("Showing Light Meal recipes for \"fish\"."));
        assert!(text.contains("Baked salmon with fennel"));
        assert!(text.contains("Fish pie"));
    }

    #[test]
    fn loading_hides_message() {
        let mut app = AppState::new(Arc::new(Catalog::default()), SuggestMode::Contains, None);
        app.status = Some(SearchStatus::Failed);
        app.loading = true;
        let text = screen(&mut app);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Something went wrong"));
    }

    #[test]
    fn detail_view_renders_not_found_and_record() {
        let mut app = AppState::new(Arc::new(Catalog::default()), SuggestMode::Contains, None);
        app.view = View::Detail;
        app.detail = Some(DetailPayload::NotFound);
        assert!(screen(&mut app).contains("Recipe not found."));

        app.detail = Some(DetailPayload::Loaded(Box::new(RecipeDetail {
            id: "1".into(),
            name: "Kedgeree".into(),
            category: Some("Seafood".into()),
            area: Some("British".into()),
            instructions: "Simmer the rice.".into(),
            ingredients: vec![IngredientLine {
                ingredient: "Rice".into(),
                measure: Some("300g".into()),
            }],
            video: Some("https://www.youtube.com/watch?v=x".into()),
            ..RecipeDetail::default()
        })));
        let text = screen(&mut app);
        assert!(text.contains("Kedgeree"));
        assert!(text.contains("Rice - 300g"));
        assert!(text.contains("Watch on YouTube"));
    }
}
