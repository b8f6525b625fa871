//! Central UI state and the transitions driven by input and worker events.

use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::logic::{Catalog, SearchStatus, SuggestMode, filter_suggestions};
use crate::state::types::{DetailPayload, QueryInput, RecipeDetail, SearchEvent};

/// Which screen is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Search box, mood, results.
    #[default]
    Search,
    /// One recipe.
    Detail,
}

/// Which widget receives arrow keys on the search view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the ingredient input; arrows move the result selection.
    #[default]
    Input,
    /// Arrows move through the autocomplete dropdown.
    Suggestions,
}

/// Global application state owned by the UI loop.
#[derive(Debug)]
pub struct AppState {
    /// Planner tables (suggestions, moods).
    pub catalog: Arc<Catalog>,
    /// Autocomplete strategy.
    pub suggest_mode: SuggestMode,
    /// Ingredient input text.
    pub input: String,
    /// Current autocomplete matches for `input`.
    pub suggestions: Vec<String>,
    /// Whether the dropdown is open.
    pub show_suggestions: bool,
    /// Highlighted dropdown row.
    pub suggestion_index: usize,
    /// Arrow-key target.
    pub focus: Focus,
    /// Selected mood as an index into the catalog mood table.
    pub mood: Option<usize>,
    /// Recipes on display.
    pub results: Vec<RecipeDetail>,
    /// Selection in `results`.
    pub list_state: ListState,
    /// Message under the search box.
    pub status: Option<SearchStatus>,
    /// A fetch is running.
    pub loading: bool,
    /// Current screen.
    pub view: View,
    /// Detail view content.
    pub detail: Option<DetailPayload>,
    /// Vertical scroll of the detail view.
    pub detail_scroll: u16,
    /// Id assigned to the next query.
    next_query_id: u64,
    /// Newest query id seen in a search event.
    latest_event_id: u64,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// What: Fresh state for the search view.
    ///
    /// Inputs:
    /// - `catalog`: Planner tables.
    /// - `suggest_mode`: Autocomplete strategy.
    /// - `default_mood`: Mood label to preselect; unknown labels are ignored.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        suggest_mode: SuggestMode,
        default_mood: Option<&str>,
    ) -> Self {
        let mood = default_mood.and_then(|m| catalog.moods.position_of(m));
        Self {
            catalog,
            suggest_mode,
            input: String::new(),
            suggestions: Vec::new(),
            show_suggestions: false,
            suggestion_index: 0,
            focus: Focus::Input,
            mood,
            results: Vec::new(),
            list_state: ListState::default(),
            status: None,
            loading: false,
            view: View::Search,
            detail: None,
            detail_scroll: 0,
            next_query_id: 1,
            latest_event_id: 0,
            should_quit: false,
        }
    }

    /// Selected mood label.
    #[must_use]
    pub fn mood_label(&self) -> Option<&str> {
        self.mood.and_then(|i| self.catalog.moods.label_at(i))
    }

    /// What: Advance the mood selector: none, then each mood in order, then none again.
    pub fn cycle_mood(&mut self) {
        let count = self.catalog.moods.len();
        self.mood = match self.mood {
            None if count > 0 => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            _ => None,
        };
    }

    /// Recompute dropdown matches for the current input.
    pub fn refresh_suggestions(&mut self) {
        self.suggestions =
            filter_suggestions(&self.input, &self.catalog.suggestions, self.suggest_mode);
        if self.suggestion_index >= self.suggestions.len() {
            self.suggestion_index = 0;
        }
        if self.suggestions.is_empty() && self.focus == Focus::Suggestions {
            self.focus = Focus::Input;
        }
    }

    /// Whether the dropdown should be drawn.
    #[must_use]
    pub fn suggestions_visible(&self) -> bool {
        self.show_suggestions && !self.input.is_empty() && !self.suggestions.is_empty()
    }

    /// What: Apply an edit to the input: open the dropdown and drop the old message.
    pub fn on_input_changed(&mut self) {
        self.show_suggestions = true;
        self.status = None;
        self.refresh_suggestions();
    }

    /// Close the dropdown and return arrow keys to the results.
    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.focus = Focus::Input;
    }

    /// What: Build the next query for `text` with the current mood.
    ///
    /// Output:
    /// - A `QueryInput` carrying a fresh id.
    pub fn next_query(&mut self, text: &str) -> QueryInput {
        let id = self.next_query_id;
        self.next_query_id += 1;
        QueryInput {
            id,
            text: text.to_string(),
            mood: self.mood_label().map(str::to_string),
        }
    }

    /// Highlighted suggestion, if the dropdown is open.
    #[must_use]
    pub fn highlighted_suggestion(&self) -> Option<&str> {
        if !self.suggestions_visible() {
            return None;
        }
        self.suggestions.get(self.suggestion_index).map(String::as_str)
    }

    /// Recipe under the result cursor.
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&RecipeDetail> {
        self.list_state.selected().and_then(|i| self.results.get(i))
    }

    /// What: Move the result cursor by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.results.len() - 1;
        let cur = self.list_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// What: Move the dropdown highlight by `delta`, wrapping around.
    pub fn move_suggestion(&mut self, delta: isize) {
        let n = self.suggestions.len();
        if n == 0 {
            return;
        }
        let n_i = isize::try_from(n).unwrap_or(isize::MAX);
        let cur = isize::try_from(self.suggestion_index).unwrap_or(0);
        let next = (cur + delta).rem_euclid(n_i);
        self.suggestion_index = usize::try_from(next).unwrap_or(0);
    }

    /// What: Fold a search worker event into the state.
    ///
    /// Inputs:
    /// - `event`: Event from the search worker.
    ///
    /// Details:
    /// - Results and statuses are applied in arrival order regardless of their query id.
    /// - `Started` for a query older than the newest one seen is ignored, and only the
    ///   newest query's outcome ends the loading state.
    /// - A fallback notice ends the loading state but keeps the current results.
    pub fn apply_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Started { id } => {
                if id < self.latest_event_id {
                    return;
                }
                self.latest_event_id = id;
                self.loading = true;
                self.status = None;
            }
            SearchEvent::Cleared { id } => {
                self.settle(id);
                self.status = None;
                self.set_results(Vec::new());
            }
            SearchEvent::Notice { id, status } => {
                self.settle(id);
                self.status = Some(status);
            }
            SearchEvent::Finished {
                id,
                recipes,
                status,
            } => {
                self.settle(id);
                self.status = Some(status);
                self.set_results(recipes);
            }
        }
    }

    /// Record an outcome for query `id`; loading stops unless a newer query is running.
    fn settle(&mut self, id: u64) {
        if id >= self.latest_event_id {
            self.latest_event_id = id;
            self.loading = false;
        }
    }

    /// Replace the result list, selecting the first row.
    fn set_results(&mut self, recipes: Vec<RecipeDetail>) {
        self.results = recipes;
        self.list_state
            .select(if self.results.is_empty() { None } else { Some(0) });
    }

    /// What: Open the detail view for `id`.
    ///
    /// Details:
    /// - A recipe already in the result list is shown immediately; otherwise the view
    ///   shows a loading state. Either way the caller requests a lookup, whose answer
    ///   arrives through [`AppState::apply_detail`].
    pub fn open_detail(&mut self, id: &str) {
        self.view = View::Detail;
        self.detail_scroll = 0;
        self.detail = Some(match self.results.iter().find(|r| r.id == id) {
            Some(r) => DetailPayload::Loaded(Box::new(r.clone())),
            None => DetailPayload::Loading(id.to_string()),
        });
    }

    /// What: Fill the detail view with a lookup result.
    ///
    /// Details:
    /// - Ignored unless the view still shows (or waits for) exactly this id.
    /// - A missing record only replaces a loading state; a shown recipe stays.
    pub fn apply_detail(&mut self, id: &str, detail: Option<RecipeDetail>) {
        let loading = match &self.detail {
            Some(DetailPayload::Loading(want)) if want == id => true,
            Some(DetailPayload::Loaded(shown)) if shown.id == id => false,
            _ => return,
        };
        match detail {
            Some(d) => self.detail = Some(DetailPayload::Loaded(Box::new(d))),
            None if loading => self.detail = Some(DetailPayload::NotFound),
            None => {}
        }
    }

    /// Leave the detail view.
    pub fn close_detail(&mut self) {
        self.view = View::Search;
        self.detail = None;
        self.detail_scroll = 0;
    }
}
