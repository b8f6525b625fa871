use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::SearchStatus;
use crate::state::{AppState, Focus};
use crate::util::truncate_to_width;

use super::palette;

/// Most dropdown rows shown at once.
const MAX_SUGGESTION_ROWS: u16 = 8;

/// Rounded bordered block with a muted title.
fn framed<'a>(title: impl Into<Cow<'a, str>>, focused: bool) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(palette::OVERLAY)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::SAPPHIRE
        } else {
            palette::SURFACE
        }))
}

/// Color for a status message.
const fn status_color(status: &SearchStatus) -> ratatui::style::Color {
    match status {
        SearchStatus::Showing { .. } => palette::GREEN,
        SearchStatus::NoMoodMatch { .. } | SearchStatus::TryingFallback { .. } => palette::YELLOW,
        SearchStatus::NoResults { .. } | SearchStatus::Failed => palette::RED,
    }
}

/// What: Render the search view: header, mood, input, message, results, key hints.
///
/// Details:
/// - The suggestion dropdown is drawn last so it overlays the results.
pub(super) fn render_search(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(palette::BASE)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Happy Tummy Recipe Finder",
            Style::default()
                .fg(palette::PEACH)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find what to cook based on what's in your fridge.",
            Style::default().fg(palette::SUBTEXT),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let mood_text = app.mood_label().unwrap_or("-- Choose Mood --");
    let mood = Paragraph::new(Line::from(vec![
        Span::styled("Select your mood: ", Style::default().fg(palette::SUBTEXT)),
        Span::styled(
            mood_text.to_string(),
            Style::default()
                .fg(if app.mood.is_some() {
                    palette::GREEN
                } else {
                    palette::OVERLAY
                })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   (F2 to change)", Style::default().fg(palette::OVERLAY)),
    ]))
    .block(framed("Mood", false));
    f.render_widget(mood, chunks[1]);

    let input_focused = app.focus == Focus::Input;
    let placeholder = app.input.is_empty();
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(palette::SAPPHIRE)),
        if placeholder {
            Span::styled(
                "Enter an ingredient (e.g. chicken)",
                Style::default().fg(palette::OVERLAY),
            )
        } else {
            Span::styled(app.input.clone(), Style::default().fg(palette::TEXT))
        },
    ]))
    .block(framed("Ingredient", input_focused));
    f.render_widget(input, chunks[2]);
    let caret_x = chunks[2]
        .x
        .saturating_add(3)
        .saturating_add(u16::try_from(app.input.width()).unwrap_or(u16::MAX));
    f.set_cursor_position(Position::new(
        caret_x.min(chunks[2].right().saturating_sub(2)),
        chunks[2].y + 1,
    ));

    let message = if app.loading {
        Line::from(Span::styled("Loading...", Style::default().fg(palette::SUBTEXT)))
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(status_color(status)),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(message), chunks[3]);

    render_results(f, app, chunks[4]);

    let hints = Line::from(Span::styled(
        "Enter search  Tab suggestions  Up/Down select  Right open  F2 mood  Esc quit",
        Style::default().fg(palette::OVERLAY),
    ));
    f.render_widget(Paragraph::new(hints), chunks[5]);

    if app.suggestions_visible() {
        render_suggestions(f, app, chunks[2]);
    }
}

/// Results list with name, category/area and id.
fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|r| {
            let mut segs = vec![Span::styled(
                r.name.clone(),
                Style::default()
                    .fg(palette::TEXT)
                    .add_modifier(Modifier::BOLD),
            )];
            let meta: Vec<&str> = [r.category.as_deref(), r.area.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if !meta.is_empty() {
                segs.push(Span::styled(
                    format!("  {}", meta.join(" · ")),
                    Style::default().fg(palette::SUBTEXT),
                ));
            }
            segs.push(Span::styled(
                format!("  #{}", r.id),
                Style::default().fg(palette::OVERLAY),
            ));
            let line = Line::from(segs);
            if line.width() > width {
                ListItem::new(truncate_to_width(&r.name, width))
            } else {
                ListItem::new(line)
            }
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(palette::TEXT).bg(palette::BASE))
        .block(framed(
            format!("Recipes ({})", app.results.len()),
            app.focus == Focus::Input,
        ))
        .highlight_style(Style::default().fg(palette::CRUST).bg(palette::LAVENDER))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Autocomplete dropdown just below the input box.
fn render_suggestions(f: &mut Frame, app: &AppState, input_area: Rect) {
    let screen = f.area();
    let rows = u16::try_from(app.suggestions.len())
        .unwrap_or(MAX_SUGGESTION_ROWS)
        .min(MAX_SUGGESTION_ROWS);
    let longest = app
        .suggestions
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(longest)
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .max(20)
        .min(input_area.width);
    let y = input_area.bottom();
    let height = (rows + 2).min(screen.bottom().saturating_sub(y));
    if height < 3 {
        return;
    }
    let x = input_area.x.saturating_add(2);
    let area = Rect::new(x, y, width.min(screen.right().saturating_sub(x)), height);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(s.clone()))
        .collect();
    let focused = app.focus == Focus::Suggestions;
    let list = List::new(items)
        .style(Style::default().fg(palette::TEXT).bg(palette::BASE))
        .block(framed("Suggestions", focused))
        .highlight_style(if focused {
            Style::default().fg(palette::CRUST).bg(palette::LAVENDER)
        } else {
            Style::default().fg(palette::SAPPHIRE)
        });
    let mut state = ListState::default().with_selected(Some(app.suggestion_index));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
