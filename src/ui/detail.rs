use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, DetailPayload, RecipeDetail};

use super::palette;

/// Bold section heading.
fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(palette::SAPPHIRE)
            .add_modifier(Modifier::BOLD),
    ))
}

/// `Label: value` line.
fn labeled(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default()
                .fg(palette::SUBTEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), Style::default().fg(palette::TEXT)),
    ])
}

/// What: Lines for the recipe detail view.
///
/// Inputs:
/// - `d`: Recipe to render.
///
/// Output:
/// - Name, category, area, instructions, ingredient list and the optional video link.
///
/// Details:
/// - Ingredients render as `ingredient - measure`, or just the ingredient without a measure.
#[must_use]
pub fn detail_lines(d: &RecipeDetail) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            d.name.clone(),
            Style::default()
                .fg(palette::PEACH)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        labeled("Category", d.category.as_deref().unwrap_or("")),
        labeled("Area", d.area.as_deref().unwrap_or("")),
    ];
    if !d.tags.is_empty() {
        lines.push(labeled("Tags", &d.tags.join(", ")));
    }
    lines.push(Line::default());
    lines.push(heading("Instructions:"));
    for para in d.instructions.lines() {
        lines.push(Line::from(Span::styled(
            para.trim_end().to_string(),
            Style::default().fg(palette::TEXT),
        )));
    }
    lines.push(Line::default());
    lines.push(heading("Ingredients:"));
    for item in &d.ingredients {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(palette::OVERLAY)),
            Span::styled(item.to_string(), Style::default().fg(palette::TEXT)),
        ]));
    }
    if let Some(url) = &d.video {
        lines.push(Line::default());
        lines.push(labeled("Watch on YouTube", url));
    }
    if let Some(url) = &d.source {
        lines.push(labeled("Source", url));
    }
    lines
}

/// Render the detail view for the current payload.
pub(super) fn render_detail(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let lines = match &app.detail {
        Some(DetailPayload::Loaded(d)) => detail_lines(d),
        Some(DetailPayload::Loading(_)) => vec![Line::from(Span::styled(
            "Loading recipe details...",
            Style::default().fg(palette::SUBTEXT),
        ))],
        Some(DetailPayload::NotFound) | None => vec![Line::from(Span::styled(
            "Recipe not found.",
            Style::default().fg(palette::RED),
        ))],
    };
    let block = Block::default()
        .title(Span::styled(
            " ← Back (Esc)  Scroll (Up/Down) ",
            Style::default().fg(palette::OVERLAY),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::SURFACE))
        .style(Style::default().bg(palette::BASE));
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(para, area);
}
