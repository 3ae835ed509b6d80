//! Top-level UI layout — one active panel with a status bar.

pub mod filters_panel;
pub mod help_panel;
pub mod insights_panel;
pub mod matrix_panel;
pub mod overlays;
pub mod overview_panel;
pub mod stages_panel;
pub mod status_bar;
pub mod table_panel;
pub mod timeline_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use fundlens_core::ViewModel;

use crate::app::{AppState, Overlay, Panel};
use crate::format;
use crate::theme;

/// Draw the entire UI. The view model is computed once per frame.
pub fn draw(f: &mut Frame, app: &AppState) {
    let view = app.view();

    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app, &view);
    status_bar::render(f, status_area, app, &view);

    match &app.overlay {
        Overlay::Search => overlays::render_search(f, main_area, &app.search_term, view.table.len()),
        Overlay::Detail(idx) => overlays::render_detail(f, main_area, &view, *idx),
        Overlay::None => {}
    }
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState, view: &ViewModel) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true))
        .style(Style::default().bg(theme::BACKGROUND));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Every data panel shows the same explicit empty state.
    let needs_data = !matches!(panel, Panel::Filters | Panel::Help);
    if needs_data && view.is_empty() {
        render_empty_state(f, inner);
        return;
    }

    match panel {
        Panel::Filters => filters_panel::render(f, inner, app, view),
        Panel::Overview => overview_panel::render(f, inner, view),
        Panel::Matrix => matrix_panel::render(f, inner, view),
        Panel::Timeline => timeline_panel::render(f, inner, view),
        Panel::Stages => stages_panel::render(f, inner, view),
        Panel::Table => table_panel::render(f, inner, app, view),
        Panel::Insights => insights_panel::render(f, inner, view),
        Panel::Help => help_panel::render(f, inner),
    }
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No funding events match the current filters.",
            theme::warning(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "An empty selection in any filter group hides everything.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "Press 1 for Filters, then r to reset every group.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// One horizontal proportion bar: `label ████░░░ value`.
pub fn bar_line(
    label: &str,
    label_width: usize,
    value: f64,
    max: f64,
    bar_width: usize,
    suffix: String,
    color: ratatui::style::Color,
) -> Line<'static> {
    let frac = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (frac * bar_width as f64).round() as usize;
    Line::from(vec![
        Span::styled(
            format!("{:>width$} ", format::truncate(label, label_width), width = label_width),
            theme::secondary(),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(bar_width - filled), theme::muted()),
        Span::styled(format!(" {suffix}"), theme::accent()),
    ])
}

/// First line of a window of `height` lines that keeps `cursor` visible.
pub fn visible_start(cursor: usize, height: usize, len: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_start = len - height;
    cursor.saturating_sub(height - 1).min(max_start)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
