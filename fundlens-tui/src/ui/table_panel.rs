//! Panel 6 — Table: every filtered, searched event, newest first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use fundlens_core::ViewModel;

use crate::app::AppState;
use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &ViewModel) {
    let rows = &view.table;
    let mut lines: Vec<Line> = Vec::new();

    // Header
    let mut header = vec![
        Span::styled(format!("{} of {} events", rows.len(), view.filtered.len()), theme::accent()),
    ];
    if !app.search_term.is_empty() {
        header.push(Span::styled("  search: ", theme::muted()));
        header.push(Span::styled(app.search_term.clone(), theme::accent_bold()));
    }
    header.push(Span::styled(
        "  [j/k]scroll [/]search [Enter]detail [x]export",
        theme::muted(),
    ));
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events match the search term. Press / then Esc to clear it.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            "{:<20} {:<10} {:<16} {:>9} {:<28} {:<9} {:<9}",
            "Company", "Date", "Stage", "Amount", "Segment", "Relevance", "Threat"
        ),
        theme::accent_bold(),
    )));

    // Keep the cursor inside the visible window.
    let visible_height = area.height.saturating_sub(3) as usize;
    let start = super::visible_start(app.table_cursor, visible_height, rows.len());
    let end = (start + visible_height).min(rows.len());

    for (i, e) in rows.iter().enumerate().take(end).skip(start) {
        let is_cursor = i == app.table_cursor;
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::secondary()
        };
        let level_style = |level| {
            if is_cursor {
                style
            } else {
                theme::level_style(level)
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<20} ", format::truncate(&e.company, 20)), style),
            Span::styled(format!("{} ", e.date.format("%Y-%m-%d")), style),
            Span::styled(format!("{:<16} ", format::truncate(&e.funding_stage, 16)), style),
            Span::styled(format!("{:>9} ", format::money(e.amount_usd_millions)), style),
            Span::styled(format!("{:<28} ", format::truncate(&e.segment, 28)), style),
            Span::styled(format!("{:<9} ", e.relevance_level), level_style(e.relevance_level)),
            Span::styled(format!("{:<9}", e.competitive_threat), level_style(e.competitive_threat)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
