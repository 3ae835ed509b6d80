//! Panel 1 — Filters: three multi-select checklists (relevance, segment, threat).

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use fundlens_core::ViewModel;

use crate::app::{AppState, FilterRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &ViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = vec![Line::from(vec![
        Span::styled("Showing: ", theme::muted()),
        Span::styled(
            format!("{}/{} events", view.filtered.len(), app.events.len()),
            theme::accent(),
        ),
        Span::styled(
            "  [Space]toggle [a]ll in group [d]eselect group [r]eset",
            theme::muted(),
        ),
    ])];
    f.render_widget(Paragraph::new(header), chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    // Line index of the cursor row; group separators make it differ from the row index.
    let mut cursor_line = 0;

    for (row_idx, row) in app.filter_rows().iter().enumerate() {
        let is_cursor = row_idx == app.filter_cursor;
        let is_selected = app.is_row_selected(row);

        match row {
            FilterRow::Group(group) => {
                if row_idx > 0 {
                    lines.push(Line::from(""));
                }
                if is_cursor {
                    cursor_line = lines.len();
                }
                let selected = app.group_selected_count(*group);
                let total = app.group_option_count(*group);
                let label = format!("{} ({selected}/{total})", group.title());
                let style = if is_cursor {
                    theme::accent_bold().add_modifier(Modifier::REVERSED)
                } else if selected == 0 {
                    theme::warning().add_modifier(Modifier::BOLD)
                } else {
                    theme::accent_bold()
                };
                lines.push(Line::from(Span::styled(label, style)));
            }
            FilterRow::Relevance(l) | FilterRow::Threat(l) => {
                if is_cursor {
                    cursor_line = lines.len();
                }
                lines.push(option_line(l.label().to_string(), theme::level_style(*l), is_cursor, is_selected));
            }
            FilterRow::Segment(s) => {
                if is_cursor {
                    cursor_line = lines.len();
                }
                lines.push(option_line(s.clone(), theme::neutral(), is_cursor, is_selected));
            }
        }
    }

    let body = chunks[1];
    let offset = super::visible_start(cursor_line, body.height as usize, lines.len());
    f.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), body);
}

fn option_line(text: String, value_style: Style, is_cursor: bool, is_selected: bool) -> Line<'static> {
    let check = if is_selected { "[x]" } else { "[ ]" };
    let check_style = if is_selected {
        theme::positive()
    } else {
        theme::muted()
    };
    let style = if is_cursor {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else if is_selected {
        value_style
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(check, check_style),
        Span::raw(" "),
        Span::styled(text, style),
    ])
}
