//! Bottom status bar — panel hints, row counts, search term, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use fundlens_core::ViewModel;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &ViewModel) {
    let mut spans: Vec<Span> = Vec::new();

    // Panel hints
    spans.push(Span::styled(
        " 1:Filters 2:Overview 3:Matrix 4:Timeline 5:Stages 6:Table 7:Insights 8:Help",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    let count_style = if view.is_empty() {
        theme::warning()
    } else {
        theme::accent()
    };
    spans.push(Span::styled(
        format!("{}/{} events", view.filtered.len(), app.events.len()),
        count_style,
    ));

    let term = app.search_term.as_str();
    if !term.is_empty() {
        spans.push(Span::styled(format!(" /{term}"), theme::neutral()));
    }

    // Status message
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
