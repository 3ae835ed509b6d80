//! Panel 8 — Help: keyboard shortcuts and how filters combine.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-8", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "/", "Search company, use of funds and sales action");
    key(&mut lines, "x", "Export filtered events to CSV");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Filters");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Space / Enter", "Toggle the option under the cursor");
    key(&mut lines, "a", "Select every option in the cursor's group");
    key(&mut lines, "d", "Clear the cursor's group (hides everything)");
    key(&mut lines, "r", "Reset all groups to everything selected");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 6 — Table");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "g / G", "Jump to first / last row");
    key(&mut lines, "Enter", "Open event detail");
    lines.push(Line::from(""));

    section(&mut lines, "Search overlay");
    key(&mut lines, "Enter", "Keep the term and close");
    key(&mut lines, "Esc", "Clear the term and close");
    lines.push(Line::from(""));

    section(&mut lines, "How filters combine");
    key(&mut lines, "Groups", "An event must match all three groups");
    key(&mut lines, "Options", "Within a group any selected option matches");
    key(&mut lines, "Search", "Narrows the table only");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
