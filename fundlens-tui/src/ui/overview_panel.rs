//! Panel 2 — Overview: headline metrics and funding by market segment.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use fundlens_core::{Rollup, ViewModel};

use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_metrics(f, chunks[0], view);
    render_segments(f, chunks[1], view);
}

fn render_metrics(f: &mut Frame, area: Rect, view: &ViewModel) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let s = &view.summary;
    metric_card(
        f,
        cards[0],
        "Total Competitive Funding",
        format::money(s.total.total_funding),
        format!("{} companies", s.total.count),
    );
    rollup_card(f, cards[1], "High Threat Competitors", s.high_threat, " raised");
    rollup_card(f, cards[2], "Focus-Segment Companies", s.focus_segment, "");
    rollup_card(f, cards[3], "Recent Funding", s.recent, "");
}

fn rollup_card(f: &mut Frame, area: Rect, title: &str, rollup: Rollup, suffix: &str) {
    metric_card(
        f,
        area,
        title,
        rollup.count.to_string(),
        format!("{}{suffix}", format::money(rollup.total_funding)),
    );
}

fn metric_card(f: &mut Frame, area: Rect, title: &str, value: String, delta: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::secondary());
    let lines = vec![
        Line::from(Span::styled(value, theme::accent_bold())),
        Line::from(Span::styled(delta, theme::positive())),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_segments(f: &mut Frame, area: Rect, view: &ViewModel) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Total Funding by Market Segment",
            theme::accent_bold(),
        )),
        Line::from(""),
    ];

    let max = view
        .segments
        .first()
        .map(|s| s.total_funding)
        .unwrap_or(0.0);
    let label_width = 28;
    let bar_width = (area.width as usize).saturating_sub(label_width + 24).max(10);

    for (i, seg) in view.segments.iter().enumerate() {
        lines.push(super::bar_line(
            &seg.segment,
            label_width,
            seg.total_funding,
            max,
            bar_width,
            format!(
                "{} ({})",
                format::money(seg.total_funding),
                format::deals(seg.deal_count)
            ),
            theme::series_color(i),
        ));
    }

    f.render_widget(Paragraph::new(lines), area);
}
