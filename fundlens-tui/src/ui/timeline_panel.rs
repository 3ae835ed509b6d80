//! Panel 4 — Timeline: total funding per calendar month.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use fundlens_core::ViewModel;

use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(view.timeline.len() as u16 + 2)])
        .split(area);

    render_chart(f, chunks[0], view);
    render_buckets(f, chunks[1], view);
}

fn render_chart(f: &mut Frame, area: Rect, view: &ViewModel) {
    let points: Vec<(f64, f64)> = view
        .timeline
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64, b.total_funding))
        .collect();

    let n = points.len();
    // A single month still needs a non-degenerate x range.
    let x_max = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let y_max = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max) * 1.1;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let first = view.timeline.first().map(|b| b.label()).unwrap_or_default();
    let last = view.timeline.last().map(|b| b.label()).unwrap_or_default();

    let datasets = vec![Dataset::default()
        .name("Funding")
        .marker(symbols::Marker::Braille)
        .style(theme::accent())
        .graph_type(if n > 1 { GraphType::Line } else { GraphType::Scatter })
        .data(&points)];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Month", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Funding ($M)", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{:.0}", y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_buckets(f: &mut Frame, area: Rect, view: &ViewModel) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Funding Timeline",
        theme::accent_bold(),
    ))];
    for b in &view.timeline {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", b.label()), theme::secondary()),
            Span::styled(format!("{:>9}", format::money(b.total_funding)), theme::accent()),
            Span::styled(format!("  {}", format::deals(b.deal_count)), theme::muted()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}
