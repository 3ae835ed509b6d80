//! Panel 3 — Threat Matrix: relevance vs. competitive threat scatter with
//! quadrant dividers, plus a legend of bubbles by amount.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use fundlens_core::{MatrixPoint, ViewModel};

use crate::format;
use crate::theme;

const AXIS_MIN: f64 = 0.5;
const AXIS_MAX: f64 = 3.5;

pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_chart(f, chunks[0], view);
    render_legend(f, chunks[1], view);
}

/// Distinct segments in point order; index doubles as the series color.
fn segments(points: &[MatrixPoint]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for p in points {
        if !out.contains(&p.segment.as_str()) {
            out.push(&p.segment);
        }
    }
    out
}

/// Spread points that share a cell so they stay visible.
fn jittered(points: &[MatrixPoint]) -> Vec<(f64, f64)> {
    let mut seen: Vec<(u8, u8)> = Vec::new();
    points
        .iter()
        .map(|p| {
            let cell = (p.relevance_score, p.threat_score);
            let n = seen.iter().filter(|c| **c == cell).count();
            seen.push(cell);
            let offset = 0.08 * n as f64;
            (p.relevance_score as f64 + offset, p.threat_score as f64 - offset)
        })
        .collect()
}

fn render_chart(f: &mut Frame, area: Rect, view: &ViewModel) {
    let matrix = &view.matrix;
    let coords = jittered(&matrix.points);
    let segs = segments(&matrix.points);

    let per_segment: Vec<Vec<(f64, f64)>> = segs
        .iter()
        .map(|seg| {
            matrix
                .points
                .iter()
                .zip(coords.iter())
                .filter(|(p, _)| p.segment == *seg)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect();

    let d = matrix.divider;
    let vertical = [(d, AXIS_MIN), (d, AXIS_MAX)];
    let horizontal = [(AXIS_MIN, d), (AXIS_MAX, d)];

    let mut datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .style(theme::muted())
            .graph_type(GraphType::Line)
            .data(&vertical),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .style(theme::muted())
            .graph_type(GraphType::Line)
            .data(&horizontal),
    ];
    for (i, (seg, data)) in segs.iter().zip(per_segment.iter()).enumerate() {
        datasets.push(
            Dataset::default()
                .name(format::truncate(seg, 24))
                .marker(symbols::Marker::Block)
                .style(Style::default().fg(theme::series_color(i)))
                .graph_type(GraphType::Scatter)
                .data(data),
        );
    }

    let level_labels = || {
        vec![
            Span::styled("Low", theme::muted()),
            Span::styled("Medium", theme::muted()),
            Span::styled("High", theme::muted()),
        ]
    };

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Relevance to Coinme", theme::muted()))
                .style(theme::muted())
                .bounds([AXIS_MIN, AXIS_MAX])
                .labels(level_labels()),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Threat", theme::muted()))
                .style(theme::muted())
                .bounds([AXIS_MIN, AXIS_MAX])
                .labels(level_labels()),
        );

    f.render_widget(chart, area);
}

fn render_legend(f: &mut Frame, area: Rect, view: &ViewModel) {
    let segs = segments(&view.matrix.points);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Bubbles by amount", theme::accent_bold())),
        Line::from(""),
    ];

    let mut points: Vec<&MatrixPoint> = view.matrix.points.iter().collect();
    points.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    for p in points {
        let color = segs
            .iter()
            .position(|s| *s == p.segment)
            .map(theme::series_color)
            .unwrap_or(theme::TEXT_SECONDARY);
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(format!("{:<14}", format::truncate(&p.company, 14)), theme::secondary()),
            Span::styled(format!("{:>9}", format::money(p.amount)), theme::accent()),
            Span::styled(
                format!("  R{} T{}", p.relevance_score, p.threat_score),
                theme::muted(),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Dotted lines: quadrant divider at {:.1}", view.matrix.divider),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
