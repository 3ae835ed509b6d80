//! Panel 5 — Stages: share of filtered funding per funding stage.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use fundlens_core::ViewModel;

use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let grand = view.summary.total.total_funding;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Funding by Stage", theme::accent_bold())),
        Line::from(""),
    ];

    let label_width = 18;
    let bar_width = (area.width as usize).saturating_sub(label_width + 30).max(10);

    for (i, stage) in view.stages.iter().enumerate() {
        let share = stage.share(grand);
        lines.push(super::bar_line(
            &stage.stage,
            label_width,
            share,
            1.0,
            bar_width,
            format!(
                "{:5.1}%  {} ({})",
                share * 100.0,
                format::money(stage.total_funding),
                format::deals(stage.deal_count)
            ),
            theme::series_color(i),
        ));
    }

    f.render_widget(Paragraph::new(lines), area);
}
