//! Overlay widgets — search input and event detail drill-down.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use fundlens_core::ViewModel;

use crate::format;
use crate::theme;
use crate::ui::centered_rect;

/// Free-text search input.
pub fn render_search(f: &mut Frame, area: Rect, input: &str, matches: usize) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Search [Enter]keep [Esc]clear ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let text = vec![
        Line::from(Span::styled(
            "Company, use of funds or sales action:",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("{matches} matching events"), theme::neutral())),
    ];

    f.render_widget(Paragraph::new(text), inner);
}

/// Detail drill-down for one table row.
pub fn render_detail(f: &mut Frame, area: Rect, view: &ViewModel, idx: usize) {
    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Funding Event [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(e) = view.table.get(idx) else {
        let text = Paragraph::new(Span::styled("Event not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(e.company.clone(), theme::accent_bold())));
    lines.push(Line::from(""));
    field_line(&mut lines, "Date", e.date.format("%Y-%m-%d").to_string());
    field_line(&mut lines, "Stage", e.funding_stage.clone());
    field_line(&mut lines, "Amount", format::money(e.amount_usd_millions));
    field_line(&mut lines, "Segment", e.segment.clone());
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<18}", "Relevance"), theme::muted()),
        Span::styled(e.relevance_level.to_string(), theme::level_style(e.relevance_level)),
        Span::styled(format!("  {:<10}", "Threat"), theme::muted()),
        Span::styled(e.competitive_threat.to_string(), theme::level_style(e.competitive_threat)),
    ]));
    lines.push(Line::from(""));

    section(&mut lines, "Use of Funds");
    prose(&mut lines, &e.use_of_funds);
    section(&mut lines, "Relevance to Coinme");
    prose(&mut lines, &e.relevance_to_coinme);
    section(&mut lines, "Sales Action");
    prose(&mut lines, &e.sales_action);
    section(&mut lines, "Source");
    lines.push(Line::from(Span::styled(e.source_link.clone(), theme::neutral())));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

fn field_line(lines: &mut Vec<Line<'_>>, label: &str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<18}", label), theme::muted()),
        Span::styled(value, theme::secondary()),
    ]));
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn prose(lines: &mut Vec<Line<'_>>, text: &str) {
    lines.push(Line::from(Span::styled(format!("  {text}"), theme::secondary())));
    lines.push(Line::from(""));
}
