//! Panel 7 — Insights: high-priority competitors and sales actions by segment.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use fundlens_core::{ViewModel, KEY_TAKEAWAYS};

use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(TAKEAWAYS_HEIGHT)])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);

    render_high_priority(f, chunks[0], view);
    render_actions(f, chunks[1], view);
    render_takeaways(f, rows[1]);
}

// Border + heading + three bullets + source line.
const TAKEAWAYS_HEIGHT: u16 = 7;

fn render_takeaways(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted())
        .title(" Key Takeaways ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let column = |title: &'static str, style: Style, items: &'static [&'static str]| {
        let mut lines = vec![Line::from(Span::styled(title, style))];
        lines.extend(
            items
                .iter()
                .map(|item| Line::from(Span::styled(format!("• {item}"), theme::secondary()))),
        );
        Paragraph::new(lines).wrap(Wrap { trim: true })
    };
    f.render_widget(
        column("Market Threats", theme::negative(), KEY_TAKEAWAYS.market_threats),
        cols[0],
    );
    f.render_widget(
        column("Opportunities", theme::positive(), KEY_TAKEAWAYS.opportunities),
        cols[1],
    );

    let footer = Line::from(vec![
        Span::styled("Data Source: ", theme::muted()),
        Span::styled(KEY_TAKEAWAYS.data_source, theme::secondary()),
        Span::styled("  Last Updated: ", theme::muted()),
        Span::styled(KEY_TAKEAWAYS.last_updated, theme::secondary()),
    ]);
    f.render_widget(Paragraph::new(footer), rows[1]);
}

fn render_high_priority(f: &mut Frame, area: Rect, view: &ViewModel) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::muted())
        .title(" High Priority Competitors ")
        .title_style(theme::negative());

    let mut lines: Vec<Line> = Vec::new();
    if view.high_priority.is_empty() {
        lines.push(Line::from(Span::styled(
            "No high-relevance competitors in the current selection.",
            theme::muted(),
        )));
    }
    for e in &view.high_priority {
        lines.push(Line::from(vec![
            Span::styled(e.company.clone(), theme::accent_bold()),
            Span::styled(format!("  {}", format::money(e.amount_usd_millions)), theme::accent()),
        ]));
        lines.push(Line::from(Span::styled(e.relevance_to_coinme.clone(), theme::secondary())));
        lines.push(Line::from(vec![
            Span::styled("Action: ", theme::warning()),
            Span::styled(e.sales_action.clone(), theme::muted()),
        ]));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_actions(f: &mut Frame, area: Rect, view: &ViewModel) {
    let block = Block::default()
        .title(" Sales Action Items by Segment ")
        .title_style(theme::positive());

    let mut lines: Vec<Line> = Vec::new();
    for (i, group) in view.action_items.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                group.segment.clone(),
                Style::default().fg(theme::series_color(i)),
            ),
            Span::styled(
                format!(
                    "  {}, {}",
                    format::deals(group.deal_count),
                    format::money(group.total_funding)
                ),
                theme::muted(),
            ),
        ]));
        for (company, action) in &group.actions {
            lines.push(Line::from(vec![
                Span::styled(format!("  • {company}: "), theme::secondary()),
                Span::styled(action.clone(), theme::muted()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
