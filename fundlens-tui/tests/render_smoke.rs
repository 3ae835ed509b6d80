//! Draw every panel into a `TestBackend` and check what ends up on screen.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use fundlens_core::{dataset, DashboardConfig};
use fundlens_tui::app::{FilterGroup, Overlay};
use fundlens_tui::{handle_key, ui, AppState, Panel};

fn app() -> AppState {
    let events = dataset::load().unwrap();
    AppState::new(events, DashboardConfig::default(), PathBuf::from("."))
}

fn screen(app: &AppState) -> String {
    let backend = TestBackend::new(160, 48);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn every_panel_draws_with_data() {
    let mut app = app();
    for i in 0..Panel::COUNT {
        app.active_panel = Panel::from_index(i).unwrap();
        let text = screen(&app);
        assert!(text.contains(app.active_panel.label()), "panel {i} title missing");
        assert!(!text.contains("No funding events match"), "panel {i} shows empty state");
    }
}

#[test]
fn overview_shows_headline_total() {
    let mut app = app();
    app.active_panel = Panel::Overview;
    let text = screen(&app);
    assert!(text.contains("$469.3M"));
    assert!(text.contains("Infrastructure"));
}

#[test]
fn insights_carry_key_takeaways_and_source() {
    let mut app = app();
    app.active_panel = Panel::Insights;
    let text = screen(&app);
    assert!(text.contains("Key Takeaways"));
    assert!(text.contains("Market Threats"));
    assert!(text.contains("Opportunities"));
    assert!(text.contains("Last Updated: December 2024"));
}

#[test]
fn table_lists_newest_event_first() {
    let mut app = app();
    app.active_panel = Panel::Table;
    let text = screen(&app);
    let avalon = text.find("Avalon Labs").unwrap();
    let monad = text.find("Monad Labs").unwrap();
    assert!(avalon < monad);
}

#[test]
fn cleared_group_shows_empty_state_on_data_panels() {
    let mut app = app();
    app.clear_group(FilterGroup::Segment);

    app.active_panel = Panel::Matrix;
    assert!(screen(&app).contains("No funding events match"));

    app.active_panel = Panel::Filters;
    assert!(!screen(&app).contains("No funding events match"));
}

#[test]
fn search_and_detail_overlays_draw() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    for c in "monad".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert!(screen(&app).contains("1 matching events"));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.overlay, Overlay::Detail(0));

    let text = screen(&app);
    assert!(text.contains("Funding Event"));
    assert!(text.contains("Monad Labs"));
}

#[test]
fn filter_checklist_scrolls_to_keep_cursor_visible() {
    let mut app = app();
    app.active_panel = Panel::Filters;
    app.filter_cursor = app.filter_rows().len() - 1;

    let backend = TestBackend::new(120, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();

    assert!(text.contains(FilterGroup::Threat.title()));
    assert!(!text.contains(FilterGroup::Relevance.title()));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app();
    let backend = TestBackend::new(20, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    for i in 0..Panel::COUNT {
        app.active_panel = Panel::from_index(i).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
}
