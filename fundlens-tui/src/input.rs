//! Keyboard input dispatch — overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::Detail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(idx) {
                app.active_panel = panel;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('/') => {
            app.overlay = Overlay::Search;
            return;
        }
        KeyCode::Char('x') => {
            app.export();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Filters => handle_filters_key(app, key),
        Panel::Table => handle_table_key(app, key),
        _ => {} // display only
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_term.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => {
            app.overlay = Overlay::None;
            let rows = app.view().table.len();
            if app.search_term.is_empty() {
                app.set_status("Search cleared");
            } else {
                app.set_status(format!("Search \"{}\": {rows} matches", app.search_term));
            }
        }
        KeyCode::Backspace => {
            app.search_term.pop();
        }
        KeyCode::Char(c) => {
            app.search_term.push(c);
        }
        _ => {}
    }
    app.clamp_table_cursor();
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    let rows = app.filter_rows();
    let row_count = rows.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.filter_cursor + 1 < row_count {
                app.filter_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filter_cursor = app.filter_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(row) = rows.get(app.filter_cursor) {
                app.toggle_row(row);
            }
        }
        KeyCode::Char('a') => {
            if let Some(row) = rows.get(app.filter_cursor) {
                app.select_group(row.group());
            }
        }
        KeyCode::Char('d') => {
            if let Some(row) = rows.get(app.filter_cursor) {
                app.clear_group(row.group());
                app.set_warning(format!(
                    "{} cleared: no events will be shown",
                    row.group().title()
                ));
            }
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            app.set_status("Filters reset to all values");
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.view().table.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.table_cursor + 1 < row_count {
                app.table_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table_cursor = app.table_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.table_cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.table_cursor = row_count.saturating_sub(1);
        }
        KeyCode::Enter => {
            if row_count > 0 {
                app.overlay = Overlay::Detail(app.table_cursor);
            }
        }
        _ => {}
    }
}
