//! Property tests: arbitrary key sequences keep the app state consistent.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use fundlens_core::{dataset, DashboardConfig};
use fundlens_tui::app::Overlay;
use fundlens_tui::{handle_key, AppState};

fn app() -> AppState {
    let events = dataset::load().unwrap();
    AppState::new(events, DashboardConfig::default(), PathBuf::from("."))
}

// 'x' is left out so no case writes an export file.
fn key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        prop::sample::select(vec![
            'j', 'k', 'g', 'G', ' ', 'a', 'd', 'r', '/', '1', '2', '3', '4', '5', '6', '7', '8',
            'b', 'm', 'o',
        ])
        .prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Backspace),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
    ]
}

proptest! {
    #[test]
    fn cursors_stay_in_bounds(keys in prop::collection::vec(key_code(), 0..60)) {
        let mut app = app();
        for code in keys {
            handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));

            prop_assert!(app.running);
            prop_assert!(app.filter_cursor < app.filter_rows().len());

            let rows = app.view().table.len();
            prop_assert!(rows == 0 || app.table_cursor < rows);
            if let Overlay::Detail(idx) = app.overlay {
                prop_assert!(idx < rows);
            }
        }
    }

    #[test]
    fn reset_always_restores_full_view(keys in prop::collection::vec(key_code(), 0..40)) {
        let mut app = app();
        for code in keys {
            handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
        }
        app.reset_filters();
        prop_assert_eq!(app.view().filtered.len(), app.events.len());
    }
}
