//! Test helpers for building app state over the embedded dataset.

use std::path::PathBuf;

use fundlens_core::{dataset, DashboardConfig};

use crate::app::AppState;

pub fn test_app() -> AppState {
    let events = dataset::load().unwrap();
    AppState::new(events, DashboardConfig::default(), PathBuf::from("."))
}
