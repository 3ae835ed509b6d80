//! FundLens TUI — eight-panel competitive-intelligence dashboard with vim-style navigation.
//!
//! Panels:
//! 1. Filters — relevance, segment and threat multi-selects
//! 2. Overview — headline metrics and funding by segment
//! 3. Matrix — relevance vs. threat scatter
//! 4. Timeline — funding per month
//! 5. Stages — share of funding per stage
//! 6. Table — searchable event list with detail drill-down
//! 7. Insights — high-priority competitors and sales actions
//! 8. Help — keyboard shortcuts

pub mod app;
pub mod format;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;
