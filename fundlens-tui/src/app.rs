//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Derived views are never stored; they are
//! recomputed from the record set and the current inputs on every pass.

use std::path::PathBuf;

use fundlens_core::{
    render, DashboardConfig, FilterOptions, FilterSelection, FundingEvent, Level, ViewModel,
};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Filters,
    Overview,
    Matrix,
    Timeline,
    Stages,
    Table,
    Insights,
    Help,
}

impl Panel {
    pub const COUNT: usize = 8;

    pub fn index(self) -> usize {
        match self {
            Panel::Filters => 0,
            Panel::Overview => 1,
            Panel::Matrix => 2,
            Panel::Timeline => 3,
            Panel::Stages => 4,
            Panel::Table => 5,
            Panel::Insights => 6,
            Panel::Help => 7,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Filters),
            1 => Some(Panel::Overview),
            2 => Some(Panel::Matrix),
            3 => Some(Panel::Timeline),
            4 => Some(Panel::Stages),
            5 => Some(Panel::Table),
            6 => Some(Panel::Insights),
            7 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Filters => "Filters",
            Panel::Overview => "Overview",
            Panel::Matrix => "Threat Matrix",
            Panel::Timeline => "Timeline",
            Panel::Stages => "Stages",
            Panel::Table => "Competitors",
            Panel::Insights => "Insights",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Filters)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Filters)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// The three multi-select filter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    Relevance,
    Segment,
    Threat,
}

impl FilterGroup {
    pub fn title(self) -> &'static str {
        match self {
            FilterGroup::Relevance => "Relevance to Coinme",
            FilterGroup::Segment => "Market Segments",
            FilterGroup::Threat => "Competitive Threat Level",
        }
    }
}

/// A row in the filter checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    Group(FilterGroup),
    Relevance(Level),
    Segment(String),
    Threat(Level),
}

impl FilterRow {
    pub fn group(&self) -> FilterGroup {
        match self {
            FilterRow::Group(g) => *g,
            FilterRow::Relevance(_) => FilterGroup::Relevance,
            FilterRow::Segment(_) => FilterGroup::Segment,
            FilterRow::Threat(_) => FilterGroup::Threat,
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Detail(usize), // index into the table rows
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Data and inputs
    pub events: &'static [FundingEvent],
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub search_term: String,
    pub config: DashboardConfig,

    // Cursors
    pub filter_cursor: usize,
    pub table_cursor: usize,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,

    // Paths
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(
        events: &'static [FundingEvent],
        config: DashboardConfig,
        export_dir: PathBuf,
    ) -> Self {
        let options = FilterOptions::from_events(events);
        let selection = FilterSelection::all(&options);
        Self {
            active_panel: Panel::Overview,
            running: true,
            events,
            options,
            selection,
            search_term: String::new(),
            config,
            filter_cursor: 0,
            table_cursor: 0,
            status_message: None,
            overlay: Overlay::None,
            export_dir,
        }
    }

    /// Recompute every derived view from the current inputs.
    pub fn view(&self) -> ViewModel<'static> {
        let term = Some(self.search_term.as_str());
        render(self.events, &self.selection, term, &self.config)
    }

    /// Flat list of checklist rows: each group header followed by its options.
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let mut rows = Vec::new();
        rows.push(FilterRow::Group(FilterGroup::Relevance));
        rows.extend(self.options.relevance.iter().copied().map(FilterRow::Relevance));
        rows.push(FilterRow::Group(FilterGroup::Segment));
        rows.extend(self.options.segments.iter().cloned().map(FilterRow::Segment));
        rows.push(FilterRow::Group(FilterGroup::Threat));
        rows.extend(self.options.threats.iter().copied().map(FilterRow::Threat));
        rows
    }

    pub fn is_row_selected(&self, row: &FilterRow) -> bool {
        match row {
            FilterRow::Group(g) => self.group_selected_count(*g) == self.group_option_count(*g),
            FilterRow::Relevance(l) => self.selection.relevance.contains(l),
            FilterRow::Segment(s) => self.selection.segments.contains(s),
            FilterRow::Threat(l) => self.selection.threats.contains(l),
        }
    }

    pub fn group_option_count(&self, group: FilterGroup) -> usize {
        match group {
            FilterGroup::Relevance => self.options.relevance.len(),
            FilterGroup::Segment => self.options.segments.len(),
            FilterGroup::Threat => self.options.threats.len(),
        }
    }

    pub fn group_selected_count(&self, group: FilterGroup) -> usize {
        match group {
            FilterGroup::Relevance => self.selection.relevance.len(),
            FilterGroup::Segment => self.selection.segments.len(),
            FilterGroup::Threat => self.selection.threats.len(),
        }
    }

    /// Toggle one option, or a whole group when the row is a header
    /// (all selected → none, otherwise → all).
    pub fn toggle_row(&mut self, row: &FilterRow) {
        match row {
            FilterRow::Group(g) => {
                if self.is_row_selected(row) {
                    self.clear_group(*g);
                } else {
                    self.select_group(*g);
                }
            }
            FilterRow::Relevance(l) => self.selection.toggle_relevance(*l),
            FilterRow::Segment(s) => self.selection.toggle_segment(s),
            FilterRow::Threat(l) => self.selection.toggle_threat(*l),
        }
        self.clamp_table_cursor();
    }

    pub fn select_group(&mut self, group: FilterGroup) {
        match group {
            FilterGroup::Relevance => {
                self.selection.relevance = self.options.relevance.iter().copied().collect()
            }
            FilterGroup::Segment => {
                self.selection.segments = self.options.segments.iter().cloned().collect()
            }
            FilterGroup::Threat => {
                self.selection.threats = self.options.threats.iter().copied().collect()
            }
        }
        self.clamp_table_cursor();
    }

    pub fn clear_group(&mut self, group: FilterGroup) {
        match group {
            FilterGroup::Relevance => self.selection.relevance.clear(),
            FilterGroup::Segment => self.selection.segments.clear(),
            FilterGroup::Threat => self.selection.threats.clear(),
        }
        self.clamp_table_cursor();
    }

    /// Back to the default: every observed value selected, no search.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::all(&self.options);
        self.search_term.clear();
        self.clamp_table_cursor();
    }

    /// Keep the table cursor inside the current row count.
    pub fn clamp_table_cursor(&mut self) {
        let len = self.view().table.len();
        if self.table_cursor >= len {
            self.table_cursor = len.saturating_sub(1);
        }
    }

    /// Write the filtered (not searched) set to the export file.
    pub fn export(&mut self) {
        let view = self.view();
        match fundlens_core::write_csv(&view.filtered, &self.export_dir, &self.config) {
            Ok(path) => {
                let rows = view.filtered.len();
                if rows == 0 {
                    self.set_warning(format!(
                        "Exported header only to {} (filters exclude every event)",
                        path.display()
                    ));
                } else {
                    self.set_status(format!("Exported {rows} rows to {}", path.display()));
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                self.set_error(format!("Export failed: {err}"));
            }
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Filters.next(), Panel::Overview);
        assert_eq!(Panel::Help.next(), Panel::Filters);
        assert_eq!(Panel::Filters.prev(), Panel::Help);
        assert_eq!(Panel::Overview.prev(), Panel::Filters);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..Panel::COUNT {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(Panel::COUNT).is_none());
    }

    #[test]
    fn starts_with_everything_selected() {
        let app = test_app();
        assert_eq!(app.view().filtered.len(), app.events.len());
        assert!(app.filter_rows().iter().all(|r| app.is_row_selected(r)));
    }

    #[test]
    fn filter_rows_have_three_headers() {
        let app = test_app();
        let rows = app.filter_rows();
        let headers = rows
            .iter()
            .filter(|r| matches!(r, FilterRow::Group(_)))
            .count();
        assert_eq!(headers, 3);
        assert_eq!(rows[0], FilterRow::Group(FilterGroup::Relevance));
        assert_eq!(
            rows.len(),
            3 + app.options.relevance.len() + app.options.segments.len() + app.options.threats.len()
        );
    }

    #[test]
    fn toggling_group_header_clears_then_restores() {
        let mut app = test_app();
        let header = FilterRow::Group(FilterGroup::Threat);
        app.toggle_row(&header);
        assert!(app.selection.threats.is_empty());
        assert!(app.view().is_empty());
        app.toggle_row(&header);
        assert_eq!(app.selection.threats.len(), app.options.threats.len());
    }

    #[test]
    fn toggling_option_narrows_view() {
        let mut app = test_app();
        app.toggle_row(&FilterRow::Relevance(Level::Low));
        let view = app.view();
        assert!(view.filtered.iter().all(|e| e.relevance_level != Level::Low));
        assert!(view.filtered.len() < app.events.len());
    }

    #[test]
    fn reset_restores_default_and_clears_search() {
        let mut app = test_app();
        app.clear_group(FilterGroup::Segment);
        app.search_term = "monad".into();
        app.reset_filters();
        assert_eq!(app.view().table.len(), app.events.len());
        assert!(app.search_term.is_empty());
    }

    #[test]
    fn table_cursor_is_clamped_after_narrowing() {
        let mut app = test_app();
        app.table_cursor = app.events.len() - 1;
        app.search_term = "monad".into();
        app.clamp_table_cursor();
        assert_eq!(app.table_cursor, 0);
    }

    #[test]
    fn export_writes_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        app.export_dir = dir.path().to_path_buf();
        app.search_term = "monad".into();
        app.export();

        let path = dir.path().join(&app.config.export_file_name);
        let text = std::fs::read_to_string(path).unwrap();
        let parsed = fundlens_core::parse_csv(&text).unwrap();
        assert_eq!(parsed.len(), app.events.len());
        assert!(matches!(app.status_message, Some((_, StatusLevel::Info))));
    }

    #[test]
    fn export_to_missing_dir_reports_error() {
        let mut app = test_app();
        app.export_dir = PathBuf::from("/nonexistent/fundlens/export");
        app.export();
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }
}
