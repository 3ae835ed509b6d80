//! One-pass view model assembly.
//!
//! The host UI calls [`render`] whenever a filter or the search term changes.
//! Nothing is cached between calls; every view is recomputed from the record
//! set and the current inputs.

use crate::aggregate::{
    by_segment, by_stage, summary_metrics_with, threat_matrix_with, timeline, MonthBucket,
    SegmentTotal, StageTotal, SummaryMetrics, ThreatMatrix,
};
use crate::config::DashboardConfig;
use crate::domain::FundingEvent;
use crate::filter::{filter, search, FilterSelection};
use crate::insights::{action_items, high_priority, table_rows, SegmentActions};

/// Everything the dashboard draws for one set of inputs.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    /// Filtered (not searched) events. This is what the export writes.
    pub filtered: Vec<&'a FundingEvent>,
    /// Filtered and searched events, newest first.
    pub table: Vec<&'a FundingEvent>,
    pub summary: SummaryMetrics,
    pub segments: Vec<SegmentTotal>,
    pub matrix: ThreatMatrix,
    pub timeline: Vec<MonthBucket>,
    pub stages: Vec<StageTotal>,
    pub high_priority: Vec<&'a FundingEvent>,
    pub action_items: Vec<SegmentActions>,
}

impl ViewModel<'_> {
    /// True when the filters removed every event.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Filter, search and aggregate in one pull.
///
/// Charts, metrics and insights are computed from the filtered set; the
/// search term only narrows the table.
pub fn render<'a>(
    events: &'a [FundingEvent],
    selection: &FilterSelection,
    search_term: Option<&str>,
    config: &DashboardConfig,
) -> ViewModel<'a> {
    let filtered = filter(events, selection);
    let searched = search(filtered.iter().copied(), search_term);
    tracing::trace!(
        filtered = filtered.len(),
        searched = searched.len(),
        "recomputed dashboard view"
    );

    ViewModel {
        table: table_rows(&searched),
        summary: summary_metrics_with(&filtered, config),
        segments: by_segment(&filtered),
        matrix: threat_matrix_with(&filtered, config),
        timeline: timeline(&filtered),
        stages: by_stage(&filtered),
        high_priority: high_priority(&filtered),
        action_items: action_items(&filtered),
        filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::filter::FilterOptions;

    #[test]
    fn default_selection_shows_whole_dataset() {
        let events = dataset::load().unwrap();
        let sel = FilterSelection::all(&FilterOptions::from_events(events));
        let view = render(events, &sel, None, &DashboardConfig::default());
        assert_eq!(view.filtered.len(), events.len());
        assert_eq!(view.table.len(), events.len());
        assert_eq!(view.summary.total.count, events.len());
        assert!(!view.is_empty());
    }

    #[test]
    fn search_narrows_table_only() {
        let events = dataset::load().unwrap();
        let sel = FilterSelection::all(&FilterOptions::from_events(events));
        let view = render(events, &sel, Some("stablecoin"), &DashboardConfig::default());
        assert_eq!(view.filtered.len(), events.len());
        // Avalon (use of funds) and Usual (use of funds + sales action)
        let names: Vec<&str> = view.table.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(names, vec!["Avalon Labs", "Usual"]);
        assert_eq!(view.summary.total.count, events.len());
    }

    #[test]
    fn empty_selection_degrades_to_empty_view() {
        let events = dataset::load().unwrap();
        let view = render(events, &FilterSelection::none(), None, &DashboardConfig::default());
        assert!(view.is_empty());
        assert!(view.table.is_empty());
        assert!(view.segments.is_empty());
        assert!(view.timeline.is_empty());
        assert!(view.stages.is_empty());
        assert!(view.matrix.points.is_empty());
        assert_eq!(view.summary.total.total_funding, 0.0);
    }
}
