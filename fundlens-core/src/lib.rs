//! FundLens Core — aggregation engine for the competitor funding dashboard.
//!
//! This crate holds everything that is not drawing:
//! - Domain types (funding events, Low/Medium/High levels)
//! - The embedded dataset, parsed once and cached for the process lifetime
//! - Conjunctive multi-select filtering and free-text search
//! - Aggregations (segment totals, threat matrix, monthly timeline, stages,
//!   summary rollups) and strategic insights
//! - One-pass view model assembly for the UI
//! - CSV export and re-import

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod export;
pub mod filter;
pub mod insights;
pub mod view;

pub use aggregate::{
    by_segment, by_stage, summary_metrics, summary_metrics_with, threat_matrix,
    threat_matrix_with, timeline, MatrixPoint, MonthBucket, Rollup, SegmentTotal, StageTotal,
    SummaryMetrics, ThreatMatrix,
};
pub use config::{ConfigError, DashboardConfig};
pub use dataset::DatasetError;
pub use domain::{FundingEvent, Level};
pub use export::{parse_csv, to_csv, write_csv, ExportError};
pub use filter::{filter, search, FilterOptions, FilterSelection};
pub use insights::{
    action_items, high_priority, table_rows, KeyTakeaways, SegmentActions, KEY_TAKEAWAYS,
};
pub use view::{render, ViewModel};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::domain::{FundingEvent, Level};

    /// Minimal event with the given company, ISO date and amount.
    pub fn event(company: &str, date: &str, amount: f64) -> FundingEvent {
        FundingEvent {
            company: company.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            funding_stage: "Series A".to_string(),
            amount_usd_millions: amount,
            use_of_funds: String::new(),
            source_link: String::new(),
            relevance_to_coinme: String::new(),
            sales_action: String::new(),
            segment: "Other".to_string(),
            relevance_level: Level::Medium,
            competitive_threat: Level::Medium,
        }
    }

    /// The Avalon Labs / Monad Labs pair used throughout the tests.
    pub fn avalon_and_monad() -> Vec<FundingEvent> {
        let mut avalon = event("Avalon Labs", "2024-12-01", 10.0);
        avalon.use_of_funds = "Bitcoin-backed DeFi ecosystem expansion, lending, stablecoins".into();
        avalon.sales_action =
            "Partner opportunity for enterprise custody solutions; competitive pricing strategy needed"
                .into();
        avalon.segment = "Bitcoin Financial Services".into();
        avalon.relevance_level = Level::High;
        avalon.competitive_threat = Level::High;

        let mut monad = event("Monad Labs", "2024-06-01", 225.0);
        monad.use_of_funds = "Layer-1 smart contract network development".into();
        monad.sales_action =
            "Monitor for potential integration opportunities in smart contract payments".into();
        monad.segment = "Infrastructure".into();
        monad.relevance_level = Level::Low;
        monad.competitive_threat = Level::Low;

        vec![avalon, monad]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the record set and views can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<FundingEvent>();
        require_sync::<FundingEvent>();
        require_send::<ViewModel<'static>>();
        require_sync::<ViewModel<'static>>();
        require_send::<DashboardConfig>();
        require_sync::<DashboardConfig>();
    }
}
