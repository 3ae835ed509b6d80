//! Pure aggregations over a filtered event set.
//!
//! Every function tolerates an empty input and returns an empty (or zeroed)
//! result. Grouped outputs keep groups in order of first appearance before
//! any sort, and all sorts are stable, so equal keys stay in that order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::domain::{FundingEvent, Level};

/// Funding total and deal count for one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentTotal {
    pub segment: String,
    pub total_funding: f64,
    pub deal_count: usize,
}

/// Funding total and deal count for one funding stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTotal {
    pub stage: String,
    pub total_funding: f64,
    pub deal_count: usize,
}

impl StageTotal {
    /// Share of `grand_total` held by this stage, in `0.0..=1.0`.
    pub fn share(&self, grand_total: f64) -> f64 {
        if grand_total > 0.0 {
            self.total_funding / grand_total
        } else {
            0.0
        }
    }
}

/// One calendar month of funding activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month_start: NaiveDate,
    pub total_funding: f64,
    pub deal_count: usize,
}

impl MonthBucket {
    /// `YYYY-MM` label.
    pub fn label(&self) -> String {
        self.month_start.format("%Y-%m").to_string()
    }
}

/// One bubble on the threat/relevance matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixPoint {
    pub company: String,
    pub segment: String,
    pub relevance_score: u8,
    pub threat_score: u8,
    pub amount: f64,
}

/// Bubble-scatter data plus the quadrant divider drawn on both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatMatrix {
    pub points: Vec<MatrixPoint>,
    pub divider: f64,
}

/// Count and funding sum of a subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rollup {
    pub count: usize,
    pub total_funding: f64,
}

impl Rollup {
    fn of<'a>(events: impl IntoIterator<Item = &'a FundingEvent>) -> Self {
        events.into_iter().fold(Self::default(), |acc, e| Self {
            count: acc.count + 1,
            total_funding: acc.total_funding + e.amount_usd_millions,
        })
    }
}

/// The four headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// All filtered events.
    pub total: Rollup,
    pub high_threat: Rollup,
    /// Events whose segment contains the focus keyword.
    pub focus_segment: Rollup,
    /// Events dated on or after the recent cutoff.
    pub recent: Rollup,
}

/// Group by `key`, keeping first-appearance order of the groups.
fn group_sum<'a, K, F>(events: &[&'a FundingEvent], key: F) -> Vec<(K, f64, usize)>
where
    K: PartialEq,
    F: Fn(&'a FundingEvent) -> K,
{
    let mut groups: Vec<(K, f64, usize)> = Vec::new();
    for &e in events {
        let k = key(e);
        match groups.iter_mut().find(|(g, _, _)| *g == k) {
            Some((_, total, count)) => {
                *total += e.amount_usd_millions;
                *count += 1;
            }
            None => groups.push((k, e.amount_usd_millions, 1)),
        }
    }
    groups
}

/// Funding per segment, largest total first.
pub fn by_segment(events: &[&FundingEvent]) -> Vec<SegmentTotal> {
    let mut rows: Vec<SegmentTotal> = group_sum(events, |e| e.segment.as_str())
        .into_iter()
        .map(|(segment, total_funding, deal_count)| SegmentTotal {
            segment: segment.to_string(),
            total_funding,
            deal_count,
        })
        .collect();
    rows.sort_by(|a, b| b.total_funding.total_cmp(&a.total_funding));
    rows
}

/// Funding per stage, largest slice first. Ties keep first-appearance order.
pub fn by_stage(events: &[&FundingEvent]) -> Vec<StageTotal> {
    let mut rows: Vec<StageTotal> = group_sum(events, |e| e.funding_stage.as_str())
        .into_iter()
        .map(|(stage, total_funding, deal_count)| StageTotal {
            stage: stage.to_string(),
            total_funding,
            deal_count,
        })
        .collect();
    rows.sort_by(|a, b| b.total_funding.total_cmp(&a.total_funding));
    rows
}

/// Funding per calendar month, oldest first. Empty months are omitted.
pub fn timeline(events: &[&FundingEvent]) -> Vec<MonthBucket> {
    let mut months: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for e in events {
        let slot = months.entry(e.month_start()).or_insert((0.0, 0));
        slot.0 += e.amount_usd_millions;
        slot.1 += 1;
    }
    months
        .into_iter()
        .map(|(month_start, (total_funding, deal_count))| MonthBucket {
            month_start,
            total_funding,
            deal_count,
        })
        .collect()
}

/// One matrix point per event, using the default divider.
pub fn threat_matrix(events: &[&FundingEvent]) -> ThreatMatrix {
    threat_matrix_with(events, &DashboardConfig::default())
}

pub fn threat_matrix_with(events: &[&FundingEvent], config: &DashboardConfig) -> ThreatMatrix {
    let points = events
        .iter()
        .map(|e| MatrixPoint {
            company: e.company.clone(),
            segment: e.segment.clone(),
            relevance_score: e.relevance_level.score(),
            threat_score: e.competitive_threat.score(),
            amount: e.amount_usd_millions,
        })
        .collect();
    ThreatMatrix {
        points,
        divider: config.quadrant_divider,
    }
}

/// Headline rollups using the default cutoff and focus keyword.
pub fn summary_metrics(events: &[&FundingEvent]) -> SummaryMetrics {
    summary_metrics_with(events, &DashboardConfig::default())
}

pub fn summary_metrics_with(events: &[&FundingEvent], config: &DashboardConfig) -> SummaryMetrics {
    let keyword = config.focus_keyword.to_lowercase();
    let events = events.iter().copied();
    SummaryMetrics {
        total: Rollup::of(events.clone()),
        high_threat: Rollup::of(
            events
                .clone()
                .filter(|e| e.competitive_threat == Level::High),
        ),
        focus_segment: Rollup::of(
            events
                .clone()
                .filter(|e| e.segment.to_lowercase().contains(&keyword)),
        ),
        recent: Rollup::of(events.filter(|e| e.date >= config.recent_cutoff)),
    }
}
