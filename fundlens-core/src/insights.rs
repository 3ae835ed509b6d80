//! Strategic insights and the detailed competitor table.

use serde::Serialize;

use crate::domain::{FundingEvent, Level};

/// Sales actions grouped under one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentActions {
    pub segment: String,
    pub deal_count: usize,
    pub total_funding: f64,
    /// `(company, sales_action)` in input order.
    pub actions: Vec<(String, String)>,
}

/// Analyst notes shipped with the embedded dataset. They describe the full
/// record set and do not follow the filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyTakeaways {
    pub market_threats: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub data_source: &'static str,
    pub last_updated: &'static str,
}

pub const KEY_TAKEAWAYS: KeyTakeaways = KeyTakeaways {
    market_threats: &[
        "Avalon Labs: Direct Bitcoin services competitor with significant traction",
        "Accountable: Emerging Bitcoin lending threat",
        "Securitize: Institutional tokenization with BlackRock backing",
    ],
    opportunities: &[
        "Partner with infrastructure players (Monad, Berachain)",
        "Develop Bitcoin yield products to compete with Babylon",
        "Target enterprise clients similar to Securitize's approach",
    ],
    data_source: "Real competitive intelligence data from Coinme market analysis.",
    last_updated: "December 2024",
};

/// High-relevance competitors, in input order.
pub fn high_priority<'a>(events: &[&'a FundingEvent]) -> Vec<&'a FundingEvent> {
    events
        .iter()
        .copied()
        .filter(|e| e.relevance_level == Level::High)
        .collect()
}

/// Action items per segment, segments in order of first appearance.
pub fn action_items(events: &[&FundingEvent]) -> Vec<SegmentActions> {
    let mut out: Vec<SegmentActions> = Vec::new();
    for e in events {
        let idx = match out.iter().position(|s| s.segment == e.segment) {
            Some(i) => i,
            None => {
                out.push(SegmentActions {
                    segment: e.segment.clone(),
                    deal_count: 0,
                    total_funding: 0.0,
                    actions: Vec::new(),
                });
                out.len() - 1
            }
        };
        let group = &mut out[idx];
        group.deal_count += 1;
        group.total_funding += e.amount_usd_millions;
        group.actions.push((e.company.clone(), e.sales_action.clone()));
    }
    out
}

/// Table ordering: newest first, ties keep input order.
pub fn table_rows<'a>(events: &[&'a FundingEvent]) -> Vec<&'a FundingEvent> {
    let mut rows = events.to_vec();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}
