//! The funding event record and its date-derived fields.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Level;

/// One row of the competitive-intelligence dataset: a company's funding round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingEvent {
    pub company: String,
    pub date: NaiveDate,
    pub funding_stage: String,
    /// Round size in USD millions. Never negative.
    pub amount_usd_millions: f64,
    pub use_of_funds: String,
    pub source_link: String,
    pub relevance_to_coinme: String,
    pub sales_action: String,
    pub segment: String,
    pub relevance_level: Level,
    pub competitive_threat: Level,
}

impl FundingEvent {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Calendar quarter, 1..=4.
    pub fn quarter(&self) -> u32 {
        (self.date.month() - 1) / 3 + 1
    }

    /// Quarter period label, e.g. `2024Q4`.
    pub fn quarter_label(&self) -> String {
        format!("{}Q{}", self.year(), self.quarter())
    }

    /// First day of the event's calendar month.
    pub fn month_start(&self) -> NaiveDate {
        self.date.with_day(1).unwrap_or(self.date)
    }

    /// True if `term` appears case-insensitively in the company name,
    /// use of funds, or sales action.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.company, &self.use_of_funds, &self.sales_action]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
