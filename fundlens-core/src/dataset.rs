//! Embedded competitive-intelligence dataset and its process-wide cache.
//!
//! The record list is a fixed literal. It is parsed once, on first access,
//! into an immutable `&'static [FundingEvent]` that lives until process exit.
//! There is no invalidation or reload path.

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::domain::{FundingEvent, Level};

/// Unparsed dataset row, as written in source.
#[derive(Debug, Clone, Copy)]
pub struct RawEvent {
    pub company: &'static str,
    pub date: &'static str,
    pub funding_stage: &'static str,
    pub amount_usd_millions: f64,
    pub use_of_funds: &'static str,
    pub source_link: &'static str,
    pub relevance_to_coinme: &'static str,
    pub sales_action: &'static str,
    pub segment: &'static str,
    pub relevance_level: &'static str,
    pub competitive_threat: &'static str,
}

/// Load-time failures. Any of these means the embedded data is defective.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid date {value:?} for {company}")]
    InvalidDate { company: String, value: String },

    #[error("invalid {field} {value:?} for {company}")]
    InvalidLevel {
        company: String,
        field: &'static str,
        value: String,
    },

    #[error("negative amount {value} for {company}")]
    NegativeAmount { company: String, value: f64 },
}

const ROUNDUP_DEC_2024: &str =
    "https://cointelegraph.com/news/vc-roundup-crypto-funding-climbs-13-6-billion-2024";

/// The curated funding events, newest roundup first.
pub const RAW_EVENTS: &[RawEvent] = &[
    RawEvent {
        company: "Avalon Labs",
        date: "2024-12-01",
        funding_stage: "Series A",
        amount_usd_millions: 10.0,
        use_of_funds: "Bitcoin-backed DeFi ecosystem expansion, lending, stablecoins",
        source_link: ROUNDUP_DEC_2024,
        relevance_to_coinme: "Direct competitor in Bitcoin financial services with 20,000+ BTC serviced",
        sales_action: "Partner opportunity for enterprise custody solutions; competitive pricing strategy needed",
        segment: "Bitcoin Financial Services",
        relevance_level: "High",
        competitive_threat: "High",
    },
    RawEvent {
        company: "Usual",
        date: "2024-12-01",
        funding_stage: "Series A",
        amount_usd_millions: 10.0,
        use_of_funds: "Stablecoin expansion, traditional finance integration",
        source_link: ROUNDUP_DEC_2024,
        relevance_to_coinme: "Adjacent player in crypto payments with $1.7B TVL",
        sales_action: "Explore stablecoin payment integration for enterprise clients",
        segment: "Payments",
        relevance_level: "Medium",
        competitive_threat: "Medium",
    },
    RawEvent {
        company: "Accountable",
        date: "2024-12-01",
        funding_stage: "Seed",
        amount_usd_millions: 2.3,
        use_of_funds: "Bitcoin lending platform, privacy-focused data solutions",
        source_link: ROUNDUP_DEC_2024,
        relevance_to_coinme: "Competitor in Bitcoin lending space with $2M+ loans facilitated",
        sales_action: "Position Coinme's institutional lending capabilities against new entrants",
        segment: "Bitcoin Lending",
        relevance_level: "High",
        competitive_threat: "Medium",
    },
    RawEvent {
        company: "Monad Labs",
        date: "2024-06-01",
        funding_stage: "Series A",
        amount_usd_millions: 225.0,
        use_of_funds: "Layer-1 smart contract network development",
        source_link: "https://cointelegraph.com/news/paradigm-leads-225m-funding-solana-killer",
        relevance_to_coinme: "Infrastructure layer relevant to payment processing",
        sales_action: "Monitor for potential integration opportunities in smart contract payments",
        segment: "Infrastructure",
        relevance_level: "Low",
        competitive_threat: "Low",
    },
    RawEvent {
        company: "Berachain",
        date: "2024-04-01",
        funding_stage: "Series A",
        amount_usd_millions: 100.0,
        use_of_funds: "Modular blockchain development platform",
        source_link: "https://cointelegraph.com/news/crypto-venture-capital-funding-hits-one-billion-april",
        relevance_to_coinme: "Blockchain infrastructure for payment systems",
        sales_action: "Assess partnership potential for enhanced payment rails",
        segment: "Infrastructure",
        relevance_level: "Low",
        competitive_threat: "Low",
    },
    RawEvent {
        company: "Babylon",
        date: "2024-05-01",
        funding_stage: "Series A",
        amount_usd_millions: 70.0,
        use_of_funds: "Bitcoin staking protocol development",
        source_link: "https://cointelegraph.com/news/crypto-vc-l2-interoperability-ai",
        relevance_to_coinme: "Bitcoin ecosystem expansion, potential custody competitor",
        sales_action: "Develop Bitcoin yield products for enterprise clients",
        segment: "Bitcoin Services",
        relevance_level: "Medium",
        competitive_threat: "Medium",
    },
    RawEvent {
        company: "Securitize",
        date: "2024-03-01",
        funding_stage: "Series A",
        amount_usd_millions: 47.0,
        use_of_funds: "Tokenization platform expansion, BlackRock partnership",
        source_link: "https://cointelegraph.com/news/securitize-blackrock-47m-funding-round",
        relevance_to_coinme: "Enterprise tokenization services, institutional adoption",
        sales_action: "Target similar institutional clients with Bitcoin payment solutions",
        segment: "Institutional Services",
        relevance_level: "High",
        competitive_threat: "Medium",
    },
    RawEvent {
        company: "Thena",
        date: "2024-12-01",
        funding_stage: "Strategic",
        // Undisclosed round; estimated.
        amount_usd_millions: 5.0,
        use_of_funds: "DEX expansion, cross-chain operations",
        source_link: ROUNDUP_DEC_2024,
        relevance_to_coinme: "DeFi payment infrastructure with $63M TVL",
        sales_action: "Consider DeFi integration for enterprise payment flows",
        segment: "DeFi/Trading",
        relevance_level: "Medium",
        competitive_threat: "Low",
    },
];

static EVENTS: OnceLock<Vec<FundingEvent>> = OnceLock::new();

impl RawEvent {
    /// Parse into a typed event, rejecting bad dates, levels, or amounts.
    pub fn parse(&self) -> Result<FundingEvent, DatasetError> {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|_| {
            DatasetError::InvalidDate {
                company: self.company.to_string(),
                value: self.date.to_string(),
            }
        })?;
        let relevance_level = parse_level(self.company, "relevance_level", self.relevance_level)?;
        let competitive_threat =
            parse_level(self.company, "competitive_threat", self.competitive_threat)?;
        if self.amount_usd_millions < 0.0 || self.amount_usd_millions.is_nan() {
            return Err(DatasetError::NegativeAmount {
                company: self.company.to_string(),
                value: self.amount_usd_millions,
            });
        }

        Ok(FundingEvent {
            company: self.company.to_string(),
            date,
            funding_stage: self.funding_stage.to_string(),
            amount_usd_millions: self.amount_usd_millions,
            use_of_funds: self.use_of_funds.to_string(),
            source_link: self.source_link.to_string(),
            relevance_to_coinme: self.relevance_to_coinme.to_string(),
            sales_action: self.sales_action.to_string(),
            segment: self.segment.to_string(),
            relevance_level,
            competitive_threat,
        })
    }
}

fn parse_level(company: &str, field: &'static str, value: &str) -> Result<Level, DatasetError> {
    value.parse().map_err(|_| DatasetError::InvalidLevel {
        company: company.to_string(),
        field,
        value: value.to_string(),
    })
}

/// Parse every raw row. The first defective row aborts the whole load.
pub fn parse_events(raw: &[RawEvent]) -> Result<Vec<FundingEvent>, DatasetError> {
    raw.iter().map(RawEvent::parse).collect()
}

/// Return the cached record set, parsing [`RAW_EVENTS`] on first call.
pub fn load() -> Result<&'static [FundingEvent], DatasetError> {
    if let Some(events) = EVENTS.get() {
        return Ok(events);
    }
    let parsed = parse_events(RAW_EVENTS)?;
    tracing::debug!(records = parsed.len(), "loaded embedded funding dataset");
    Ok(EVENTS.get_or_init(|| parsed))
}
