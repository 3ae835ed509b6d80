//! CSV export of the filtered event set, and re-import of such a file.
//!
//! Columns follow the record's field order. Amounts are raw numbers with one
//! decimal place; currency formatting is a display concern.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::DashboardConfig;
use crate::domain::{FundingEvent, Level};

/// Header row of every export.
pub const CSV_COLUMNS: [&str; 11] = [
    "company",
    "date",
    "funding_stage",
    "amount_usd_millions",
    "use_of_funds",
    "source_link",
    "relevance_to_coinme",
    "sales_action",
    "segment",
    "relevance_level",
    "competitive_threat",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("row {row}: invalid date {value:?}")]
    InvalidDate { row: usize, value: String },
}

/// Serialize events to CSV text with a header row.
pub fn to_csv(events: &[&FundingEvent]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;

    for e in events {
        let date = e.date.format("%Y-%m-%d").to_string();
        let amount = format!("{:.1}", e.amount_usd_millions);
        wtr.write_record([
            e.company.as_str(),
            date.as_str(),
            e.funding_stage.as_str(),
            amount.as_str(),
            e.use_of_funds.as_str(),
            e.source_link.as_str(),
            e.relevance_to_coinme.as_str(),
            e.sales_action.as_str(),
            e.segment.as_str(),
            e.relevance_level.label(),
            e.competitive_threat.label(),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(data)?)
}

/// Write the export file named by `config` into `dir`. Returns its path.
pub fn write_csv(
    events: &[&FundingEvent],
    dir: &Path,
    config: &DashboardConfig,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(&config.export_file_name);
    let csv = to_csv(events)?;
    std::fs::write(&path, csv).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(rows = events.len(), path = %path.display(), "exported funding events");
    Ok(path)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    company: String,
    date: String,
    funding_stage: String,
    amount_usd_millions: f64,
    use_of_funds: String,
    source_link: String,
    relevance_to_coinme: String,
    sales_action: String,
    segment: String,
    relevance_level: Level,
    competitive_threat: Level,
}

/// Parse CSV text produced by [`to_csv`].
pub fn parse_csv(text: &str) -> Result<Vec<FundingEvent>, ExportError> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let mut events = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| {
            ExportError::InvalidDate {
                row: i + 1,
                value: row.date.clone(),
            }
        })?;
        events.push(FundingEvent {
            company: row.company,
            date,
            funding_stage: row.funding_stage,
            amount_usd_millions: row.amount_usd_millions,
            use_of_funds: row.use_of_funds,
            source_link: row.source_link,
            relevance_to_coinme: row.relevance_to_coinme,
            sales_action: row.sales_action,
            segment: row.segment,
            relevance_level: row.relevance_level,
            competitive_threat: row.competitive_threat,
        });
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::avalon_and_monad;

    #[test]
    fn header_and_amount_format() {
        let events = avalon_and_monad();
        let refs: Vec<&FundingEvent> = events.iter().collect();
        let csv = to_csv(&refs).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_COLUMNS.join(","));
        let first = lines.next().unwrap();
        assert!(first.starts_with("Avalon Labs,2024-12-01,Series A,10.0,"));
        assert!(first.ends_with(",High,High"));
    }

    #[test]
    fn empty_set_exports_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(parse_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn quoting_survives_commas() {
        let events = avalon_and_monad();
        let refs: Vec<&FundingEvent> = events.iter().collect();
        let parsed = parse_csv(&to_csv(&refs).unwrap()).unwrap();
        // "Bitcoin-backed DeFi ecosystem expansion, lending, stablecoins"
        assert_eq!(parsed[0].use_of_funds, events[0].use_of_funds);
        assert_eq!(parsed[1].amount_usd_millions, 225.0);
    }

    #[test]
    fn write_csv_uses_configured_name() {
        let dir = tempfile::tempdir().unwrap();
        let events = avalon_and_monad();
        let refs: Vec<&FundingEvent> = events.iter().collect();
        let path = write_csv(&refs, dir.path(), &DashboardConfig::default()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "coinme_competitive_intelligence.csv"
        );
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_csv(&text).unwrap().len(), 2);
    }

    #[test]
    fn bad_date_in_import_is_reported() {
        let mut text = CSV_COLUMNS.join(",");
        text.push_str("\nX,12/01/2024,Seed,1.0,u,s,r,a,seg,Low,Low\n");
        match parse_csv(&text) {
            Err(ExportError::InvalidDate { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "12/01/2024");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }
}
