//! FundLens CLI — headless access to the competitor funding dashboard.
//!
//! Commands:
//! - `summary` — headline metrics plus segment, stage and timeline tables
//! - `list` — filtered events newest first, optionally narrowed by a search term
//! - `export` — write the filtered events to the dashboard CSV file
//! - `inspect` — re-read an exported CSV and report what it holds

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use fundlens_core::{
    dataset, parse_csv, render, write_csv, DashboardConfig, FilterOptions, FilterSelection,
    FundingEvent, Level, ViewModel,
};

#[derive(Parser)]
#[command(
    name = "fundlens",
    about = "FundLens CLI — competitor funding intelligence",
    version
)]
struct Cli {
    /// Dashboard config file (TOML). Defaults are used without it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline metrics plus segment, stage and timeline tables.
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of tables.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Filtered events, newest first.
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Case-insensitive match on company, use of funds or sales action.
        #[arg(long)]
        search: Option<String>,
    },
    /// Write the filtered events to the dashboard CSV file.
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Directory the CSV file is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Re-read an exported CSV and report its contents.
    Inspect {
        /// Path to an exported CSV file.
        file: PathBuf,
    },
}

/// Multi-select filters. An omitted flag selects every observed value.
#[derive(Args)]
struct FilterArgs {
    /// Relevance level to keep (Low, Medium, High). Repeatable.
    #[arg(long = "relevance")]
    relevance: Vec<Level>,

    /// Market segment to keep. Repeatable.
    #[arg(long = "segment")]
    segments: Vec<String>,

    /// Competitive threat level to keep (Low, Medium, High). Repeatable.
    #[arg(long = "threat")]
    threats: Vec<Level>,
}

impl FilterArgs {
    /// Unknown segment names are kept; they simply match no events.
    fn selection(&self, options: &FilterOptions) -> FilterSelection {
        for segment in &self.segments {
            if !options.segments.contains(segment) {
                tracing::warn!(
                    segment = %segment,
                    valid = %options.segments.join(", "),
                    "segment not in dataset, it matches no events"
                );
            }
        }

        let mut selection = FilterSelection::all(options);
        if !self.relevance.is_empty() {
            selection.relevance = self.relevance.iter().copied().collect();
        }
        if !self.segments.is_empty() {
            selection.segments = self.segments.iter().cloned().collect::<HashSet<_>>();
        }
        if !self.threats.is_empty() {
            selection.threats = self.threats.iter().copied().collect();
        }
        selection
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = DashboardConfig::load_or_default(cli.config.as_deref())
        .context("failed to load dashboard config")?;

    match cli.command {
        Commands::Summary { filters, json } => run_summary(&filters, json, &config),
        Commands::List { filters, search } => run_list(&filters, search.as_deref(), &config),
        Commands::Export { filters, out_dir } => run_export(&filters, out_dir, &config),
        Commands::Inspect { file } => run_inspect(file),
    }
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Load the embedded dataset and compute the view for the given filters.
fn build_view<'a>(
    events: &'a [FundingEvent],
    filters: &FilterArgs,
    search: Option<&str>,
    config: &DashboardConfig,
) -> ViewModel<'a> {
    let options = FilterOptions::from_events(events);
    let selection = filters.selection(&options);
    render(events, &selection, search, config)
}

fn run_summary(filters: &FilterArgs, as_json: bool, config: &DashboardConfig) -> Result<()> {
    let events = dataset::load().context("embedded dataset is invalid")?;
    let view = build_view(events, filters, None, config);

    if as_json {
        let doc = json!({
            "summary": view.summary,
            "segments": view.segments,
            "stages": view.stages,
            "timeline": view.timeline,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No funding events match the current filters.");
        return Ok(());
    }

    let s = &view.summary;
    println!("=== Summary ===");
    println!(
        "Total funding:      ${:.1}M across {} companies",
        s.total.total_funding, s.total.count
    );
    println!(
        "High threat:        {} (${:.1}M raised)",
        s.high_threat.count, s.high_threat.total_funding
    );
    println!(
        "{:<19} {} (${:.1}M)",
        format!("{} segment:", config.focus_keyword),
        s.focus_segment.count,
        s.focus_segment.total_funding
    );
    println!(
        "Recent (>= {}): {} (${:.1}M)",
        config.recent_cutoff, s.recent.count, s.recent.total_funding
    );

    println!();
    println!("=== Funding by Segment ===");
    for seg in &view.segments {
        println!(
            "  {:<30} ${:>8.1}M  {:>2} deals",
            seg.segment, seg.total_funding, seg.deal_count
        );
    }

    println!();
    println!("=== Funding by Stage ===");
    for stage in &view.stages {
        println!(
            "  {:<18} ${:>8.1}M  {:>5.1}%",
            stage.stage,
            stage.total_funding,
            stage.share(s.total.total_funding) * 100.0
        );
    }

    println!();
    println!("=== Timeline ===");
    for bucket in &view.timeline {
        println!(
            "  {}  ${:>8.1}M  {:>2} deals",
            bucket.label(),
            bucket.total_funding,
            bucket.deal_count
        );
    }

    Ok(())
}

fn run_list(filters: &FilterArgs, search: Option<&str>, config: &DashboardConfig) -> Result<()> {
    let events = dataset::load().context("embedded dataset is invalid")?;
    let view = build_view(events, filters, search, config);

    println!(
        "{:<20} {:<10} {:<16} {:>9} {:<28} {:<9} {:<9}",
        "Company", "Date", "Stage", "Amount", "Segment", "Relevance", "Threat"
    );
    for e in &view.table {
        println!(
            "{:<20} {} {:<16} {:>9} {:<28} {:<9} {:<9}",
            e.company,
            e.date.format("%Y-%m-%d"),
            e.funding_stage,
            format!("${:.1}M", e.amount_usd_millions),
            e.segment,
            e.relevance_level,
            e.competitive_threat
        );
    }
    println!("{} of {} events", view.table.len(), view.filtered.len());
    Ok(())
}

fn run_export(filters: &FilterArgs, out_dir: PathBuf, config: &DashboardConfig) -> Result<()> {
    let events = dataset::load().context("embedded dataset is invalid")?;
    let view = build_view(events, filters, None, config);

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = write_csv(&view.filtered, &out_dir, config)?;
    println!("Exported {} rows to {}", view.filtered.len(), path.display());
    Ok(())
}

fn run_inspect(file: PathBuf) -> Result<()> {
    let text =
        fs::read_to_string(&file).with_context(|| format!("failed to read {}", file.display()))?;
    let events = parse_csv(&text).with_context(|| format!("invalid export {}", file.display()))?;

    let total: f64 = events.iter().map(|e| e.amount_usd_millions).sum();
    println!("File:     {}", file.display());
    println!("Records:  {}", events.len());
    println!("Funding:  ${total:.1}M");
    match date_range(&events) {
        Some((first, last)) => println!("Dates:    {first} .. {last}"),
        None => println!("Dates:    (none)"),
    }
    Ok(())
}

fn date_range(events: &[FundingEvent]) -> Option<(NaiveDate, NaiveDate)> {
    let first = events.iter().map(|e| e.date).min()?;
    let last = events.iter().map(|e| e.date).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_filters() -> FilterArgs {
        FilterArgs {
            relevance: Vec::new(),
            segments: Vec::new(),
            threats: Vec::new(),
        }
    }

    #[test]
    fn omitted_flags_select_everything() {
        let events = dataset::load().unwrap();
        let options = FilterOptions::from_events(events);
        let selection = no_filters().selection(&options);
        assert_eq!(selection, FilterSelection::all(&options));
    }

    #[test]
    fn flags_narrow_their_group_only() {
        let events = dataset::load().unwrap();
        let options = FilterOptions::from_events(events);
        let mut args = no_filters();
        args.relevance = vec![Level::High];
        let selection = args.selection(&options);
        assert_eq!(selection.relevance.len(), 1);
        assert_eq!(selection.threats.len(), options.threats.len());
    }

    #[test]
    fn unknown_segment_yields_empty_view() {
        let cli = Cli::try_parse_from(["fundlens", "list", "--segment", "Lunar Mining"]).unwrap();
        let Commands::List { filters, search } = cli.command else {
            panic!("expected list");
        };
        let events = dataset::load().unwrap();
        let view = build_view(events, &filters, search.as_deref(), &DashboardConfig::default());
        assert!(view.is_empty());
        assert!(view.table.is_empty());
    }

    #[test]
    fn unknown_segment_alongside_known_keeps_known_matches() {
        let events = dataset::load().unwrap();
        let mut args = no_filters();
        args.segments = vec!["Lunar Mining".into(), "Infrastructure".into()];
        let view = build_view(events, &args, None, &DashboardConfig::default());
        assert_eq!(view.filtered.len(), 2);
    }

    #[test]
    fn cli_parses_repeatable_filters() {
        let cli = Cli::try_parse_from([
            "fundlens", "list", "--relevance", "high", "--relevance", "Medium", "--search", "btc",
        ])
        .unwrap();
        match cli.command {
            Commands::List { filters, search } => {
                assert_eq!(filters.relevance, vec![Level::High, Level::Medium]);
                assert_eq!(search.as_deref(), Some("btc"));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn date_range_of_empty_export() {
        assert_eq!(date_range(&[]), None);
    }
}
