//! Display formatting for amounts and table cells.

/// Currency display for an amount in USD millions, e.g. `$10.0M`.
pub fn money(amount_millions: f64) -> String {
    format!("${amount_millions:.1}M")
}

/// Truncate to `max` characters, marking the cut with a trailing `.`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('.');
        out
    }
}

/// Plural-aware deal count, e.g. `1 deal`, `3 deals`.
pub fn deals(count: usize) -> String {
    if count == 1 {
        "1 deal".to_string()
    } else {
        format!("{count} deals")
    }
}
