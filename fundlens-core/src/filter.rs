//! Conjunctive multi-select filter and free-text search.
//!
//! An empty selection in any group means "show nothing", matching the
//! dashboard's multiselect behavior. Values not present in the data simply
//! match nothing.

use std::collections::HashSet;

use crate::domain::{FundingEvent, Level};

/// Distinct observed values per filter group, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub relevance: Vec<Level>,
    pub segments: Vec<String>,
    pub threats: Vec<Level>,
}

impl FilterOptions {
    pub fn from_events(events: &[FundingEvent]) -> Self {
        let mut options = Self::default();
        for e in events {
            if !options.relevance.contains(&e.relevance_level) {
                options.relevance.push(e.relevance_level);
            }
            if !options.segments.contains(&e.segment) {
                options.segments.push(e.segment.clone());
            }
            if !options.threats.contains(&e.competitive_threat) {
                options.threats.push(e.competitive_threat);
            }
        }
        options
    }
}

/// The viewer's current picks in each filter group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub relevance: HashSet<Level>,
    pub segments: HashSet<String>,
    pub threats: HashSet<Level>,
}

impl FilterSelection {
    /// Select every observed value (the default dashboard state).
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            relevance: options.relevance.iter().copied().collect(),
            segments: options.segments.iter().cloned().collect(),
            threats: options.threats.iter().copied().collect(),
        }
    }

    /// Select nothing in any group.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toggle_relevance(&mut self, level: Level) {
        toggle(&mut self.relevance, level);
    }

    pub fn toggle_segment(&mut self, segment: &str) {
        if !self.segments.remove(segment) {
            self.segments.insert(segment.to_string());
        }
    }

    pub fn toggle_threat(&mut self, level: Level) {
        toggle(&mut self.threats, level);
    }

    /// True if some group is empty, which forces an empty result.
    pub fn excludes_everything(&self) -> bool {
        self.relevance.is_empty() || self.segments.is_empty() || self.threats.is_empty()
    }

    pub fn accepts(&self, event: &FundingEvent) -> bool {
        self.relevance.contains(&event.relevance_level)
            && self.segments.contains(&event.segment)
            && self.threats.contains(&event.competitive_threat)
    }
}

fn toggle(set: &mut HashSet<Level>, level: Level) {
    if !set.remove(&level) {
        set.insert(level);
    }
}

/// Keep events whose relevance, segment and threat are all selected.
pub fn filter<'a>(
    events: impl IntoIterator<Item = &'a FundingEvent>,
    selection: &FilterSelection,
) -> Vec<&'a FundingEvent> {
    if selection.excludes_everything() {
        return Vec::new();
    }
    events.into_iter().filter(|e| selection.accepts(e)).collect()
}

/// Keep events whose company, use of funds, or sales action contains `term`
/// (case-insensitive). An empty or absent term keeps everything.
pub fn search<'a>(
    events: impl IntoIterator<Item = &'a FundingEvent>,
    term: Option<&str>,
) -> Vec<&'a FundingEvent> {
    match term {
        Some(t) if !t.is_empty() => events.into_iter().filter(|e| e.matches(t)).collect(),
        _ => events.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{avalon_and_monad, event};

    #[test]
    fn options_keep_first_appearance_order() {
        let mut a = event("A", "2024-01-01", 1.0);
        a.segment = "Payments".into();
        let mut b = event("B", "2024-01-01", 1.0);
        b.segment = "Infrastructure".into();
        let mut c = event("C", "2024-01-01", 1.0);
        c.segment = "Payments".into();
        let opts = FilterOptions::from_events(&[a, b, c]);
        assert_eq!(opts.segments, vec!["Payments", "Infrastructure"]);
    }

    #[test]
    fn full_selection_is_identity() {
        let events = avalon_and_monad();
        let sel = FilterSelection::all(&FilterOptions::from_events(&events));
        let out = filter(&events, &sel);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].company, "Avalon Labs");
        assert_eq!(out[1].company, "Monad Labs");
    }

    #[test]
    fn relevance_high_keeps_only_avalon() {
        let events = avalon_and_monad();
        let mut sel = FilterSelection::all(&FilterOptions::from_events(&events));
        sel.relevance = [Level::High].into_iter().collect();
        let out = filter(&events, &sel);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Avalon Labs");
    }

    #[test]
    fn any_empty_group_yields_nothing() {
        let events = avalon_and_monad();
        let full = FilterSelection::all(&FilterOptions::from_events(&events));

        let mut sel = full.clone();
        sel.segments.clear();
        assert!(filter(&events, &sel).is_empty());

        let mut sel = full.clone();
        sel.threats.clear();
        assert!(filter(&events, &sel).is_empty());

        assert!(filter(&events, &FilterSelection::none()).is_empty());
    }

    #[test]
    fn unknown_segment_matches_nothing() {
        let events = avalon_and_monad();
        let mut sel = FilterSelection::all(&FilterOptions::from_events(&events));
        sel.segments = ["Lunar Mining".to_string()].into_iter().collect();
        assert!(filter(&events, &sel).is_empty());
    }

    #[test]
    fn toggles_flip_membership() {
        let mut sel = FilterSelection::none();
        sel.toggle_relevance(Level::Low);
        sel.toggle_segment("Payments");
        sel.toggle_threat(Level::High);
        assert!(sel.relevance.contains(&Level::Low));
        assert!(sel.segments.contains("Payments"));
        sel.toggle_segment("Payments");
        assert!(!sel.segments.contains("Payments"));
        assert!(sel.excludes_everything());
    }

    #[test]
    fn empty_search_is_identity() {
        let events = avalon_and_monad();
        assert_eq!(search(&events, None).len(), 2);
        assert_eq!(search(&events, Some("")).len(), 2);
    }

    #[test]
    fn search_term_whitespace_is_significant() {
        let events = avalon_and_monad();
        assert!(search(&events, Some("   ")).is_empty());
        assert!(search(&events, Some("Labs ")).is_empty());
        let out = search(&events, Some("Monad Labs"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Monad Labs");
    }

    #[test]
    fn search_matches_company_case_insensitively() {
        let events = avalon_and_monad();
        let out = search(&events, Some("MONAD"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Monad Labs");
    }

    #[test]
    fn search_ignores_segment_field() {
        let events = avalon_and_monad();
        // "Infrastructure" only appears in Monad's segment
        assert!(search(&events, Some("Infrastructure")).is_empty());
    }
}
