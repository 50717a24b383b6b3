// src/aggregate.rs
//
// Location aggregation for the chart: group by location (empty mapped to
// "Unknown"), count, sort by count descending, cap at the top 15. Counting
// happens into a first-seen-ordered list and the sort is stable, so equal
// counts keep first-seen order. Chart-only: the feed and export never see
// this output.

use crate::config::consts::{TOP_LOCATIONS, UNKNOWN_LOCATION};
use crate::record::Record;

/// Ranked (location, count) pairs, at most `TOP_LOCATIONS` entries.
pub fn location_counts(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in records {
        let label = if r.location.is_empty() { UNKNOWN_LOCATION } else { r.location.as_str() };
        match counts.iter_mut().find(|(l, _)| l.as_str() == label) {
            Some((_, c)) => *c += 1,
            None => counts.push((s!(label), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_LOCATIONS);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(loc: &str) -> Record {
        Record {
            display_name: s!("n"),
            handle: s!("@h"),
            text: s!("t"),
            url: s!("u"),
            location: s!(loc),
        }
    }

    #[test]
    fn groups_counts_and_substitutes_unknown() {
        let rows = vec![rec("Mumbai"), rec("Mumbai"), rec(""), rec("Pune")];
        assert_eq!(
            location_counts(&rows),
            vec![(s!("Mumbai"), 2), (s!("Unknown"), 1), (s!("Pune"), 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let rows = vec![rec("Pune"), rec("Remote"), rec("Gurugram"), rec("Remote")];
        assert_eq!(
            location_counts(&rows),
            vec![(s!("Remote"), 2), (s!("Pune"), 1), (s!("Gurugram"), 1)]
        );
    }

    #[test]
    fn truncates_to_top_15() {
        let mut rows = Vec::new();
        for i in 0..20 {
            // location i appears (i+1) times so ordering is unambiguous
            for _ in 0..=i {
                rows.push(rec(&format!("city{}", i)));
            }
        }
        let counts = location_counts(&rows);
        assert_eq!(counts.len(), 15);
        assert_eq!(counts[0], (s!("city19"), 20));
        assert_eq!(counts[14], (s!("city5"), 6));
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(location_counts(&[]).is_empty());
    }
}
