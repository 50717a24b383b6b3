// src/filter.rs
//
// Region filter: comma-separated free-text tokens matched case-insensitively
// as substrings of each record's location (OR across tokens). An empty or
// whitespace-only filter means "no filtering", not "match nothing".

use crate::record::Record;

/// Split the raw filter string into lower-cased, trimmed, non-empty tokens.
fn tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Keep rows whose location contains at least one token. Returns a new
/// table; input order is preserved. A record with an empty location never
/// matches a non-empty token set.
pub fn by_region(records: &[Record], raw: &str) -> Vec<Record> {
    let tokens = tokens(raw);
    if tokens.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            let loc = r.location.to_lowercase();
            tokens.iter().any(|t| loc.contains(t.as_str()))
        })
        .cloned()
        .collect()
}
