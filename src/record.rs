// src/record.rs
//
// The normalized shape every post is coerced into, whatever the source.
// `location` is always a string (possibly empty, never absent); the
// region filter and the aggregator both rely on that.

/// One normalized social-media post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Human-readable author name; falls back to the handle if absent.
    pub display_name: String,
    /// Author identifier. Empty, or prefixed with `@` exactly once.
    pub handle: String,
    /// Post body; may contain line breaks.
    pub text: String,
    /// Canonical link to the post; non-empty.
    pub url: String,
    /// Free-text author-declared location; empty string when unknown.
    pub location: String,
}

/// Fixed CSV column order. Export and round-trip tests both key off this.
pub const HEADERS: [&str; 5] = ["display_name", "handle", "text", "url", "location"];

impl Record {
    /// Flatten into export row order (matches `HEADERS`).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.handle.clone(),
            self.text.clone(),
            self.url.clone(),
            self.location.clone(),
        ]
    }

    /// Rebuild from a parsed export row. Short rows are rejected rather
    /// than padded; the writer always emits all five columns.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 5 {
            return None;
        }
        Some(Self {
            display_name: row[0].clone(),
            handle: row[1].clone(),
            text: row[2].clone(),
            url: row[3].clone(),
            location: row[4].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_round_trip() {
        let r = Record {
            display_name: s!("Aditi Sharma"),
            handle: s!("@aditidesigns"),
            text: s!("Hiring, with commas\nand a newline"),
            url: s!("https://twitter.com/aditidesigns/status/1"),
            location: s!("Bengaluru, India"),
        };
        let row = r.to_row();
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(Record::from_row(&row), Some(r));
    }

    #[test]
    fn short_row_rejected() {
        let row = vec![s!("a"), s!("b")];
        assert_eq!(Record::from_row(&row), None);
    }
}
