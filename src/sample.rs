// src/sample.rs
//
// Deterministic sample records, used whenever live fetching is off,
// unavailable, failing, or empty. Pure function of `n`: two calls with the
// same count are byte-identical, so fallback output is reproducible.

use crate::config::consts::{POST_BASE_URL, SAMPLE_STATUS_ID_BASE, SAMPLE_TEXT_TAG_BASE};
use crate::record::Record;

/// Fixed catalog: (display_name, handle, text, location).
const CATALOG: [(&str, &str, &str, &str); 8] = [
    ("Aditi Sharma", "aditidesigns", "Hiring UI/UX designer for a fintech MVP. DM your portfolio!", "Bengaluru, India"),
    ("Ravi Patel", "brandkraft_ravi", "Looking for a freelance brand identity designer for a quick turnaround", "Ahmedabad, IN"),
    ("UX Careers", "ux_careers_daily", "We are hiring UI/UX Designer (Remote, India). Figma, prototyping, user testing.", "Remote"),
    ("TechNest", "technest_jobs", "Product team needs a UI Designer. Mobile-first. 3-month contract.", "Pune"),
    ("CreativeHub", "creativehub", "Brand identity designer needed for D2C skincare brand.", "Mumbai"),
    ("Sarah Lee", "sarahdesigns", "Hiring UI/UX (Mid-level). SaaS. Apply with case studies.", "San Francisco, CA"),
    ("Ankit Gupta", "ankit_hires", "UI/UX freelancer for a marketplace redesign. Weekly sprints.", "Gurugram"),
    ("StartUpWave", "startup_wave", "Brand identity + UI kit for a stealth AI startup. Paid, remote.", "Remote"),
];

/// Number of catalog templates.
pub const CATALOG_LEN: usize = CATALOG.len();

/// Produce exactly `n` records, cycling the catalog in order. Each copy
/// gets a ` #{1000+i}` text tag and a synthetic monotonically increasing
/// status id so later records stay distinguishable.
pub fn generate(n: usize) -> Vec<Record> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let (name, handle, text, loc) = CATALOG[i % CATALOG_LEN];
        out.push(Record {
            display_name: s!(name),
            handle: join!("@", handle),
            text: format!("{} #{}", text, SAMPLE_TEXT_TAG_BASE + i),
            url: format!(
                "{}/{}/status/{}",
                POST_BASE_URL,
                handle,
                SAMPLE_STATUS_ID_BASE + i as u64
            ),
            location: s!(loc),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(generate(25), generate(25));
    }

    #[test]
    fn zero_gives_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn one_record_per_template_at_catalog_len() {
        let rows = generate(CATALOG_LEN);
        assert_eq!(rows.len(), CATALOG_LEN);
        for (i, r) in rows.iter().enumerate() {
            let (name, handle, text, loc) = CATALOG[i];
            assert_eq!(r.display_name, name);
            assert_eq!(r.handle, join!("@", handle));
            assert_eq!(r.location, loc);
            assert!(r.text.starts_with(text));
            assert!(r.text.ends_with(&format!("#{}", 1000 + i)));
        }
    }

    #[test]
    fn urls_are_monotonic_status_links() {
        let rows = generate(10);
        assert_eq!(
            rows[0].url,
            "https://twitter.com/aditidesigns/status/1700000000000000000"
        );
        assert_eq!(
            rows[9].url,
            "https://twitter.com/brandkraft_ravi/status/1700000000000000009"
        );
    }

    #[test]
    fn catalog_wraps_past_len() {
        let rows = generate(CATALOG_LEN + 1);
        assert_eq!(rows[CATALOG_LEN].display_name, rows[0].display_name);
        // but the text tag differs
        assert_ne!(rows[CATALOG_LEN].text, rows[0].text);
    }
}
