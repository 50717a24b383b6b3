// src/fetch/mod.rs
//
// Fetching with fallback. The live search capability is a strategy behind
// the `SearchSource` trait; `fetch_with` inspects its explicit result and
// decides between live records and deterministic sample data. Nothing that
// goes wrong on the live path ever reaches the caller as an error; it
// comes back as a `Notice` plus sample records.

pub mod live;

use std::error::Error;

use crate::config::consts::POST_BASE_URL;
use crate::record::Record;
use crate::sample;

/// One raw item from a search source, before field coalescing. Every field
/// is optional; `normalize` applies the defensive fallbacks.
#[derive(Clone, Debug, Default)]
pub struct RawPost {
    pub display_name: Option<String>,
    pub handle: Option<String>,
    pub content: Option<String>,
    pub raw_content: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
}

/// A live search backend. Implementations collect at most `limit` items
/// and may return fewer; they report failures as plain errors.
pub trait SearchSource {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<RawPost>, Box<dyn Error>>;
}

/// Where the records in a `FetchReport` came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Sample,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
}

/// Informational/warning signal surfaced alongside fetch output instead of
/// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: String) -> Self {
        logf!("{message}");
        Self { level: NoticeLevel::Info, message }
    }
    fn warn(message: String) -> Self {
        logw!("{message}");
        Self { level: NoticeLevel::Warn, message }
    }
}

/// Fetch output: the record table, its provenance, and at most one notice
/// explaining a fallback.
#[derive(Clone, Debug)]
pub struct FetchReport {
    pub records: Vec<Record>,
    pub source: DataSource,
    pub notice: Option<Notice>,
}

/// Coalesce a raw item into a `Record`, spec'd fallback per field:
/// name ← handle, text ← content ← raw content, url ← profile link,
/// handle and location default to empty strings.
pub fn normalize(raw: RawPost) -> Record {
    let bare = raw
        .handle
        .map(|h| h.trim_start_matches('@').to_string())
        .unwrap_or_default();

    let display_name = raw
        .display_name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| bare.clone());

    let text = raw
        .content
        .filter(|t| !t.is_empty())
        .or(raw.raw_content)
        .unwrap_or_default();

    let url = raw
        .url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{}/{}", POST_BASE_URL, bare));

    Record {
        display_name,
        handle: if bare.is_empty() { s!() } else { join!("@", &bare) },
        text,
        url,
        location: raw.location.unwrap_or_default(),
    }
}

/// Fetch up to `limit` records for `query`, falling back to sample data
/// when the capability is absent, errors, or returns nothing. A partial
/// live result (fewer than `limit`) is kept as-is.
pub fn fetch_with(
    source: Option<&dyn SearchSource>,
    query: &str,
    limit: usize,
) -> FetchReport {
    let Some(source) = source else {
        return FetchReport {
            records: sample::generate(limit),
            source: DataSource::Sample,
            notice: Some(Notice::info(s!(
                "Live search is off or unavailable. Showing sample data."
            ))),
        };
    };

    match source.search(query, limit) {
        Err(e) => FetchReport {
            records: sample::generate(limit),
            source: DataSource::Sample,
            notice: Some(Notice::warn(format!(
                "Live search failed ({}). Showing sample data instead.",
                e
            ))),
        },
        Ok(raw) if raw.is_empty() => FetchReport {
            records: sample::generate(limit),
            source: DataSource::Sample,
            notice: Some(Notice::info(s!(
                "No live results returned. Showing sample data."
            ))),
        },
        Ok(raw) => {
            let records = raw.into_iter().take(limit).map(normalize).collect();
            FetchReport { records, source: DataSource::Live, notice: None }
        }
    }
}

/// Convenience entry point: fetch with the live capability as built.
pub fn fetch(query: &str, limit: usize) -> FetchReport {
    fetch_with(live::capability(), query, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(handle: Option<&str>) -> RawPost {
        RawPost { handle: handle.map(|h| s!(h)), ..Default::default() }
    }

    #[test]
    fn name_falls_back_to_handle() {
        let r = normalize(raw(Some("ankit_hires")));
        assert_eq!(r.display_name, "ankit_hires");
        assert_eq!(r.handle, "@ankit_hires");
    }

    #[test]
    fn handle_prefixed_exactly_once() {
        let r = normalize(raw(Some("@startup_wave")));
        assert_eq!(r.handle, "@startup_wave");
    }

    #[test]
    fn missing_everything_yields_empty_strings() {
        let r = normalize(RawPost::default());
        assert_eq!(r.display_name, "");
        assert_eq!(r.handle, "");
        assert_eq!(r.text, "");
        assert_eq!(r.location, "");
        // url still falls back to a (degenerate) profile link
        assert_eq!(r.url, "https://twitter.com/");
    }

    #[test]
    fn text_prefers_content_over_raw_content() {
        let mut p = RawPost::default();
        p.content = Some(s!("primary"));
        p.raw_content = Some(s!("secondary"));
        assert_eq!(normalize(p.clone()).text, "primary");

        p.content = None;
        assert_eq!(normalize(p.clone()).text, "secondary");

        p.content = Some(s!());
        assert_eq!(normalize(p).text, "secondary");
    }

    #[test]
    fn url_falls_back_to_profile() {
        let mut p = raw(Some("creativehub"));
        p.url = None;
        assert_eq!(normalize(p).url, "https://twitter.com/creativehub");
    }

    #[test]
    fn location_never_null() {
        let mut p = RawPost::default();
        p.location = Some(s!("Pune"));
        assert_eq!(normalize(p).location, "Pune");
        assert_eq!(normalize(RawPost::default()).location, "");
    }
}
