// src/fetch/live.rs
//
// HTTP-backed live search, compiled in behind the `live` feature. The
// capability check is the seam the Fetcher selects its strategy on: absent
// capability and disabled live mode take the exact same sample path.

use super::SearchSource;

/// The live search capability as built. `None` without the `live` feature.
#[cfg(feature = "live")]
pub fn capability() -> Option<&'static dyn SearchSource> {
    static SOURCE: HttpSource = HttpSource;
    Some(&SOURCE)
}

#[cfg(not(feature = "live"))]
pub fn capability() -> Option<&'static dyn SearchSource> {
    None
}

#[cfg(feature = "live")]
pub use imp::HttpSource;

#[cfg(feature = "live")]
mod imp {
    use std::error::Error;

    use crate::config::consts::{POST_BASE_URL, SEARCH_HOST, SEARCH_PATH, SEARCH_PORT};
    use crate::core::html::{attr_value, slice_between_ci, strip_tags, to_lower};
    use crate::core::net::{http_get, urlencode};
    use crate::fetch::{RawPost, SearchSource};

    /// One bounded GET against a Nitter-style search frontend.
    pub struct HttpSource;

    impl SearchSource for HttpSource {
        fn search(&self, query: &str, limit: usize) -> Result<Vec<RawPost>, Box<dyn Error>> {
            let path = join!(SEARCH_PATH, &urlencode(query));
            logd!("GET http://{}:{}{}", SEARCH_HOST, SEARCH_PORT, path);
            let body = http_get(SEARCH_HOST, SEARCH_PORT, &path)?;
            Ok(parse_search_page(&body, limit))
        }
    }

    const ITEM_OPEN: &str = r#"<div class="timeline-item"#;

    /// Extract up to `limit` raw posts from a search results page.
    /// Timeline items are delimited by their opening marker (inner markup
    /// nests, so closing-tag scanning is unreliable). Items missing both a
    /// username and a body are skipped, never fatal.
    pub fn parse_search_page(doc: &str, limit: usize) -> Vec<RawPost> {
        let mut out = Vec::new();
        let lc = to_lower(doc);
        let marker = to_lower(ITEM_OPEN);

        let mut starts = Vec::new();
        let mut from = 0usize;
        while let Some(rel) = lc[from..].find(&marker) {
            let at = from + rel;
            starts.push(at);
            from = at + marker.len();
        }

        for (i, &start) in starts.iter().enumerate() {
            if out.len() >= limit {
                break;
            }
            let end = starts.get(i + 1).copied().unwrap_or(doc.len());
            if let Some(post) = parse_item(&doc[start..end]) {
                out.push(post);
            }
        }
        out
    }

    fn parse_item(seg: &str) -> Option<RawPost> {
        let display_name = slice_between_ci(seg, r#"<a class="fullname""#, "</a>")
            .map(strip_tags)
            .filter(|s| !s.is_empty());
        let handle = slice_between_ci(seg, r#"<a class="username""#, "</a>")
            .map(strip_tags)
            .filter(|s| !s.is_empty());
        let content = slice_between_ci(seg, r#"<div class="tweet-content"#, "</div>")
            .map(strip_tags)
            .filter(|s| !s.is_empty());
        let url = item_link(seg);

        // A fragment with neither author nor body is page chrome, not a post.
        if handle.is_none() && content.is_none() {
            return None;
        }

        Some(RawPost {
            display_name,
            handle,
            content,
            raw_content: None,
            url,
            // The search page does not carry author location; normalization
            // defaults it to the empty string downstream.
            location: None,
        })
    }

    /// Canonical status link from the item's `tweet-link` anchor.
    fn item_link(seg: &str) -> Option<String> {
        let lc = to_lower(seg);
        let at = lc.find(r#"<a class="tweet-link""#)?;
        let tag_end = seg[at..].find('>')? + at + 1;
        let href = attr_value(&seg[at..tag_end], "href")?;
        let href = href.trim_end_matches("#m");
        Some(join!(POST_BASE_URL, href))
    }

}
