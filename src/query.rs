// src/query.rs
//
// Search-query assembly. The keyword expression is caller-supplied search
// syntax (quotes, OR, ...) and is passed through untouched; we only append
// the fixed modifiers. Keeping this a plain string concat makes the exact
// query reproducible in logs and in the CLI echo line.

use crate::config::consts::QUERY_MODIFIERS;

/// `<keywords> lang:en exclude:retweets exclude:replies`
pub fn build(keywords: &str) -> String {
    format!("{} {}", keywords, QUERY_MODIFIERS)
}
