// src/config/consts.rs

// Net config (live search, Nitter-style frontend over plain HTTP)
pub const SEARCH_HOST: &str = "nitter.net";
pub const SEARCH_PORT: u16 = 80;
pub const SEARCH_PATH: &str = "/search?f=tweets&q=";

// Canonical post/profile links in exported data
pub const POST_BASE_URL: &str = "https://twitter.com";

// Query modifiers appended after the caller's keyword expression, in order.
pub const QUERY_MODIFIERS: &str = "lang:en exclude:retweets exclude:replies";

// Sidebar default from the original dashboard: designer job posts.
pub const DEFAULT_KEYWORDS: &str = r#"("ui designer" OR "ux designer" OR "ui/ux" OR "product designer" OR "brand identity designer" OR "hiring ui/ux")"#;

// Fetch bounds
pub const DEFAULT_LIMIT: usize = 120;
pub const MAX_LIMIT: usize = 500;

// Sample data
pub const SAMPLE_TEXT_TAG_BASE: usize = 1000;
pub const SAMPLE_STATUS_ID_BASE: u64 = 1_700_000_000_000_000_000;

// Aggregation
pub const TOP_LOCATIONS: usize = 15;
pub const UNKNOWN_LOCATION: &str = "Unknown";

// Export
pub const DEFAULT_EXPORT_FILE: &str = "jobs";
