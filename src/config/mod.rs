// src/config/mod.rs
//
// Per-run configuration. Assembled once (CLI flags or defaults) and
// threaded explicitly through query → fetch → filter → aggregate; the
// pipeline stages never read ambient state.

pub mod consts;

use std::path::PathBuf;

use self::consts::{DEFAULT_KEYWORDS, DEFAULT_LIMIT, MAX_LIMIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug)]
pub struct RunParams {
    pub keywords: String,        // search expression, passed through opaque
    pub limit: usize,            // max posts to fetch (1..=MAX_LIMIT)
    pub region: String,          // raw comma-separated location tokens
    pub live: bool,              // attempt live search before falling back
    pub chart: bool,             // render the location chart
    pub out: Option<PathBuf>,    // export path (file, or dir hint)
    pub format: ExportFormat,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            keywords: s!(DEFAULT_KEYWORDS),
            limit: DEFAULT_LIMIT,
            region: s!(),
            live: true,
            chart: false,
            out: None,
            format: ExportFormat::Csv,
        }
    }
}

impl RunParams {
    /// Range check for the fetch limit. Zero or out-of-bound limits are
    /// contract violations and the one condition allowed to hard-fail.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(format!("limit out of range (1..={}): {}", MAX_LIMIT, self.limit).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(RunParams::default().validate().is_ok());
    }

    #[test]
    fn zero_and_oversized_limits_rejected() {
        let mut p = RunParams::default();
        p.limit = 0;
        assert!(p.validate().is_err());
        p.limit = MAX_LIMIT + 1;
        assert!(p.validate().is_err());
        p.limit = MAX_LIMIT;
        assert!(p.validate().is_ok());
    }
}
