// src/runner.rs
//
// One pipeline run, start to finish: build query → fetch → region filter
// → aggregate. Sequential and self-contained; every table is built fresh
// for the run.

use std::error::Error;

use crate::aggregate;
use crate::config::RunParams;
use crate::fetch::{self, DataSource, Notice};
use crate::filter;
use crate::query;
use crate::record::Record;

/// Everything a frontend needs to render a run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// The exact query string sent to (or that would be sent to) the source.
    pub query: String,
    /// Records fetched/generated, before region filtering.
    pub total: usize,
    /// The filtered record table: feed, export, and chart input.
    pub feed: Vec<Record>,
    /// Ranked (location, count) pairs for the optional chart.
    pub counts: Vec<(String, usize)>,
    pub source: DataSource,
    pub notice: Option<Notice>,
}

pub fn run(params: &RunParams) -> Result<RunOutcome, Box<dyn Error>> {
    params.validate()?;

    let query = query::build(&params.keywords);
    logf!(
        "run: limit={} live={} region={:?}",
        params.limit, params.live, params.region
    );
    logd!("run: query={}", query);

    // Disabled live mode and an absent live capability take the same path:
    // no source, so the fetcher falls back with the same notice.
    let source = if params.live { fetch::live::capability() } else { None };
    let report = fetch::fetch_with(source, &query, params.limit);

    let total = report.records.len();
    let feed = filter::by_region(&report.records, &params.region);
    let counts = aggregate::location_counts(&feed);
    logd!("run: fetched={} kept={} groups={}", total, feed.len(), counts.len());

    Ok(RunOutcome {
        query,
        total,
        feed,
        counts,
        source: report.source,
        notice: report.notice,
    })
}
