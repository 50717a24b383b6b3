// tests/pipeline_e2e.rs
//
// End-to-end runs through the public runner API, sample mode only (no
// network in tests).
//
use jobscout::config::RunParams;
use jobscout::csv::to_export_string;
use jobscout::fetch::DataSource;
use jobscout::runner::run;

fn sample_params(limit: usize) -> RunParams {
    let mut p = RunParams::default();
    p.live = false;
    p.limit = limit;
    p
}

#[test]
fn forty_posts_no_filter() {
    let out = run(&sample_params(40)).unwrap();
    assert_eq!(out.total, 40);
    assert_eq!(out.feed.len(), 40); // "showing 40 of 40"
    assert_eq!(out.source, DataSource::Sample);

    // CSV: 1 header + 40 rows
    let csv = to_export_string(&out.feed, ',');
    assert_eq!(csv.lines().count(), 41);
    assert!(csv.starts_with("display_name,handle,text,url,location\n"));
}

#[test]
fn query_is_echoed_with_modifiers() {
    let mut p = sample_params(10);
    p.keywords = String::from("\"ui designer\"");
    let out = run(&p).unwrap();
    assert_eq!(
        out.query,
        "\"ui designer\" lang:en exclude:retweets exclude:replies"
    );
}

#[test]
fn region_filter_narrows_feed_and_counts() {
    let mut p = sample_params(40);
    p.region = String::from("India, Remote");
    let out = run(&p).unwrap();

    assert_eq!(out.total, 40);
    assert!(out.feed.len() < 40);
    assert!(!out.feed.is_empty());
    for r in &out.feed {
        let loc = r.location.to_lowercase();
        assert!(loc.contains("india") || loc.contains("remote"));
    }
    // aggregation reflects the filtered table only
    let feed_total: usize = out.counts.iter().map(|(_, c)| c).sum();
    assert_eq!(feed_total, out.feed.len());
}

#[test]
fn unmatched_filter_yields_empty_feed_not_error() {
    let mut p = sample_params(24);
    p.region = String::from("Antarctica");
    let out = run(&p).unwrap();
    assert_eq!(out.total, 24);
    assert!(out.feed.is_empty());
    assert!(out.counts.is_empty());
}

#[test]
fn aggregation_ranked_and_capped() {
    let out = run(&sample_params(200)).unwrap();
    assert!(out.counts.len() <= 15);
    for w in out.counts.windows(2) {
        assert!(w[0].1 >= w[1].1, "counts must be descending");
    }
    // sample catalog has 7 distinct locations; Remote appears twice per cycle
    assert_eq!(out.counts[0].0, "Remote");
}
