// src/cli.rs
//
// Thin presentation layer: flag parsing, feed cards, summary counts, the
// optional location chart, and export wiring. Everything here only
// consumes the pipeline's RunOutcome.

use std::{env, path::PathBuf};

use crate::config::{ExportFormat, RunParams};
use crate::fetch::NoticeLevel;
use crate::file::write_export;
use crate::runner::{self, RunOutcome};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = RunParams::default();
    parse_cli(&mut params)?;

    let outcome = runner::run(&params)?;
    render(&params, &outcome);

    if let Some(out) = &params.out {
        let path = write_export(out, &outcome.feed, params.format)?;
        logf!("exported {} rows to {}", outcome.feed.len(), path.display());
        println!("Exported {} rows to {}", outcome.feed.len(), path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut RunParams) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-k" | "--keywords" => {
                params.keywords = args.next().ok_or("Missing value for --keywords")?;
            }
            "-n" | "--limit" => {
                params.limit = args.next().ok_or("Missing value for --limit")?.parse()?;
            }
            "-r" | "--region" => {
                params.region = args.next().ok_or("Missing value for --region")?;
            }
            "--sample" => params.live = false,
            "--chart" => params.chart = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

fn render(params: &RunParams, outcome: &RunOutcome) {
    if let Some(n) = &outcome.notice {
        match n.level {
            NoticeLevel::Info => println!("Note: {}", n.message),
            NoticeLevel::Warn => eprintln!("Warning: {}", n.message),
        }
    }

    println!("Search query: {}", outcome.query);
    println!("Results: showing {} of {} posts.", outcome.feed.len(), outcome.total);
    println!();

    if params.chart {
        print!("{}", chart(&outcome.counts));
        println!();
    }

    if outcome.feed.is_empty() {
        eprintln!(
            "No posts found with the current filters. \
             Try changing keywords or removing the region filter."
        );
        return;
    }

    for r in &outcome.feed {
        println!("{}", card(r));
    }
}

fn card(r: &crate::record::Record) -> String {
    let location = if r.location.is_empty() { "Location not specified" } else { &r.location };
    let header = if r.handle.is_empty() {
        s!(&r.display_name)
    } else {
        format!("{} {}", r.display_name, r.handle)
    };
    format!("{}\n  {}\n  {} | {}\n", header, r.text, location, r.url)
}

const CHART_BAR_WIDTH: usize = 40;

/// Text bar chart over the aggregator's ranked (location, count) pairs.
fn chart(counts: &[(String, usize)]) -> String {
    let Some(max) = counts.iter().map(|(_, c)| *c).max() else {
        return s!("No data to chart yet.\n");
    };
    let label_w = counts.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = s!("Posts per location (top 15):\n");
    for (loc, count) in counts {
        let bar_len = (count * CHART_BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "  {:<label_w$}  {} {}\n",
            loc,
            "#".repeat(bar_len),
            count
        ));
    }
    out
}
