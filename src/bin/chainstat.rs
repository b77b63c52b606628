use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use chainstat::cs::hashing::{ChainedStringTableBuilder, LongestListPolicy, DEFAULT_CAPACITY};
use chainstat::logger::initialize_logger;

/// Load whitespace-delimited words into a chained hash table and report chain statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to load, in order. Loading a file twice stores its words twice.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of buckets.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Write the bucket listing to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the bucket listing to stdout.
    #[arg(short, long)]
    print: bool,

    /// Remove the first occurrence of a word before anything is reported.
    #[arg(short, long)]
    remove: Vec<String>,

    /// Report whether a word is present.
    #[arg(short, long)]
    search: Vec<String>,

    /// Report the legacy longest-list counter instead of the true maximum.
    #[arg(long)]
    legacy_longest: bool,

    /// Skip the statistics report.
    #[arg(long)]
    no_stats: bool,
}

fn main() -> Result<()> {
    initialize_logger();
    let args = Args::parse();

    let policy = if args.legacy_longest {
        LongestListPolicy::Legacy
    } else {
        LongestListPolicy::Actual
    };
    let mut table = ChainedStringTableBuilder::new()
        .with_capacity(args.capacity)
        .with_longest_list_policy(policy)
        .build()?;

    for input in &args.inputs {
        let summary = table
            .load_file(input)
            .with_context(|| format!("loading {}", input.display()))?;
        info!(
            "{}: {} words, {} collisions{}",
            input.display(),
            summary.inserted,
            summary.collisions,
            if summary.interrupted { " (read stopped early)" } else { "" }
        );
    }

    for word in &args.remove {
        if !table.remove(word) {
            info!("{} was not in the table", word);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for word in &args.search {
        let verdict = if table.search(word) { "found" } else { "not found" };
        writeln!(out, "{}: {}", word, verdict)?;
    }

    if args.print {
        table.print_to(&mut out)?;
    }

    if let Some(path) = &args.output {
        table.output_to_file(path)?;
        info!("wrote listing to {}", path.display());
    }

    if !args.no_stats {
        table.report_stats_to(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
