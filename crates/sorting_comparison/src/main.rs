mod cli;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use counted_sort::generate::random_array;
use counted_sort::{algorithm_name, display_name, sort_u32};
use log::{LevelFilter, info};

use crate::cli::{Cli, RunConfig};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(config: &RunConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for &algo in &config.algorithms {
        // Every sort gets the same input.
        let mut data = random_array(config.seed, config.length);
        let stats = sort_u32(algo, &mut data)
            .with_context(|| format!("{} failed", algorithm_name(algo)))?;
        info!(
            "{}: sorted {} elements (seed {})",
            algorithm_name(algo),
            stats.elements,
            config.seed
        );
        report::write_report(&mut out, display_name(algo), &stats, &data, config.max_to_print)
            .context("failed to write report")?;
    }

    out.flush().context("failed to flush stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RunConfig::from_cli(&cli)?;
    run(&config)
}
