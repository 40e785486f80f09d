//! Cadence harness: the demo walkthrough and the timing benchmark.
//!
//! ```text
//! cargo run -p cadence-perf --release -- demo
//! cargo run -p cadence-perf --release -- bench --sizes 100,1000 --policy replace
//! ```

mod bench;
mod demo;
mod report;
mod utils;

use bench::BenchConfig;
use cadence_catalog::DuplicatePolicy;
use clap::{Args, Parser, Subcommand};
use report::Report;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Cadence hybrid catalog harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert three songs, search, delete and range-scan them
    Demo {
        /// Duplicate-key policy (keep-first or replace)
        #[arg(long, default_value = "keep-first", value_parser = parse_policy)]
        policy: DuplicatePolicy,
    },
    /// Time insert, search and delete over random titles
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Dataset sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [100usize, 1000, 5000, 10000])]
    sizes: Vec<usize>,
    /// Length of generated titles and artists
    #[arg(long, default_value_t = 5)]
    key_len: usize,
    /// Seed for title generation
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Measured repetitions per operation
    #[arg(short, long, default_value_t = 5)]
    iterations: usize,
    /// Duplicate-key policy (keep-first or replace)
    #[arg(long, default_value = "keep-first", value_parser = parse_policy)]
    policy: DuplicatePolicy,
}

fn parse_policy(s: &str) -> Result<DuplicatePolicy, String> {
    s.parse().map_err(|e: cadence_core::Error| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { policy } => {
            demo::run(policy);
            ExitCode::SUCCESS
        }
        Command::Bench(args) => {
            let config = match BenchConfig::new(
                args.sizes,
                args.key_len,
                args.seed,
                args.iterations,
                args.policy,
            ) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::from(2);
                }
            };

            println!("Policy: {}, iterations: {}", config.policy, config.iterations);
            let mut report = Report::new();
            bench::run(&config, &mut report);
            println!();
            report.print_summary();
            ExitCode::SUCCESS
        }
    }
}
