//! Insert/search/delete timing over randomly titled records.

use crate::report::Report;
use crate::utils::*;
use cadence_catalog::{DuplicatePolicy, HybridCatalog};
use cadence_core::{Error, Record, Result};

/// Validated benchmark settings.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub key_len: usize,
    pub seed: u64,
    pub iterations: usize,
    pub policy: DuplicatePolicy,
}

impl BenchConfig {
    pub fn new(
        sizes: Vec<usize>,
        key_len: usize,
        seed: u64,
        iterations: usize,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::invalid_config("at least one dataset size is required"));
        }
        if sizes.contains(&0) {
            return Err(Error::invalid_config("dataset sizes must be positive"));
        }
        if key_len == 0 {
            return Err(Error::invalid_config("key length must be positive"));
        }
        if iterations == 0 {
            return Err(Error::invalid_config("iterations must be positive"));
        }
        Ok(Self {
            sizes,
            key_len,
            seed,
            iterations,
            policy,
        })
    }
}

pub fn run(config: &BenchConfig, report: &mut Report) {
    for &size in &config.sizes {
        bench_size(config, size, report);
    }
}

fn build(records: &[Record], policy: DuplicatePolicy) -> HybridCatalog {
    let mut catalog = HybridCatalog::with_policy(policy);
    catalog.extend(records.iter().cloned());
    catalog
}

fn bench_size(config: &BenchConfig, size: usize, report: &mut Report) {
    let records = random_records(size, config.key_len, config.seed);
    let policy = config.policy;

    let insertion = measure_with_setup(
        config.iterations,
        || (HybridCatalog::with_policy(policy), records.clone()),
        |(mut catalog, records)| {
            for record in records {
                catalog.insert(record);
            }
            catalog
        },
    );

    let populated = build(&records, policy);
    let search = measure(config.iterations, || {
        records
            .iter()
            .filter(|r| populated.search(r.key()).is_some())
            .count()
    });

    let deletion = measure_with_setup(
        config.iterations,
        || build(&records, policy),
        |mut catalog| {
            for record in &records {
                catalog.delete(record.key());
            }
            catalog
        },
    );

    println!("Number of songs: {}", size);
    println!("Distinct titles: {}", populated.len());
    println!("Divergent titles: {}", populated.divergent_keys().len());
    println!("Tree height: {}", populated.ordered().height());
    println!("Insertion Time: {:.6} seconds", insertion.mean.as_secs_f64());
    println!("Search Time: {:.6} seconds", search.mean.as_secs_f64());
    println!("Deletion Time: {:.6} seconds", deletion.mean.as_secs_f64());
    println!("{}", "-".repeat(40));

    report.add("insert", size, insertion);
    report.add("search", size, search);
    report.add("delete", size, deletion);
}
