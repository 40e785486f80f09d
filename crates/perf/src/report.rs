//! Performance report generation

use crate::utils::{format_duration, format_throughput, BenchResult};
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct BenchEntry {
    pub name: String,
    pub size: usize,
    pub result: BenchResult,
    pub throughput: f64,
}

/// Results grouped by operation, printed once every size has run.
#[derive(Default)]
pub struct Report {
    entries: Vec<BenchEntry>,
    operations: BTreeMap<String, Vec<usize>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, size: usize, result: BenchResult) {
        let idx = self.entries.len();
        self.operations.entry(name.to_string()).or_default().push(idx);
        self.entries.push(BenchEntry {
            name: name.to_string(),
            size,
            throughput: result.throughput(size),
            result,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                      PERFORMANCE SUMMARY                         ║");
        println!("╚══════════════════════════════════════════════════════════════════╝\n");

        for (operation, indices) in &self.operations {
            println!("┌─ {} ─", operation);
            for &idx in indices {
                let entry = &self.entries[idx];
                println!(
                    "│ {:<10} [{:>6}]: {:>12} (median {}, range {} .. {}, n={}) {}",
                    entry.name,
                    format_size(entry.size),
                    format_duration(entry.result.mean),
                    format_duration(entry.result.median),
                    format_duration(entry.result.min),
                    format_duration(entry.result.max),
                    entry.result.iterations,
                    format_throughput(entry.throughput)
                );
            }
            println!("└─");
            println!();
        }
    }
}

fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
