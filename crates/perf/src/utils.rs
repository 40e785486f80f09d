//! Utility functions for benchmarking

use cadence_core::Record;
use std::time::{Duration, Instant};

/// Untimed runs before sampling starts.
pub const WARMUP_ITERATIONS: usize = 1;

/// Times `op` over `iterations` runs.
pub fn measure<F, R>(iterations: usize, mut op: F) -> BenchResult
where
    F: FnMut() -> R,
{
    measure_with_setup(iterations, || (), |()| op())
}

/// Times `op` over `iterations` runs, each fed fresh input from `setup`.
/// Only `op` is inside the timed window.
pub fn measure_with_setup<S, F, T, R>(iterations: usize, mut setup: S, mut op: F) -> BenchResult
where
    S: FnMut() -> T,
    F: FnMut(T) -> R,
{
    let mut samples = Vec::with_capacity(iterations);
    for run in 0..WARMUP_ITERATIONS + iterations {
        let input = setup();
        let start = Instant::now();
        std::hint::black_box(op(input));
        if run >= WARMUP_ITERATIONS {
            samples.push(start.elapsed());
        }
    }
    BenchResult::from_times(&samples)
}

#[derive(Clone, Debug)]
pub struct BenchResult {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub iterations: usize,
}

impl BenchResult {
    /// Summarizes a non-empty set of samples.
    pub fn from_times(times: &[Duration]) -> Self {
        let mut sorted: Vec<_> = times.to_vec();
        sorted.sort();

        let min = sorted.first().copied().unwrap_or_default();
        let max = sorted.last().copied().unwrap_or_default();
        let sum: Duration = sorted.iter().sum();
        let mean = sum / sorted.len().max(1) as u32;
        let median = sorted.get(sorted.len() / 2).copied().unwrap_or_default();

        Self {
            min,
            max,
            mean,
            median,
            iterations: times.len(),
        }
    }

    pub fn throughput(&self, count: usize) -> f64 {
        count as f64 / self.mean.as_secs_f64()
    }
}

/// Renders a duration with the largest unit that keeps it at or above one.
pub fn format_duration(d: Duration) -> String {
    const UNITS: [(&str, f64); 3] = [("s", 1e9), ("ms", 1e6), ("μs", 1e3)];
    let nanos = d.as_nanos();
    match UNITS.iter().find(|(_, scale)| nanos as f64 >= *scale) {
        Some((unit, scale)) => format!("{:.2} {}", nanos as f64 / scale, unit),
        None => format!("{} ns", nanos),
    }
}

pub fn format_throughput(ops_per_sec: f64) -> String {
    let (value, prefix) = if ops_per_sec >= 1e6 {
        (ops_per_sec / 1e6, "M")
    } else if ops_per_sec >= 1e3 {
        (ops_per_sec / 1e3, "K")
    } else {
        (ops_per_sec, "")
    };
    format!("{:.2}{} ops/s", value, prefix)
}

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Simple LCG for reproducible ASCII-letter strings
pub struct LetterGen {
    state: u64,
}

impl LetterGen {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_letter(&mut self) -> char {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        LETTERS[((self.state >> 33) as usize) % LETTERS.len()] as char
    }

    /// Returns a string of `len` random letters.
    pub fn word(&mut self, len: usize) -> String {
        (0..len).map(|_| self.next_letter()).collect()
    }
}

/// Generates `count` records with random title keys and artist payloads.
pub fn random_records(count: usize, key_len: usize, seed: u64) -> Vec<Record> {
    let mut gen = LetterGen::new(seed);
    (0..count)
        .map(|_| {
            let title = gen.word(key_len);
            let artist = gen.word(key_len);
            Record::new(title, artist)
        })
        .collect()
}
