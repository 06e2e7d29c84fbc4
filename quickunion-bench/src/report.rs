/// Report generation: terminal and JSON output for driver results.
use serde::Serialize;

use crate::pairs;

/// Result of a Monte Carlo pair-generation experiment.
#[derive(Debug, Serialize)]
pub struct PairsReport {
    pub variant: String,
    pub n: usize,
    pub runs: u32,
    pub seed: u64,
    pub pair_counts: Vec<u64>,
    pub mean_pairs: f64,
    /// `0.5 * n * ln(n)`, the asymptotic expectation.
    pub expected_pairs: f64,
}

impl PairsReport {
    pub fn new(variant: pairs::Variant, n: usize, runs: u32, seed: u64, counts: Vec<u64>) -> Self {
        let mean_pairs = pairs::mean(&counts);
        Self {
            variant: variant.name().to_string(),
            n,
            runs,
            seed,
            pair_counts: counts,
            mean_pairs,
            expected_pairs: pairs::expected_pairs(n),
        }
    }
}

/// Timing of one variant's pair generation.
#[derive(Debug, Serialize)]
pub struct BenchEntry {
    pub variant: String,
    pub n: usize,
    pub mean_ms: f64,
}

/// Timing comparison across variants.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub n: usize,
    pub warmup: u32,
    pub runs: u32,
    pub seed: u64,
    pub entries: Vec<BenchEntry>,
}

/// Print a Monte Carlo report as a short terminal summary.
pub fn print_pairs_terminal(report: &PairsReport) {
    println!(
        "{} sites, {} runs (seed {}), {} variant",
        report.n, report.runs, report.seed, report.variant
    );
    println!("pair counts: {:?}", report.pair_counts);
    println!(
        "mean pairs: {:.1}   0.5·n·ln(n): {:.1}",
        report.mean_pairs, report.expected_pairs
    );
}

/// Print a timing comparison as a terminal table.
pub fn print_bench_terminal(report: &BenchReport) {
    println!(
        "{} sites, {} runs after {} warmup (seed {})",
        report.n, report.runs, report.warmup, report.seed
    );
    println!("{:<14} {:>12}", "Variant", "Mean ms");
    println!("{}", "-".repeat(27));
    for e in &report.entries {
        println!("{:<14} {:>12.2}", e.variant, e.mean_ms);
    }
}

/// Render any report as pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
