//! PmergeMe Benchmark Runner
//!
//! Standalone binary timing both merge-insertion backings over a range of
//! input sizes, with text/CSV/JSON output and peak memory tracking.

use serde::Serialize;
use std::collections::VecDeque;
use std::fs;
use std::time::{Duration, Instant};

use pmerge_core::bounds::ford_johnson_bound;
use pmerge_core::{Element, MergeInsert};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub container: String,
    pub elements: usize,
    pub duration_us: f64,
    pub throughput_elements_per_sec: f64,
    pub comparisons: u64,
    pub ford_johnson_bound: u64,
    pub peak_rss_kb: Option<u64>,
    pub iterations: u32,
}

/// Read peak RSS from /proc/self/status on Linux.
/// Returns None on non-Linux or if the file cannot be parsed.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = fs::read_to_string("/proc/self/status").ok()?;
        for line in status.lines() {
            if line.starts_with("VmHWM:") {
                // Format: "VmHWM:   123456 kB"
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() >= 2 {
                    return parts[1].parse::<u64>().ok();
                }
            }
        }
        None
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn gen_input(size: usize, seed: u64) -> Vec<Element> {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = (size * 4).max(100_000);
    sample(&mut rng, range, size)
        .into_iter()
        .map(|i| i as Element + 1)
        .collect()
}

/// Time `iterations` sorts of fresh copies built by `fill`; filling is not timed.
fn bench_container<C, F>(input: &[Element], iterations: u32, fill: F) -> (Duration, u64)
where
    C: MergeInsert,
    F: Fn(&[Element]) -> C,
{
    let mut total = Duration::ZERO;
    let mut comparisons = 0;
    for _ in 0..iterations {
        let mut container = fill(input);
        let start = Instant::now();
        let stats = container.merge_insert_sort();
        total += start.elapsed();
        comparisons = stats.comparisons;
    }
    (total, comparisons)
}

fn run_bench<C, F>(input: &[Element], iterations: u32, fill: F) -> BenchResult
where
    C: MergeInsert,
    F: Fn(&[Element]) -> C,
{
    // Warm up
    bench_container(input, 3, &fill);

    let (total, comparisons) = bench_container(input, iterations, &fill);
    let avg = total.as_secs_f64() / iterations as f64;

    BenchResult {
        container: C::CONTAINER.to_string(),
        elements: input.len(),
        duration_us: avg * 1e6,
        throughput_elements_per_sec: input.len() as f64 / avg,
        comparisons,
        ford_johnson_bound: ford_johnson_bound(input.len()),
        peak_rss_kb: peak_rss_kb(),
        iterations,
    }
}

fn print_csv_header() {
    println!("container,elements,duration_us,elements_per_sec,comparisons,ford_johnson_bound,peak_rss_kb,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{:.3},{:.0},{},{},{},{}",
        r.container,
        r.elements,
        r.duration_us,
        r.throughput_elements_per_sec,
        r.comparisons,
        r.ford_johnson_bound,
        r.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string()),
        r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(10);

    let sizes = [10usize, 100, 1_000, 3_000, 10_000, 30_000];

    let mut results: Vec<BenchResult> = Vec::new();
    for &size in &sizes {
        let input = gen_input(size, size as u64);
        results.push(run_bench(&input, iterations, |v: &[Element]| v.to_vec()));
        results.push(run_bench(&input, iterations, |v: &[Element]| {
            v.iter().copied().collect::<VecDeque<Element>>()
        }));
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot encode results: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            // Human-readable text output
            println!("PmergeMe Benchmarks");
            println!("===================");
            println!();
            for r in &results {
                println!(
                    "[{}/{}] {:.3}us avg ({} iters) | {:.0} elements/s | {} comparisons (FJ {}) | RSS: {}",
                    r.container,
                    r.elements,
                    r.duration_us,
                    r.iterations,
                    r.throughput_elements_per_sec,
                    r.comparisons,
                    r.ford_johnson_bound,
                    r.peak_rss_kb
                        .map_or("N/A".to_string(), |v| format!("{}kB", v)),
                );
            }
        }
    }
}
