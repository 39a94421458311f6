//! Shared utilities for fuxx-rs benchmark binaries.
//!
//! Statistics, formatting and argument parsing for sweeps that run the
//! library's passes outside the `fuxx` binary.

// Each benchmark binary includes this module via `#[path]` and may use only
// part of it.
#![allow(dead_code)]

/// Descriptive statistics over a set of samples.
pub struct Stats {
    pub mean: f64,
    pub stdev: f64,
    pub stdev_pct: f64,
    pub n: usize,
}

impl Stats {
    /// Compute mean, stdev, and stdev-as-percentage from a slice of values.
    ///
    /// Returns zeros if `values` is empty.
    pub fn from_samples(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                stdev: 0.0,
                stdev_pct: 0.0,
                n: 0,
            };
        }
        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let stdev = variance.sqrt();
        let stdev_pct = if mean.abs() > 1e-15 {
            (stdev / mean) * 100.0
        } else {
            0.0
        };
        Self {
            mean,
            stdev,
            stdev_pct,
            n,
        }
    }
}

/// Print a section header with underline.
pub fn print_header(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
}

/// Print one latency row.
pub fn print_row(size: &str, op: &str, nanos_per_op: f64, stdev_pct: f64, nruns: usize) {
    println!("  {size:<12} {op:<8} {nanos_per_op:>10.2} ns/op  ± {stdev_pct:.1}%  ({nruns} runs)");
}

/// Parsed sweep arguments.
pub struct BenchArgs {
    /// Buffer sizes to sweep (in bytes).
    pub sizes: Vec<usize>,
    /// Operations per timed pass.
    pub nr_ops: u64,
    /// Number of timed runs per size.
    pub nruns: usize,
    /// Number of warmup runs (excluded from stats).
    pub warmup: usize,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            sizes: vec![],
            nr_ops: 10_000_000,
            nruns: 5,
            warmup: 1,
        }
    }
}

/// Parse a size string like "4KiB", "16MiB", "1GiB", or a plain number (bytes).
pub fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GiB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MiB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KiB") {
        (n, 1024)
    } else {
        (s, 1)
    };
    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid size {s:?}: {e}"))?;
    Ok(num * multiplier)
}

/// Parse command-line arguments for sweeps.
///
/// Supports: `--size <size>[,<size>...]`, `--ops <n>`, `--nruns <n>`, `--warmup <n>`
pub fn parse_args(default_sizes: &[usize]) -> BenchArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut bench_args = BenchArgs {
        sizes: default_sizes.to_vec(),
        ..BenchArgs::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" | "--sizes" => {
                i += 1;
                if i < args.len() {
                    bench_args.sizes = args[i]
                        .split(',')
                        .map(|s| parse_size(s).unwrap_or_else(|e| panic!("{e}")))
                        .collect();
                }
            }
            "--ops" => {
                i += 1;
                if i < args.len() {
                    bench_args.nr_ops = args[i].parse().expect("invalid --ops value");
                }
            }
            "--nruns" => {
                i += 1;
                if i < args.len() {
                    bench_args.nruns = args[i].parse().expect("invalid --nruns value");
                }
            }
            "--warmup" => {
                i += 1;
                if i < args.len() {
                    bench_args.warmup = args[i].parse().expect("invalid --warmup value");
                }
            }
            "--help" | "-h" => {
                println!("Usage: <benchmark> [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --size <s>[,<s>...]   Buffer sizes (e.g. 32KiB,8MiB,256MiB)");
                println!("  --ops <n>             Operations per timed pass (default: 10000000)");
                println!("  --nruns <n>           Number of timed runs (default: 5)");
                println!("  --warmup <n>          Number of warmup runs (default: 1)");
                println!("  --help                Show this help");
                std::process::exit(0);
            }
            other => {
                eprintln!("warning: unknown argument: {other}");
            }
        }
        i += 1;
    }

    bench_args
}
