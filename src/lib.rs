//! # fuxx-rs
//!
//! Memory latency micro-benchmark.
//!
//! fuxx-rs allocates a large byte buffer and performs single-byte reads, then
//! single-byte writes, at offsets 17 cache lines apart. The stride defeats
//! hardware prefetching, so every access is a cache miss once the buffer is
//! larger than the caches. The reported figure is the average wall-clock time
//! per access.
//!
//! ## Usage
//!
//! ```sh
//! fuxx <memUsageMiB> <diskUsageMiB> [<timeFactor>]
//! ```
//!
//! `timeFactor` scales the number of accesses (300 million at 100 %). Disk
//! usage is accepted and reported for compatibility but not benchmarked.
//!
//! ## Library use
//!
//! ```
//! use fuxx_rs::{Config, bench};
//!
//! let config = Config::new(64, 16, Some(10));
//! assert_eq!(config.nr_operations(), 30_000_000);
//!
//! let outcome = bench::run_read_on(1024 * 1024, 1000).unwrap();
//! assert_eq!(outcome.report.nr_ops, 1000);
//! ```

pub mod bench;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;
pub mod runner;
pub mod timer;

pub use bench::{Operation, memory_latency_read, memory_latency_write};
pub use buffer::LatencyBuffer;
pub use cli::{Command, USAGE};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use pattern::{AccessCursor, AccessPattern, STRIDE};
pub use report::Report;
pub use runner::{RunSummary, run};
