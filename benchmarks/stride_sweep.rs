//! Latency sweep across buffer sizes.
//!
//! Runs the same strided read and write passes as `fuxx`, but over a range of
//! buffer sizes, so the step from cache-resident to DRAM-resident buffers
//! becomes visible. Each size is allocated once and reused for every run.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example bench_stride_sweep --release
//! cargo run --example bench_stride_sweep --release -- --size 32KiB,8MiB,1GiB --ops 50000000
//! ```

#[path = "common.rs"]
mod common;

use std::hint::black_box;

use common::{Stats, parse_args, print_header, print_row};

use fuxx_rs::LatencyBuffer;
use fuxx_rs::bench::{read_pass, write_pass};
use fuxx_rs::report::format_bytes;
use fuxx_rs::timer::BenchTimer;

const DEFAULT_SIZES: &[usize] = &[
    32 * 1024,         // 32 KiB, fits L1
    256 * 1024,        // 256 KiB
    8 * 1024 * 1024,   // 8 MiB
    64 * 1024 * 1024,  // 64 MiB
    256 * 1024 * 1024, // 256 MiB
];

fn main() {
    env_logger::init();
    let args = parse_args(DEFAULT_SIZES);

    print_header("fuxx-rs Stride Sweep");
    println!(
        "{} operations per pass | {} runs, {} warmup",
        args.nr_ops, args.nruns, args.warmup
    );
    println!();

    let mut dummy = 0u64;

    for &size in &args.sizes {
        let mut buffer = match LatencyBuffer::allocate(size) {
            Ok(buffer) => buffer,
            Err(err) => {
                eprintln!("skipping {}: {err}", format_bytes(size));
                continue;
            }
        };
        let label = format_bytes(size);

        let mut read_samples = Vec::with_capacity(args.nruns);
        for run in 0..(args.warmup + args.nruns) {
            let timer = BenchTimer::start();
            dummy = dummy.wrapping_add(read_pass(buffer.as_slice(), args.nr_ops));
            let nanos = timer.elapsed_nanos();
            if run >= args.warmup {
                read_samples.push(nanos as f64 / args.nr_ops.max(1) as f64);
            }
        }
        let stats = Stats::from_samples(&read_samples);
        print_row(&label, "read", stats.mean, stats.stdev_pct, stats.n);

        let mut write_samples = Vec::with_capacity(args.nruns);
        for run in 0..(args.warmup + args.nruns) {
            let timer = BenchTimer::start();
            write_pass(buffer.as_mut_slice(), args.nr_ops);
            let nanos = timer.elapsed_nanos();
            let _ = black_box(buffer.as_slice());
            if run >= args.warmup {
                write_samples.push(nanos as f64 / args.nr_ops.max(1) as f64);
            }
        }
        let stats = Stats::from_samples(&write_samples);
        print_row(&label, "write", stats.mean, stats.stdev_pct, stats.n);
    }

    println!();
    println!("Please ignore: {dummy}");
}
