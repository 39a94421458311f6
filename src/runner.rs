//! Sequencing of a complete benchmark run.
//!
//! The read benchmark runs first, then the write benchmark. Each owns its own
//! buffer, so peak memory use is one buffer, never two.

use std::io::Write;

use crate::bench::{
    Operation, ReadOutcome, WriteOutcome, memory_latency_read, memory_latency_write,
};
use crate::buffer::page_size;
use crate::config::Config;
use crate::error::Result;
use crate::report::Report;

/// Everything a run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub read: Report,
    pub write: Report,
    /// Accumulator of the read benchmark, printed as `Please ignore: ...`.
    pub accumulator: u64,
    pub last_write_offset: Option<usize>,
}

/// Print the resolved configuration.
///
/// The time factor line only appears when one was given on the command line.
pub fn print_header(config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Memory usage in MiB: {}", config.mem_usage_mib)?;
    writeln!(out, "Disk   usage in MiB: {}", config.disk_usage_mib)?;
    if config.time_factor_given {
        writeln!(out, "Time factor        : {}%", config.time_factor)?;
    }
    Ok(())
}

fn print_banner(op: Operation, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", op.name())?;
    writeln!(out)?;
    writeln!(out, "{}", op.description())?;
    writeln!(out)?;
    Ok(())
}

/// Run both benchmarks and write the full report to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<RunSummary> {
    log::debug!(
        "resolved config: mem={} bytes, disk={} bytes, time_factor={}%, ops={}, page_size={}",
        config.mem_usage_bytes(),
        config.disk_usage_bytes(),
        config.time_factor,
        config.nr_operations(),
        page_size()
    );
    print_header(config, out)?;

    print_banner(Operation::Read, out)?;
    out.flush()?;
    let ReadOutcome {
        report: read,
        accumulator,
    } = memory_latency_read(config)?;
    write!(out, "{read}")?;

    print_banner(Operation::Write, out)?;
    out.flush()?;
    let WriteOutcome {
        report: write,
        last_offset,
    } = memory_latency_write(config)?;
    write!(out, "{write}")?;

    writeln!(out)?;
    writeln!(out, "Please ignore: {accumulator}")?;
    out.flush()?;

    Ok(RunSummary {
        read,
        write,
        accumulator,
        last_write_offset: last_offset,
    })
}
