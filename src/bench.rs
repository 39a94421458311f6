//! Timed memory latency benchmarks.
//!
//! Both benchmarks follow the same shape: allocate and initialize a
//! [`LatencyBuffer`], walk it with an [`AccessCursor`] for a fixed number of
//! single-byte operations, and time only that walk. The buffer is released
//! before the function returns.
//!
//! The read pass folds every byte it loads into an accumulator that the caller
//! must keep (and eventually print), otherwise the loads could be optimized
//! away. The written buffer goes through [`std::hint::black_box`] after the
//! timed region for the same reason.

use std::hint::black_box;
use std::num::NonZeroUsize;

use crate::buffer::LatencyBuffer;
use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::pattern::{AccessCursor, offset_at};
use crate::report::{Report, format_bytes};
use crate::timer::BenchTimer;

/// The two benchmarked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    /// Banner title.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Read => "memoryLatencyRead",
            Operation::Write => "memoryLatencyWrite",
        }
    }

    /// Label used in the `Time per '...'` line.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Read => "single byte read",
            Operation::Write => "single byte write",
        }
    }

    /// Banner paragraph explaining what is measured.
    pub fn description(self) -> &'static str {
        match self {
            Operation::Read => {
                "This allocates as much memory as allowed and does single byte reads in a\n\
                 random access fashion. The result is the average time it takes to fetch\n\
                 a cache line."
            }
            Operation::Write => {
                "This allocates as much memory as allowed and does single byte writes\n\
                 in a random access fashion. The result is the average time it takes to\n\
                 write a byte."
            }
        }
    }
}

/// Outcome of [`memory_latency_read`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadOutcome {
    pub report: Report,
    /// Wrapping sum of every byte read.
    pub accumulator: u64,
}

/// Outcome of [`memory_latency_write`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteOutcome {
    pub report: Report,
    /// Offset written by the final iteration, `None` if nothing was written.
    pub last_offset: Option<usize>,
}

/// Read `nr_ops` bytes along the access pattern and return their wrapping sum.
///
/// Returns 0 for an empty buffer.
#[inline(never)]
pub fn read_pass(buf: &[u8], nr_ops: u64) -> u64 {
    let Some(len) = NonZeroUsize::new(buf.len()) else {
        return 0;
    };
    let mut cursor = AccessCursor::new(len);
    let mut dummy = 0u64;
    for _ in 0..nr_ops {
        dummy = dummy.wrapping_add(u64::from(buf[cursor.offset()]));
        cursor.advance();
    }
    dummy
}

/// Write `i % 256` at the i-th offset of the access pattern, for `nr_ops`
/// iterations.
///
/// Does nothing for an empty buffer.
#[inline(never)]
pub fn write_pass(buf: &mut [u8], nr_ops: u64) {
    let Some(len) = NonZeroUsize::new(buf.len()) else {
        return;
    };
    let mut cursor = AccessCursor::new(len);
    for i in 0..nr_ops {
        buf[cursor.offset()] = i as u8;
        cursor.advance();
    }
}

/// Offset written by the last iteration of [`write_pass`].
///
/// `None` if the buffer is empty or `nr_ops` is zero.
pub fn last_write_offset(len: usize, nr_ops: u64) -> Option<usize> {
    let len = NonZeroUsize::new(len)?;
    nr_ops.checked_sub(1).map(|k| offset_at(k, len))
}

/// Run the read benchmark as configured.
pub fn memory_latency_read(config: &Config) -> Result<ReadOutcome> {
    let len = buffer_len(config).map_err(|e| e.with_operation("memory_latency_read"))?;
    run_read_on(len, config.nr_operations())
}

/// Run the write benchmark as configured.
pub fn memory_latency_write(config: &Config) -> Result<WriteOutcome> {
    let len = buffer_len(config).map_err(|e| e.with_operation("memory_latency_write"))?;
    run_write_on(len, config.nr_operations())
}

/// Read benchmark over an explicit buffer length and operation count.
pub fn run_read_on(len: usize, nr_ops: u64) -> Result<ReadOutcome> {
    let buffer = LatencyBuffer::allocate(len).map_err(|e| e.with_operation("run_read_on"))?;
    log::info!(
        "starting {} over {} ({nr_ops} operations)",
        Operation::Read.name(),
        format_bytes(buffer.len())
    );

    let timer = BenchTimer::start();
    let accumulator = read_pass(buffer.as_slice(), nr_ops);
    let total_nanos = timer.elapsed_nanos();

    drop(buffer);
    log::debug!("{} finished in {total_nanos} ns", Operation::Read.name());

    Ok(ReadOutcome {
        report: Report::new(Operation::Read.label(), total_nanos, nr_ops),
        accumulator,
    })
}

/// Write benchmark over an explicit buffer length and operation count.
pub fn run_write_on(len: usize, nr_ops: u64) -> Result<WriteOutcome> {
    let mut buffer = LatencyBuffer::allocate(len).map_err(|e| e.with_operation("run_write_on"))?;
    log::info!(
        "starting {} over {} ({nr_ops} operations)",
        Operation::Write.name(),
        format_bytes(buffer.len())
    );

    let timer = BenchTimer::start();
    write_pass(buffer.as_mut_slice(), nr_ops);
    let total_nanos = timer.elapsed_nanos();

    let _ = black_box(buffer.as_slice());
    let last_offset = last_write_offset(buffer.len(), nr_ops);
    drop(buffer);
    log::debug!("{} finished in {total_nanos} ns", Operation::Write.name());

    Ok(WriteOutcome {
        report: Report::new(Operation::Write.label(), total_nanos, nr_ops),
        last_offset,
    })
}

fn buffer_len(config: &Config) -> Result<usize> {
    let bytes = config.mem_usage_bytes();
    usize::try_from(bytes).map_err(|e| {
        Error::new(
            ErrorKind::ConfigInvalid,
            "memory usage does not fit in the address space",
        )
        .with_context("bytes", bytes.to_string())
        .set_source(e)
    })
}
