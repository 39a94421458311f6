//! Console reporting of benchmark results.

use std::fmt;

/// Result of one timed benchmark loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Human-readable operation label, e.g. `single byte read`.
    pub operation: &'static str,
    /// Wall-clock time of the timed loop.
    pub total_nanos: u64,
    /// Iterations performed inside the timed loop.
    pub nr_ops: u64,
}

impl Report {
    pub fn new(operation: &'static str, total_nanos: u64, nr_ops: u64) -> Self {
        Self {
            operation,
            total_nanos,
            nr_ops,
        }
    }

    /// Average time per operation. Zero if no operations ran.
    pub fn nanos_per_op(&self) -> f64 {
        if self.nr_ops == 0 {
            return 0.0;
        }
        self.total_nanos as f64 / self.nr_ops as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Time: {} nanoseconds for {} operations.",
            self.total_nanos, self.nr_ops
        )?;
        writeln!(
            f,
            "Time per '{}': {} nanoseconds",
            self.operation,
            self.nanos_per_op()
        )
    }
}

/// Format a byte count as a human-readable string (e.g. "16.0 MiB").
pub fn format_bytes(nbytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let b = nbytes as f64;
    if b >= GIB {
        format!("{:.1} GiB", b / GIB)
    } else if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{nbytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_per_op_is_not_truncated() {
        let report = Report::new("single byte read", 10, 4);
        assert_eq!(report.nanos_per_op(), 2.5);
    }

    #[test]
    fn test_nanos_per_op_zero_ops() {
        assert_eq!(Report::new("x", 100, 0).nanos_per_op(), 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = Report::new("single byte write", 150, 60);
        assert_eq!(
            report.to_string(),
            "Total Time: 150 nanoseconds for 60 operations.\n\
             Time per 'single byte write': 2.5 nanoseconds\n"
        );
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(4096), "4.0 KiB");
        assert_eq!(format_bytes(64 * 1024 * 1024), "64.0 MiB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.0 GiB");
    }
}
