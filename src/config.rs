//! Benchmark configuration.
//!
//! A [`Config`] is built once from the command line and then only read. All
//! sizes are given in mebibytes and clamped before use:
//!
//! | Parameter | Rule | Result |
//! |-----------|------|--------|
//! | memory usage | `0` | 128 MiB |
//! | memory usage | `>= 1048576` | 1024 MiB |
//! | disk usage | `< 16` | 16 MiB |
//! | disk usage | `>= 1048576` | 1024 MiB |
//! | time factor | `0` or `>= 1000` | 100 % |
//!
//! Disk usage is parsed, clamped and reported, but no benchmark consumes it.

/// One mebibyte in bytes.
pub const MIB: u64 = 1024 * 1024;

/// Memory usage used when the caller asks for zero.
pub const DEFAULT_MEM_USAGE_MIB: u64 = 128;

/// Smallest disk usage accepted.
pub const MIN_DISK_USAGE_MIB: u64 = 16;

/// Sizes at or above this many MiB are replaced by [`CLAMPED_USAGE_MIB`].
pub const MIB_LIMIT: u64 = 1024 * 1024;

/// Replacement for oversized memory and disk usage.
///
/// Note this is 1 GiB, not the 1 TiB limit itself.
pub const CLAMPED_USAGE_MIB: u64 = 1024;

/// Time factor used when none is given or the given one is out of range.
pub const DEFAULT_TIME_FACTOR: u64 = 100;

/// Time factors at or above this percentage fall back to the default.
pub const TIME_FACTOR_LIMIT: u64 = 1000;

/// Operations per benchmark at a time factor of 100 %.
pub const BASE_OPERATIONS: u64 = 300_000_000;

/// Resolved benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Buffer size per benchmark (MiB).
    pub mem_usage_mib: u64,
    /// Declared disk usage (MiB). Reported only.
    pub disk_usage_mib: u64,
    /// Iteration scale in percent.
    pub time_factor: u64,
    /// Whether the time factor came from the command line.
    pub time_factor_given: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(0, 0, None)
    }
}

impl Config {
    /// Build a configuration from raw command-line values, applying all clamps.
    pub fn new(mem_usage_mib: u64, disk_usage_mib: u64, time_factor: Option<u64>) -> Self {
        Self {
            mem_usage_mib: clamp_mem_usage_mib(mem_usage_mib),
            disk_usage_mib: clamp_disk_usage_mib(disk_usage_mib),
            time_factor: time_factor.map_or(DEFAULT_TIME_FACTOR, clamp_time_factor),
            time_factor_given: time_factor.is_some(),
        }
    }

    /// Buffer size in bytes.
    pub fn mem_usage_bytes(&self) -> u64 {
        self.mem_usage_mib * MIB
    }

    /// Declared disk usage in bytes.
    pub fn disk_usage_bytes(&self) -> u64 {
        self.disk_usage_mib * MIB
    }

    /// Number of timed iterations each benchmark performs.
    pub fn nr_operations(&self) -> u64 {
        nr_operations(self.time_factor)
    }
}

/// Scale [`BASE_OPERATIONS`] by a percentage (integer division).
pub fn nr_operations(time_factor: u64) -> u64 {
    BASE_OPERATIONS * time_factor / 100
}

/// Apply the memory-usage clamp.
pub fn clamp_mem_usage_mib(mib: u64) -> u64 {
    let mib = if mib > 0 { mib } else { DEFAULT_MEM_USAGE_MIB };
    if mib < MIB_LIMIT { mib } else { CLAMPED_USAGE_MIB }
}

/// Apply the disk-usage clamp.
pub fn clamp_disk_usage_mib(mib: u64) -> u64 {
    let mib = mib.max(MIN_DISK_USAGE_MIB);
    if mib < MIB_LIMIT { mib } else { CLAMPED_USAGE_MIB }
}

/// Apply the time-factor clamp.
pub fn clamp_time_factor(percent: u64) -> u64 {
    if percent > 0 && percent < TIME_FACTOR_LIMIT {
        percent
    } else {
        DEFAULT_TIME_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Clamp tests ----

    #[test]
    fn test_mem_usage_zero_uses_default() {
        assert_eq!(clamp_mem_usage_mib(0), 128);
    }

    #[test]
    fn test_mem_usage_passes_through() {
        for mib in [1, 2, 64, 128, 4096, 1_048_575] {
            assert_eq!(clamp_mem_usage_mib(mib), mib);
        }
    }

    #[test]
    fn test_mem_usage_oversized_clamps_to_1024() {
        assert_eq!(clamp_mem_usage_mib(1_048_576), 1024);
        assert_eq!(clamp_mem_usage_mib(u64::MAX), 1024);
    }

    #[test]
    fn test_disk_usage_bounds() {
        assert_eq!(clamp_disk_usage_mib(0), 16);
        assert_eq!(clamp_disk_usage_mib(15), 16);
        assert_eq!(clamp_disk_usage_mib(16), 16);
        assert_eq!(clamp_disk_usage_mib(500), 500);
        assert_eq!(clamp_disk_usage_mib(1_048_575), 1_048_575);
        assert_eq!(clamp_disk_usage_mib(1_048_576), 1024);
    }

    #[test]
    fn test_time_factor_bounds() {
        assert_eq!(clamp_time_factor(0), 100);
        assert_eq!(clamp_time_factor(1), 1);
        assert_eq!(clamp_time_factor(999), 999);
        assert_eq!(clamp_time_factor(1000), 100);
        assert_eq!(clamp_time_factor(123_456), 100);
    }

    // ---- Config tests ----

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.mem_usage_mib, 128);
        assert_eq!(config.disk_usage_mib, 16);
        assert_eq!(config.time_factor, 100);
        assert!(!config.time_factor_given);
        assert_eq!(config.mem_usage_bytes(), 128 * 1024 * 1024);
        assert_eq!(config.nr_operations(), 300_000_000);
    }

    #[test]
    fn test_config_byte_conversion() {
        let config = Config::new(64, 16, Some(10));
        assert_eq!(config.mem_usage_bytes(), 67_108_864);
        assert_eq!(config.disk_usage_bytes(), 16 * 1024 * 1024);
        assert!(config.time_factor_given);

        let config = Config::new(1_048_576, 1_048_576, None);
        assert_eq!(config.mem_usage_bytes(), 1024 * 1024 * 1024);
        assert_eq!(config.disk_usage_bytes(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_given_time_factor_is_still_clamped() {
        let config = Config::new(1, 16, Some(0));
        assert_eq!(config.time_factor, 100);
        assert!(config.time_factor_given);
    }

    #[test]
    fn test_nr_operations_scaling() {
        assert_eq!(nr_operations(100), 300_000_000);
        assert_eq!(nr_operations(10), 30_000_000);
        assert_eq!(nr_operations(1), 3_000_000);
        assert_eq!(nr_operations(999), 2_997_000_000);
    }
}
