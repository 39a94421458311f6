//! The byte buffer a benchmark walks over.
//!
//! A [`LatencyBuffer`] owns its memory for the duration of one benchmark and
//! releases it on drop. Allocation is fallible so that asking for more memory
//! than the machine has ends in an [`ErrorKind::OutOfMemory`] error instead of
//! an abort.

use crate::error::{Error, ErrorKind, Result};
use crate::report::format_bytes;

/// Returns the page size of the system (typically 4096).
pub fn page_size() -> usize {
    // SAFETY: _SC_PAGESIZE is always a valid sysconf name.
    let ps = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    debug_assert!(ps > 0, "sysconf(_SC_PAGESIZE) returned {ps}");
    ps as usize
}

/// An owned buffer initialized to `cell[i] = i % 256`.
pub struct LatencyBuffer {
    data: Vec<u8>,
}

impl LatencyBuffer {
    /// Allocate and initialize a buffer of exactly `len` bytes.
    pub fn allocate(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "benchmark buffer must not be empty",
            )
            .with_operation("LatencyBuffer::allocate"));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            Error::new(
                ErrorKind::OutOfMemory,
                format!("cannot allocate {} benchmark buffer", format_bytes(len)),
            )
            .with_operation("LatencyBuffer::allocate")
            .with_context("bytes", len.to_string())
            .set_source(e)
        })?;
        data.extend((0..len).map(|i| i as u8));

        log::debug!(
            "allocated {} benchmark buffer ({} pages of {} bytes)",
            format_bytes(len),
            len.div_ceil(page_size()),
            page_size()
        );
        Ok(Self { data })
    }

    /// Size in bytes, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_initializes_pattern() {
        let buf = LatencyBuffer::allocate(1000).unwrap();
        assert_eq!(buf.len(), 1000);
        for (i, &b) in buf.as_slice().iter().enumerate() {
            assert_eq!(b, (i % 256) as u8);
        }
    }

    #[test]
    fn test_allocate_exact_size() {
        let buf = LatencyBuffer::allocate(1024 * 1024).unwrap();
        assert_eq!(buf.len(), 1024 * 1024);
        assert_eq!(buf.as_slice()[1024 * 1024 - 1], 255);
    }

    #[test]
    fn test_allocate_empty_rejected() {
        let err = LatencyBuffer::allocate(0).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_allocate_impossible_size() {
        let err = LatencyBuffer::allocate(usize::MAX).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::OutOfMemory);
        assert_eq!(err.operation(), "LatencyBuffer::allocate");
    }

    #[test]
    fn test_mutable_access() {
        let mut buf = LatencyBuffer::allocate(16).unwrap();
        buf.as_mut_slice()[3] = 0xAB;
        assert_eq!(buf.as_slice()[3], 0xAB);
    }

    #[test]
    fn test_page_size() {
        let ps = page_size();
        assert!(ps > 0);
        assert!(ps.is_power_of_two());
    }
}
