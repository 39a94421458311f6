//! Access pattern and benchmark pass integration tests.
//!
//! Checks the passes against the reference implementations in `test_utils`.


use std::num::NonZeroUsize;

use fuxx_rs::bench::{last_write_offset, read_pass, write_pass};
use fuxx_rs::pattern::offset_at;
use fuxx_rs::{AccessPattern, LatencyBuffer};

use test_utils::{gen_data, reference_accumulator, reference_offsets};

const MIB: usize = 1024 * 1024;

#[test]
fn test_pattern_matches_reference_modulo() {
    for len in [3, 1088, 5000, MIB, 64 * MIB + 17] {
        let expected = reference_offsets(len, 20_000);
        let actual: Vec<_> = AccessPattern::new(NonZeroUsize::new(len).unwrap())
            .take(20_000)
            .collect();
        assert_eq!(expected, actual, "len={len}");
    }
}

#[test]
fn test_pattern_kth_offset() {
    let len = NonZeroUsize::new(67_108_864).unwrap();
    let mut pattern = AccessPattern::new(len);
    assert_eq!(pattern.next(), Some(0));
    let k = 100_000u64;
    let kth = AccessPattern::new(len).nth(k as usize).unwrap();
    assert_eq!(kth, ((1088 * k) % 67_108_864) as usize);
    assert_eq!(kth, offset_at(k, len));
}

#[test]
fn test_pattern_crosses_cache_lines() {
    // Consecutive accesses never share a 64-byte line while the buffer is
    // larger than the stride.
    let offsets: Vec<_> = AccessPattern::new(NonZeroUsize::new(MIB).unwrap())
        .take(10_000)
        .collect();
    for pair in offsets.windows(2) {
        assert_ne!(pair[0] / 64, pair[1] / 64);
    }
}

#[test]
fn test_read_pass_matches_reference() {
    let buffer = LatencyBuffer::allocate(MIB).unwrap();
    let data = gen_data(MIB);
    assert_eq!(buffer.as_slice(), data.as_slice());

    for nr_ops in [0, 1, 2, 1000, 250_000] {
        assert_eq!(
            read_pass(buffer.as_slice(), nr_ops as u64),
            reference_accumulator(&data, nr_ops),
            "nr_ops={nr_ops}"
        );
    }
}

#[test]
fn test_read_pass_wraps_whole_buffer() {
    // 1 MiB / gcd(1088, 1 MiB) = 16384 distinct offsets before the walk repeats.
    let data = gen_data(MIB);
    let one_cycle = read_pass(&data, 16_384);
    assert_eq!(read_pass(&data, 2 * 16_384), 2 * one_cycle);
}

#[test]
fn test_write_pass_final_cell() {
    let mut buffer = LatencyBuffer::allocate(MIB).unwrap();
    let nr_ops = 300_001u64;
    write_pass(buffer.as_mut_slice(), nr_ops);
    let last = last_write_offset(buffer.len(), nr_ops).unwrap();

    assert_eq!(last, *reference_offsets(MIB, nr_ops as usize).last().unwrap());
    assert_eq!(buffer.as_slice()[last], ((nr_ops - 1) % 256) as u8);
}

#[test]
fn test_write_pass_matches_reference() {
    let len = 10_007;
    let nr_ops = 50_000;
    let mut expected = gen_data(len);
    for (i, o) in reference_offsets(len, nr_ops).into_iter().enumerate() {
        expected[o] = (i % 256) as u8;
    }

    let mut actual = gen_data(len);
    write_pass(&mut actual, nr_ops as u64);
    assert_eq!(expected, actual);
}
