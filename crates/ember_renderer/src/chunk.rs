//! Work partitioning for the manual-chunking dispatch strategy.

use std::ops::Range;

/// Split `total` units of work into `workers` contiguous ranges.
///
/// Every range gets `total / workers` units; the remainder is handed out
/// one-per-range to the leading ranges, so sizes never differ by more than
/// one. Ranges are returned in order and cover `0..total` exactly. When
/// `workers` exceeds `total`, the trailing ranges are empty.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let base = total / workers;
    let mut remainder = total % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for _ in 0..workers {
        let mut size = base;
        if remainder > 0 {
            size += 1;
            remainder -= 1;
        }
        ranges.push(start..start + size);
        start += size;
    }

    ranges
}
