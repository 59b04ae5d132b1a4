//! Splits an index range into contiguous chunks, one per worker thread.

use std::ops::Range;
use thiserror::Error;

/// The requested chunk count was zero.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("thread count must be positive")]
pub struct ZeroThreadsError;

/// Divides `0..len` into exactly `num_threads` contiguous, pairwise
/// disjoint ranges whose union is `0..len`.
///
/// Each range holds `len / num_threads` indices except the last, which
/// absorbs the remainder of the integer division. When `num_threads`
/// exceeds `len` the leading ranges are empty; callers must be prepared
/// for chunks with no elements.
pub fn partition(len: usize, num_threads: usize) -> Result<Vec<Range<usize>>, ZeroThreadsError> {
    if num_threads == 0 {
        return Err(ZeroThreadsError);
    }

    let chunk_size = len / num_threads;
    let mut chunks = Vec::with_capacity(num_threads);
    for i in 0..num_threads - 1 {
        chunks.push(i * chunk_size..(i + 1) * chunk_size);
    }
    // The last chunk runs to the end of the array.
    chunks.push((num_threads - 1) * chunk_size..len);
    Ok(chunks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{partition, ZeroThreadsError};
    use std::ops::Range;

    fn assert_covers(chunks: &[Range<usize>], len: usize) {
        let mut next = 0;
        for chunk in chunks {
            assert_eq!(chunk.start, next, "chunks must be contiguous");
            assert!(chunk.start <= chunk.end);
            next = chunk.end;
        }
        assert_eq!(next, len, "chunks must cover the whole range");
    }

    #[test]
    fn exact_division() {
        let chunks = partition(10, 2).unwrap();
        assert_eq!(chunks, vec![0..5, 5..10]);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let chunks = partition(5, 2).unwrap();
        assert_eq!(chunks, vec![0..2, 2..5]);
    }

    #[test]
    fn single_thread_takes_everything() {
        let chunks = partition(7, 1).unwrap();
        assert_eq!(chunks, vec![0..7]);
    }

    #[test]
    fn more_threads_than_elements() {
        let chunks = partition(1, 3).unwrap();
        assert_eq!(chunks, vec![0..0, 0..0, 0..1]);
    }

    #[test]
    fn zero_threads_is_rejected() {
        assert_eq!(partition(10, 0), Err(ZeroThreadsError));
    }

    #[test]
    fn grid_of_lengths_and_counts() {
        for len in [0, 1, 2, 3, 7, 64, 100, 101] {
            for num_threads in [1, 2, 3, 5, 8, 64, 200] {
                let chunks = partition(len, num_threads).unwrap();
                assert_eq!(chunks.len(), num_threads, "len={len} n={num_threads}");
                assert_covers(&chunks, len);
            }
        }
    }
}
