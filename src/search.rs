//! Orchestration of the parallel search: partition the array, spawn one
//! worker thread per chunk, and wait on the collector for the merged
//! result.

use crate::{
    collector::Collector,
    partition::{partition, ZeroThreadsError},
    scan::{scan_min, MinResult},
};
use std::thread;
use thiserror::Error;

/// Invalid input to [`find_min`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("cannot search an empty array")]
    EmptyArray,
    #[error(transparent)]
    ZeroThreads(#[from] ZeroThreadsError),
}

/// Finds the smallest value in `values` and its index, scanning with
/// `num_threads` worker threads.
///
/// Each worker scans one contiguous chunk and reports exactly once to a
/// shared [`Collector`]; this thread parks until the last report arrives.
/// The value component equals the sequential minimum. When the minimum
/// value occurs more than once, which index is returned depends on report
/// order and is unspecified.
pub fn find_min(values: &[i32], num_threads: usize) -> Result<MinResult, SearchError> {
    if values.is_empty() {
        return Err(SearchError::EmptyArray);
    }
    let chunks = partition(values.len(), num_threads)?;

    let collector = Collector::new(chunks.len());
    log::debug!(
        "searching {} values with {} workers",
        values.len(),
        chunks.len()
    );

    let min = thread::scope(|s| {
        for chunk in chunks {
            let collector = collector.clone();
            s.spawn(move || collector.collect(scan_min(values, chunk)));
        }
        collector.wait()
    });

    // The chunks cover the whole non-empty array, so some worker always
    // finds a candidate.
    min.ok_or(SearchError::EmptyArray)
}
