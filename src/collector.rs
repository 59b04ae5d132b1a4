//! This module supports the collection of minimum findings across worker
//! threads and the release of a waiting orchestrator once all workers have
//! reported. The following features and constraints apply ...
//! - Workers *send* their finding to a clonable [`Collector`] handle; all
//!   handles share one state object.
//! - Each worker must report exactly once. The collector transitions to the
//!   ready state on the last report and never leaves it.
//! - The [`Collector::wait`] function parks the calling thread until the
//!   ready transition; it does not spin. It is safe to call before any
//!   report has arrived and after all of them have.
//! - A worker that never reports leaves `wait` parked forever; there is no
//!   timeout or cancellation.
//!
//! ## Usage pattern
//!
//! ```rust
//! use parallel_min::collector::Collector;
//! use parallel_min::scan::MinResult;
//! use std::thread;
//!
//! const NTHREADS: usize = 4;
//!
//! fn main() {
//!     let collector = Collector::new(NTHREADS);
//!
//!     let hs = (0..NTHREADS)
//!         .map(|i| {
//!             // Clone the handle for use in the new thread.
//!             let collector = collector.clone();
//!             thread::spawn(move || {
//!                 collector.collect(Some(MinResult {
//!                     value: i as i32 * 10 - 15,
//!                     index: i,
//!                 }));
//!             })
//!         })
//!         .collect::<Vec<_>>();
//!
//!     // Blocks until all four reports have arrived.
//!     let min = collector.wait();
//!     assert_eq!(min, Some(MinResult { value: -15, index: 0 }));
//!
//!     hs.into_iter().for_each(|h| h.join().expect("worker panicked"));
//! }
//! ```

use crate::scan::MinResult;
use std::{
    fmt::Debug,
    sync::{Arc, Condvar, Mutex},
    thread,
};

pub(crate) const POISONED_COLLECTOR_MUTEX: &str = "poisoned collector mutex";

/// Best finding seen so far plus the report count. Only ever touched with
/// the state mutex held.
#[derive(Debug)]
struct CollectorState {
    best: Option<MinResult>,
    reported: usize,
    total: usize,
}

impl CollectorState {
    fn is_ready(&self) -> bool {
        self.reported == self.total
    }
}

struct Inner {
    state: Mutex<CollectorState>,
    all_reported: Condvar,
}

/// Merges per-worker minimum findings and releases a waiting caller once
/// all of the expected reports have arrived.
///
/// A `Collector` is a clonable handle over shared state: clone it into each
/// worker thread and keep one handle on the orchestrating thread for
/// [`wait`](Collector::wait).
pub struct Collector {
    inner: Arc<Inner>,
}

impl Clone for Collector {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock().expect(POISONED_COLLECTOR_MUTEX);
        write!(f, "Collector({:?})", state)
    }
}

impl Collector {
    /// Instantiates a collector expecting `total` reports.
    ///
    /// With `total == 0` the collector is born ready and [`wait`](Self::wait)
    /// returns immediately with no finding.
    pub fn new(total: usize) -> Self {
        Collector {
            inner: Arc::new(Inner {
                state: Mutex::new(CollectorState {
                    best: None,
                    reported: 0,
                    total,
                }),
                all_reported: Condvar::new(),
            }),
        }
    }

    /// Reports one worker's finding, `None` if the worker's chunk was empty.
    ///
    /// The candidate replaces the current best only when its value is
    /// strictly smaller, so among equal values the first reporter wins and
    /// an empty chunk never displaces a real finding. The report that
    /// completes the expected total wakes all threads parked in
    /// [`wait`](Self::wait).
    ///
    /// # Panics
    ///
    /// Panics if called more times than the total passed to
    /// [`new`](Self::new); each worker must report exactly once.
    pub fn collect(&self, candidate: Option<MinResult>) {
        let mut state = self.inner.state.lock().expect(POISONED_COLLECTOR_MUTEX);
        assert!(
            state.reported < state.total,
            "collect called more times than the expected report total"
        );

        if let Some(candidate) = candidate {
            if state.best.map_or(true, |best| candidate.value < best.value) {
                state.best = Some(candidate);
            }
        }
        state.reported += 1;
        log::trace!(
            "report {}/{} from {:?}: candidate={:?}, best={:?}",
            state.reported,
            state.total,
            thread::current().id(),
            candidate,
            state.best
        );

        if state.is_ready() {
            self.inner.all_reported.notify_all();
        }
    }

    /// Blocks until all expected reports have arrived, then returns the
    /// best finding, `None` if every chunk was empty or no reports were
    /// expected at all.
    ///
    /// The readiness predicate is re-checked under the state mutex after
    /// every wake-up, so spurious wake-ups and reports that complete
    /// before this call are both handled.
    pub fn wait(&self) -> Option<MinResult> {
        let mut state = self.inner.state.lock().expect(POISONED_COLLECTOR_MUTEX);
        while !state.is_ready() {
            state = self
                .inner
                .all_reported
                .wait(state)
                .expect(POISONED_COLLECTOR_MUTEX);
        }
        state.best
    }

    /// Returns a snapshot of the best finding so far without blocking.
    ///
    /// Usable mid-collection; the value may still be displaced by a later
    /// report until [`is_ready`](Self::is_ready) returns `true`.
    pub fn probe(&self) -> Option<MinResult> {
        self.inner.state.lock().expect(POISONED_COLLECTOR_MUTEX).best
    }

    /// Returns `true` once all expected reports have arrived. Does not block.
    pub fn is_ready(&self) -> bool {
        self.inner
            .state
            .lock()
            .expect(POISONED_COLLECTOR_MUTEX)
            .is_ready()
    }
}
