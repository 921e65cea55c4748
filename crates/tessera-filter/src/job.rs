//! Partitioned parallel jobs
//!
//! A [`PartitionJob`] splits `0..extent` into contiguous ranges and runs one
//! task per range on its own rayon pool. Each task produces a value of type
//! `T`; the values are kept in partition order and handed out once the job
//! has succeeded.
//!
//! A task that returns an error or panics records a message and moves the
//! job to [`TransformStatus::Failure`]; its siblings still run to
//! completion. The last task to finish moves a job that saw no failure to
//! [`TransformStatus::Success`].

use crate::error::{FilterError, FilterResult};
use crate::status::TransformStatus;
use std::any::Any;
use std::ops::Range;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Default number of partitions
pub const DEFAULT_THREADS: usize = 4;

/// Longest sleep between status polls
const MAX_POLL_INTERVAL_MS: u64 = 50;

type Task<T> = dyn Fn(Range<u32>) -> FilterResult<T> + Send + Sync;

struct JobState<T> {
    status: TransformStatus,
    messages: Vec<String>,
    pending: Vec<Option<T>>,
    results: Vec<T>,
    remaining: usize,
}

fn lock<S>(m: &Mutex<S>) -> MutexGuard<'_, S> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Split `0..extent` into `parts` contiguous ranges whose sizes differ by
/// at most one; the first `extent % parts` ranges are the longer ones.
pub fn partition_ranges(extent: u32, parts: usize) -> Vec<Range<u32>> {
    let parts = (parts as u32).clamp(1, extent.max(1));
    let base = extent / parts;
    let extra = extent % parts;
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + u32::from(i < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// A job that runs one task per contiguous range of `0..extent`
pub struct PartitionJob<T> {
    ranges: Vec<Range<u32>>,
    task: Arc<Task<T>>,
    state: Arc<Mutex<JobState<T>>>,
    pool: Option<rayon::ThreadPool>,
}

impl<T: Send + 'static> PartitionJob<T> {
    /// Create a job over `0..extent` with `min(threads, extent)` partitions
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `extent` or `threads`
    /// is zero.
    pub fn new<F>(extent: u32, threads: usize, task: F) -> FilterResult<Self>
    where
        F: Fn(Range<u32>) -> FilterResult<T> + Send + Sync + 'static,
    {
        if extent == 0 || threads == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "extent and thread count must be positive (extent {}, threads {})",
                extent, threads
            )));
        }
        let ranges = partition_ranges(extent, threads);
        Ok(Self {
            state: Arc::new(Mutex::new(JobState {
                status: TransformStatus::Ready,
                messages: Vec::new(),
                pending: Vec::new(),
                results: Vec::new(),
                remaining: ranges.len(),
            })),
            ranges,
            task: Arc::new(task),
            pool: None,
        })
    }

    /// The ranges each partition covers, in order
    pub fn ranges(&self) -> &[Range<u32>] {
        &self.ranges
    }

    /// Number of worker threads (one per partition)
    pub fn thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or(self.ranges.len(), |p| p.current_num_threads())
    }

    /// Current status
    pub fn status(&self) -> TransformStatus {
        lock(&self.state).status
    }

    /// Diagnostic messages recorded by failed partitions
    pub fn messages(&self) -> Vec<String> {
        lock(&self.state).messages.clone()
    }

    /// Dispatch every partition and return immediately
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidState`] if the job was already started
    /// and [`FilterError::ThreadPool`] if the pool cannot be built.
    pub fn start(&mut self) -> FilterResult<()> {
        {
            let state = lock(&self.state);
            if state.status != TransformStatus::Ready {
                return Err(FilterError::InvalidState(format!(
                    "cannot start a job that is {}",
                    state.status
                )));
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.ranges.len())
            .thread_name(|i| format!("tessera-partition-{}", i))
            .build()?;

        {
            let mut state = lock(&self.state);
            state.status = TransformStatus::Processing;
            state.pending = (0..self.ranges.len()).map(|_| None).collect();
        }
        log::debug!(
            "starting {} partitions: {:?}",
            self.ranges.len(),
            self.ranges
        );

        for (index, range) in self.ranges.iter().cloned().enumerate() {
            let task = Arc::clone(&self.task);
            let state = Arc::clone(&self.state);
            pool.spawn(move || {
                let outcome = catch_unwind(AssertUnwindSafe(|| task(range.clone())));
                record(&state, index, &range, outcome);
            });
        }

        self.pool = Some(pool);
        Ok(())
    }

    /// Block until every partition has finished
    ///
    /// Polls the status with a linearly growing sleep (1 ms, 2 ms, ...,
    /// capped at 50 ms).
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidState`] if the job was never started
    /// - [`FilterError::Timeout`] if `timeout` elapses first; the partitions
    ///   keep running and a later wait can still succeed
    /// - [`FilterError::AggregateFailure`] with every recorded message if
    ///   any partition failed
    pub fn wait_until_finished(&self, timeout: Option<Duration>) -> FilterResult<()> {
        let started = Instant::now();
        let mut interval = 1;
        loop {
            {
                let state = lock(&self.state);
                match state.status {
                    TransformStatus::Ready => {
                        return Err(FilterError::InvalidState(
                            "wait on a job that was never started".to_string(),
                        ));
                    }
                    TransformStatus::Success => return Ok(()),
                    TransformStatus::Failure if state.remaining == 0 => {
                        return Err(FilterError::AggregateFailure {
                            messages: state.messages.clone(),
                        });
                    }
                    _ => {}
                }
            }

            if let Some(limit) = timeout {
                if started.elapsed() >= limit {
                    return Err(FilterError::Timeout(limit));
                }
            }
            std::thread::sleep(Duration::from_millis(interval));
            interval = (interval + 1).min(MAX_POLL_INTERVAL_MS);
        }
    }

    /// Run `f` over the per-partition results, in partition order
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidState`] unless the job succeeded.
    pub fn with_results<R>(&self, f: impl FnOnce(&[T]) -> R) -> FilterResult<R> {
        let state = lock(&self.state);
        if state.status != TransformStatus::Success {
            return Err(FilterError::InvalidState(format!(
                "results requested while job is {}",
                state.status
            )));
        }
        Ok(f(&state.results))
    }
}

fn record<T>(
    state: &Mutex<JobState<T>>,
    index: usize,
    range: &Range<u32>,
    outcome: std::thread::Result<FilterResult<T>>,
) {
    let mut state = lock(state);
    match outcome {
        Ok(Ok(value)) => state.pending[index] = Some(value),
        Ok(Err(e)) => fail(&mut state, format!("partition {} {:?}: {}", index, range, e)),
        Err(payload) => fail(
            &mut state,
            format!(
                "partition {} {:?} panicked: {}",
                index,
                range,
                panic_message(payload.as_ref())
            ),
        ),
    }

    state.remaining -= 1;
    if state.remaining == 0 && state.status == TransformStatus::Processing {
        let results: Vec<T> = state.pending.drain(..).flatten().collect();
        state.results = results;
        state.status = TransformStatus::Success;
        log::debug!("all {} partitions succeeded", state.results.len());
    }
}

fn fail<T>(state: &mut JobState<T>, message: String) {
    log::warn!("{}", message);
    state.messages.push(message);
    if state.status.can_transition_to(TransformStatus::Failure) {
        state.status = TransformStatus::Failure;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
