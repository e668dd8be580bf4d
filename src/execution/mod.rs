//! Observed execution of sequence operations.
//!
//! An [`Executor`] runs the [`crate::processing`] operations on the calling thread, one pass
//! per call, and reports each run to an optional [`ExecutionObserver`]:
//!
//! - run start/finish with [`ExecutionMetrics`]
//! - progress every [`ExecutionOptions::progress_every`] elements
//! - slow runs over [`ExecutionOptions::slow_run_ms`]
//!
//! Results are identical to calling the processing functions directly.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_array_manip::execution::{ExecutionOptions, Executor, StdErrExecutionObserver};
//! use rust_array_manip::prelude::*;
//!
//! let mut exec = Executor::new(ExecutionOptions::default())
//!     .with_observer(Arc::new(StdErrExecutionObserver));
//! let items = parse_json_array("[1,2,3]").unwrap();
//! assert_eq!(exec.map(&items, &op("*", 2)), map(&items, &op("*", 2)));
//! assert_eq!(exec.metrics().items_processed, 3);
//! ```

mod observer;

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::processing::{Comparator, ReduceOp, reduce_op};
use crate::transform::Transform;
use crate::types::Value;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionObserver, RunKind, StdErrExecutionObserver,
};

/// Configuration for the [`Executor`].
///
/// Deserializable so it can live in a caller's JSON configuration; missing fields take
/// their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionOptions {
    /// Emit [`ExecutionEvent::Progress`] after every this many elements. 0 disables it.
    pub progress_every: usize,
    /// Report runs slower than this many milliseconds with [`ExecutionEvent::SlowRun`].
    pub slow_run_ms: Option<u64>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            progress_every: 10_000,
            slow_run_ms: None,
        }
    }
}

/// Runs map/filter/sort/reduce and reports what happened.
pub struct Executor {
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: ExecutionMetrics,
}

impl Executor {
    pub fn new(opts: ExecutionOptions) -> Self {
        Self {
            opts,
            observer: None,
            metrics: ExecutionMetrics::default(),
        }
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.opts
    }

    /// Metrics of the most recent run.
    pub fn metrics(&self) -> &ExecutionMetrics {
        &self.metrics
    }

    /// Observed [`crate::processing::map`].
    pub fn map<T>(&mut self, items: &[Value], transform: &T) -> Vec<Value>
    where
        T: AsRef<Transform> + ?Sized,
    {
        let transform = transform.as_ref();
        let start = self.begin(RunKind::Map, items.len());
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            out.push(transform.apply_at(item, i));
            self.tick(i + 1, items.len());
        }
        self.finish(start, out.len());
        out
    }

    /// Observed [`crate::processing::filter`].
    pub fn filter<T>(&mut self, items: &[Value], predicate: &T) -> Vec<Value>
    where
        T: AsRef<Transform> + ?Sized,
    {
        let predicate = predicate.as_ref();
        let start = self.begin(RunKind::Filter, items.len());
        let mut out = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if predicate.apply_at(item, i).is_truthy() {
                out.push(item.clone());
            }
            self.tick(i + 1, items.len());
        }
        self.finish(start, out.len());
        out
    }

    /// Observed [`crate::processing::sort`].
    pub fn sort(&mut self, items: &[Value], comparator: &Comparator) -> Vec<Value> {
        let start = self.begin(RunKind::Sort, items.len());
        let out = crate::processing::sort(items, comparator);
        self.metrics.items_processed = items.len() as u64;
        self.finish(start, out.len());
        out
    }

    /// Observed [`crate::processing::reduce_op`].
    pub fn reduce<T>(&mut self, items: &[Value], transform: &T, op: ReduceOp) -> Value
    where
        T: AsRef<Transform> + ?Sized,
    {
        let start = self.begin(RunKind::Reduce(op), items.len());
        let out = reduce_op(items, transform, op);
        self.metrics.items_processed = items.len() as u64;
        self.emit(ExecutionEvent::ReduceFinished { result: out.clone() });
        self.finish(start, 1);
        out
    }

    fn begin(&mut self, kind: RunKind, items: usize) -> Instant {
        self.metrics.begin_run(kind);
        self.emit(ExecutionEvent::RunStarted { kind, items });
        Instant::now()
    }

    fn tick(&mut self, processed: usize, total: usize) {
        self.metrics.items_processed = processed as u64;
        let every = self.opts.progress_every;
        if every > 0 && processed % every == 0 {
            self.emit(ExecutionEvent::Progress { processed, total });
        }
    }

    fn finish(&mut self, start: Instant, emitted: usize) {
        let elapsed = start.elapsed();
        self.metrics.end_run(emitted, elapsed);
        if let (Some(limit), Some(kind)) = (self.opts.slow_run_ms, self.metrics.kind) {
            if elapsed > Duration::from_millis(limit) {
                self.emit(ExecutionEvent::SlowRun { kind, elapsed });
            }
        }
        self.emit(ExecutionEvent::RunFinished {
            metrics: self.metrics.clone(),
        });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(ExecutionOptions::default())
    }
}
