use std::fmt;
use std::time::Duration;

use crate::processing::ReduceOp;
use crate::types::Value;

/// Which sequence operation a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Map,
    Filter,
    Sort,
    Reduce(ReduceOp),
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunKind::Map => f.write_str("map"),
            RunKind::Filter => f.write_str("filter"),
            RunKind::Sort => f.write_str("sort"),
            RunKind::Reduce(op) => write!(f, "reduce({op:?})"),
        }
    }
}

/// Events emitted by an [`crate::execution::Executor`] run.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted { kind: RunKind, items: usize },
    /// `processed` of `total` elements have gone through the transform.
    Progress { processed: usize, total: usize },
    ReduceFinished { result: Value },
    /// The run took longer than [`crate::execution::ExecutionOptions::slow_run_ms`].
    SlowRun { kind: RunKind, elapsed: Duration },
    RunFinished { metrics: ExecutionMetrics },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Logs execution events to stderr.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunStarted { kind, items } => {
                eprintln!("[exec][start] kind={kind} items={items}");
            }
            ExecutionEvent::Progress { processed, total } => {
                eprintln!("[exec][progress] {processed}/{total}");
            }
            ExecutionEvent::SlowRun { kind, elapsed } => {
                eprintln!("[exec][slow] kind={kind} elapsed={elapsed:?}");
            }
            ExecutionEvent::RunFinished { metrics } => eprintln!("[exec][done] {metrics}"),
            other => eprintln!("[exec] {other:?}"),
        }
    }
}

/// Counters for the most recent run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionMetrics {
    /// Number of runs started so far; 0 before the first run.
    pub run_id: u64,
    pub kind: Option<RunKind>,
    /// Elements passed to the transform (or comparator).
    pub items_processed: u64,
    /// Elements in the run's output; 1 for a reduction.
    pub items_emitted: u64,
    /// `None` while a run is in progress.
    pub elapsed: Option<Duration>,
}

impl ExecutionMetrics {
    pub(crate) fn begin_run(&mut self, kind: RunKind) {
        *self = ExecutionMetrics {
            run_id: self.run_id + 1,
            kind: Some(kind),
            ..Default::default()
        };
    }

    pub(crate) fn end_run(&mut self, emitted: usize, elapsed: Duration) {
        self.items_emitted = emitted as u64;
        self.elapsed = Some(elapsed);
    }
}

impl fmt::Display for ExecutionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.map(|k| k.to_string());
        write!(
            f,
            "run_id={}, kind={}, items_processed={}, items_emitted={}, elapsed={:?}",
            self.run_id,
            kind.as_deref().unwrap_or("none"),
            self.items_processed,
            self.items_emitted,
            self.elapsed
        )
    }
}
