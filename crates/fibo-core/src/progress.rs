//! Progress records and the sinks that consume them.
//!
//! Calculators emit a [`Progress`] when their whole-percent completion
//! moves (see [`Pacer`]) and once more when they finish. Sinks never
//! filter by value, so records from concurrent calculators in different
//! slots cannot shadow each other.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info};

/// One progress record from the calculator running in `slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Position of the calculator in the current run.
    pub slot: usize,
    pub algorithm: &'static str,
    /// Bits consumed for fast doubling, additions for the iterative loop.
    pub done_steps: u64,
    pub total_steps: u64,
}

impl Progress {
    #[must_use]
    pub fn new(slot: usize, algorithm: &'static str, done_steps: u64, total_steps: u64) -> Self {
        Self {
            slot,
            algorithm,
            done_steps,
            total_steps,
        }
    }

    /// Final record for a calculator.
    #[must_use]
    pub fn finished(slot: usize, algorithm: &'static str) -> Self {
        Self::new(slot, algorithm, 1, 1)
    }

    /// Completion in [0.0, 1.0].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            1.0
        } else {
            (self.done_steps as f64 / self.total_steps as f64).min(1.0)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.done_steps >= self.total_steps
    }
}

/// Consumer of progress records. Must be cheap: it runs on the hot loop.
pub trait ProgressSink: Send + Sync {
    fn record(&self, progress: &Progress);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn record(&self, _progress: &Progress) {}
}

/// Forwards every record to a channel, typically read by a display thread.
///
/// A full channel drops the record rather than stalling the calculator.
pub struct ChannelSink {
    tx: Sender<Progress>,
}

impl ChannelSink {
    #[must_use]
    pub fn new(tx: Sender<Progress>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn record(&self, progress: &Progress) {
        let _ = self.tx.try_send(*progress);
    }
}

/// Emits progress as tracing events, at most one per `interval` and slot.
pub struct TraceSink {
    interval: Duration,
    last: Mutex<HashMap<usize, Instant>>,
}

impl TraceSink {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(HashMap::new()),
        }
    }
}

impl ProgressSink for TraceSink {
    fn record(&self, progress: &Progress) {
        if progress.is_finished() {
            info!(
                slot = progress.slot,
                algorithm = progress.algorithm,
                "Calculation finished"
            );
            return;
        }

        let now = Instant::now();
        let mut last = self.last.lock();
        if last
            .get(&progress.slot)
            .is_some_and(|t| now.duration_since(*t) < self.interval)
        {
            return;
        }
        last.insert(progress.slot, now);
        drop(last);

        debug!(
            slot = progress.slot,
            algorithm = progress.algorithm,
            percent = progress.fraction() * 100.0,
            "Progress"
        );
    }
}

/// Hands each record to every contained sink.
#[derive(Default)]
pub struct Fanout {
    sinks: Vec<Box<dyn ProgressSink>>,
}

impl Fanout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ProgressSink for Fanout {
    fn record(&self, progress: &Progress) {
        for sink in &self.sinks {
            sink.record(progress);
        }
    }
}

/// Decides, inside one calculator loop, which steps are worth reporting:
/// every increase of the whole percentage, plus the last step.
#[derive(Debug)]
pub struct Pacer {
    total: u64,
    last_percent: u64,
}

impl Pacer {
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total,
            last_percent: 0,
        }
    }

    /// True when `done` steps should be reported.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, done: u64) -> bool {
        if self.total == 0 {
            return false;
        }
        let percent = (u128::from(done) * 100 / u128::from(self.total)) as u64;
        if percent > self.last_percent || done == self.total {
            self.last_percent = percent;
            true
        } else {
            false
        }
    }
}
