//! Terminal progress bars fed by a progress channel.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use tracing::debug;

use fibo_core::progress::Progress;
use fibo_orchestration::interfaces::ProgressReporter;

/// Bar resolution: progress fractions are mapped onto this many ticks.
const BAR_TICKS: u64 = 1000;

const BAR_TEMPLATE: &str = "{prefix:>16} [{bar:40.cyan/blue}] {percent:>3}% eta {eta}";

/// One bar per calculator, drawn on stderr. Drawing is skipped when stderr
/// is not a terminal.
pub struct CLIProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<usize, ProgressBar>>,
}

impl CLIProgressReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Reporter that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn bar_for(&self, progress: &Progress) -> ProgressBar {
        self.bars
            .lock()
            .entry(progress.slot)
            .or_insert_with(|| {
                let style = ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> ");
                let bar = self.multi.add(ProgressBar::new(BAR_TICKS));
                bar.set_style(style);
                bar.set_prefix(progress.algorithm);
                bar
            })
            .clone()
    }

    /// Last known position of the bar for `slot`, in ticks.
    #[must_use]
    pub fn position(&self, slot: usize) -> Option<u64> {
        self.bars.lock().get(&slot).map(ProgressBar::position)
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn to_ticks(fraction: f64) -> u64 {
    (fraction.clamp(0.0, 1.0) * BAR_TICKS as f64).round() as u64
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, progress: &Progress) {
        let bar = self.bar_for(progress);
        if progress.is_finished() {
            bar.set_position(BAR_TICKS);
            bar.finish();
        } else {
            bar.set_position(to_ticks(progress.fraction()));
        }
    }

    fn complete(&self) {
        for bar in self.bars.lock().values() {
            bar.finish_and_clear();
        }
        let _ = self.multi.clear();
    }
}

/// Drain `rx` on a background thread until every sender is dropped, then
/// call `complete` on the reporter.
pub fn spawn_listener(
    rx: Receiver<Progress>,
    reporter: Arc<dyn ProgressReporter>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut received = 0usize;
        for progress in rx {
            reporter.report(&progress);
            received += 1;
        }
        debug!(received, "Progress channel closed");
        reporter.complete();
    })
}
