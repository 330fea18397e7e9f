//! Application entry point and dispatch.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use fibo_cli::output::write_to_file;
use fibo_cli::presenter::CLIResultPresenter;
use fibo_cli::progress::{spawn_listener, CLIProgressReporter};
use fibo_core::calculator::{Calculator, Request};
use fibo_core::memory_budget::MemoryEstimate;
use fibo_core::progress::{ChannelSink, Fanout, TraceSink};
use fibo_core::stop::StopToken;
use fibo_orchestration::calculator_selection::resolve_calculators;
use fibo_orchestration::interfaces::{CalculationResult, ResultPresenter};
use fibo_orchestration::orchestrator::{run_calculators, select_result};

use crate::config::AppConfig;

/// Minimum time between two progress log lines per calculator in verbose mode.
const LOG_INTERVAL: Duration = Duration::from_millis(500);

/// Buffered progress records before the channel starts dropping them.
const PROGRESS_CHANNEL_CAPACITY: usize = 256;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibo_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let n = config.n.context("missing Fibonacci index")?;

    let presenter = CLIResultPresenter::new(config.presentation());
    run_cli(config, n, &presenter)
        .inspect_err(|e| presenter.present_error(&format!("{e:#}")))
}

fn run_cli(config: &AppConfig, n: u64, presenter: &dyn ResultPresenter) -> Result<()> {
    let estimate = MemoryEstimate::check(n, config.memory_limit.unwrap_or(0))?;
    debug!(n, total_bytes = estimate.total_bytes, "Memory estimate");

    let calculators = resolve_calculators(&config.algo)?;

    let stop = StopToken::with_deadline(config.timeout);
    install_ctrlc_handler(stop.clone());

    presenter.present_start(n);
    let results = run_observed(config, &calculators, n, &stop);

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    let selected = select_result(&results)?;
    presenter.present_result(selected.algorithm, n, selected.value, selected.duration);

    if let Some(path) = &config.output {
        write_to_file(path, selected.value).with_context(|| format!("failed to write {path}"))?;
        debug!(path = %path, "Result written");
    }

    Ok(())
}

/// Run the calculators with the progress sinks requested on the command line.
fn run_observed(
    config: &AppConfig,
    calculators: &[Arc<dyn Calculator>],
    n: u64,
    stop: &StopToken,
) -> Vec<CalculationResult> {
    let mut sinks = Fanout::new();
    if config.verbose {
        sinks = sinks.with(TraceSink::new(LOG_INTERVAL));
    }

    let listener: Option<JoinHandle<()>> = if config.progress {
        let (tx, rx) = crossbeam_channel::bounded(PROGRESS_CHANNEL_CAPACITY);
        sinks = sinks.with(ChannelSink::new(tx));
        Some(spawn_listener(rx, Arc::new(CLIProgressReporter::new())))
    } else {
        None
    };

    let req = Request::new(n, stop, &sinks).with_options(config.to_options());
    let results = run_calculators(calculators, &req);

    // Dropping the sinks closes the progress channel.
    drop(sinks);
    if let Some(handle) = listener {
        if handle.join().is_err() {
            warn!("Progress display thread panicked");
        }
    }

    results
}

fn install_ctrlc_handler(stop: StopToken) {
    if let Err(e) = ctrlc::set_handler(move || stop.request()) {
        warn!(error = %e, "Could not install Ctrl+C handler");
    }
}
