//! fibo: exact Fibonacci numbers from the command line.

use std::process::ExitCode;

use fibo_lib::{app, config, errors};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // quiet: the exit code is the only diagnostic
    let base = if config.quiet && !config.verbose {
        LevelFilter::OFF
    } else {
        LevelFilter::WARN
    };
    let mut filter = EnvFilter::from_default_env().add_directive(base.into());
    if config.verbose {
        for krate in ["fibo", "fibo_lib", "fibo_core", "fibo_orchestration", "fibo_cli"] {
            if let Ok(directive) = format!("{krate}=debug").parse() {
                filter = filter.add_directive(directive);
            }
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = errors::exit_code(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
