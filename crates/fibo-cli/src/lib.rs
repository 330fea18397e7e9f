//! # fibo-cli
//!
//! Result formatting, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use presenter::{CLIResultPresenter, PresentationConfig};
pub use progress::CLIProgressReporter;
