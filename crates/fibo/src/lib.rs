//! Application logic for the `fibo` binary.

pub mod app;
pub mod config;
pub mod errors;
