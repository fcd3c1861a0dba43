//! primecalc library: application logic for the prime enumerator.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
