//! Command-line interface for vtune-report
//!
//! This module contains CLI argument parsing and configuration

pub mod args;

pub use args::Args;
