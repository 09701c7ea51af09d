//! Test driver for `rb-forest`.
//!
//! Builds a tree of integer records, validates it after the insert phase,
//! then removes the records in insertion order and validates after every
//! single removal.
//!
//! - [`forest`] — the keyed record arena driven by the runs
//! - [`config`] — run configuration (JSON file and CLI flags)
//! - [`runner`] — the randomized and fixed-value runs
//! - [`cli`]    — argument parsing for the `rb-tester` binary

pub mod cli;
pub mod config;
pub mod forest;
pub mod runner;

pub use config::{ConfigError, TesterConfig};
pub use forest::{Forest, Record};
pub use runner::{run, run_auto, run_with_values, Phase, TestReport, TesterError};
