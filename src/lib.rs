//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for designing
//! and illustrating two-group (A/B) experiments: effect sizes, power and
//! sample size for the independent two-sample t-test, and simulated
//! experiments with a choice of summary.

/// Command line argument parsing
pub mod cli;
/// This module houses the public API for reconciling experiment parameters
/// and simulating experiments
pub mod compute;
/// Experiment files
pub mod config;
pub mod effect_size;
/// This module contains error types
pub mod error;
pub mod hypothesis_type;
pub mod output;
pub mod power;
pub mod reconcile;
pub mod simulation;
mod util;
