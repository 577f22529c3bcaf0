//! Branch direction predictor library.
//!
//! This crate implements the conditional-branch direction predictors used by
//! pipelined processor simulators:
//! 1. **Static:** Always-not-taken, always-taken, and backward-taken/forward-not-taken.
//! 2. **Global two-level:** A 5-bit global history register indexing a 1-bit or 2-bit PHT.
//! 3. **Local two-level:** Sixteen 4-bit local history registers indexing a 16x16 PHT.
//! 4. **Simulation:** Configuration, a trace-driven harness, and accuracy statistics.
//!
//! Every predictor exposes the same contract through [`BranchPredictor`]:
//! predict a direction for an address, then train on the resolved direction.

/// Common types (branch direction, branch metadata, errors).
pub mod common;
/// Predictor configuration (defaults, predictor kinds, JSON loading).
pub mod config;
/// Branch prediction unit (trait, primitives, predictor variants, factory).
pub mod bru;
/// Trace-driven simulation harness.
pub mod sim;
/// Prediction accuracy statistics.
pub mod stats;

/// Uniform predictor contract implemented by every variant.
pub use crate::bru::BranchPredictor;
/// Enum-dispatched predictor built from a [`config::PredictorKind`].
pub use crate::bru::BranchPredictorWrapper;
/// Outcome of a conditional branch.
pub use crate::common::Direction;
/// Crate error type and result alias.
pub use crate::common::error::{Error, Result};
/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Harness that drives one predictor over a branch stream.
pub use crate::sim::Simulator;
