//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all direction
//! predictors implement. A driver calls `predict_branch` before a branch
//! resolves and `update_branch` once its direction is known, strictly in that
//! order for every branch.

use crate::common::Direction;

/// Trait for branch direction prediction algorithms.
///
/// Predictors own all of their state. Releasing a predictor is dropping it,
/// so a released predictor can never be consulted again.
pub trait BranchPredictor {
    /// Predicts the direction of the branch at `pc`.
    ///
    /// Has no observable side effects.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    fn predict_branch(&self, pc: u32) -> Direction;

    /// Trains the predictor with the resolved direction of the branch at `pc`.
    ///
    /// Must be called after the matching `predict_branch` and before the next
    /// branch is predicted, so that the update sees the same history and table
    /// state the prediction used.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    /// * `actual` - The direction the branch actually took
    fn update_branch(&mut self, pc: u32, actual: Direction);

    /// Returns the short tag naming this algorithm (`"ANT"`, `"2BG"`, ...).
    fn name(&self) -> &'static str;
}
