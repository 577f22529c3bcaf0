//! Static Branch Predictors.
//!
//! Predictors whose answer never depends on resolved outcomes:
//! 1. **Always Not Taken:** Every branch falls through.
//! 2. **Always Taken:** Every branch is taken.
//! 3. **BTFNT:** Backward branches (loops) are taken, forward branches are not.

use super::BranchPredictor;
use crate::common::Direction;
use crate::config::PredictorKind;

/// Predicts every branch as not taken. Keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysNotTakenPredictor;

impl BranchPredictor for AlwaysNotTakenPredictor {
    fn predict_branch(&self, _pc: u32) -> Direction {
        Direction::NotTaken
    }

    fn update_branch(&mut self, _pc: u32, _actual: Direction) {}

    fn name(&self) -> &'static str {
        PredictorKind::AlwaysNotTaken.tag()
    }
}

/// Predicts every branch as taken. Keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTakenPredictor;

impl BranchPredictor for AlwaysTakenPredictor {
    fn predict_branch(&self, _pc: u32) -> Direction {
        Direction::Taken
    }

    fn update_branch(&mut self, _pc: u32, _actual: Direction) {}

    fn name(&self) -> &'static str {
        PredictorKind::AlwaysTaken.tag()
    }
}

/// Backward-Taken / Forward-Not-Taken predictor.
///
/// Compares each branch address against the address of the most recently
/// updated branch. A lower address is treated as a backward branch and
/// predicted taken. The resolved direction is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BtfntPredictor {
    /// Address of the last updated branch; `None` until the first update.
    last_pc: Option<u32>,
}

impl BtfntPredictor {
    /// Creates a predictor that has not seen any branch yet.
    pub const fn new() -> Self {
        Self { last_pc: None }
    }

    /// Returns the address of the last updated branch, if any.
    pub const fn last_pc(self) -> Option<u32> {
        self.last_pc
    }
}

impl BranchPredictor for BtfntPredictor {
    /// Predicts taken iff `pc` is below the last updated address.
    ///
    /// Before the first update there is nothing to compare against and the
    /// prediction is taken, matching an all-ones "no branch yet" sentinel for
    /// every address except `u32::MAX`. The first prediction of a run carries
    /// no information either way.
    fn predict_branch(&self, pc: u32) -> Direction {
        self.last_pc
            .map_or(Direction::Taken, |last| Direction::from(pc < last))
    }

    /// Records `pc` as the last seen branch, whatever its outcome.
    fn update_branch(&mut self, pc: u32, _actual: Direction) {
        self.last_pc = Some(pc);
    }

    fn name(&self) -> &'static str {
        PredictorKind::Btfnt.tag()
    }
}
