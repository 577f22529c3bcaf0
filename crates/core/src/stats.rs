//! Prediction accuracy statistics.
//!
//! Tracks how many predictions a run made and how many of them were wrong,
//! mirroring the branch section of a full simulator's statistics report.

use std::fmt;
use std::ops::AddAssign;

use crate::common::Direction;

/// Correct and incorrect prediction counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PredictionStats {
    /// Number of branch predictions that were correct.
    pub correct: u64,
    /// Number of branch predictions that were wrong (mispredictions).
    pub mispredictions: u64,
}

impl PredictionStats {
    /// Creates empty statistics.
    pub const fn new() -> Self {
        Self {
            correct: 0,
            mispredictions: 0,
        }
    }

    /// Records one prediction against its resolved direction.
    ///
    /// Returns `true` if the prediction was correct.
    pub fn record(&mut self, predicted: Direction, actual: Direction) -> bool {
        let hit = predicted == actual;
        if hit {
            self.correct += 1;
        } else {
            self.mispredictions += 1;
        }
        hit
    }

    /// Returns the total number of predictions recorded.
    pub const fn total(&self) -> u64 {
        self.correct + self.mispredictions
    }

    /// Returns the fraction of correct predictions, or 0.0 for an empty run.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }

    /// Returns the fraction of mispredictions, or 0.0 for an empty run.
    pub fn misprediction_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.mispredictions as f64 / total as f64,
        }
    }

    /// Adds the counts from another run into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.correct += other.correct;
        self.mispredictions += other.mispredictions;
    }
}

impl AddAssign for PredictionStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({:.2}%), {} mispredictions",
            self.correct,
            self.total(),
            self.accuracy() * 100.0,
            self.mispredictions
        )
    }
}
