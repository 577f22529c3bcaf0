//! Simulator: owns one predictor and the statistics gathered while driving it.
//!
//! Every branch goes through the same strictly ordered sequence: predict,
//! score the prediction against the resolved direction, then update. Updates
//! are never batched or reordered, so each update sees exactly the state its
//! prediction used.

use tracing::{info, trace};

use super::record::BranchRecord;
use crate::bru::{BranchPredictor, BranchPredictorWrapper};
use crate::common::error::Result;
use crate::common::{BranchMetadata, Direction};
use crate::config::Config;
use crate::stats::PredictionStats;

/// Top-level simulator: one predictor plus its accuracy counters.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// The predictor under evaluation.
    predictor: BranchPredictorWrapper,
    /// Correct / mispredicted counts so far.
    stats: PredictionStats,
    /// Emit a trace event per branch.
    trace_predictions: bool,
}

impl Simulator {
    /// Creates a simulator running the predictor selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if the predictor's tables cannot
    /// be allocated.
    pub fn new(config: &Config, metadata: &[BranchMetadata]) -> Result<Self> {
        let predictor = BranchPredictorWrapper::from_config(&config.predictor, metadata)?;
        Ok(Self {
            predictor,
            stats: PredictionStats::new(),
            trace_predictions: config.general.trace_predictions,
        })
    }

    /// Creates a simulator around an already constructed predictor.
    pub const fn with_predictor(predictor: BranchPredictorWrapper) -> Self {
        Self {
            predictor,
            stats: PredictionStats::new(),
            trace_predictions: false,
        }
    }

    /// Simulates one branch: predict, score, then update.
    ///
    /// Returns the prediction made before the outcome was revealed.
    pub fn step(&mut self, pc: u32, actual: Direction) -> Direction {
        let predicted = self.predictor.predict_branch(pc);
        let hit = self.stats.record(predicted, actual);
        if self.trace_predictions {
            trace!(
                pc = %format_args!("{pc:#010x}"),
                %predicted,
                %actual,
                hit,
                "branch"
            );
        }
        self.predictor.update_branch(pc, actual);
        predicted
    }

    /// Simulates every branch in `records`, in order.
    ///
    /// Returns the statistics accumulated so far, including earlier runs.
    pub fn run<I>(&mut self, records: I) -> &PredictionStats
    where
        I: IntoIterator,
        I::Item: Into<BranchRecord>,
    {
        for record in records {
            let record = record.into();
            let _ = self.step(record.pc, record.outcome);
        }
        info!(
            kind = %self.predictor.kind(),
            branches = self.stats.total(),
            mispredictions = self.stats.mispredictions,
            accuracy = self.stats.accuracy(),
            "simulation complete"
        );
        &self.stats
    }

    /// Returns the statistics accumulated so far.
    pub const fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    /// Returns the predictor under evaluation.
    pub const fn predictor(&self) -> &BranchPredictorWrapper {
        &self.predictor
    }

    /// Consumes the simulator, releasing the predictor and returning its statistics.
    pub fn into_stats(self) -> PredictionStats {
        self.stats
    }
}
