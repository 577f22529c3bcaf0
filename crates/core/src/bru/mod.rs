//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors and the primitives they are
//! built from: saturating counters, history registers, and pattern history
//! tables. [`BranchPredictorWrapper`] constructs any variant from a
//! [`PredictorKind`] and dispatches to it statically.

use tracing::{debug, warn};

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating counter.
pub mod counter;

/// Two-level global history predictors (LTG, 2BG).
pub mod global;

/// Fixed-width outcome history register.
pub mod history;

/// Two-level local history predictors (LTL, 2BL).
pub mod local;

/// Pattern history table and its entry types.
pub mod pht;

/// Static predictors (ANT, AT, BTFNT).
pub mod static_bp;

use self::{
    global::{OneBitGlobalPredictor, TwoBitGlobalPredictor},
    local::{OneBitLocalPredictor, TwoBitLocalPredictor},
    static_bp::{AlwaysNotTakenPredictor, AlwaysTakenPredictor, BtfntPredictor},
};
use crate::common::error::Result;
use crate::common::{BranchMetadata, Direction};
use crate::config::{PredictorConfig, PredictorKind};

/// Enum wrapper for static dispatch of branch predictors.
/// This avoids vtable lookups in the per-branch loop.
#[derive(Debug, Clone)]
pub enum BranchPredictorWrapper {
    /// Always not-taken (ANT).
    AlwaysNotTaken(AlwaysNotTakenPredictor),
    /// Always taken (AT).
    AlwaysTaken(AlwaysTakenPredictor),
    /// Backward-taken, forward-not-taken (BTFNT).
    Btfnt(BtfntPredictor),
    /// Global history, 1-bit PHT (LTG).
    GlobalOneBit(OneBitGlobalPredictor),
    /// Local history, 1-bit PHT (LTL).
    LocalOneBit(OneBitLocalPredictor),
    /// Global history, 2-bit counters (2BG).
    GlobalTwoBit(TwoBitGlobalPredictor),
    /// Local history, 2-bit counters (2BL).
    LocalTwoBit(TwoBitLocalPredictor),
}

impl BranchPredictorWrapper {
    /// Creates the predictor selected by `kind`.
    ///
    /// All tables are sized and initialised to not-taken / counter 0 before
    /// this returns. `branch_count` and `metadata` describe the branch
    /// population; none of the predictors index by branch identity, so a
    /// mismatch between them is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if table storage cannot be
    /// reserved. No partially built predictor escapes in that case.
    pub fn new(kind: PredictorKind, branch_count: u32, metadata: &[BranchMetadata]) -> Result<Self> {
        if metadata.len() != branch_count as usize {
            warn!(
                %kind,
                branch_count,
                metadata_len = metadata.len(),
                "branch metadata does not match the declared branch count"
            );
        }

        let bp = match kind {
            PredictorKind::AlwaysNotTaken => Self::AlwaysNotTaken(AlwaysNotTakenPredictor),
            PredictorKind::AlwaysTaken => Self::AlwaysTaken(AlwaysTakenPredictor),
            PredictorKind::Btfnt => Self::Btfnt(BtfntPredictor::new()),
            PredictorKind::GlobalOneBit => Self::GlobalOneBit(OneBitGlobalPredictor::new()?),
            PredictorKind::LocalOneBit => Self::LocalOneBit(OneBitLocalPredictor::new()?),
            PredictorKind::GlobalTwoBit => Self::GlobalTwoBit(TwoBitGlobalPredictor::new()?),
            PredictorKind::LocalTwoBit => Self::LocalTwoBit(TwoBitLocalPredictor::new()?),
        };

        debug!(
            %kind,
            branch_count,
            pht_entries = bp.pht_entries(),
            "constructed branch predictor"
        );
        Ok(bp)
    }

    /// Creates the predictor described by a [`PredictorConfig`].
    ///
    /// # Errors
    ///
    /// See [`BranchPredictorWrapper::new`].
    pub fn from_config(config: &PredictorConfig, metadata: &[BranchMetadata]) -> Result<Self> {
        Self::new(config.kind, config.branch_count, metadata)
    }

    /// Returns which algorithm this predictor runs.
    pub const fn kind(&self) -> PredictorKind {
        match self {
            Self::AlwaysNotTaken(_) => PredictorKind::AlwaysNotTaken,
            Self::AlwaysTaken(_) => PredictorKind::AlwaysTaken,
            Self::Btfnt(_) => PredictorKind::Btfnt,
            Self::GlobalOneBit(_) => PredictorKind::GlobalOneBit,
            Self::LocalOneBit(_) => PredictorKind::LocalOneBit,
            Self::GlobalTwoBit(_) => PredictorKind::GlobalTwoBit,
            Self::LocalTwoBit(_) => PredictorKind::LocalTwoBit,
        }
    }

    /// Returns the number of pattern history table entries (0 for static predictors).
    pub const fn pht_entries(&self) -> usize {
        match self {
            Self::AlwaysNotTaken(_) | Self::AlwaysTaken(_) | Self::Btfnt(_) => 0,
            Self::GlobalOneBit(bp) => bp.pht().len(),
            Self::LocalOneBit(bp) => bp.pht().len(),
            Self::GlobalTwoBit(bp) => bp.pht().len(),
            Self::LocalTwoBit(bp) => bp.pht().len(),
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    /// Predicts the direction of the branch at `pc`.
    #[inline(always)]
    fn predict_branch(&self, pc: u32) -> Direction {
        match self {
            Self::AlwaysNotTaken(bp) => bp.predict_branch(pc),
            Self::AlwaysTaken(bp) => bp.predict_branch(pc),
            Self::Btfnt(bp) => bp.predict_branch(pc),
            Self::GlobalOneBit(bp) => bp.predict_branch(pc),
            Self::LocalOneBit(bp) => bp.predict_branch(pc),
            Self::GlobalTwoBit(bp) => bp.predict_branch(pc),
            Self::LocalTwoBit(bp) => bp.predict_branch(pc),
        }
    }

    /// Trains the predictor with the resolved direction of the branch at `pc`.
    #[inline(always)]
    fn update_branch(&mut self, pc: u32, actual: Direction) {
        match self {
            Self::AlwaysNotTaken(bp) => bp.update_branch(pc, actual),
            Self::AlwaysTaken(bp) => bp.update_branch(pc, actual),
            Self::Btfnt(bp) => bp.update_branch(pc, actual),
            Self::GlobalOneBit(bp) => bp.update_branch(pc, actual),
            Self::LocalOneBit(bp) => bp.update_branch(pc, actual),
            Self::GlobalTwoBit(bp) => bp.update_branch(pc, actual),
            Self::LocalTwoBit(bp) => bp.update_branch(pc, actual),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().tag()
    }
}
