//! Two-Level Global History Predictors.
//!
//! A single 5-bit global history register (GHR) records the outcomes of the
//! most recent branches, regardless of address. The GHR indexes a 32-entry
//! pattern history table, so every branch shares one correlation context.
//!
//! # Update ordering
//!
//! The PHT entry trained on update is the one selected by the GHR *before*
//! the outcome is shifted in, i.e. the entry the matching prediction read.

use super::BranchPredictor;
use super::counter::SaturatingCounter;
use super::history::GlobalHistory;
use super::pht::{PatternHistoryTable, PhtEntry};
use crate::common::Direction;
use crate::common::error::Result;
use crate::config::{PredictorKind, defaults};

/// Global two-level predictor with a 1-bit PHT (last outcome per history).
pub type OneBitGlobalPredictor = GlobalPredictor<Direction>;

/// Global two-level predictor with a PHT of 2-bit saturating counters.
pub type TwoBitGlobalPredictor = GlobalPredictor<SaturatingCounter>;

/// Two-level predictor indexed by global history.
#[derive(Debug, Clone)]
pub struct GlobalPredictor<E> {
    /// Global History Register.
    ghr: GlobalHistory,
    /// Pattern History Table, one entry per GHR value.
    pht: PatternHistoryTable<E>,
}

impl<E: PhtEntry> GlobalPredictor<E> {
    /// Creates a predictor with a zeroed GHR and an all-not-taken PHT.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if the PHT cannot be allocated.
    pub fn new() -> Result<Self> {
        Ok(Self {
            ghr: GlobalHistory::new(),
            pht: PatternHistoryTable::new(defaults::GLOBAL_PHT_SIZE)?,
        })
    }

    /// Returns the global history register.
    pub const fn history(&self) -> GlobalHistory {
        self.ghr
    }

    /// Returns the pattern history table.
    pub const fn pht(&self) -> &PatternHistoryTable<E> {
        &self.pht
    }
}

impl<E: PhtEntry> BranchPredictor for GlobalPredictor<E> {
    /// Reads the PHT entry selected by the current GHR. The address is unused.
    #[inline(always)]
    fn predict_branch(&self, _pc: u32) -> Direction {
        self.pht.predict(self.ghr.index())
    }

    /// Trains the entry at the pre-update GHR, then shifts the outcome in.
    #[inline(always)]
    fn update_branch(&mut self, _pc: u32, actual: Direction) {
        let index = self.ghr.index();
        self.pht.train(index, actual);
        self.ghr.push(actual);
    }

    fn name(&self) -> &'static str {
        if E::BITS == 1 {
            PredictorKind::GlobalOneBit.tag()
        } else {
            PredictorKind::GlobalTwoBit.tag()
        }
    }
}
