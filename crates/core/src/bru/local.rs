//! Two-Level Local History Predictors.
//!
//! Branches are split into 16 buckets by the low four address bits. Each
//! bucket owns a 4-bit local history register (LHR) and a private 16-entry
//! slice of a 16x16 pattern history table, so a branch's prediction depends
//! only on the recent outcomes of branches in its own bucket.
//!
//! Distinct addresses sharing the low four bits alias: they share one LHR and
//! one PHT slice. No finer hashing of the address is performed.

use super::BranchPredictor;
use super::counter::SaturatingCounter;
use super::history::LocalHistory;
use super::pht::{PatternHistoryTable, PhtEntry};
use crate::common::Direction;
use crate::common::error::Result;
use crate::config::PredictorKind;
use crate::config::defaults::{LOCAL_BUCKET_MASK, LOCAL_BUCKETS, LOCAL_PHT_SIZE, LOCAL_SLICE_SIZE};

/// Local two-level predictor with a 1-bit PHT (last outcome per history).
pub type OneBitLocalPredictor = LocalPredictor<Direction>;

/// Local two-level predictor with a PHT of 2-bit saturating counters.
pub type TwoBitLocalPredictor = LocalPredictor<SaturatingCounter>;

/// Returns the history bucket for a branch address.
#[inline(always)]
pub const fn bucket(pc: u32) -> usize {
    (pc & LOCAL_BUCKET_MASK) as usize
}

/// Two-level predictor indexed by per-bucket local history.
#[derive(Debug, Clone)]
pub struct LocalPredictor<E> {
    /// Local History Registers, one per address bucket.
    lhrs: [LocalHistory; LOCAL_BUCKETS],
    /// Pattern History Table, laid out as one slice per bucket.
    pht: PatternHistoryTable<E>,
}

impl<E: PhtEntry> LocalPredictor<E> {
    /// Creates a predictor with zeroed LHRs and an all-not-taken PHT.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if the PHT cannot be allocated.
    pub fn new() -> Result<Self> {
        Ok(Self {
            lhrs: [LocalHistory::new(); LOCAL_BUCKETS],
            pht: PatternHistoryTable::new(LOCAL_PHT_SIZE)?,
        })
    }

    /// Returns the local history register used for branches at `pc`.
    pub const fn history(&self, pc: u32) -> LocalHistory {
        self.lhrs[bucket(pc)]
    }

    /// Returns the pattern history table.
    pub const fn pht(&self) -> &PatternHistoryTable<E> {
        &self.pht
    }

    /// PHT index for a bucket under its current local history.
    #[inline(always)]
    const fn index(&self, bucket: usize) -> usize {
        LOCAL_SLICE_SIZE * bucket + self.lhrs[bucket].index()
    }
}

impl<E: PhtEntry> BranchPredictor for LocalPredictor<E> {
    #[inline(always)]
    fn predict_branch(&self, pc: u32) -> Direction {
        self.pht.predict(self.index(bucket(pc)))
    }

    /// Trains the bucket's entry at its pre-update LHR, then shifts the
    /// outcome into that LHR.
    #[inline(always)]
    fn update_branch(&mut self, pc: u32, actual: Direction) {
        let bucket = bucket(pc);
        let index = self.index(bucket);
        self.pht.train(index, actual);
        self.lhrs[bucket].push(actual);
    }

    fn name(&self) -> &'static str {
        if E::BITS == 1 {
            PredictorKind::LocalOneBit.tag()
        } else {
            PredictorKind::LocalTwoBit.tag()
        }
    }
}
