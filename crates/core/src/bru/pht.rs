//! Pattern History Table.
//!
//! A PHT maps a history pattern to the direction tendency observed after it.
//! Entries are either a raw [`Direction`] (1-bit PHT, overwritten on every
//! update) or a [`SaturatingCounter`] (2-bit PHT, nudged toward the outcome).
//! Tables are sized once at construction and never resized.

use crate::bru::counter::SaturatingCounter;
use crate::common::Direction;
use crate::common::error::{Error, Result};

/// An entry stored in a pattern history table.
pub trait PhtEntry: Copy + Default {
    /// Storage width of one entry in bits.
    const BITS: u32;

    /// Direction predicted by this entry.
    fn direction(&self) -> Direction;

    /// Trains this entry with a resolved outcome.
    fn train(&mut self, actual: Direction);
}

/// 1-bit entry: remembers the last outcome seen.
impl PhtEntry for Direction {
    const BITS: u32 = 1;

    #[inline(always)]
    fn direction(&self) -> Direction {
        *self
    }

    #[inline(always)]
    fn train(&mut self, actual: Direction) {
        *self = actual;
    }
}

/// 2-bit entry: saturating confidence counter.
impl PhtEntry for SaturatingCounter {
    const BITS: u32 = 2;

    #[inline(always)]
    fn direction(&self) -> Direction {
        Self::direction(*self)
    }

    #[inline(always)]
    fn train(&mut self, actual: Direction) {
        match actual {
            Direction::Taken => self.increment(),
            Direction::NotTaken => self.decrement(),
        }
    }
}

/// A fixed-size table of [`PhtEntry`] values, initialised to not-taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHistoryTable<E> {
    table: Vec<E>,
}

impl<E: PhtEntry> PatternHistoryTable<E> {
    /// Allocates a table of `entries` default (not-taken) entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the storage cannot be reserved.
    pub fn new(entries: usize) -> Result<Self> {
        let mut table = Vec::new();
        table
            .try_reserve_exact(entries)
            .map_err(|source| Error::Allocation { entries, source })?;
        table.resize(entries, E::default());
        Ok(Self { table })
    }

    /// Returns the number of entries.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the entry at `index`.
    #[inline(always)]
    pub fn entry(&self, index: usize) -> &E {
        &self.table[index]
    }

    /// Returns every entry in index order.
    pub fn entries(&self) -> &[E] {
        &self.table
    }

    /// Returns the direction predicted by the entry at `index`.
    #[inline(always)]
    pub fn predict(&self, index: usize) -> Direction {
        self.table[index].direction()
    }

    /// Trains the entry at `index` with a resolved outcome.
    #[inline(always)]
    pub fn train(&mut self, index: usize, actual: Direction) {
        self.table[index].train(actual);
    }
}
