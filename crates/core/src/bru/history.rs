//! Branch history register.
//!
//! A fixed-width shift register of recent outcomes, newest in bit 0. Global
//! predictors keep one 5-bit register; local predictors keep one 4-bit
//! register per address bucket.

use std::fmt;

use crate::common::Direction;
use crate::config::defaults;

/// Global history register used by the two-level global predictors.
pub type GlobalHistory = HistoryRegister<{ defaults::GLOBAL_HISTORY_BITS }>;

/// Per-bucket history register used by the two-level local predictors.
pub type LocalHistory = HistoryRegister<{ defaults::LOCAL_HISTORY_BITS }>;

/// A `BITS`-wide outcome history. The value is always in `[0, 2^BITS)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HistoryRegister<const BITS: u32> {
    value: u32,
}

impl<const BITS: u32> HistoryRegister<BITS> {
    const WIDTH_OK: () = assert!(BITS > 0 && BITS < u32::BITS, "history width out of range");

    /// Mask covering every bit of the register.
    pub const MASK: u32 = (1 << BITS) - 1;

    /// Bits that survive a shift (all but the oldest).
    const KEEP: u32 = Self::MASK >> 1;

    /// Number of distinct history values (`2^BITS`).
    pub const STATES: usize = 1 << BITS;

    /// Creates an all-zero (all not-taken) history.
    pub const fn new() -> Self {
        let () = Self::WIDTH_OK;
        Self { value: 0 }
    }

    /// Returns the raw history bits.
    #[inline(always)]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Returns the history as a table index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.value as usize
    }

    /// Shifts in the newest outcome.
    ///
    /// The oldest bit is dropped, the remaining bits move up by one, and the
    /// outcome bit lands in bit 0.
    #[inline(always)]
    pub const fn push(&mut self, outcome: Direction) {
        self.value = ((self.value & Self::KEEP) << 1) | outcome.bit();
    }

    /// Clears the history back to all not-taken.
    pub const fn clear(&mut self) {
        self.value = 0;
    }
}

impl<const BITS: u32> fmt::Display for HistoryRegister<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = BITS as usize)
    }
}
