//! Two-bit saturating counter.
//!
//! The counter is the arithmetic primitive behind the 2-bit pattern history
//! tables. States 0 and 1 predict not-taken, states 2 and 3 predict taken.

use crate::common::Direction;

/// Highest counter state (strongly taken).
pub const COUNTER_MAX: u8 = 3;

/// Counter states strictly above this value predict taken.
const TAKEN_THRESHOLD: u8 = 1;

/// A 2-bit saturating counter holding a value in `[0, 3]`.
///
/// `increment`, `decrement`, and construction are the only ways to change
/// the value, so it can never leave that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SaturatingCounter(u8);

impl SaturatingCounter {
    /// Creates a counter in state 0 (strongly not-taken).
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns the current counter state.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Moves one step toward taken, saturating at 3.
    #[inline(always)]
    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(COUNTER_MAX);
    }

    /// Moves one step toward not-taken, saturating at 0.
    #[inline(always)]
    pub const fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Returns the predicted direction: taken iff the state is above 1.
    #[inline(always)]
    pub const fn direction(self) -> Direction {
        if self.0 > TAKEN_THRESHOLD {
            Direction::Taken
        } else {
            Direction::NotTaken
        }
    }
}
