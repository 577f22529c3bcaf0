//! Branch direction.
//!
//! A conditional branch resolves to exactly one of two directions. The same
//! type is used for predictions, resolved outcomes, and the entries of a
//! 1-bit pattern history table.

use std::fmt;
use std::ops::Not;

/// Outcome of a conditional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The branch falls through to the next sequential instruction.
    #[default]
    NotTaken,
    /// The branch redirects control flow to its target.
    Taken,
}

impl Direction {
    /// Returns the bit shifted into a history register for this outcome.
    #[inline(always)]
    pub const fn bit(self) -> u32 {
        match self {
            Self::NotTaken => 0,
            Self::Taken => 1,
        }
    }

    /// Returns `true` for [`Direction::Taken`].
    #[inline(always)]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl From<bool> for Direction {
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Direction> for bool {
    fn from(dir: Direction) -> Self {
        dir.is_taken()
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::NotTaken => Self::Taken,
            Self::Taken => Self::NotTaken,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTaken => write!(f, "NOT_TAKEN"),
            Self::Taken => write!(f, "TAKEN"),
        }
    }
}
