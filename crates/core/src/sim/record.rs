//! Branch record.

use crate::common::{BranchMetadata, Direction};

/// One dynamic execution of a conditional branch: where it is and which way it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchRecord {
    /// Address of the branch instruction.
    pub pc: u32,
    /// The resolved direction.
    pub outcome: Direction,
}

impl BranchRecord {
    /// Creates a record for the branch at `pc` resolving to `outcome`.
    pub const fn new(pc: u32, outcome: Direction) -> Self {
        Self { pc, outcome }
    }

    /// Returns the static metadata of the branch this record executes.
    pub const fn metadata(self) -> BranchMetadata {
        BranchMetadata::new(self.pc)
    }
}

impl From<(u32, Direction)> for BranchRecord {
    fn from((pc, outcome): (u32, Direction)) -> Self {
        Self::new(pc, outcome)
    }
}

impl From<(u32, bool)> for BranchRecord {
    fn from((pc, taken): (u32, bool)) -> Self {
        Self::new(pc, Direction::from(taken))
    }
}
