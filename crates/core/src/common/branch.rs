//! Static branch metadata.

/// Per-branch static information supplied when a predictor is constructed.
///
/// None of the predictors index state by branch identity; the metadata is
/// accepted so drivers can hand over their branch population unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BranchMetadata {
    /// Address of the branch instruction.
    pub address: u32,
}

impl BranchMetadata {
    /// Creates metadata for the branch at `address`.
    pub const fn new(address: u32) -> Self {
        Self { address }
    }
}

impl From<u32> for BranchMetadata {
    fn from(address: u32) -> Self {
        Self::new(address)
    }
}
