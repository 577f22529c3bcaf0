//! Common types shared by every predictor.
//!
//! This module provides:
//! 1. **Direction:** The two-valued branch outcome used as predictor input and output.
//! 2. **Branch metadata:** Static per-branch information handed to predictor constructors.
//! 3. **Errors:** The crate-wide error enum and result alias.

/// Static per-branch information.
pub mod branch;
/// Branch direction (taken / not-taken).
pub mod direction;
/// Error type for construction and configuration failures.
pub mod error;

pub use self::branch::BranchMetadata;
pub use self::direction::Direction;
