//! Error definitions.
//!
//! Prediction and update are total over every `u32` address, so errors only
//! arise while building a predictor or loading its configuration:
//! 1. **Allocation:** Pattern history table storage could not be reserved.
//! 2. **Parsing:** An unknown predictor tag or malformed configuration JSON.
//! 3. **I/O:** A configuration file could not be read.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported while constructing predictors or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Table storage for a predictor could not be reserved.
    ///
    /// No partially built predictor is returned when this occurs.
    #[error("failed to allocate a {entries}-entry pattern history table")]
    Allocation {
        /// Number of entries requested.
        entries: usize,
        /// Underlying reservation failure.
        #[source]
        source: TryReserveError,
    },

    /// A predictor tag did not name any known predictor.
    #[error("unknown branch predictor `{0}` (expected one of ANT, AT, BTFNT, LTG, LTL, 2BG, 2BL)")]
    UnknownPredictor(String),

    /// Configuration JSON could not be deserialized.
    #[error("invalid predictor configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
