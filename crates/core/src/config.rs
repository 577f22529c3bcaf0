//! Configuration system for the branch predictor simulator.
//!
//! This module defines the configuration structures used to select and size a
//! predictor run. It provides:
//! 1. **Defaults:** Fixed table geometry and baseline settings.
//! 2. **Structures:** General settings and predictor selection.
//! 3. **Enums:** The predictor kinds, named by their conventional short tags.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_path`)
//! or built with `Config::default()`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::{Error, Result};

/// Default configuration constants.
pub mod defaults {
    /// Width of the global history register in bits.
    pub const GLOBAL_HISTORY_BITS: u32 = 5;

    /// Number of entries in a global pattern history table (one per history value).
    pub const GLOBAL_PHT_SIZE: usize = 1 << GLOBAL_HISTORY_BITS;

    /// Width of each local history register in bits.
    pub const LOCAL_HISTORY_BITS: u32 = 4;

    /// Number of local history registers, selected by the low address bits.
    pub const LOCAL_BUCKETS: usize = 16;

    /// Mask selecting a local history bucket from a branch address.
    pub const LOCAL_BUCKET_MASK: u32 = LOCAL_BUCKETS as u32 - 1;

    /// Entries in each bucket's private slice of the local PHT.
    pub const LOCAL_SLICE_SIZE: usize = 1 << LOCAL_HISTORY_BITS;

    /// Number of entries in a local pattern history table (buckets x history values).
    pub const LOCAL_PHT_SIZE: usize = LOCAL_BUCKETS * LOCAL_SLICE_SIZE;

    /// Default branch population size.
    pub const BRANCH_COUNT: u32 = 0;

    // The local PHT is laid out as one 16-entry slice per bucket; both sides
    // are 4 bits wide and must change together.
    const _: () = assert!(LOCAL_BUCKETS == LOCAL_SLICE_SIZE);
}

/// Branch direction prediction algorithms.
///
/// Named by the conventional short tags `ANT`, `AT`, `BTFNT`, `LTG`, `LTL`,
/// `2BG`, `2BL`. JSON deserialization goes through [`FromStr`], so both accept
/// a tag in any ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PredictorKind {
    /// Always predict not-taken.
    #[default]
    AlwaysNotTaken,
    /// Always predict taken.
    AlwaysTaken,
    /// Backward-taken, forward-not-taken heuristic.
    Btfnt,
    /// Two-level global history with a 1-bit PHT.
    GlobalOneBit,
    /// Two-level local history with a 1-bit PHT.
    LocalOneBit,
    /// Two-level global history with 2-bit saturating counters.
    GlobalTwoBit,
    /// Two-level local history with 2-bit saturating counters.
    LocalTwoBit,
}

impl PredictorKind {
    /// Every predictor kind, in the conventional listing order.
    pub const ALL: [Self; 7] = [
        Self::AlwaysNotTaken,
        Self::AlwaysTaken,
        Self::Btfnt,
        Self::GlobalOneBit,
        Self::LocalOneBit,
        Self::GlobalTwoBit,
        Self::LocalTwoBit,
    ];

    /// Returns the short tag naming this predictor.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::AlwaysNotTaken => "ANT",
            Self::AlwaysTaken => "AT",
            Self::Btfnt => "BTFNT",
            Self::GlobalOneBit => "LTG",
            Self::LocalOneBit => "LTL",
            Self::GlobalTwoBit => "2BG",
            Self::LocalTwoBit => "2BL",
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PredictorKind {
    type Err = Error;

    /// Parses a predictor tag, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPredictor(s.to_owned()))
    }
}

impl TryFrom<String> for PredictorKind {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

/// Root configuration structure.
///
/// # Example
///
/// ```json
/// {
///     "general": { "trace_predictions": true },
///     "predictor": { "kind": "2BG", "branch_count": 128 }
/// }
/// ```
///
/// Every section and field is optional; omitted values take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Predictor selection and sizing
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the JSON is malformed or names an
    /// unknown predictor.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if its contents are not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Returns a default configuration running the given predictor.
    pub fn with_kind(kind: PredictorKind) -> Self {
        Self {
            predictor: PredictorConfig {
                kind,
                ..PredictorConfig::default()
            },
            ..Self::default()
        }
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every simulated branch
    #[serde(default)]
    pub trace_predictions: bool,
}

/// Predictor selection and branch population.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// Which prediction algorithm to build
    #[serde(default)]
    pub kind: PredictorKind,

    /// Number of static branches the driver will present
    #[serde(default = "PredictorConfig::default_branch_count")]
    pub branch_count: u32,
}

impl PredictorConfig {
    /// Returns the default branch population size.
    const fn default_branch_count() -> u32 {
        defaults::BRANCH_COUNT
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            kind: PredictorKind::default(),
            branch_count: defaults::BRANCH_COUNT,
        }
    }
}
