//! # Unit Components
//!
//! Tests for each module of the predictor crate, organised to mirror `src/`.



/// Unit tests for configuration defaults, parsing, and file loading.
pub mod config;
