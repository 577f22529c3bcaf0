//! Trace-driven simulation.
//!
//! Drives one predictor over a stream of resolved branches and collects
//! accuracy statistics. Trace files are the driver's concern; this module
//! consumes branches already in memory.

/// A resolved branch as presented to the predictor.
pub mod record;
/// Simulator owning one predictor and its statistics.
pub mod simulator;

pub use self::record::BranchRecord;
pub use self::simulator::Simulator;
