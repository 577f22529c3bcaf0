//! Static Predictor Tests.
//!
//! ANT and AT must ignore every input; BTFNT must compare against the most
//! recently *updated* address and never look at outcomes.

use bpsim_core::bru::BranchPredictor;
use bpsim_core::bru::static_bp::{AlwaysNotTakenPredictor, AlwaysTakenPredictor, BtfntPredictor};
use proptest::prelude::*;

use crate::common::{N, T, arb_stream, feed_stream};

// ══════════════════════════════════════════════════════════
// 1. Always Not Taken / Always Taken
// ══════════════════════════════════════════════════════════

#[test]
fn ant_predicts_not_taken() {
    let bp = AlwaysNotTakenPredictor;
    assert_eq!(bp.predict_branch(0), N);
    assert_eq!(bp.predict_branch(0x1000), N);
    assert_eq!(bp.predict_branch(u32::MAX), N);
}

#[test]
fn at_predicts_taken() {
    let bp = AlwaysTakenPredictor;
    assert_eq!(bp.predict_branch(0), T);
    assert_eq!(bp.predict_branch(0x1000), T);
    assert_eq!(bp.predict_branch(u32::MAX), T);
}

proptest! {
    #[test]
    fn ant_ignores_any_stream(stream in arb_stream(200)) {
        let mut bp = AlwaysNotTakenPredictor;
        let predictions = feed_stream(&mut bp, &stream);
        prop_assert!(predictions.iter().all(|&p| p == N));
    }

    #[test]
    fn at_ignores_any_stream(stream in arb_stream(200)) {
        let mut bp = AlwaysTakenPredictor;
        let predictions = feed_stream(&mut bp, &stream);
        prop_assert!(predictions.iter().all(|&p| p == T));
    }
}

// ══════════════════════════════════════════════════════════
// 2. BTFNT
// ══════════════════════════════════════════════════════════

#[test]
fn btfnt_first_prediction_is_taken() {
    let bp = BtfntPredictor::new();
    assert_eq!(bp.last_pc(), None);
    assert_eq!(bp.predict_branch(0x1000), T);
    assert_eq!(bp.predict_branch(0), T);
}

#[test]
fn btfnt_backward_taken_forward_not_taken() {
    let mut bp = BtfntPredictor::new();
    bp.update_branch(0x1000, N);
    assert_eq!(bp.last_pc(), Some(0x1000));

    assert_eq!(bp.predict_branch(0x0ffc), T, "backward branch");
    assert_eq!(bp.predict_branch(0x1000), N, "same address is not backward");
    assert_eq!(bp.predict_branch(0x1004), N, "forward branch");
}

#[test]
fn btfnt_address_extremes() {
    let mut bp = BtfntPredictor::new();
    assert_eq!(bp.predict_branch(u32::MAX), T);

    bp.update_branch(0, T);
    assert_eq!(bp.predict_branch(0), N, "nothing lies below address 0");
    assert_eq!(bp.predict_branch(u32::MAX), N);

    bp.update_branch(u32::MAX, T);
    assert_eq!(bp.predict_branch(u32::MAX - 1), T);
    assert_eq!(bp.predict_branch(u32::MAX), N);
}

#[test]
fn btfnt_ignores_outcome() {
    let mut a = BtfntPredictor::new();
    let mut b = BtfntPredictor::new();
    a.update_branch(0x2000, T);
    b.update_branch(0x2000, N);
    assert_eq!(a.last_pc(), b.last_pc());
    assert_eq!(a.predict_branch(0x1000), b.predict_branch(0x1000));
}

#[test]
fn btfnt_compares_against_last_update_not_last_prediction() {
    let mut bp = BtfntPredictor::new();
    bp.update_branch(0x3000, T);
    // Predictions alone must not move the reference address.
    assert_eq!(bp.predict_branch(0x1000), T);
    assert_eq!(bp.predict_branch(0x5000), N);
    assert_eq!(bp.predict_branch(0x2000), T);
    assert_eq!(bp.last_pc(), Some(0x3000));
}

proptest! {
    /// After updating with A, predicting B is taken iff B < A.
    #[test]
    fn btfnt_taken_iff_below_last_update(
        stream in arb_stream(64),
        a in any::<u32>(),
        b in any::<u32>(),
    ) {
        let mut bp = BtfntPredictor::new();
        let _ = feed_stream(&mut bp, &stream);
        bp.update_branch(a, N);
        prop_assert_eq!(bp.predict_branch(b).is_taken(), b < a);
    }
}
