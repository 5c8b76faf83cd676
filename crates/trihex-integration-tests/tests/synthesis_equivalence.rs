//! Equivalence checks between the two synthesis strategies.
//!
//! The cascading and backtracking variants solve the same assignment
//! problem; on shared 4-color inputs they must agree on everything the
//! quotas pin down (per-type counts and per-color unit totals) even
//! though the concrete tuples may differ.

use trihex_apportion::largest_remainder;
use trihex_combo::{
    synthesize_backtracking, synthesize_cascade, unit_tally, Combo, ComboKind, TypeQuota,
    XorShift32,
};

fn kind_counts(combos: &[Combo]) -> (u32, u32, u32) {
    let mut counts = (0, 0, 0);
    for combo in combos {
        match combo.kind() {
            ComboKind::Mono => counts.0 += 1,
            ComboKind::Bi => counts.1 += 1,
            ComboKind::Tri => counts.2 += 1,
        }
    }
    counts
}

fn check_equivalence(quota: TypeQuota, units: [u32; 4], seed: u32) {
    let cascade = synthesize_cascade(&quota, &units, &mut XorShift32::seed(seed))
        .expect("cascade should solve a feasible quota");
    let backtrack = synthesize_backtracking(&quota, &units, &mut XorShift32::seed(seed))
        .expect("backtracking should solve a feasible quota");

    assert_eq!(cascade.len(), quota.total() as usize);
    assert_eq!(backtrack.len(), quota.total() as usize);
    assert_eq!(kind_counts(&cascade), (quota.mono, quota.bi, quota.tri));
    assert_eq!(kind_counts(&backtrack), (quota.mono, quota.bi, quota.tri));
    assert_eq!(unit_tally(&cascade, 4), units.to_vec());
    assert_eq!(unit_tally(&backtrack, 4), units.to_vec());
}

#[test]
fn equivalent_on_balanced_quotas() {
    let quota = TypeQuota::new(4, 3, 2);
    check_equivalence(quota, [7, 7, 7, 6], 17);
}

#[test]
fn equivalent_on_skewed_colors() {
    let quota = TypeQuota::new(5, 3, 1);
    check_equivalence(quota, [12, 8, 4, 3], 4);
}

#[test]
fn equivalent_on_board_sized_quotas() {
    // Quotas as the percentage pipeline would derive them for radius 2.
    let tiles = 19u32;
    let types = largest_remainder(tiles, &[50.0, 30.0, 20.0]).unwrap();
    let units_vec = largest_remainder(3 * tiles, &[30.0, 30.0, 25.0, 15.0]).unwrap();
    let mut units = [0u32; 4];
    units.copy_from_slice(&units_vec);

    check_equivalence(TypeQuota::new(types[0], types[1], types[2]), units, 8);
}

#[test]
fn equivalent_on_mono_only() {
    let quota = TypeQuota::new(7, 0, 0);
    check_equivalence(quota, [21, 0, 0, 0], 1);
}

#[test]
fn both_reject_a_unit_total_mismatch() {
    let quota = TypeQuota::new(1, 1, 1);
    let units = [4, 2, 2, 2]; // sums to 10, needs 9

    assert!(synthesize_cascade(&quota, &units, &mut XorShift32::seed(1)).is_err());
    assert!(synthesize_backtracking(&quota, &units, &mut XorShift32::seed(1)).is_err());
}
