//! Percentage-to-integer apportionment.
//!
//! Converts a weight (percentage) vector into integer counts that sum to a
//! requested total exactly, using the largest-remainder (Hamilton) method:
//! scale, floor, then hand out the leftover units to the entries with the
//! largest fractional remainders, ties broken by array order.
//!
//! The capped variant additionally enforces per-entry ceilings. Ceilings
//! are a hard constraint: the caller must guarantee that the caps can
//! absorb the total, otherwise the allocation fails up front.
//!
//! Both functions are pure and allocate only their result vector.

use thiserror::Error;

/// Result type for apportionment operations.
pub type Result<T> = std::result::Result<T, ApportionError>;

/// Errors that can occur while apportioning.
#[derive(Debug, Error, PartialEq)]
pub enum ApportionError {
    /// The weight vector sums to zero or less, so shares are undefined.
    #[error("weights sum to {sum}, cannot apportion {total} units")]
    NonPositiveSum { total: u32, sum: f64 },

    /// A weight entry is negative.
    #[error("negative weight {weight} at index {index}")]
    NegativeWeight { index: usize, weight: f64 },

    /// Weights and caps differ in length.
    #[error("weights ({weights}) and caps ({caps}) differ in length")]
    LengthMismatch { weights: usize, caps: usize },

    /// The capacity ceilings cannot absorb the requested total.
    #[error("capacity exceeded: caps absorb at most {capacity}, need {total}")]
    CapacityExceeded { total: u32, capacity: u64 },
}

/// Apportion `total` units across entries proportionally to `weights`.
///
/// Postcondition: the result sums to `total` exactly, and every entry is
/// within one unit of its unrounded proportional share.
pub fn largest_remainder(total: u32, weights: &[f64]) -> Result<Vec<u32>> {
    let raw = proportional_shares(total, weights)?;

    let mut counts: Vec<u32> = raw.iter().map(|&share| share as u32).collect();
    let assigned: u32 = counts.iter().sum();

    let order = remainder_order(&raw);
    for &i in order.iter().take((total - assigned) as usize) {
        counts[i] += 1;
    }

    debug_assert_eq!(counts.iter().sum::<u32>(), total);
    Ok(counts)
}

/// Apportion `total` units across entries proportionally to `weights`,
/// never exceeding `caps[i]` for entry `i`.
///
/// The floor allocation is clamped to the caps; the remainder pass hands
/// one unit to each largest-remainder entry with spare capacity; anything
/// still left is pushed greedily into spare capacity in ascending index
/// order. Fails with [`ApportionError::CapacityExceeded`] when the caps
/// sum below `total`; that precondition is the caller's to guarantee.
pub fn largest_remainder_capped(total: u32, weights: &[f64], caps: &[u32]) -> Result<Vec<u32>> {
    if weights.len() != caps.len() {
        return Err(ApportionError::LengthMismatch {
            weights: weights.len(),
            caps: caps.len(),
        });
    }
    let capacity: u64 = caps.iter().map(|&c| c as u64).sum();
    if capacity < total as u64 {
        return Err(ApportionError::CapacityExceeded { total, capacity });
    }
    if total == 0 {
        return Ok(vec![0; weights.len()]);
    }

    let raw = proportional_shares(total, weights)?;

    let mut counts: Vec<u32> = raw
        .iter()
        .zip(caps)
        .map(|(&share, &cap)| (share as u32).min(cap))
        .collect();

    let mut left = total - counts.iter().sum::<u32>();

    // One unit per largest-remainder entry that still has headroom.
    for &i in &remainder_order(&raw) {
        if left == 0 {
            break;
        }
        if counts[i] < caps[i] {
            counts[i] += 1;
            left -= 1;
        }
    }

    // Whatever remains goes into spare capacity, lowest index first.
    for i in 0..counts.len() {
        if left == 0 {
            break;
        }
        let spare = (caps[i] - counts[i]).min(left);
        counts[i] += spare;
        left -= spare;
    }

    debug_assert_eq!(left, 0);
    debug_assert_eq!(counts.iter().sum::<u32>(), total);
    Ok(counts)
}

/// Unrounded proportional share of `total` per entry.
fn proportional_shares(total: u32, weights: &[f64]) -> Result<Vec<f64>> {
    for (index, &weight) in weights.iter().enumerate() {
        if weight < 0.0 {
            return Err(ApportionError::NegativeWeight { index, weight });
        }
    }
    let sum: f64 = weights.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return Err(ApportionError::NonPositiveSum { total, sum });
    }
    let scale = total as f64 / sum;
    Ok(weights.iter().map(|&w| w * scale).collect())
}

/// Indices sorted by descending fractional remainder; the stable sort
/// leaves ties in array order.
fn remainder_order(raw: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = raw[a] - raw[a].floor();
        let fb = raw[b] - raw[b].floor();
        fb.total_cmp(&fa)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_split() {
        let counts = largest_remainder(10, &[50.0, 50.0]).unwrap();
        assert_eq!(counts, vec![5, 5]);
    }

    #[test]
    fn remainders_go_to_largest_fractions() {
        // Shares: 3.3, 3.3, 3.4 -> floors 3,3,3, leftover 1 goes to index 2.
        let counts = largest_remainder(10, &[33.0, 33.0, 34.0]).unwrap();
        assert_eq!(counts, vec![3, 3, 4]);
    }

    #[test]
    fn ties_break_by_array_order() {
        // Shares: 2.5, 2.5, 2.5, 2.5 -> two leftovers go to indices 0 and 1.
        let counts = largest_remainder(10, &[25.0, 25.0, 25.0, 25.0]).unwrap();
        assert_eq!(counts, vec![3, 3, 2, 2]);
    }

    #[test]
    fn weights_need_not_sum_to_one_hundred() {
        let counts = largest_remainder(9, &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(counts, vec![3, 3, 3]);
    }

    #[test]
    fn zero_total_is_all_zeros() {
        let counts = largest_remainder(0, &[10.0, 90.0]).unwrap();
        assert_eq!(counts, vec![0, 0]);
    }

    #[test]
    fn zero_sum_is_rejected() {
        let err = largest_remainder(5, &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ApportionError::NonPositiveSum { total: 5, .. }));
    }

    #[test]
    fn empty_weights_are_rejected() {
        assert!(largest_remainder(5, &[]).is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = largest_remainder(5, &[60.0, -10.0]).unwrap_err();
        assert_eq!(
            err,
            ApportionError::NegativeWeight {
                index: 1,
                weight: -10.0
            }
        );
    }

    #[test]
    fn caps_are_respected() {
        let counts = largest_remainder_capped(10, &[90.0, 5.0, 5.0], &[4, 10, 10]).unwrap();
        assert_eq!(counts.iter().sum::<u32>(), 10);
        assert!(counts[0] <= 4);
    }

    #[test]
    fn spill_goes_to_lowest_spare_index() {
        // Index 0 wants everything but is capped at 2; the overflow lands
        // on index 1 first.
        let counts = largest_remainder_capped(6, &[100.0, 0.0, 0.0], &[2, 3, 3]).unwrap();
        assert_eq!(counts, vec![2, 3, 1]);
    }

    #[test]
    fn insufficient_capacity_is_rejected() {
        let err = largest_remainder_capped(10, &[50.0, 50.0], &[4, 4]).unwrap_err();
        assert_eq!(
            err,
            ApportionError::CapacityExceeded {
                total: 10,
                capacity: 8
            }
        );
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = largest_remainder_capped(4, &[50.0, 50.0], &[4]).unwrap_err();
        assert_eq!(
            err,
            ApportionError::LengthMismatch {
                weights: 2,
                caps: 1
            }
        );
    }

    #[test]
    fn tight_capacity_fills_every_cap() {
        let counts = largest_remainder_capped(9, &[10.0, 10.0, 80.0], &[3, 3, 3]).unwrap();
        assert_eq!(counts, vec![3, 3, 3]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sums_exactly_to_total(
                total in 0u32..500,
                weights in proptest::collection::vec(0.0f64..100.0, 1..8),
            ) {
                prop_assume!(weights.iter().sum::<f64>() > 0.0);
                let counts = largest_remainder(total, &weights).unwrap();
                prop_assert_eq!(counts.iter().sum::<u32>(), total);
            }

            #[test]
            fn within_one_of_proportional_share(
                total in 0u32..500,
                weights in proptest::collection::vec(0.0f64..100.0, 1..8),
            ) {
                let sum: f64 = weights.iter().sum();
                prop_assume!(sum > 0.0);
                let counts = largest_remainder(total, &weights).unwrap();
                for (count, weight) in counts.iter().zip(&weights) {
                    let share = weight / sum * total as f64;
                    prop_assert!((*count as f64 - share).abs() < 1.0 + 1e-9);
                }
            }

            #[test]
            fn capped_respects_caps_and_total(
                total in 0u32..200,
                entries in proptest::collection::vec((0.0f64..100.0, 0u32..100), 1..8),
            ) {
                let weights: Vec<f64> = entries.iter().map(|e| e.0).collect();
                let caps: Vec<u32> = entries.iter().map(|e| e.1).collect();
                prop_assume!(weights.iter().sum::<f64>() > 0.0);
                prop_assume!(caps.iter().map(|&c| c as u64).sum::<u64>() >= total as u64);

                let counts = largest_remainder_capped(total, &weights, &caps).unwrap();
                prop_assert_eq!(counts.iter().sum::<u32>(), total);
                for (count, cap) in counts.iter().zip(&caps) {
                    prop_assert!(count <= cap);
                }
            }
        }
    }
}
