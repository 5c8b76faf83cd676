//! General backtracking synthesis.
//!
//! Works for any palette size, at the cost of search. Tiles are ordered by
//! descending distinct-color requirement (tri, then bi, then mono) so the
//! most constrained picks happen while supply is still plentiful. Each
//! tile draws a handful of weighted-without-replacement candidate color
//! sets for variety, falls back to the most abundant colors when the
//! supply cannot support a weighted draw, and recurses depth-first,
//! restoring counts on failure.
//!
//! The search is bounded by a global backtrack budget and fails rather
//! than looping unboundedly.

use tracing::trace;

use crate::color::ColorId;
use crate::combo::{Combo, ComboKind, TypeQuota};
use crate::rng::{shuffle, weighted_index, UnitRng};
use crate::{Result, SynthesisError};

/// Global bound on failed candidate explorations.
const BACKTRACK_LIMIT: u32 = 10_000;

/// Candidate color sets sampled per tile before deduplication.
const SAMPLE_ROUNDS: usize = 3;

/// Synthesize one combo per tile from type and unit quotas, for a palette
/// of `units.len()` colors.
///
/// The result is ordered tri → bi → mono (the search order). Consumes
/// `rng` draws per tile for candidate sampling and candidate-order
/// shuffling; equal seeds produce identical output.
pub fn synthesize_backtracking(
    quota: &TypeQuota,
    units: &[u32],
    rng: &mut impl UnitRng,
) -> Result<Vec<Combo>> {
    let supplied: u32 = units.iter().sum();
    if supplied != quota.unit_total() {
        return Err(SynthesisError::UnitMismatch {
            expected: quota.unit_total(),
            actual: supplied,
        });
    }
    let needed = if quota.tri > 0 {
        3
    } else if quota.bi > 0 {
        2
    } else {
        1
    };
    if quota.total() > 0 && units.len() < needed {
        return Err(SynthesisError::PaletteTooSmall {
            colors: units.len(),
            needed,
        });
    }

    // Most-constrained first: tiles needing more distinct colors go early.
    let mut kinds = Vec::with_capacity(quota.total() as usize);
    kinds.extend(std::iter::repeat(ComboKind::Tri).take(quota.tri as usize));
    kinds.extend(std::iter::repeat(ComboKind::Bi).take(quota.bi as usize));
    kinds.extend(std::iter::repeat(ComboKind::Mono).take(quota.mono as usize));

    let mut supply = units.to_vec();
    let mut combos = Vec::with_capacity(kinds.len());
    let mut budget = BACKTRACK_LIMIT;

    if fill(&kinds, &mut supply, &mut combos, &mut budget, rng)? {
        debug_assert!(supply.iter().all(|&u| u == 0));
        Ok(combos)
    } else {
        Err(SynthesisError::SearchExhausted)
    }
}

/// Assign combos for `kinds[combos.len()..]`, depth-first.
fn fill(
    kinds: &[ComboKind],
    supply: &mut [u32],
    combos: &mut Vec<Combo>,
    budget: &mut u32,
    rng: &mut impl UnitRng,
) -> Result<bool> {
    let Some(&kind) = kinds.get(combos.len()) else {
        return Ok(true);
    };

    for candidate in candidates(kind, supply, rng) {
        let Some(combo) = consume(kind, &candidate, supply) else {
            continue;
        };
        combos.push(combo);
        if fill(kinds, supply, combos, budget, rng)? {
            return Ok(true);
        }
        let undone = combos.pop();
        restore(undone.as_ref(), supply);

        if *budget == 0 {
            return Err(SynthesisError::BacktrackLimit {
                limit: BACKTRACK_LIMIT,
            });
        }
        *budget -= 1;
        trace!(depth = combos.len(), ?kind, "backtracking");
    }

    Ok(false)
}

/// Candidate color sets for a tile: a few weighted samples for variety,
/// the most-abundant fallback when sampling fails, shuffled into a random
/// trial order.
fn candidates(kind: ComboKind, supply: &[u32], rng: &mut impl UnitRng) -> Vec<Vec<usize>> {
    let k = match kind {
        ComboKind::Mono => 1,
        ComboKind::Bi => 2,
        ComboKind::Tri => 3,
    };

    let mut sets = Vec::with_capacity(SAMPLE_ROUNDS + 1);
    for _ in 0..SAMPLE_ROUNDS {
        match weighted_distinct(supply, k, rng) {
            Some(set) => sets.push(set),
            None => {
                if let Some(fallback) = most_abundant(supply, k) {
                    sets.push(fallback);
                }
                break;
            }
        }
    }
    sets.dedup();
    shuffle(&mut sets, rng);
    sets
}

/// Draw `k` distinct colors weighted by remaining supply, or `None` when
/// fewer than `k` colors have any supply left.
fn weighted_distinct(supply: &[u32], k: usize, rng: &mut impl UnitRng) -> Option<Vec<usize>> {
    let mut pool = supply.to_vec();
    let mut picks = Vec::with_capacity(k);
    for _ in 0..k {
        let choice = weighted_index(&pool, rng)?;
        picks.push(choice);
        pool[choice] = 0;
    }
    Some(picks)
}

/// The `k` colors with the most supply, ties broken by palette order, or
/// `None` when the k-th has none left.
fn most_abundant(supply: &[u32], k: usize) -> Option<Vec<usize>> {
    let mut order: Vec<usize> = (0..supply.len()).collect();
    order.sort_by_key(|&c| std::cmp::Reverse(supply[c]));
    order.truncate(k);
    if order.len() < k || supply[order[k - 1]] == 0 {
        return None;
    }
    Some(order)
}

/// Deduct a candidate's units from the supply and build its combo, or
/// `None` when the supply cannot cover it.
fn consume(kind: ComboKind, candidate: &[usize], supply: &mut [u32]) -> Option<Combo> {
    match kind {
        ComboKind::Mono => {
            let c = candidate[0];
            if supply[c] < 3 {
                return None;
            }
            supply[c] -= 3;
            Some(Combo::mono(ColorId(c as u8)))
        }
        ComboKind::Bi => {
            let (major, minor) = (candidate[0], candidate[1]);
            if supply[major] < 2 || supply[minor] < 1 {
                return None;
            }
            supply[major] -= 2;
            supply[minor] -= 1;
            Some(Combo::bi(ColorId(major as u8), ColorId(minor as u8)))
        }
        ComboKind::Tri => {
            if candidate.iter().any(|&c| supply[c] < 1) {
                return None;
            }
            for &c in candidate {
                supply[c] -= 1;
            }
            Some(Combo::tri([
                ColorId(candidate[0] as u8),
                ColorId(candidate[1] as u8),
                ColorId(candidate[2] as u8),
            ]))
        }
    }
}

/// Give a popped combo's units back to the supply.
fn restore(combo: Option<&Combo>, supply: &mut [u32]) {
    if let Some(combo) = combo {
        for (color, units) in combo.color_units() {
            supply[color.index()] += units as u32;
        }
    }
}
