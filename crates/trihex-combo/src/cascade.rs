//! Cascading-apportionment synthesis, specialized to the 4-color palette.
//!
//! Consumes the color-unit quota in three capped apportionment passes:
//!
//! 1. mono tiles (3 units each), capped by `units[c] / 3`;
//! 2. bi majors (2 units each), capped by the remainder `/ 2`;
//! 3. bi minors (1 unit each), bounded by the remaining supply.
//!
//! What survives the third pass is the tri pool: exactly 3 units per tri
//! tile. The pool must span at least three distinct colors; when a color
//! was drained to zero, single minor units are swapped back against the
//! most abundant tri color until it does. Concrete bi tuples come from
//! shuffling the major and minor multisets, with a bounded number of
//! random-swap repair rounds to clear same-color pairs; tri tuples are
//! picked greedily from the three most abundant pool colors.
//!
//! Every stage either succeeds exactly or fails with a descriptive error;
//! there is no partial output.

use tracing::debug;
use trihex_apportion::largest_remainder_capped;

use crate::color::{ColorId, PALETTE_COLORS};
use crate::combo::{Combo, TypeQuota};
use crate::rng::{shuffle, UnitRng};
use crate::{Result, SynthesisError};

/// Repair-round budget for clearing major/minor self-pairs.
const PAIRING_ROUNDS: u32 = 50;

/// Synthesize one combo per tile from type and unit quotas.
///
/// `units` must sum to exactly 3 units per tile. The result is grouped
/// mono → bi → tri; callers wanting positional variety shuffle it
/// themselves. Draws from `rng` in a fixed order: one shuffle of the
/// major list, one of the minor list, then one draw per self-pair repair
/// swap.
pub fn synthesize_cascade(
    quota: &TypeQuota,
    units: &[u32; PALETTE_COLORS],
    rng: &mut impl UnitRng,
) -> Result<Vec<Combo>> {
    let supplied: u32 = units.iter().sum();
    if supplied != quota.unit_total() {
        return Err(SynthesisError::UnitMismatch {
            expected: quota.unit_total(),
            actual: supplied,
        });
    }

    let mut remaining = *units;
    let mut combos = Vec::with_capacity(quota.total() as usize);

    // Pass 1: mono tiles swallow 3 units of one color apiece.
    let mono_counts = apportion_pass(quota.mono, &remaining, 3)?;
    for (color, &count) in mono_counts.iter().enumerate() {
        remaining[color] -= 3 * count;
        for _ in 0..count {
            combos.push(Combo::mono(ColorId(color as u8)));
        }
    }

    // Pass 2: bi majors take 2 units apiece from what is left.
    let major_counts = apportion_pass(quota.bi, &remaining, 2)?;
    for (color, &count) in major_counts.iter().enumerate() {
        remaining[color] -= 2 * count;
    }

    // Pass 3: bi minors take 1 unit apiece; the rest is the tri pool.
    let mut minor_counts = apportion_pass(quota.bi, &remaining, 1)?;
    let mut tri_pool = remaining;
    for (color, &count) in minor_counts.iter().enumerate() {
        tri_pool[color] -= count;
    }
    debug_assert_eq!(tri_pool.iter().sum::<u32>(), 3 * quota.tri);

    if quota.tri > 0 {
        widen_tri_pool(&mut tri_pool, &mut minor_counts)?;
    }

    debug!(
        mono = ?mono_counts,
        major = ?major_counts,
        minor = ?minor_counts,
        tri = ?tri_pool,
        "cascade allocation complete"
    );

    combos.extend(pair_bi_tiles(&major_counts, &minor_counts, rng)?);
    combos.extend(drain_tri_pool(tri_pool, quota.tri)?);

    debug_assert_eq!(combos.len(), quota.total() as usize);
    Ok(combos)
}

/// One capped largest-remainder pass: apportion `count` picks weighted by
/// the remaining units, each pick consuming `cost` units of its color.
fn apportion_pass(
    count: u32,
    remaining: &[u32; PALETTE_COLORS],
    cost: u32,
) -> Result<Vec<u32>> {
    let weights: Vec<f64> = remaining.iter().map(|&u| u as f64).collect();
    let caps: Vec<u32> = remaining.iter().map(|&u| u / cost).collect();
    if count == 0 {
        return Ok(vec![0; PALETTE_COLORS]);
    }
    Ok(largest_remainder_capped(count, &weights, &caps)?)
}

/// Ensure the tri pool spans at least 3 distinct colors by swapping single
/// minor units against the most abundant tri color.
fn widen_tri_pool(
    tri_pool: &mut [u32; PALETTE_COLORS],
    minor_counts: &mut Vec<u32>,
) -> Result<()> {
    loop {
        let distinct = tri_pool.iter().filter(|&&u| u > 0).count();
        if distinct >= 3 {
            return Ok(());
        }

        // A color missing from the pool but held as a minor unit can trade
        // places with one unit of the richest pool color.
        let incoming = (0..PALETTE_COLORS)
            .find(|&c| tri_pool[c] == 0 && minor_counts[c] > 0)
            .ok_or(SynthesisError::TriColorsUnavailable)?;
        let donor = (0..PALETTE_COLORS)
            .filter(|&c| tri_pool[c] > 1)
            .max_by_key(|&c| tri_pool[c])
            .ok_or(SynthesisError::TriColorsUnavailable)?;

        minor_counts[incoming] -= 1;
        tri_pool[incoming] += 1;
        tri_pool[donor] -= 1;
        minor_counts[donor] += 1;
        debug!(incoming, donor, "swapped minor unit into tri pool");
    }
}

/// Expand major/minor counts into concrete bi combos, pairing by shuffle.
///
/// Both multisets are shuffled once; any position left showing the same
/// color twice is then repaired by swapping its minor against a randomly
/// drawn position, for a bounded number of rounds. Re-shuffling the whole
/// minor list instead would almost never come up clean once the bi count
/// grows past a handful of tiles.
fn pair_bi_tiles(
    major_counts: &[u32],
    minor_counts: &[u32],
    rng: &mut impl UnitRng,
) -> Result<Vec<Combo>> {
    let mut majors = expand_counts(major_counts);
    let mut minors = expand_counts(minor_counts);
    debug_assert_eq!(majors.len(), minors.len());
    if majors.is_empty() {
        return Ok(Vec::new());
    }

    shuffle(&mut majors, rng);
    shuffle(&mut minors, rng);

    let mut rounds = 0;
    while majors.iter().zip(&minors).any(|(a, b)| a == b) {
        if rounds == PAIRING_ROUNDS {
            return Err(SynthesisError::PairingExhausted {
                attempts: PAIRING_ROUNDS,
            });
        }
        for i in 0..majors.len() {
            if majors[i] == minors[i] {
                let j = ((rng.next_unit() * majors.len() as f64) as usize)
                    .min(majors.len() - 1);
                minors.swap(i, j);
            }
        }
        rounds += 1;
    }

    Ok(majors
        .into_iter()
        .zip(minors)
        .map(|(major, minor)| Combo::bi(major, minor))
        .collect())
}

/// Greedily pick the three most abundant pool colors per tri tile, ties
/// broken by palette order.
fn drain_tri_pool(mut pool: [u32; PALETTE_COLORS], tri: u32) -> Result<Vec<Combo>> {
    let mut combos = Vec::with_capacity(tri as usize);
    for _ in 0..tri {
        let mut order: Vec<usize> = (0..PALETTE_COLORS).collect();
        order.sort_by_key(|&c| std::cmp::Reverse(pool[c]));
        let picks = [order[0], order[1], order[2]];
        if pool[picks[2]] == 0 {
            return Err(SynthesisError::TriColorsUnavailable);
        }
        for &c in &picks {
            pool[c] -= 1;
        }
        combos.push(Combo::tri(picks.map(|c| ColorId(c as u8))));
    }
    debug_assert!(pool.iter().all(|&u| u == 0));
    Ok(combos)
}

/// Expand per-color counts into a flat color list, palette order.
fn expand_counts(counts: &[u32]) -> Vec<ColorId> {
    counts
        .iter()
        .enumerate()
        .flat_map(|(color, &count)| std::iter::repeat(ColorId(color as u8)).take(count as usize))
        .collect()
}
