//! Seeded random stream.
//!
//! The engine never owns entropy: the collaborator constructs a stream
//! from a 32-bit seed and passes it in. The number and order of draws a
//! synthesis run makes is part of the determinism contract, so the stream
//! is a plain explicit cursor with no global state.
//!
//! [`XorShift32`] is the documented concrete stream: the classic Marsaglia
//! xorshift with the 13/17/5 triple, mapped to `[0, 1)` by dividing by
//! 2^32. Tests substitute scripted [`UnitRng`] implementations.

/// A deterministic stream of floats in `[0, 1)`.
pub trait UnitRng {
    /// Next value of the stream. Advances the cursor by exactly one step.
    fn next_unit(&mut self) -> f64;
}

/// Marsaglia xorshift32 stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seed the stream. A zero seed (a fixed point of xorshift) is
    /// replaced with a nonzero constant so the stream always moves.
    pub const fn seed(seed: u32) -> Self {
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Next raw 32-bit state.
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl UnitRng for XorShift32 {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (1u64 << 32) as f64
    }
}

/// Fisher-Yates shuffle.
///
/// Consumes exactly `len - 1` draws for `len >= 2` and none otherwise;
/// callers depending on stream position can count on that.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl UnitRng) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// Draw an index weighted by `weights`, ignoring zero entries.
///
/// Consumes exactly one draw when any weight is positive, none otherwise.
/// Returns `None` when all weights are zero.
pub fn weighted_index(weights: &[u32], rng: &mut impl UnitRng) -> Option<usize> {
    let total: u64 = weights.iter().map(|&w| w as u64).sum();
    if total == 0 {
        return None;
    }
    let mut target = rng.next_unit() * total as f64;
    for (i, &w) in weights.iter().enumerate() {
        if w == 0 {
            continue;
        }
        target -= w as f64;
        if target < 0.0 {
            return Some(i);
        }
    }
    // Floating error pushed the target past the last positive entry.
    weights.iter().rposition(|&w| w > 0)
}
