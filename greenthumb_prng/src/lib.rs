// Seeded random stream for herbalism skill rolls.
//
// xoshiro256++ (Blackman & Vigna, 2019) whose 256-bit state is expanded from
// a single `u64` seed with SplitMix64. Written out by hand so the stream is
// bit-identical on every platform and survives a JSON save/load cycle.
//
// `greenthumb_herbalism` re-exports this crate as `prng`; its
// `SkillBonusDecider` draws every double-drop roll from a `HarvestRng` owned
// by `HerbalismState`.
//
// **Critical constraint: determinism.** Given the same state, every method
// returns the same value everywhere. The generator core is integer-only; the
// single float conversion (`next_f64`) uses an exact power-of-two divisor.

use serde::{Deserialize, Serialize};

/// Deterministic xoshiro256++ generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestRng {
    s: [u64; 4],
}

impl HarvestRng {
    /// Seed a generator. Equal seeds give equal streams.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let mut s = [0u64; 4];
        for word in &mut s {
            *word = splitmix64(&mut sm);
        }
        Self { s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = self.s;
        let result = s0.wrapping_add(s3).rotate_left(23).wrapping_add(s0);

        let t = s1 << 17;
        let s2 = s2 ^ s0;
        let s3 = s3 ^ s1;
        let s1 = s1 ^ s2;
        let s0 = s0 ^ s3;
        self.s = [s0, s1, s2 ^ t, s3.rotate_left(45)];

        result
    }

    /// Uniform `f64` in [0, 1) built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[low, high)`, rejection-sampled so small ranges
    /// carry no modulo bias.
    ///
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: empty range {low}..{high}");
        let span = high - low;
        let zone = span.wrapping_neg() % span;
        loop {
            let r = self.next_u64();
            if r >= zone {
                return low + r % span;
            }
        }
    }

    /// `true` with probability `p`. `p <= 0.0` never fires, `p >= 1.0`
    /// always does.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// SplitMix64 step, used only to expand the seed.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
