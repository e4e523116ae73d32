//! Random proper triangles (replayable).
//!
//! Model
//! - Draw three angles by splitting `π` at two uniform cut points, rejecting
//!   draws where any angle falls below `min_angle`.
//! - Draw side `a` uniformly from `side_a`, then complete via AAS.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a sweep can be regenerated without replaying `0..k`.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::solve::{Triangle, TrigCfg};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Range for side `a` (clamped to positive values).
    pub side_a: (f64, f64),
    /// Lower bound on every angle. Clamped to `[0, π/3)`.
    pub min_angle: f64,
    /// Rejection attempts before giving up.
    pub max_attempts: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            side_a: (0.5, 2.0),
            min_angle: 0.05,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a proper triangle, or `None` if every attempt was rejected or the
/// `side_a` range is not finite.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Option<Triangle> {
    if !(cfg.side_a.0.is_finite() && cfg.side_a.1.is_finite()) {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let min_angle = cfg.min_angle.clamp(0.0, PI / 3.0 - 1e-9);
    let lo = cfg.side_a.0.max(1e-9);
    let hi = cfg.side_a.1.max(lo);
    for _ in 0..cfg.max_attempts.max(1) {
        let u: f64 = rng.gen();
        let v: f64 = rng.gen();
        let (p, q) = if u <= v { (u, v) } else { (v, u) };
        let angle_a = p * PI;
        let angle_b = (q - p) * PI;
        let angle_c = (1.0 - q) * PI;
        if angle_a < min_angle || angle_b < min_angle || angle_c < min_angle {
            continue;
        }
        let a = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        if let Ok(t) = Triangle::from_aas(a, angle_a, angle_b, TrigCfg::default()) {
            return Some(t);
        }
    }
    None
}
