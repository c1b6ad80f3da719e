//! Seeded placements of regular polygons (random anchor, heading, side).
//!
//! Purpose
//! - Reproducible batches for property checks and benchmarks. Every draw is
//!   addressed by a replay token `(seed, index)`, so a single failing draw can be
//!   regenerated without replaying the whole sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::lit;
use crate::figure::{regular_vertices, RegularPolygon};
use crate::point::Point;
use crate::{FigureError, Scalar};

/// Sampling ranges (all in `f64`, converted on output).
#[derive(Clone, Copy, Debug)]
pub struct PlacementCfg {
    /// Anchors are drawn from `[-extent, extent]²`.
    pub extent: f64,
    pub side_min: f64,
    pub side_max: f64,
}

impl Default for PlacementCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            side_min: 0.5,
            side_max: 5.0,
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
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

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

/// One drawn placement: where the walk starts, which way it heads, how long a side is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub anchor: (f64, f64),
    pub start_angle: f64,
    pub side: f64,
}

impl Placement {
    pub fn vertices<T: Scalar>(&self, count: usize) -> Vec<Point<T>> {
        regular_vertices(
            count,
            Point::new(lit(self.anchor.0), lit(self.anchor.1)),
            lit(self.start_angle),
            lit(self.side),
        )
    }
}

pub fn draw_placement(cfg: PlacementCfg, tok: ReplayToken) -> Placement {
    let mut rng = tok.to_std_rng();
    let ext = cfg.extent.abs();
    let lo = cfg.side_min.max(1e-3);
    let hi = cfg.side_max.max(lo);
    let mut coord = || {
        if ext > 0.0 {
            rng.gen_range(-ext..=ext)
        } else {
            0.0
        }
    };
    let anchor = (coord(), coord());
    let start_angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let side = rng.gen_range(lo..=hi);
    Placement {
        anchor,
        start_angle,
        side,
    }
}

/// Draw and validate a regular `V`-gon.
pub fn draw_regular<T: Scalar, const V: usize>(
    cfg: PlacementCfg,
    tok: ReplayToken,
) -> Result<RegularPolygon<T, V>, FigureError> {
    RegularPolygon::new(draw_placement(cfg, tok).vertices(V))
}

/// `n` consecutive draws starting at `tok`.
pub fn draw_batch<T: Scalar, const V: usize>(
    cfg: PlacementCfg,
    tok: ReplayToken,
    n: usize,
) -> Result<Vec<RegularPolygon<T, V>>, FigureError> {
    let mut out = Vec::with_capacity(n);
    let mut t = tok;
    for _ in 0..n {
        out.push(draw_regular(cfg, t)?);
        t = t.next();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;
    use rand::rngs::StdRng;

    #[test]
    fn replay_is_deterministic() {
        let cfg = PlacementCfg::default();
        let a = draw_placement(cfg, ReplayToken::new(7, 3));
        let b = draw_placement(cfg, ReplayToken::new(7, 3));
        let c = draw_placement(cfg, ReplayToken::new(7, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn draws_respect_ranges_and_validate() {
        let cfg = PlacementCfg {
            extent: 3.0,
            side_min: 1.0,
            side_max: 2.0,
        };
        let batch = draw_batch::<f64, 7>(cfg, ReplayToken::new(2025, 0), 64).unwrap();
        assert_eq!(batch.len(), 64);
        for p in &batch {
            let v0 = p.vertex_at(0).unwrap();
            assert!(v0.x().abs() <= 3.0 && v0.y().abs() <= 3.0);
            assert!(p.side_length() >= 1.0 - 1e-9 && p.side_length() <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn seeded_side_equality_matches_congruence() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let side: f64 = rng.gen_range(0.5..20.0);
            let a = RegularPolygon::<f64, 6>::with_placement(
                Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
                rng.gen_range(-3.0..3.0),
                side,
            )
            .unwrap();
            let b = RegularPolygon::<f64, 6>::with_placement(Point::origin(), 0.0, side).unwrap();
            assert!(a == b);
        }
    }

    #[test]
    fn degenerate_cfg_is_clamped() {
        let cfg = PlacementCfg {
            extent: 0.0,
            side_min: -1.0,
            side_max: -2.0,
        };
        let p = draw_placement(cfg, ReplayToken::new(1, 1));
        assert_eq!(p.anchor, (0.0, 0.0));
        assert!(p.side > 0.0);
        assert!(draw_regular::<f32, 4>(cfg, ReplayToken::new(1, 1)).is_err());
    }
}
