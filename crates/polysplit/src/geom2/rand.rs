//! Seeded convex rings for property tests and benches.
//!
//! Vertices are placed on a rotated ellipse at sorted angles, one per equal
//! angular slot, so every draw is strictly convex without a hull pass. A
//! `(seed, index)` replay token makes each draw reproducible on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point2, Winding};

/// How many vertices a draw has.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Both semi-axes are drawn uniformly from `[lo, hi]`; equal bounds give a circle.
    pub semi_axes: (f64, f64),
    /// Smallest angular gap between neighbors, as a fraction of the slot width 2π/n.
    /// Clamped to [0, 0.9].
    pub min_gap_frac: f64,
    /// Rotate the ellipse by a random angle.
    pub rotate: bool,
    pub center: Point2,
    pub winding: Winding,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            semi_axes: (0.5, 1.5),
            min_gap_frac: 0.2,
            rotate: true,
            center: Point2::zeros(),
            winding: Winding::Clockwise,
        }
    }
}

/// Reproducible draw handle: the same token always yields the same ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub(crate) fn rng(self) -> StdRng {
        let salt = self.index.rotate_left(29).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        StdRng::seed_from_u64(self.seed ^ salt)
    }
}

/// Draw a strictly convex ring of at least three vertices in `cfg.winding` order.
pub fn draw_convex_ring(cfg: RingCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let (lo, hi) = cfg.semi_axes;
    let lo = lo.max(1e-9);
    let hi = hi.max(lo);
    let a = rng.gen_range(lo..=hi);
    let b = rng.gen_range(lo..=hi);
    let tilt = if cfg.rotate {
        rng.gen_range(0.0..std::f64::consts::TAU)
    } else {
        0.0
    };
    let (sin, cos) = tilt.sin_cos();

    let slot = std::f64::consts::TAU / n as f64;
    let spread = (1.0 - cfg.min_gap_frac.clamp(0.0, 0.9)) * slot;
    let mut ring: Vec<Point2> = (0..n)
        .map(|k| {
            let t = k as f64 * slot + rng.gen::<f64>() * spread;
            let (x, y) = (a * t.cos(), b * t.sin());
            cfg.center + Point2::new(cos * x - sin * y, sin * x + cos * y)
        })
        .collect();
    // Increasing parameter runs counter-clockwise.
    if cfg.winding == Winding::Clockwise {
        ring.reverse();
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::util::winding_of;

    fn turns_one_way(ring: &[Point2]) -> bool {
        let n = ring.len();
        let crosses: Vec<f64> = (0..n)
            .map(|i| {
                let (p, q, r) = (ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);
                let (u, v) = (q - p, r - q);
                u.x * v.y - u.y * v.x
            })
            .collect();
        crosses.iter().all(|&c| c > 0.0) || crosses.iter().all(|&c| c < 0.0)
    }

    #[test]
    fn same_token_same_ring() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_convex_ring(RingCfg::default(), tok);
        let p2 = draw_convex_ring(RingCfg::default(), tok);
        assert_eq!(p1, p2);
        let p3 = draw_convex_ring(RingCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn requested_winding_is_honored() {
        for (index, winding) in [(1, Winding::Clockwise), (2, Winding::CounterClockwise)] {
            let cfg = RingCfg {
                winding,
                ..RingCfg::default()
            };
            let ring = draw_convex_ring(cfg, ReplayToken { seed: 9, index });
            assert_eq!(ring.len(), 12);
            assert_eq!(winding_of(&ring), winding);
        }
    }

    #[test]
    fn draws_are_strictly_convex() {
        let cfg = RingCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            ..RingCfg::default()
        };
        for index in 0..50 {
            let ring = draw_convex_ring(cfg, ReplayToken { seed: 3, index });
            assert!((3..=40).contains(&ring.len()));
            assert!(turns_one_way(&ring), "draw {index}");
        }
    }

    #[test]
    fn fixed_count_below_three_is_raised() {
        let cfg = RingCfg {
            vertex_count: VertexCount::Fixed(1),
            center: Point2::new(5.0, -2.0),
            ..RingCfg::default()
        };
        let ring = draw_convex_ring(cfg, ReplayToken { seed: 0, index: 0 });
        assert_eq!(ring.len(), 3);
        assert!(ring.iter().all(|p| (p - cfg.center).norm() <= 1.5 + 1e-12));
    }
}
