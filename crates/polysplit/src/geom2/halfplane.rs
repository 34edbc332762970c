//! Half-plane side test for a directed segment.
//!
//! The interior of a directed segment is its right-hand side: below a
//! left-to-right segment, above a right-to-left one, right of an upward
//! vertical and left of a downward one. A closed ring traversed clockwise
//! therefore has its enclosed region on the interior side of every segment.
//!
//! Assumptions (not validated)
//! - Faces are convex and traversed in one rotational sense. For non-convex
//!   faces the conjunction over the boundary is not a membership test.
//! - Boundary ties follow the inequality directions below, so a point on a
//!   shared segment may pass for one neighbor and fail for the other.

use super::types::{GeomCfg, Point2, Segment2};

/// Whether `p` lies on the interior side of `seg`.
///
/// - Vertical (`|Δx| < cfg.eps_vertical`): `p.x > start.x` for an upward
///   segment, `p.x <= start.x` otherwise (including zero-length segments).
/// - Otherwise: residual `r = p.y - (m·p.x + q)` of the carrier line
///   `y = m·x + q`; interior is `r <= 0` left-to-right, `r >= 0` right-to-left.
pub fn is_of_half_plane(seg: &Segment2, p: Point2, cfg: &GeomCfg) -> bool {
    let (s, e) = (seg.start, seg.end);
    if seg.is_vertical(cfg) {
        return if s.y < e.y { p.x > s.x } else { p.x <= s.x };
    }
    let slope = (e.y - s.y) / (e.x - s.x);
    let intercept = e.y - slope * e.x;
    let residual = p.y - (slope * p.x + intercept);
    if s.x < e.x {
        residual <= 0.0
    } else {
        residual >= 0.0
    }
}

/// Conjunction of [`is_of_half_plane`] over a sequence of segments; stops at the first failure.
pub fn inside_all<I>(segments: I, p: Point2, cfg: &GeomCfg) -> bool
where
    I: IntoIterator<Item = Segment2>,
{
    segments
        .into_iter()
        .all(|seg| is_of_half_plane(&seg, p, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(a: [f64; 2], b: [f64; 2]) -> Segment2 {
        Segment2::new(vector![a[0], a[1]], vector![b[0], b[1]])
    }

    #[test]
    fn horizontal_left_to_right_interior_is_below() {
        let cfg = GeomCfg::default();
        let s = seg([0.0, 0.0], [1.0, 0.0]);
        assert!(is_of_half_plane(&s, vector![0.5, -0.1], &cfg));
        assert!(!is_of_half_plane(&s, vector![0.5, 0.1], &cfg));
        // On the line: residual 0 passes.
        assert!(is_of_half_plane(&s, vector![0.5, 0.0], &cfg));
    }

    #[test]
    fn horizontal_right_to_left_interior_is_above() {
        let cfg = GeomCfg::default();
        let s = seg([1.0, 0.0], [0.0, 0.0]);
        assert!(is_of_half_plane(&s, vector![0.5, 0.1], &cfg));
        assert!(!is_of_half_plane(&s, vector![0.5, -0.1], &cfg));
        assert!(is_of_half_plane(&s, vector![0.5, 0.0], &cfg));
    }

    #[test]
    fn vertical_ties_are_asymmetric() {
        let cfg = GeomCfg::default();
        let up = seg([0.0, 0.0], [0.0, 1.0]);
        let down = up.reversed();
        assert!(is_of_half_plane(&up, vector![0.5, 0.5], &cfg));
        assert!(!is_of_half_plane(&up, vector![-0.5, 0.5], &cfg));
        assert!(!is_of_half_plane(&up, vector![0.0, 0.5], &cfg));
        assert!(is_of_half_plane(&down, vector![-0.5, 0.5], &cfg));
        assert!(is_of_half_plane(&down, vector![0.0, 0.5], &cfg));
        assert!(!is_of_half_plane(&down, vector![0.5, 0.5], &cfg));
    }

    #[test]
    fn near_vertical_uses_vertical_rule() {
        let cfg = GeomCfg::default();
        // |Δx| = 1e-7 < eps: classified as an upward vertical at x = 0.
        let s = seg([0.0, 0.0], [1e-7, 1.0]);
        assert!(is_of_half_plane(&s, vector![0.25, 100.0], &cfg));
        assert!(!is_of_half_plane(&s, vector![-0.25, -100.0], &cfg));
    }

    #[test]
    fn sloped_segment() {
        let cfg = GeomCfg::default();
        // y = x, left-to-right: interior is below the diagonal.
        let s = seg([0.0, 0.0], [2.0, 2.0]);
        assert!(is_of_half_plane(&s, vector![1.0, 0.5], &cfg));
        assert!(!is_of_half_plane(&s, vector![1.0, 1.5], &cfg));
        // Classification uses the infinite carrier line, not the segment.
        assert!(is_of_half_plane(&s, vector![10.0, 9.0], &cfg));
    }

    #[test]
    fn clockwise_square_contains_center() {
        let cfg = GeomCfg::default();
        let ring = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        let segs: Vec<Segment2> = (0..4).map(|i| seg(ring[i], ring[(i + 1) % 4])).collect();
        assert!(inside_all(segs.iter().copied(), vector![0.5, 0.5], &cfg));
        assert!(!inside_all(segs.iter().copied(), vector![1.5, 0.5], &cfg));
        assert!(!inside_all(segs.iter().copied(), vector![0.5, -0.5], &cfg));
    }
}
