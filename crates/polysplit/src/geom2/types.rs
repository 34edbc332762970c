//! Basic 2D types and tolerances used by the half-plane predicate.
//!
//! - `GeomCfg`: the tolerance shared by the predicate and the locator.
//! - `Winding`: rotational sense of a closed boundary.
//! - `Segment2`: directed segment `start → end`, the unit the predicate classifies against.

use nalgebra::Vector2;

/// Points are plain column vectors; a vertex has no identity beyond its position.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Segments with `|Δx|` below this are classified by the vertical rule.
    pub eps_vertical: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_vertical: 1e-6,
        }
    }
}

/// Rotational sense of a closed vertex ring (y axis pointing up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Winding of a ring with the given signed (shoelace) area. Zero area reads as clockwise,
    /// which keeps the predicate's native orientation.
    #[inline]
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }
}

/// Directed segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Same carrier line, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) * 0.5
    }

    #[inline]
    pub fn is_vertical(&self, cfg: &GeomCfg) -> bool {
        (self.start.x - self.end.x).abs() < cfg.eps_vertical
    }
}
