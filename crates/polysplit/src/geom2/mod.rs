//! 2D geometry primitives for the subdivision.
//!
//! Purpose
//! - Point type, tolerances and the half-plane side test that the locator
//!   conjoins over a face boundary.
//! - Small ring utilities (signed area, winding) and a reproducible sampler
//!   of convex rings for tests and benches.
//!
//! Conventions
//! - y points up; "clockwise" is read in that frame.
//! - The half-plane predicate's interior is the right-hand side of a directed
//!   segment (see `halfplane`).

mod halfplane;
pub mod rand;
mod types;
mod util;

pub use halfplane::{inside_all, is_of_half_plane};
pub use types::{GeomCfg, Point2, Segment2, Winding};
pub use util::{signed_area, vertex_centroid, winding_of};
