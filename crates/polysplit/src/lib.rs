//! Polygon subdivision by midpoint chords, with point-in-face tallies.
//!
//! A convex polygon is loaded into a doubly-connected edge list (`dcel`),
//! repeatedly split along the chord joining the midpoints of two edges of a
//! common face, and finally each weighted point is assigned to the faces
//! containing it (`locate`, `tally`).
//!
//! Modules
//! - `geom2`: point type, tolerances, the half-plane predicate, ring helpers and
//!   a seeded sampler of convex rings.
//! - `dcel`: arena-backed subdivision, split engine and invariant checks.
//! - `locate`: face membership on top of the predicate.
//! - `tally`: per-face members and weight totals.
//! - `api`: curated re-exports for the CLI and benches.

pub mod api;
pub mod dcel;
pub mod geom2;
pub mod locate;
pub mod tally;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dcel::{Dcel, EdgeId, FaceId, SplitError, SplitOutcome};
pub use geom2::{GeomCfg, Point2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dcel::{Dcel, EdgeId, FaceId, HalfEdgeId, VertexId};
    pub use crate::geom2::rand::{draw_convex_ring, ReplayToken, RingCfg, VertexCount};
    pub use crate::geom2::{GeomCfg, Point2, Segment2, Winding};
    pub use crate::tally::{tally, FaceTally, Weighted};
    pub use nalgebra::Vector2 as Vec2;
}
