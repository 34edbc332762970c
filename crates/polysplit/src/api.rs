//! Curated surface for the CLI and benches (UNSTABLE).
//!
//! Prefer these re-exports over reaching into submodules; names may move
//! between modules without notice.

// Subdivision
pub use crate::dcel::{
    BuildError, Dcel, EdgeId, FaceId, HalfEdgeId, InvariantError, SplitError, SplitOutcome,
    VertexId,
};
// Geometry
pub use crate::geom2::{
    inside_all, is_of_half_plane, signed_area, winding_of, GeomCfg, Point2, Segment2, Winding,
};
// Random rings
pub use crate::geom2::rand::{draw_convex_ring, ReplayToken as RingReplay, RingCfg, VertexCount};
// Tallies
pub use crate::tally::{tally, tally_with, FaceTally, Weighted};
