//! Doubly-connected edge list for a polygon that is cut up by midpoint chords.
//!
//! Purpose
//! - Hold the subdivision (vertices, edges, faces, half-edges) in arenas with
//!   stable integer handles.
//! - Build the one-face subdivision of a ring, split faces along chords, and
//!   verify the structural invariants after every step.
//!
//! Layout
//! - `types.rs` (records, handles, cycle walks), `build.rs` (boundary
//!   constructor), `split.rs` (split engine), `check.rs` (invariant checks),
//!   `error.rs` (error enums).
//!
//! Growth only: records are appended, never removed, and ids are never reused.

mod build;
mod check;
mod error;
mod split;
mod types;

pub use error::{BuildError, InvariantError, SplitError};
pub use split::SplitOutcome;
pub use types::{Dcel, Edge, EdgeId, Face, FaceCycle, FaceId, HalfEdge, HalfEdgeId, VertexId};
