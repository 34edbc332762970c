use std::fmt;

use super::types::{EdgeId, FaceId, HalfEdgeId};

/// Errors surfaced by the boundary constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A closed boundary needs at least three vertices.
    TooFewVertices { got: usize },
    /// A coordinate is NaN or infinite.
    NonFiniteVertex { index: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            BuildError::NonFiniteVertex { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Invalid split request. The subdivision is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The edge id is out of range.
    UnknownEdge { edge: EdgeId, edges: usize },
    /// Both ids name the same edge.
    SameEdge { edge: EdgeId },
    /// Neither the edges nor their twins bound a common face.
    NoCommonFace { a: EdgeId, b: EdgeId },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::UnknownEdge { edge, edges } => {
                write!(f, "edge {} does not exist ({} edges)", edge.0, edges)
            }
            SplitError::SameEdge { edge } => {
                write!(f, "cannot split edge {} against itself", edge.0)
            }
            SplitError::NoCommonFace { a, b } => {
                write!(f, "edges {} and {} do not bound a common face", a.0, b.0)
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// A broken structural invariant, as reported by `Dcel::check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `h.next.prev != h` or `h.prev.next != h`.
    BrokenRing { half_edge: HalfEdgeId },
    /// `h.next` does not start where `h` ends.
    Disconnected { half_edge: HalfEdgeId },
    /// Twins are not mutual or their endpoints are not swapped.
    TwinMismatch { half_edge: HalfEdgeId },
    /// Twins carry different edge ids.
    TwinEdgeId { half_edge: HalfEdgeId },
    /// A face cycle does not close, or visits a half-edge of another face.
    OpenFaceCycle { face: FaceId },
    /// An edge's primary half-edge carries a different edge id.
    EdgeLink { edge: EdgeId },
    /// A half-edge is not reachable from its own face's cycle.
    Orphan { half_edge: HalfEdgeId },
    /// A record points at an id past the end of its collection.
    DanglingId { half_edge: HalfEdgeId },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::BrokenRing { half_edge } => {
                write!(f, "half-edge {}: next/prev links are not inverse", half_edge.0)
            }
            InvariantError::Disconnected { half_edge } => {
                write!(f, "half-edge {}: next does not start at its end", half_edge.0)
            }
            InvariantError::TwinMismatch { half_edge } => {
                write!(f, "half-edge {}: twin is not mutual or not reversed", half_edge.0)
            }
            InvariantError::TwinEdgeId { half_edge } => {
                write!(f, "half-edge {}: twin has a different edge id", half_edge.0)
            }
            InvariantError::OpenFaceCycle { face } => {
                write!(f, "face {}: boundary cycle is open or mixes faces", face.0)
            }
            InvariantError::EdgeLink { edge } => {
                write!(f, "edge {}: primary half-edge has a different edge id", edge.0)
            }
            InvariantError::Orphan { half_edge } => {
                write!(f, "half-edge {}: not on its face's boundary cycle", half_edge.0)
            }
            InvariantError::DanglingId { half_edge } => {
                write!(f, "half-edge {}: references an id out of range", half_edge.0)
            }
        }
    }
}

impl std::error::Error for InvariantError {}
