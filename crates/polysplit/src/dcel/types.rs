//! Arena storage for the doubly-connected edge list.
//!
//! Every record lives in a `Vec` and is addressed by a typed index. Links
//! between half-edges (`next`, `prev`, `twin`) are handles into the same arena,
//! so growing any collection never invalidates them.

use crate::geom2::{Point2, Segment2, Winding};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfEdgeId(pub usize);

/// One direction of an edge.
///
/// `edge` is shared with the twin. `twin` is `None` on the outer boundary,
/// where no face lies on the other side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
    pub start: VertexId,
    pub end: VertexId,
    pub face: FaceId,
    pub edge: EdgeId,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    pub twin: Option<HalfEdgeId>,
}

/// Logical edge; the second direction is reached through the primary's `twin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub half_edge: HalfEdgeId,
}

/// Face; `half_edge` is any half-edge of its boundary cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub half_edge: HalfEdgeId,
}

/// Doubly-connected edge list of a polygon subdivision.
///
/// Invariants:
/// - `h.next.prev == h`, `h.prev.next == h`, `h.next.start == h.end`.
/// - Twins are mutual and have swapped endpoints.
/// - Each face's `next`-cycle closes and only visits half-edges of that face.
/// - Records are only ever appended; ids are never reassigned.
#[derive(Clone, Debug)]
pub struct Dcel {
    pub(crate) vertices: Vec<Point2>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) winding: Winding,
}

impl Dcel {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// Rotational sense of the initial boundary, shared by all faces.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub fn vertex(&self, id: VertexId) -> Point2 {
        self.vertices[id.0]
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id.0]
    }

    pub fn face(&self, id: FaceId) -> Face {
        self.faces[id.0]
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub(crate) fn half_edge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.half_edges[id.0]
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> {
        (0..self.half_edges.len()).map(HalfEdgeId)
    }

    /// Primary half-edge of `id`, or `None` if the id is unknown.
    pub fn primary_half_edge(&self, id: EdgeId) -> Option<HalfEdgeId> {
        self.edges.get(id.0).map(|e| e.half_edge)
    }

    /// Directed segment spanned by a half-edge.
    pub fn segment(&self, id: HalfEdgeId) -> Segment2 {
        let h = self.half_edge(id);
        Segment2::new(self.vertex(h.start), self.vertex(h.end))
    }

    /// Half-edges of a face boundary, following `next` from the face's reference.
    pub fn face_cycle(&self, face: FaceId) -> FaceCycle<'_> {
        FaceCycle::new(self, self.faces[face.0].half_edge, Step::Next)
    }

    /// Same cycle as [`Dcel::face_cycle`], walked along `prev`.
    pub fn face_cycle_rev(&self, face: FaceId) -> FaceCycle<'_> {
        FaceCycle::new(self, self.faces[face.0].half_edge, Step::Prev)
    }

    /// Boundary ring of a face: the start vertex of each half-edge in cycle order.
    pub fn face_ring(&self, face: FaceId) -> Vec<Point2> {
        self.face_cycle(face)
            .map(|h| self.vertex(self.half_edge(h).start))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

/// Circular walk around one face boundary. Stops after returning to the
/// starting half-edge, or after visiting every half-edge once if the links are
/// corrupt, so it always terminates.
pub struct FaceCycle<'a> {
    dcel: &'a Dcel,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    step: Step,
    remaining: usize,
}

impl<'a> FaceCycle<'a> {
    fn new(dcel: &'a Dcel, start: HalfEdgeId, step: Step) -> Self {
        Self {
            dcel,
            start,
            current: Some(start),
            step,
            remaining: dcel.half_edges.len(),
        }
    }
}

impl Iterator for FaceCycle<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let result = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        let h = self.dcel.half_edge(result);
        let following = match self.step {
            Step::Next => h.next,
            Step::Prev => h.prev,
        };
        self.current = (following != self.start).then_some(following);
        Some(result)
    }
}
