//! Structural invariant checks.

use super::error::InvariantError;
use super::types::{Dcel, EdgeId, FaceId, HalfEdgeId};

impl Dcel {
    /// Verify ring links, twin symmetry, face cycles and edge links.
    ///
    /// Returns the first violation found. Cost is linear in the number of half-edges.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let n = self.half_edges.len();
        for id in self.half_edge_ids() {
            let h = self.half_edge(id);
            let in_range = h.next.0 < n
                && h.prev.0 < n
                && h.twin.map_or(true, |t| t.0 < n)
                && h.face.0 < self.faces.len()
                && h.edge.0 < self.edges.len()
                && h.start.0 < self.vertices.len()
                && h.end.0 < self.vertices.len();
            if !in_range {
                return Err(InvariantError::DanglingId { half_edge: id });
            }
        }

        for id in self.half_edge_ids() {
            let h = self.half_edge(id);
            if self.half_edge(h.next).prev != id || self.half_edge(h.prev).next != id {
                return Err(InvariantError::BrokenRing { half_edge: id });
            }
            if self.half_edge(h.next).start != h.end {
                return Err(InvariantError::Disconnected { half_edge: id });
            }
            if let Some(t) = h.twin {
                let twin = self.half_edge(t);
                if twin.twin != Some(id) || twin.start != h.end || twin.end != h.start {
                    return Err(InvariantError::TwinMismatch { half_edge: id });
                }
                if twin.edge != h.edge {
                    return Err(InvariantError::TwinEdgeId { half_edge: id });
                }
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            if self.half_edge(edge.half_edge).edge != EdgeId(index) {
                return Err(InvariantError::EdgeLink {
                    edge: EdgeId(index),
                });
            }
        }

        let mut seen = vec![false; n];
        for face in self.face_ids() {
            self.check_face_cycle(face, &mut seen)?;
        }
        if let Some(index) = seen.iter().position(|s| !s) {
            return Err(InvariantError::Orphan {
                half_edge: HalfEdgeId(index),
            });
        }
        Ok(())
    }

    fn check_face_cycle(&self, face: FaceId, seen: &mut [bool]) -> Result<(), InvariantError> {
        let start = self.face(face).half_edge;
        let mut h = start;
        for _ in 0..self.half_edges.len() {
            if self.half_edge(h).face != face || seen[h.0] {
                return Err(InvariantError::OpenFaceCycle { face });
            }
            seen[h.0] = true;
            h = self.half_edge(h).next;
            if h == start {
                return Ok(());
            }
        }
        Err(InvariantError::OpenFaceCycle { face })
    }
}
