//! Boundary constructor: one face bounded by the input ring.

use crate::geom2::{winding_of, Point2};

use super::error::BuildError;
use super::types::{Dcel, Edge, EdgeId, Face, FaceId, HalfEdge, HalfEdgeId, VertexId};

impl Dcel {
    /// Build the initial subdivision of an `N`-gon.
    ///
    /// Edge `i` runs from vertex `i` to vertex `(i + 1) mod N` and owns exactly one
    /// half-edge (also id `i`, no twin). Face 0 references half-edge 0. Simplicity and
    /// convexity are not checked.
    pub fn from_polygon(ring: &[Point2]) -> Result<Self, BuildError> {
        let n = ring.len();
        if n < 3 {
            return Err(BuildError::TooFewVertices { got: n });
        }
        if let Some(index) = ring.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(BuildError::NonFiniteVertex { index });
        }

        let half_edges: Vec<HalfEdge> = (0..n)
            .map(|i| HalfEdge {
                start: VertexId(i),
                end: VertexId((i + 1) % n),
                face: FaceId(0),
                edge: EdgeId(i),
                next: HalfEdgeId((i + 1) % n),
                prev: HalfEdgeId((i + n - 1) % n),
                twin: None,
            })
            .collect();
        let edges: Vec<Edge> = (0..n)
            .map(|i| Edge {
                half_edge: HalfEdgeId(i),
            })
            .collect();

        Ok(Dcel {
            vertices: ring.to_vec(),
            edges,
            faces: vec![Face {
                half_edge: HalfEdgeId(0),
            }],
            half_edges,
            winding: winding_of(ring),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Winding;
    use nalgebra::vector;

    #[test]
    fn triangle_links() {
        let ring = vec![vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]];
        let d = Dcel::from_polygon(&ring).unwrap();
        assert_eq!(d.num_vertices(), 3);
        assert_eq!(d.num_edges(), 3);
        assert_eq!(d.num_half_edges(), 3);
        assert_eq!(d.num_faces(), 1);
        assert_eq!(d.winding(), Winding::Clockwise);
        let h2 = d.half_edge(HalfEdgeId(2));
        assert_eq!((h2.start, h2.end), (VertexId(2), VertexId(0)));
        assert_eq!(h2.next, HalfEdgeId(0));
        assert_eq!(h2.prev, HalfEdgeId(1));
        assert!(h2.twin.is_none());
        assert_eq!(d.face(FaceId(0)).half_edge, HalfEdgeId(0));
        let cycle: Vec<_> = d.face_cycle(FaceId(0)).collect();
        assert_eq!(cycle, vec![HalfEdgeId(0), HalfEdgeId(1), HalfEdgeId(2)]);
        d.check_invariants().unwrap();
    }

    #[test]
    fn too_few_vertices_fails_fast() {
        let ring = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(
            Dcel::from_polygon(&ring).unwrap_err(),
            BuildError::TooFewVertices { got: 2 }
        );
        assert!(Dcel::from_polygon(&[]).is_err());
    }

    #[test]
    fn non_finite_vertex_rejected() {
        let ring = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0], vector![1.0, 0.0]];
        assert_eq!(
            Dcel::from_polygon(&ring).unwrap_err(),
            BuildError::NonFiniteVertex { index: 1 }
        );
    }

    #[test]
    fn winding_recorded() {
        let ccw = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert_eq!(
            Dcel::from_polygon(&ccw).unwrap().winding(),
            Winding::CounterClockwise
        );
    }
}
