//! Split engine: cut a face along the chord joining the midpoints of two of its edges.
//!
//! Naming below: `s` is the resolved half-edge of the first edge, `e` of the
//! second, both on the face being split. Before the split the face cycle reads
//! `… → s → … → e → …`; afterwards
//!
//! ```text
//! split face: … → s → chord → e → …
//! new face:   rem_s → … → rem_e → chord_twin → rem_s
//! ```
//!
//! where `s` keeps its start and now ends at `mid(s)`, `rem_s` runs on to the
//! old end of `s`, `e` keeps its end and now starts at `mid(e)`, and `rem_e`
//! runs from the old start of `e`. Twins on neighboring faces are subdivided in
//! mirror fashion so twin links stay mutual.

use crate::geom2::Point2;

use super::error::SplitError;
use super::types::{Dcel, Edge, EdgeId, Face, FaceId, HalfEdge, HalfEdgeId, VertexId};

/// Ids created or touched by one successful split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Face that was cut; keeps its id and now references `chord_half_edges[0]`.
    pub split_face: FaceId,
    /// Face bounded by the chord twin.
    pub new_face: FaceId,
    /// Midpoints of the first and second edge.
    pub midpoints: [VertexId; 2],
    pub chord: EdgeId,
    /// Remainders of the first and second edge, on the new face.
    pub remainders: [EdgeId; 2],
    /// Chord half-edge on the split face, then its twin on the new face.
    pub chord_half_edges: [HalfEdgeId; 2],
    /// Whether the two resolved half-edges were consecutive on the split face.
    pub adjacent: bool,
}

impl Dcel {
    /// Pick the half-edges of `a` and `b` that bound a common face.
    ///
    /// Combinations are tried in order (a, b), (twin a, b), (a, twin b),
    /// (twin a, twin b); the first whose faces agree wins.
    pub fn resolve_split(
        &self,
        a: EdgeId,
        b: EdgeId,
    ) -> Result<(HalfEdgeId, HalfEdgeId), SplitError> {
        let edges = self.num_edges();
        let ha = self
            .primary_half_edge(a)
            .ok_or(SplitError::UnknownEdge { edge: a, edges })?;
        let hb = self
            .primary_half_edge(b)
            .ok_or(SplitError::UnknownEdge { edge: b, edges })?;
        if a == b {
            return Err(SplitError::SameEdge { edge: a });
        }
        let ta = self.half_edge(ha).twin;
        let tb = self.half_edge(hb).twin;
        [
            Some((ha, hb)),
            ta.map(|t| (t, hb)),
            tb.map(|t| (ha, t)),
            ta.zip(tb),
        ]
        .into_iter()
        .flatten()
        .find(|&(x, y)| self.half_edge(x).face == self.half_edge(y).face)
        .ok_or(SplitError::NoCommonFace { a, b })
    }

    /// Split the face bounded by edges `a` and `b` along the chord between their midpoints.
    ///
    /// Adds 2 vertices, 3 edges (chord, remainder of `a`, remainder of `b`, in that id
    /// order), 1 face, and 4 half-edges plus one per resolved half-edge with a twin.
    /// On error nothing is modified.
    pub fn split(&mut self, a: EdgeId, b: EdgeId) -> Result<SplitOutcome, SplitError> {
        let (s, e) = self.resolve_split(a, b)?;
        let face = self.half_edge(s).face;
        let adjacent = self.half_edge(s).next == e;

        let (p_s, p_e) = (self.segment(s).midpoint(), self.segment(e).midpoint());
        let mid_s = self.push_vertex(p_s);
        let mid_e = self.push_vertex(p_e);
        let chord_edge = EdgeId(self.edges.len());
        let rem_s_edge = EdgeId(chord_edge.0 + 1);
        let rem_e_edge = EdgeId(chord_edge.0 + 2);
        let new_face = FaceId(self.faces.len());

        let rem_s = self.subdivide_keep_start(s, mid_s, rem_s_edge);
        let rem_e = self.subdivide_keep_end(e, mid_e, rem_e_edge);
        debug_assert!(!adjacent || self.half_edge(rem_s).next == rem_e);

        let chord = HalfEdgeId(self.half_edges.len());
        let chord_twin = HalfEdgeId(chord.0 + 1);
        self.half_edges.push(HalfEdge {
            start: mid_s,
            end: mid_e,
            face,
            edge: chord_edge,
            next: e,
            prev: s,
            twin: Some(chord_twin),
        });
        self.half_edges.push(HalfEdge {
            start: mid_e,
            end: mid_s,
            face: new_face,
            edge: chord_edge,
            next: rem_s,
            prev: rem_e,
            twin: Some(chord),
        });
        self.half_edge_mut(s).next = chord;
        self.half_edge_mut(e).prev = chord;
        self.half_edge_mut(rem_e).next = chord_twin;
        self.half_edge_mut(rem_s).prev = chord_twin;

        for half_edge in [chord, rem_s, rem_e] {
            self.edges.push(Edge { half_edge });
        }
        self.faces[face.0].half_edge = chord;
        self.faces.push(Face {
            half_edge: chord_twin,
        });
        self.assign_face(chord, face);
        self.assign_face(chord_twin, new_face);

        tracing::debug!(
            a = a.0,
            b = b.0,
            face = face.0,
            new_face = new_face.0,
            adjacent,
            "split face"
        );

        Ok(SplitOutcome {
            split_face: face,
            new_face,
            midpoints: [mid_s, mid_e],
            chord: chord_edge,
            remainders: [rem_s_edge, rem_e_edge],
            chord_half_edges: [chord, chord_twin],
            adjacent,
        })
    }

    /// Apply split requests in order. A rejected request is reported in place and
    /// does not stop the ones after it.
    pub fn split_all<I>(&mut self, requests: I) -> Vec<Result<SplitOutcome, SplitError>>
    where
        I: IntoIterator<Item = (EdgeId, EdgeId)>,
    {
        requests
            .into_iter()
            .map(|(a, b)| self.split(a, b))
            .collect()
    }

    fn push_vertex(&mut self, p: Point2) -> VertexId {
        self.vertices.push(p);
        VertexId(self.vertices.len() - 1)
    }

    fn push_half_edge(&mut self, h: HalfEdge) -> HalfEdgeId {
        self.half_edges.push(h);
        HalfEdgeId(self.half_edges.len() - 1)
    }

    /// `h: A → B` becomes `A → m`; returns the new `m → B` linked after it.
    /// A twin `B → A` becomes `m → A` behind a new `B → m`.
    fn subdivide_keep_start(&mut self, h: HalfEdgeId, m: VertexId, edge: EdgeId) -> HalfEdgeId {
        let old = *self.half_edge(h);
        let rem = self.push_half_edge(HalfEdge {
            start: m,
            end: old.end,
            face: old.face,
            edge,
            next: old.next,
            prev: h,
            twin: None,
        });
        self.half_edge_mut(old.next).prev = rem;
        let cur = self.half_edge_mut(h);
        cur.end = m;
        cur.next = rem;

        if let Some(t) = old.twin {
            let twin = *self.half_edge(t);
            let twin_rem = self.push_half_edge(HalfEdge {
                start: twin.start,
                end: m,
                face: twin.face,
                edge,
                next: t,
                prev: twin.prev,
                twin: Some(rem),
            });
            self.half_edge_mut(twin.prev).next = twin_rem;
            let cur = self.half_edge_mut(t);
            cur.start = m;
            cur.prev = twin_rem;
            self.half_edge_mut(rem).twin = Some(twin_rem);
            self.faces[twin.face.0].half_edge = t;
        }
        rem
    }

    /// `h: A → B` becomes `m → B`; returns the new `A → m` linked before it.
    /// A twin `B → A` becomes `B → m` ahead of a new `m → A`.
    fn subdivide_keep_end(&mut self, h: HalfEdgeId, m: VertexId, edge: EdgeId) -> HalfEdgeId {
        let old = *self.half_edge(h);
        let rem = self.push_half_edge(HalfEdge {
            start: old.start,
            end: m,
            face: old.face,
            edge,
            next: h,
            prev: old.prev,
            twin: None,
        });
        self.half_edge_mut(old.prev).next = rem;
        let cur = self.half_edge_mut(h);
        cur.start = m;
        cur.prev = rem;

        if let Some(t) = old.twin {
            let twin = *self.half_edge(t);
            let twin_rem = self.push_half_edge(HalfEdge {
                start: m,
                end: twin.end,
                face: twin.face,
                edge,
                next: twin.next,
                prev: t,
                twin: Some(rem),
            });
            self.half_edge_mut(twin.next).prev = twin_rem;
            let cur = self.half_edge_mut(t);
            cur.end = m;
            cur.next = twin_rem;
            self.half_edge_mut(rem).twin = Some(twin_rem);
            self.faces[twin.face.0].half_edge = t;
        }
        rem
    }

    /// Stamp `face` on the cycle through `start`; stops on returning to `start` itself.
    fn assign_face(&mut self, start: HalfEdgeId, face: FaceId) {
        let mut h = start;
        loop {
            let cur = self.half_edge_mut(h);
            cur.face = face;
            h = cur.next;
            if h == start {
                break;
            }
        }
    }
}
