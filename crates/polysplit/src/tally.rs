//! Per-face membership and weight totals for a set of points.
//!
//! Each point goes to the first face, in id order, whose boundary test accepts
//! it. A point on a non-vertical chord passes the test of both neighbors and
//! is credited to the lower id only; on a vertical chord only one neighbor
//! accepts it. Points outside every face are not counted.

use crate::dcel::{Dcel, FaceId};
use crate::geom2::{GeomCfg, Point2};

/// Anything with a position and an integer weight.
pub trait Weighted {
    fn position(&self) -> Point2;
    fn weight(&self) -> i64;
}

impl Weighted for (Point2, i64) {
    fn position(&self) -> Point2 {
        self.0
    }

    fn weight(&self) -> i64 {
        self.1
    }
}

/// Result of [`tally`]: `members[f]` lists point indices (input order) credited to face `f`,
/// `totals[f]` is the sum of their weights. Every point appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTally {
    pub members: Vec<Vec<usize>>,
    pub totals: Vec<i64>,
}

impl FaceTally {
    pub fn num_faces(&self) -> usize {
        self.totals.len()
    }

    /// Sum over all faces; equals the total input weight when every point is interior.
    pub fn total(&self) -> i64 {
        self.totals.iter().sum()
    }

    pub fn members_of(&self, face: FaceId) -> &[usize] {
        &self.members[face.0]
    }
}

/// Assign points to faces with default tolerances.
pub fn tally<W: Weighted>(dcel: &Dcel, points: &[W]) -> FaceTally {
    tally_with(dcel, points, &GeomCfg::default())
}

pub fn tally_with<W: Weighted>(dcel: &Dcel, points: &[W], cfg: &GeomCfg) -> FaceTally {
    let mut out = FaceTally {
        members: vec![Vec::new(); dcel.num_faces()],
        totals: vec![0; dcel.num_faces()],
    };
    for (i, w) in points.iter().enumerate() {
        if let Some(face) = dcel.find_face(w.position(), cfg) {
            out.members[face.0].push(i);
            out.totals[face.0] += w.weight();
        }
    }
    let placed: usize = out.members.iter().map(Vec::len).sum();
    tracing::debug!(
        faces = dcel.num_faces(),
        points = points.len(),
        placed,
        "tallied points"
    );
    out
}
