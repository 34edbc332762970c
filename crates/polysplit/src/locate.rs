//! Point-in-face test over a subdivision.
//!
//! A point is in a face when it lies on the interior side of every boundary
//! segment of that face. The half-plane predicate treats the right-hand side
//! as interior, so for a counter-clockwise subdivision each segment is fed to
//! it reversed. Only meaningful for convex faces.

use crate::dcel::{Dcel, FaceId};
use crate::geom2::{inside_all, GeomCfg, Point2, Segment2, Winding};

impl Dcel {
    /// Whether `p` lies in `face`, with default tolerances.
    ///
    /// Panics if `face` is out of range.
    pub fn locate(&self, face: FaceId, p: Point2) -> bool {
        self.locate_with(face, p, &GeomCfg::default())
    }

    /// Whether `p` lies in `face`; stops at the first boundary segment that rejects it.
    pub fn locate_with(&self, face: FaceId, p: Point2, cfg: &GeomCfg) -> bool {
        inside_all(self.interior_segments(face), p, cfg)
    }

    /// First face containing `p`, scanning faces in id order.
    pub fn find_face(&self, p: Point2, cfg: &GeomCfg) -> Option<FaceId> {
        self.face_ids().find(|&f| self.locate_with(f, p, cfg))
    }

    /// Boundary segments of `face`, oriented so the face lies on their right.
    fn interior_segments(&self, face: FaceId) -> impl Iterator<Item = Segment2> + '_ {
        let flip = self.winding() == Winding::CounterClockwise;
        self.face_cycle(face).map(move |h| {
            let seg = self.segment(h);
            if flip {
                seg.reversed()
            } else {
                seg
            }
        })
    }
}
