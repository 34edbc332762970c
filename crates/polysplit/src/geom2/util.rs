use super::types::{Point2, Winding};

/// Signed shoelace area of a closed ring; positive for counter-clockwise order.
pub fn signed_area(ring: &[Point2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[inline]
pub fn winding_of(ring: &[Point2]) -> Winding {
    Winding::from_signed_area(signed_area(ring))
}

/// Vertex average of a ring (not the area centroid); strictly inside for convex rings.
pub fn vertex_centroid(ring: &[Point2]) -> Option<Point2> {
    if ring.is_empty() {
        return None;
    }
    let sum = ring.iter().fold(Point2::zeros(), |acc, p| acc + p);
    Some(sum / ring.len() as f64)
}
