//! Decomposition of the region between two boundary edges.
//!
//! Given two directed edges of a counter-clockwise polygon, the region
//! enclosed by their lines and the two chords closing the quadrilateral
//! `(l1.start, l1.end, l2.start, l2.end)` is decomposed into at most two
//! corner triangles and a central trapezoid, ordered along the angle
//! bisector of the edge lines. The cut solver then sweeps this
//! decomposition to locate a cut enclosing a requested area.

use polycut_math::{BoundedIntersection, Line, Point2, Vec2};

use crate::polygon::Polygon;

/// Decomposition of the region between two boundary edges.
///
/// The trapezoid's vertices 0 and 1 bound the start of the sweep, vertices
/// 2 and 3 the end; vertices 1 and 2 lie on the first edge line, vertices 0
/// and 3 on the second. Each corner triangle, when present, stores its apex
/// at vertex 0 and its swept base as vertices 1 → 2.
#[derive(Debug, Clone)]
pub struct Wedge {
    /// Angle bisector of the two edge lines.
    pub bisector: Line,
    /// Corner triangle swept before the trapezoid (empty or 3 vertices).
    pub left_triangle: Polygon,
    /// Central trapezoid (4 vertices, possibly degenerate).
    pub trapezoid: Polygon,
    /// Corner triangle swept after the trapezoid (empty or 3 vertices).
    pub right_triangle: Polygon,
    /// Start-corner probe from `l1.start` hit the second edge's chord.
    pub p1_exists: bool,
    /// End-corner probe from `l1.end` hit the second edge's chord.
    pub p2_exists: bool,
    /// End-corner probe from `l2.start` hit the first edge's chord.
    pub p3_exists: bool,
    /// Start-corner probe from `l2.end` hit the first edge's chord.
    pub p4_exists: bool,
    /// Area of the left triangle.
    pub left_area: f64,
    /// Area of the trapezoid.
    pub trapezoid_area: f64,
    /// Area of the right triangle.
    pub right_area: f64,
    /// Sum of the piece areas.
    pub total_area: f64,
}

/// Decompose the region between directed edges `l1` and `l2`.
///
/// Corner probes run perpendicular to the bisector, from each chord endpoint
/// through its projection onto the bisector, and are intersected against the
/// opposite chord; a hit peels off a corner triangle, a miss folds the
/// corner directly into the trapezoid. Shared endpoints (adjacent edges)
/// skip the probes entirely.
///
/// Returns `None` when no usable decomposition exists: the bisector is
/// degenerate (parallel edges with identical direction), the enclosed
/// quadrilateral is inverted or empty, or the piece areas do not add up to
/// the quadrilateral's area (self-overlapping configuration).
pub fn decompose(l1: &Line, l2: &Line, half_length: f64, eps: f64) -> Option<Wedge> {
    let bisector = Line::bisector(l1, l2, half_length, eps)?;

    let v1 = l1.start();
    let v2 = l1.end();
    let v3 = l2.start();
    let v4 = l2.end();

    let mut left_triangle = Polygon::default();
    let mut right_triangle = Polygon::default();
    let mut trapezoid = Vec::with_capacity(4);
    let mut p1_exists = false;
    let mut p2_exists = false;
    let mut p3_exists = false;
    let mut p4_exists = false;

    // Sweep-start corner: v1 and v4, unless the edges share that vertex.
    if (v1 - v4).norm() > eps {
        if let Some(p1) = corner_probe(v1, &bisector, l2, v4, half_length, eps) {
            p1_exists = true;
            left_triangle = Polygon::new(vec![v1, v4, p1]);
            trapezoid.push(p1);
            trapezoid.push(v1);
        } else if let Some(p4) = corner_probe(v4, &bisector, l1, v1, half_length, eps) {
            p4_exists = true;
            left_triangle = Polygon::new(vec![v4, v1, p4]);
            trapezoid.push(v4);
            trapezoid.push(p4);
        } else {
            trapezoid.push(v4);
            trapezoid.push(v1);
        }
    } else {
        trapezoid.push(v4);
        trapezoid.push(v1);
    }

    // Sweep-end corner: v2 and v3.
    if (v2 - v3).norm() > eps {
        if let Some(p3) = corner_probe(v3, &bisector, l1, v2, half_length, eps) {
            p3_exists = true;
            right_triangle = Polygon::new(vec![v3, v2, p3]);
            trapezoid.push(p3);
            trapezoid.push(v3);
        } else if let Some(p2) = corner_probe(v2, &bisector, l2, v3, half_length, eps) {
            p2_exists = true;
            right_triangle = Polygon::new(vec![v2, v3, p2]);
            trapezoid.push(v2);
            trapezoid.push(p2);
        } else {
            trapezoid.push(v2);
            trapezoid.push(v3);
        }
    } else {
        trapezoid.push(v2);
        trapezoid.push(v3);
    }

    let trapezoid = Polygon::new(trapezoid);
    let left_area = left_triangle.area();
    let trapezoid_area = trapezoid.area();
    let right_area = right_triangle.area();
    let total_area = left_area + trapezoid_area + right_area;

    // The pieces must tile the enclosed quadrilateral exactly. A shortfall
    // or excess means the quadrilateral is self-overlapping and the sweep
    // math does not apply; the pair is disqualified rather than solved
    // incorrectly.
    let enclosed = Polygon::new(vec![v1, v2, v3, v4]).signed_area();
    if enclosed <= eps {
        return None;
    }
    if (total_area - enclosed).abs() > (1.0 + enclosed) * eps {
        return None;
    }

    Some(Wedge {
        bisector,
        left_triangle,
        trapezoid,
        right_triangle,
        p1_exists,
        p2_exists,
        p3_exists,
        p4_exists,
        left_area,
        trapezoid_area,
        right_area,
        total_area,
    })
}

/// Intersect the perpendicular to `bisector` through `corner` with the
/// `opposite` chord. A hit coinciding with `exclude` (the chord endpoint
/// that would collapse the triangle) counts as a miss.
fn corner_probe(
    corner: Point2,
    bisector: &Line,
    opposite: &Line,
    exclude: Point2,
    half_length: f64,
    eps: f64,
) -> Option<Point2> {
    let foot = bisector.nearest_point_on_line(corner);
    let towards = foot - corner;
    let dir = if towards.norm() > eps {
        towards.normalize()
    } else {
        // Corner sits on the bisector; the probe direction is the bisector
        // normal itself.
        Vec2::new(bisector.a(), bisector.b()).normalize()
    };
    let probe = Line::from_points(corner - dir * half_length, corner + dir * half_length);
    match probe.intersect_bounded(opposite, eps) {
        BoundedIntersection::Hit(p) if (p - exclude).norm() > eps => Some(p),
        _ => None,
    }
}
