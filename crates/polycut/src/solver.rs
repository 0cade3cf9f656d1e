//! Locating a cut of prescribed swept area inside a wedge decomposition.

use polycut_math::{Line, Point2};

use crate::error::{Result, SplitError};
use crate::wedge::Wedge;

/// Find the cut segment enclosing exactly `target` area between the sweep
/// start of `wedge` and the cut.
///
/// The sweep consumes the left triangle first (cut pivoting on the apex,
/// area linear in the base fraction), then the trapezoid (cut sliding along
/// the two edge-line sides; area linear when the sides are parallel,
/// quadratic otherwise), then the right triangle. The returned segment runs
/// from the second edge line to the first.
///
/// Fails with [`SplitError::AreaUnreachable`] when `target` is negative or
/// exceeds the wedge total, and with [`SplitError::NoValidCut`] when the
/// quadratic sweep has no root inside the trapezoid.
pub fn find_cut(target: f64, wedge: &Wedge, eps: f64) -> Result<Line> {
    if !target.is_finite() || target < -eps || target > wedge.total_area + eps {
        return Err(SplitError::AreaUnreachable {
            target,
            available: wedge.total_area,
        });
    }
    let s = target.clamp(0.0, wedge.total_area);

    // Left triangle: the cut pivots around the apex while its far endpoint
    // slides along the base, so area grows linearly with the base fraction.
    if !wedge.left_triangle.is_empty() && wedge.left_area > eps && s < wedge.left_area {
        let m = s / wedge.left_area;
        let apex = wedge.left_triangle.point(0);
        let p = lerp(
            wedge.left_triangle.point(1),
            wedge.left_triangle.point(2),
            m,
        );
        return Ok(if wedge.p1_exists {
            Line::from_points(p, apex)
        } else {
            Line::from_points(apex, p)
        });
    }

    let after_left = (s - wedge.left_area).max(0.0);
    if after_left <= wedge.trapezoid_area + eps {
        let q0 = wedge.trapezoid.point(0);
        let q1 = wedge.trapezoid.point(1);
        let q2 = wedge.trapezoid.point(2);
        let q3 = wedge.trapezoid.point(3);
        let m = trapezoid_fraction(wedge, q0, q1, q2, q3, after_left, eps)?;
        return Ok(Line::from_points(lerp(q0, q3, m), lerp(q1, q2, m)));
    }

    // Right triangle: mirror of the left, swept from the trapezoid outward.
    let after_trapezoid = after_left - wedge.trapezoid_area;
    if !wedge.right_triangle.is_empty() && wedge.right_area > eps {
        let m = (after_trapezoid / wedge.right_area).clamp(0.0, 1.0);
        let apex = wedge.right_triangle.point(0);
        let p = lerp(
            wedge.right_triangle.point(2),
            wedge.right_triangle.point(1),
            m,
        );
        return Ok(if wedge.p3_exists {
            Line::from_points(apex, p)
        } else {
            Line::from_points(p, apex)
        });
    }

    Err(SplitError::NoValidCut)
}

/// Fraction along the trapezoid's edge-line sides where the sweep encloses
/// `swept` area.
fn trapezoid_fraction(
    wedge: &Wedge,
    q0: Point2,
    q1: Point2,
    q2: Point2,
    q3: Point2,
    swept: f64,
    eps: f64,
) -> Result<f64> {
    let long_side = Line::from_points(q0, q3);
    let tan_a = Line::tan_angle(&long_side, &wedge.bisector);
    if tan_a.abs() > eps && tan_a.is_finite() {
        // The sweep front's width shrinks (or grows) linearly, so the swept
        // area is quadratic in the travelled height h:
        //   swept = a·h − tanA·h²
        // with a the width at the sweep start. Solve for h and convert to a
        // fraction of the trapezoid height 2·area/(a + b).
        let a = (q1 - q0).norm();
        let b = (q3 - q2).norm();
        let height = 2.0 * wedge.trapezoid_area / (a + b);
        let d = a * a - 4.0 * tan_a * swept;
        // Rounding can push the discriminant marginally negative when the
        // sweep ends exactly at the converging apex; genuinely negative
        // values mean no cut exists.
        if d < -eps * (a * a).max(1.0) {
            return Err(SplitError::NoValidCut);
        }
        let sqrt_d = d.max(0.0).sqrt();
        let lower = (a - sqrt_d) / (2.0 * tan_a);
        let m = lower / height;
        if in_unit_range(m, eps) {
            return Ok(m.clamp(0.0, 1.0));
        }
        let upper = (a + sqrt_d) / (2.0 * tan_a);
        let m = upper / height;
        if in_unit_range(m, eps) {
            return Ok(m.clamp(0.0, 1.0));
        }
        Err(SplitError::NoValidCut)
    } else if wedge.trapezoid_area > eps {
        // Parallel sides: the sweep front keeps its width and area is
        // linear in the fraction.
        Ok((swept / wedge.trapezoid_area).clamp(0.0, 1.0))
    } else {
        Ok(0.0)
    }
}

#[inline]
fn in_unit_range(m: f64, eps: f64) -> bool {
    m >= -eps && m <= 1.0 + eps
}

#[inline]
fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wedge::decompose;
    use approx::assert_relative_eq;
    use polycut_math::Point2;

    const EPS: f64 = 1e-6;
    const HALF_LENGTH: f64 = 10_000.0;

    fn corner_wedge() -> Wedge {
        // Bottom and right edges of the 100-square; lower-right half
        // triangle of area 5000, swept diagonally toward the corner.
        let l1 = Line::from_points(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
        let l2 = Line::from_points(Point2::new(100.0, 0.0), Point2::new(100.0, 100.0));
        decompose(&l1, &l2, HALF_LENGTH, EPS).unwrap()
    }

    fn slab_wedge() -> Wedge {
        // Bottom and top edges of the 100-square; parallel sweep across the
        // whole square.
        let l1 = Line::from_points(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
        let l2 = Line::from_points(Point2::new(100.0, 100.0), Point2::new(0.0, 100.0));
        decompose(&l1, &l2, HALF_LENGTH, EPS).unwrap()
    }

    #[test]
    fn test_parallel_sweep_is_linear() {
        let wedge = slab_wedge();
        let cut = find_cut(5000.0, &wedge, EPS).unwrap();
        // Halfway: a vertical chord of length 100 at x = 50.
        assert_relative_eq!(cut.start().x, 50.0, epsilon = 1e-6);
        assert_relative_eq!(cut.start().y, 100.0, epsilon = 1e-6);
        assert_relative_eq!(cut.end().x, 50.0, epsilon = 1e-6);
        assert_relative_eq!(cut.end().y, 0.0, epsilon = 1e-6);

        let quarter = find_cut(2500.0, &wedge, EPS).unwrap();
        assert_relative_eq!(quarter.end().x, 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_converging_sweep_is_quadratic() {
        let wedge = corner_wedge();
        let cut = find_cut(2500.0, &wedge, EPS).unwrap();
        // Half the corner region: the 45-degree chord at distance √5000
        // from the corner (100, 0), endpoints on x = 100 and y = 0.
        assert_relative_eq!(cut.start().x, 100.0, epsilon = 1e-6);
        assert_relative_eq!(cut.start().y, 5000f64.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(cut.end().x, 100.0 - 5000f64.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(cut.end().y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cut.length(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sweep_endpoints() {
        let wedge = corner_wedge();
        // Zero area: the cut is the sweep-start chord (the hypotenuse).
        let start = find_cut(0.0, &wedge, EPS).unwrap();
        assert_relative_eq!(start.length(), 20_000f64.sqrt(), epsilon = 1e-6);
        // Full area: the cut collapses into the shared corner.
        let full = find_cut(5000.0, &wedge, EPS).unwrap();
        assert_relative_eq!(full.length(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_left_triangle_branch() {
        // L-shape bottom edge and notch edge: corner triangle of area 0.5
        // before a unit-area trapezoid.
        let l1 = Line::from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0));
        let l2 = Line::from_points(Point2::new(2.0, 1.0), Point2::new(1.0, 1.0));
        let wedge = decompose(&l1, &l2, HALF_LENGTH, EPS).unwrap();
        let cut = find_cut(0.25, &wedge, EPS).unwrap();
        // Pivot at the triangle apex (1, 1), far endpoint halfway along the
        // base from (0, 0) to (1, 0).
        assert_relative_eq!(cut.start().x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(cut.start().y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(cut.end().x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(cut.end().y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_right_triangle_branch() {
        // Same L-shape region entered from the other side: the corner
        // triangle is swept last.
        let l1 = Line::from_points(Point2::new(2.0, 1.0), Point2::new(1.0, 1.0));
        let l2 = Line::from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0));
        let wedge = decompose(&l1, &l2, HALF_LENGTH, EPS).unwrap();
        assert!(wedge.p2_exists);
        assert_relative_eq!(wedge.right_area, 0.5, epsilon = 1e-9);
        let cut = find_cut(1.25, &wedge, EPS).unwrap();
        assert_relative_eq!(cut.start().x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(cut.start().y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(cut.end().x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(cut.end().y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_unreachable() {
        let wedge = corner_wedge();
        assert!(matches!(
            find_cut(5001.0, &wedge, EPS),
            Err(SplitError::AreaUnreachable { .. })
        ));
        assert!(matches!(
            find_cut(-1.0, &wedge, EPS),
            Err(SplitError::AreaUnreachable { .. })
        ));
        assert!(matches!(
            find_cut(f64::NAN, &wedge, EPS),
            Err(SplitError::AreaUnreachable { .. })
        ));
    }
}
