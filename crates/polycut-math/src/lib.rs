#![warn(missing_docs)]

//! Math types for the polycut kernel.
//!
//! Thin wrappers around nalgebra providing the 2D types the split engine
//! works with: points, vectors, and the implicit line `A·x + B·y + C = 0`
//! with a bounded extent, together with the line/line queries the engine
//! needs (intersection, angle bisector, tangent angle, projections).

use nalgebra::Vector2;

/// A point in the 2D plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D plane.
pub type Vec2 = Vector2<f64>;

/// Default tolerance for geometric comparisons.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Result of intersecting two unbounded lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines are parallel (or coincident) within tolerance.
    Parallel,
    /// The unique intersection point.
    Point(Point2),
}

/// Result of intersecting two lines restricted to their bounded extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundedIntersection {
    /// The lines are parallel (or coincident) within tolerance.
    Parallel,
    /// The lines intersect, but outside at least one bounded extent.
    OutOfRange,
    /// The intersection point, inside both extents.
    Hit(Point2),
}

/// An implicit 2D line `A·x + B·y + C = 0` carrying a bounded extent.
///
/// Built from two points the extent is exactly the segment between them;
/// built from raw coefficients the extent is synthesized to span
/// ±`half_length` along the line. Invariant: `(A, B) != (0, 0)` — guaranteed
/// when constructed from two distinct points, checked when constructed from
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
    start: Point2,
    end: Point2,
}

impl Line {
    /// Line through `start` and `end`, with extent `[start, end]`.
    ///
    /// The coefficient choice follows the two-point form:
    /// A = y₁ − y₂, B = x₂ − x₁, C = x₁·y₂ − x₂·y₁, so the direction
    /// `(B, -A)` equals `end - start`.
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self {
            a: start.y - end.y,
            b: end.x - start.x,
            c: start.x * end.y - end.x * start.y,
            start,
            end,
        }
    }

    /// Line from implicit coefficients, with a synthesized extent spanning
    /// ±`half_length` around the line's point nearest the origin.
    ///
    /// `half_length` must exceed the working geometry's bounding-box
    /// diagonal or bounded queries may truncate valid results. Returns
    /// `None` when `|A|` and `|B|` are both below `eps` (degenerate line).
    pub fn from_coefficients(a: f64, b: f64, c: f64, half_length: f64, eps: f64) -> Option<Self> {
        if a.abs() < eps && b.abs() < eps {
            return None;
        }
        let n2 = a * a + b * b;
        let anchor = Point2::new(-a * c / n2, -b * c / n2);
        let dir = Vec2::new(b, -a) / n2.sqrt();
        Some(Self {
            a,
            b,
            c,
            start: anchor - dir * half_length,
            end: anchor + dir * half_length,
        })
    }

    /// The `A` coefficient.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `B` coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `C` coefficient.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Start of the bounded extent.
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// End of the bounded extent.
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Length of the bounded extent.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Squared length of the bounded extent.
    pub fn sq_length(&self) -> f64 {
        (self.end - self.start).norm_squared()
    }

    /// The same line with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self::from_points(self.end, self.start)
    }

    /// Intersection of the two unbounded lines.
    ///
    /// Solves the 2×2 linear system by Cramer's rule; `Parallel` when the
    /// determinant magnitude falls below `eps`.
    pub fn intersect(&self, other: &Line, eps: f64) -> LineIntersection {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < eps {
            return LineIntersection::Parallel;
        }
        let x = -(self.c * other.b - other.c * self.b) / det;
        let y = -(self.a * other.c - other.a * self.c) / det;
        LineIntersection::Point(Point2::new(x, y))
    }

    /// Intersection restricted to both lines' bounded extents.
    ///
    /// The range check is per-axis and inclusive within ±`eps`.
    pub fn intersect_bounded(&self, other: &Line, eps: f64) -> BoundedIntersection {
        match self.intersect(other, eps) {
            LineIntersection::Parallel => BoundedIntersection::Parallel,
            LineIntersection::Point(p) => {
                if self.extent_contains(p, eps) && other.extent_contains(p, eps) {
                    BoundedIntersection::Hit(p)
                } else {
                    BoundedIntersection::OutOfRange
                }
            }
        }
    }

    /// Whether `p` lies inside this line's extent, per-axis, inclusive ±`eps`.
    fn extent_contains(&self, p: Point2, eps: f64) -> bool {
        let (x_min, x_max) = min_max(self.start.x, self.end.x);
        let (y_min, y_max) = min_max(self.start.y, self.end.y);
        x_min - eps <= p.x && p.x <= x_max + eps && y_min - eps <= p.y && p.y <= y_max + eps
    }

    /// Angle bisector of two lines.
    ///
    /// Normalizes each coefficient triple by √(A² + B²) and subtracts them
    /// coefficient-wise. Of the two possible bisectors this construction
    /// yields exactly one, fixed by the normalization signs of the inputs.
    /// Returns `None` when the result is degenerate (the inputs are parallel
    /// with identical direction).
    pub fn bisector(l1: &Line, l2: &Line, half_length: f64, eps: f64) -> Option<Line> {
        let q1 = (l1.a * l1.a + l1.b * l1.b).sqrt();
        let q2 = (l2.a * l2.a + l2.b * l2.b).sqrt();
        Line::from_coefficients(
            l1.a / q1 - l2.a / q2,
            l1.b / q1 - l2.b / q2,
            l1.c / q1 - l2.c / q2,
            half_length,
            eps,
        )
    }

    /// Signed tangent of the angle between the two lines' normals.
    ///
    /// Near-zero values flag (anti)parallel lines; the solver uses this to
    /// pick the linear sweep branch for parallel-sided trapezoids.
    pub fn tan_angle(l1: &Line, l2: &Line) -> f64 {
        (l1.a * l2.b - l2.a * l1.b) / (l1.a * l2.a + l1.b * l2.b)
    }

    /// Perpendicular distance from `p` to the unbounded line.
    pub fn distance_to_point(&self, p: Point2) -> f64 {
        (self.a * p.x + self.b * p.y + self.c).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Orthogonal projection of `p` onto the unbounded line.
    pub fn nearest_point_on_line(&self, p: Point2) -> Point2 {
        let dir = Vec2::new(self.b, -self.a);
        let u = (p - self.start).dot(&dir) / dir.norm_squared();
        self.start + dir * u
    }

    /// Closest point to `p` within the bounded extent (projection parameter
    /// clamped to [0, 1]).
    pub fn nearest_point_on_segment(&self, p: Point2) -> Point2 {
        let dir = self.end - self.start;
        let u = ((p - self.start).dot(&dir) / dir.norm_squared()).clamp(0.0, 1.0);
        self.start + dir * u
    }
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
