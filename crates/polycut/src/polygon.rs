//! Closed polygon paths with cyclic vertex indexing.

use polycut_math::Point2;

/// A 2D polygon (closed path).
///
/// Vertices are indexed modulo the vertex count; negative indices wrap from
/// the end, so `point(-1)` is the last vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Vertices of the polygon in order.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Create a new polygon from points.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Check if the polygon is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Vertex at `index` modulo the vertex count, negative-safe.
    ///
    /// Panics on an empty polygon.
    pub fn point(&self, index: isize) -> Point2 {
        let n = self.points.len() as isize;
        self.points[index.rem_euclid(n) as usize]
    }

    /// Signed area of the polygon.
    /// Positive for counter-clockwise, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area / 2.0
    }

    /// Absolute area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Is the polygon counter-clockwise?
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse the winding order.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Reverse the vertex order iff the current winding differs from the
    /// requested one (`clockwise = false` forces counter-clockwise).
    pub fn rewind(&mut self, clockwise: bool) {
        if self.is_ccw() == clockwise {
            self.reverse();
        }
    }

    /// Perimeter length.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            length += (self.points[j] - self.points[i]).norm();
        }
        length
    }

    /// Vertex centroid (arithmetic mean of the vertices).
    pub fn centroid(&self) -> Point2 {
        if self.points.is_empty() {
            return Point2::origin();
        }
        let sum = self
            .points
            .iter()
            .fold(Point2::origin(), |acc, p| Point2::new(acc.x + p.x, acc.y + p.y));
        Point2::new(
            sum.x / self.points.len() as f64,
            sum.y / self.points.len() as f64,
        )
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Point-in-polygon test (even-odd rule). Boundary points may land on
    /// either side.
    pub fn contains_point(&self, p: Point2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if (a.y <= p.y && p.y < b.y || b.y <= p.y && p.y < a.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
        }
        inside
    }

    /// Closest boundary point to `p`, or `None` when the polygon has fewer
    /// than two vertices.
    pub fn nearest_point_to(&self, p: Point2) -> Option<Point2> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        let mut best = None;
        let mut best_sq = f64::INFINITY;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let ab = b - a;
            let len_sq = ab.norm_squared();
            if len_sq == 0.0 {
                continue;
            }
            let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
            let q = a + ab * t;
            let d_sq = (p - q).norm_squared();
            if d_sq < best_sq {
                best_sq = d_sq;
                best = Some(q);
            }
        }
        best
    }

    /// Distance from `p` to the polygon boundary.
    pub fn distance_to(&self, p: Point2) -> Option<f64> {
        self.nearest_point_to(p).map(|q| (p - q).norm())
    }

    /// Split the cyclic vertex sequence at two edges.
    ///
    /// For edges `i` and `j` (`i < j`) the first polygon is the run of
    /// vertices `i+1 ..= j` and the second is the complementary run
    /// `j+1 ..= i` (indices modulo the vertex count). Together with the two
    /// cut points on those edges these are the boundaries of the two pieces
    /// of a trial split.
    pub fn sub_sequences(&self, i: usize, j: usize) -> (Polygon, Polygon) {
        let n = self.points.len();
        let first_len = j - i;
        let mut first = Vec::with_capacity(first_len);
        for k in 1..=first_len {
            first.push(self.point((i + k) as isize));
        }
        let mut second = Vec::with_capacity(n - first_len);
        for k in 1..=(n - first_len) {
            second.push(self.point((j + k) as isize));
        }
        (Polygon::new(first), Polygon::new(second))
    }

    /// Drop consecutive vertices closer than `eps`, including the wrap-around
    /// pair. Used when splicing cut endpoints that may coincide with
    /// existing vertices.
    pub fn dedup(&mut self, eps: f64) {
        if self.points.len() < 2 {
            return;
        }
        let mut kept: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if kept.last().map_or(true, |last| (p - last).norm() > eps) {
                kept.push(*p);
            }
        }
        while kept.len() > 1 {
            let first = kept[0];
            let last = kept[kept.len() - 1];
            if (first - last).norm() > eps {
                break;
            }
            kept.pop();
        }
        self.points = kept;
    }
}
