#![warn(missing_docs)]

//! Area-constrained polygon splitting.
//!
//! This crate splits a simple 2D polygon with a single straight cut into
//! two polygons such that one side has a caller-specified area, choosing
//! among all geometrically valid cuts the one with minimum length. Inputs
//! must already be simple (non-self-intersecting); normalizing them is a
//! pre-processing concern of the caller.
//!
//! # Example
//!
//! ```
//! use polycut::{split, Point2, Polygon, SplitSettings};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(100.0, 0.0),
//!     Point2::new(100.0, 100.0),
//!     Point2::new(0.0, 100.0),
//! ]);
//! let result = split(&square, 5000.0, &SplitSettings::default()).unwrap();
//!
//! assert!((result.poly1.area() - 5000.0).abs() < 1e-6);
//! assert!((result.cut.unwrap().length() - 100.0).abs() < 1e-6);
//! ```

pub mod engine;
pub mod error;
pub mod polygon;
pub mod solver;
pub mod wedge;

pub use error::{Result, SplitError};
pub use polycut_math::{BoundedIntersection, Line, LineIntersection, Point2, Vec2};
pub use polygon::Polygon;
pub use solver::find_cut;
pub use wedge::{decompose, Wedge};

use serde::{Deserialize, Serialize};

/// Splitting parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Tolerance for all geometric comparisons, degeneracy checks, and
    /// boundary inclusions.
    pub eps: f64,
    /// Extent given to synthesized lines (angle bisectors, corner probes).
    /// `None` sizes it to 10× the input's bounding-box diagonal; explicit
    /// values must exceed that diagonal or valid geometry may be truncated.
    pub half_length: Option<f64>,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            half_length: None,
        }
    }
}

impl SplitSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(SplitError::InvalidSettings(
                "eps must be positive and finite".into(),
            ));
        }
        if let Some(h) = self.half_length {
            if !h.is_finite() || h <= 0.0 {
                return Err(SplitError::InvalidSettings(
                    "half_length must be positive and finite".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Which sub-sequence of the winning edge pair received the target area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSide {
    /// The run of vertices `i+1 ..= j` for the winning pair `(i, j)`.
    Inner,
    /// The complementary run `j+1 ..= i`.
    Outer,
}

/// Result of a split operation.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// The piece whose area matches the requested target. The whole input
    /// (or nothing) in the degenerate cases.
    pub poly1: Polygon,
    /// The remaining piece.
    pub poly2: Polygon,
    /// The cut segment separating the pieces; `None` when no cut was
    /// needed.
    pub cut: Option<Line>,
    /// The winning edge pair, when a cut was made.
    pub pair: Option<(usize, usize)>,
    /// Which sub-sequence of the winning pair carries the target area.
    pub side: Option<TargetSide>,
}

/// Split `polygon` into two pieces, the first of area `target_area`, with
/// the shortest straight cut achieving it.
///
/// The polygon must be simple and have at least 3 vertices; its winding may
/// be either orientation (a counter-clockwise working copy is made). Targets
/// within `eps` of zero or of the full area yield a degenerate result with
/// no cut. Fails with [`SplitError::NoValidCut`] when no edge pair admits a
/// solution, which can happen for certain non-convex inputs even when the
/// target is strictly between zero and the polygon's area.
pub fn split(polygon: &Polygon, target_area: f64, settings: &SplitSettings) -> Result<SplitResult> {
    settings.validate()?;
    engine::min_length_split(polygon, target_area, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 100.0),
        ])
    }

    fn regular_polygon(sides: usize, radius: f64) -> Polygon {
        let points = (0..sides)
            .map(|k| {
                let angle = std::f64::consts::TAU * k as f64 / sides as f64;
                Point2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Polygon::new(points)
    }

    #[test]
    fn test_full_area_target_returns_whole_polygon() {
        let sq = square();
        let result = split(&sq, 10_000.0, &SplitSettings::default()).unwrap();
        assert_eq!(result.poly1, sq);
        assert!(result.poly2.is_empty());
        assert!(result.cut.is_none());
        assert!(result.pair.is_none());
    }

    #[test]
    fn test_zero_target_returns_empty_first_piece() {
        let sq = square();
        let result = split(&sq, 0.0, &SplitSettings::default()).unwrap();
        assert!(result.poly1.is_empty());
        assert_eq!(result.poly2, sq);
        assert!(result.cut.is_none());
    }

    #[test]
    fn test_quarter_area_square() {
        // The shortest cuts for a quarter of the square are length 100
        // either way: a 25-wide strip, or the 45-degree corner triangle
        // with legs √5000. Anything shorter cannot bound 2500.
        let result = split(&square(), 2500.0, &SplitSettings::default()).unwrap();
        assert_relative_eq!(result.cut.unwrap().length(), 100.0, epsilon = 1e-6);
        assert_relative_eq!(result.poly1.area(), 2500.0, epsilon = 1e-6);
        assert_relative_eq!(result.poly2.area(), 7500.0, epsilon = 1e-6);
        assert_relative_eq!(
            result.poly1.area() + result.poly2.area(),
            10_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_convex_targets_are_met_exactly() {
        let hexagon = regular_polygon(6, 10.0);
        let total = hexagon.area();
        for fraction in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let target = fraction * total;
            let result = split(&hexagon, target, &SplitSettings::default()).unwrap();
            assert_relative_eq!(result.poly1.area(), target, epsilon = 1e-6);
            assert_relative_eq!(
                result.poly1.area() + result.poly2.area(),
                total,
                epsilon = 1e-6
            );
            // Both pieces keep the working orientation.
            assert!(result.poly1.is_ccw());
            assert!(result.poly2.is_ccw());
        }
    }

    #[test]
    fn test_too_few_vertices() {
        let degenerate = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(
            split(&degenerate, 1.0, &SplitSettings::default()),
            Err(SplitError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        assert!(matches!(
            split(&poly, 0.1, &SplitSettings::default()),
            Err(SplitError::InvalidPolygon(_))
        ));
        assert!(matches!(
            split(&square(), f64::INFINITY, &SplitSettings::default()),
            Err(SplitError::AreaUnreachable { .. })
        ));
        assert!(matches!(
            split(&square(), -5.0, &SplitSettings::default()),
            Err(SplitError::AreaUnreachable { .. })
        ));
    }

    #[test]
    fn test_invalid_settings() {
        let settings = SplitSettings {
            eps: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            split(&square(), 5000.0, &settings),
            Err(SplitError::InvalidSettings(_))
        ));
        let settings = SplitSettings {
            half_length: Some(-1.0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_explicit_half_length() {
        // A generous explicit extent behaves like the automatic default.
        let settings = SplitSettings {
            half_length: Some(10_000.0),
            ..Default::default()
        };
        let result = split(&square(), 5000.0, &settings).unwrap();
        assert_relative_eq!(result.poly1.area(), 5000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_settings_roundtrip_serde() {
        let settings = SplitSettings {
            eps: 1e-9,
            half_length: Some(42.0),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SplitSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.eps, settings.eps);
        assert_eq!(back.half_length, settings.half_length);
    }
}
