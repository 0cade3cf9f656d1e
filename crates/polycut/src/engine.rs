//! Edge-pair enumeration and minimum-length cut selection.
//!
//! Every unordered pair of polygon edges defines a candidate region to cut
//! through. Each pair is decomposed, solved for both possible target-side
//! assignments, and the shortest successful cut across the whole
//! enumeration wins. Pair evaluations are independent and run in parallel;
//! the reduction uses a strict total order so the winner does not depend on
//! reduction order.

use rayon::prelude::*;

use polycut_math::Line;

use crate::error::{Result, SplitError};
use crate::polygon::Polygon;
use crate::solver::find_cut;
use crate::wedge::decompose;
use crate::{SplitResult, SplitSettings, TargetSide};

/// One successful solve for a candidate edge pair.
#[derive(Debug, Clone)]
struct Candidate {
    cut: Line,
    sq_length: f64,
    pair: (usize, usize),
    side: TargetSide,
}

/// Split `input` into two polygons, one of area `target_area`, with the
/// shortest straight cut that achieves it.
pub(crate) fn min_length_split(
    input: &Polygon,
    target_area: f64,
    settings: &SplitSettings,
) -> Result<SplitResult> {
    let eps = settings.eps;
    if input.len() < 3 {
        return Err(SplitError::InvalidPolygon(format!(
            "{} vertices, need at least 3",
            input.len()
        )));
    }
    if input
        .points
        .iter()
        .any(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(SplitError::InvalidPolygon(
            "non-finite vertex coordinates".into(),
        ));
    }
    if !target_area.is_finite() || target_area < -eps {
        return Err(SplitError::AreaUnreachable {
            target: target_area,
            available: input.area(),
        });
    }

    let mut polygon = input.clone();
    polygon.rewind(false);
    let total = polygon.area();

    // Degenerate targets need no cut: the whole polygon goes to one side.
    if total - target_area <= eps {
        return Ok(SplitResult {
            poly1: input.clone(),
            poly2: Polygon::default(),
            cut: None,
            pair: None,
            side: None,
        });
    }
    if target_area <= eps {
        return Ok(SplitResult {
            poly1: Polygon::default(),
            poly2: input.clone(),
            cut: None,
            pair: None,
            side: None,
        });
    }

    let half_length = match settings.half_length {
        Some(h) => h,
        None => {
            let (min, max) = polygon
                .bounding_box()
                .ok_or_else(|| SplitError::InvalidPolygon("no vertices".into()))?;
            10.0 * (max - min).norm()
        }
    };

    let n = polygon.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let best = pairs
        .par_iter()
        .flat_map_iter(|&(i, j)| evaluate_pair(&polygon, i, j, target_area, half_length, eps))
        .min_by(compare_candidates);

    match best {
        Some(candidate) => Ok(assemble(&polygon, &candidate, eps)),
        None => Err(SplitError::NoValidCut),
    }
}

/// Try both target-side assignments for the edge pair `(i, j)`.
fn evaluate_pair(
    polygon: &Polygon,
    i: usize,
    j: usize,
    target: f64,
    half_length: f64,
    eps: f64,
) -> Vec<Candidate> {
    let mut found = Vec::new();
    let i_start = polygon.point(i as isize);
    let i_end = polygon.point(i as isize + 1);
    let j_start = polygon.point(j as isize);
    let j_end = polygon.point(j as isize + 1);
    // Zero-length edges define no cut direction.
    if (i_end - i_start).norm() <= eps || (j_end - j_start).norm() <= eps {
        return found;
    }
    let l1 = Line::from_points(i_start, i_end);
    let l2 = Line::from_points(j_start, j_end);
    let (inner, outer) = polygon.sub_sequences(i, j);

    // Assign the target to the inner run: the piece's area is the run's
    // signed area plus whatever the cut sweeps from the chord closing it,
    // so the sweep starts at that chord (edges passed in reverse order).
    let swept = target - inner.signed_area();
    if swept > -eps {
        if let Some(wedge) = decompose(&l2, &l1, half_length, eps) {
            if let Ok(cut) = find_cut(swept, &wedge, eps) {
                push_candidate(&mut found, cut.reversed(), (i, j), TargetSide::Inner);
            }
        }
    }

    // Assign the target to the outer run (sweep from the opposite chord).
    let swept = target - outer.signed_area();
    if swept > -eps {
        if let Some(wedge) = decompose(&l1, &l2, half_length, eps) {
            if let Ok(cut) = find_cut(swept, &wedge, eps) {
                push_candidate(&mut found, cut, (i, j), TargetSide::Outer);
            }
        }
    }

    found
}

fn push_candidate(found: &mut Vec<Candidate>, cut: Line, pair: (usize, usize), side: TargetSide) {
    let sq_length = cut.sq_length();
    if sq_length.is_finite() {
        found.push(Candidate {
            cut,
            sq_length,
            pair,
            side,
        });
    }
}

/// Strict total order on candidates: squared length, then edge pair, then
/// side. Exact float comparison keeps the order total, so the parallel
/// reduction is deterministic; candidates within tolerance of the minimum
/// differ only in the tie-break keys.
fn compare_candidates(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
    a.sq_length
        .partial_cmp(&b.sq_length)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| a.pair.cmp(&b.pair))
        .then_with(|| side_rank(a.side).cmp(&side_rank(b.side)))
}

fn side_rank(side: TargetSide) -> u8 {
    match side {
        TargetSide::Inner => 0,
        TargetSide::Outer => 1,
    }
}

/// Materialize the two pieces for the winning candidate: each sub-sequence
/// closed by the cut endpoints on its bounding edges, with coincident
/// vertices collapsed.
fn assemble(polygon: &Polygon, candidate: &Candidate, eps: f64) -> SplitResult {
    let (i, j) = candidate.pair;
    let (inner, outer) = polygon.sub_sequences(i, j);
    // By convention the cut runs from edge j's line to edge i's line.
    let on_edge_j = candidate.cut.start();
    let on_edge_i = candidate.cut.end();

    let mut inner_points = Vec::with_capacity(inner.len() + 2);
    inner_points.push(on_edge_i);
    inner_points.extend(inner.points.iter().copied());
    inner_points.push(on_edge_j);
    let mut inner_piece = Polygon::new(inner_points);
    inner_piece.dedup(eps);

    let mut outer_points = Vec::with_capacity(outer.len() + 2);
    outer_points.push(on_edge_j);
    outer_points.extend(outer.points.iter().copied());
    outer_points.push(on_edge_i);
    let mut outer_piece = Polygon::new(outer_points);
    outer_piece.dedup(eps);

    let (poly1, poly2) = match candidate.side {
        TargetSide::Inner => (inner_piece, outer_piece),
        TargetSide::Outer => (outer_piece, inner_piece),
    };
    SplitResult {
        poly1,
        poly2,
        cut: Some(candidate.cut),
        pair: Some(candidate.pair),
        side: Some(candidate.side),
    }
}
