//! Arc sampling, wall polylines, and the closed boundary loop.

use nalgebra::Point2;

use crate::profile::{Arc, CrossSection, Profile};

/// Default number of samples per arc when tracing a wall.
///
/// Dense enough that chord error is far below the stitching tolerance for
/// physiological parameter ranges; tune down for coarser previews.
pub const DEFAULT_ARC_SAMPLES: usize = 180;

/// Tolerance under which two consecutive polyline points are considered
/// coincident and merged.
pub const STITCH_TOLERANCE: f64 = 1e-9;

fn coincident(a: Point2<f64>, b: Point2<f64>) -> bool {
    (a.x - b.x).abs() <= STITCH_TOLERANCE && (a.y - b.y).abs() <= STITCH_TOLERANCE
}

/// Sample an arc between two of its endpoints.
///
/// Start and end angles come from `atan2`; the end angle is then shifted by
/// whole turns until the sweep magnitude is at most pi, so the sampler
/// always follows the shorter arc between the endpoints regardless of the
/// `atan2` branch the endpoints land on. Both endpoints are included.
#[must_use]
pub fn sample_arc(
    arc: &Arc,
    from: Point2<f64>,
    to: Point2<f64>,
    samples: usize,
) -> Vec<Point2<f64>> {
    let samples = samples.max(2);
    let start = (from.y - arc.center.y).atan2(from.x - arc.center.x);
    let mut end = (to.y - arc.center.y).atan2(to.x - arc.center.x);

    while end - start > std::f64::consts::PI {
        end -= 2.0 * std::f64::consts::PI;
    }
    while end - start < -std::f64::consts::PI {
        end += 2.0 * std::f64::consts::PI;
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (samples as f64 - 1.0);
    (0..samples)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = start + step * i as f64;
            Point2::new(
                arc.center.x + arc.radius * angle.cos(),
                arc.center.y + arc.radius * angle.sin(),
            )
        })
        .collect()
}

/// Append an arc's samples to a polyline, merging the shared endpoint.
fn append_arc(
    polyline: &mut Vec<Point2<f64>>,
    arc: &Arc,
    from: Point2<f64>,
    to: Point2<f64>,
    samples: usize,
) {
    let points = sample_arc(arc, from, to, samples);
    let skip_first = polyline
        .last()
        .is_some_and(|last| coincident(*last, points[0]));
    let start = usize::from(skip_first);
    polyline.extend_from_slice(&points[start..]);
}

/// Append a single point unless it coincides with the current tail.
fn append_point(polyline: &mut Vec<Point2<f64>>, point: Point2<f64>) {
    if !polyline.last().is_some_and(|last| coincident(*last, point)) {
        polyline.push(point);
    }
}

/// Trace one half-profile's wall from A1 to E1 as an ordered polyline.
///
/// The walk follows the wall order A1, A, arcs AF and FG up to the free
/// edge G, jumps across the leaflet thickness to H, then follows HI1, the
/// fillet, I2D, and DE down to E and E1. Zero extensions collapse A1/A and
/// E/E1 into single points.
#[must_use]
pub fn wall_polyline(profile: &Profile, samples: usize) -> Vec<Point2<f64>> {
    let p = &profile.points;
    let a = &profile.arcs;

    let mut polyline = vec![p.a1];
    append_point(&mut polyline, p.a);
    append_arc(&mut polyline, &a.af, p.a, p.f, samples);
    append_arc(&mut polyline, &a.fg, p.f, p.g, samples);

    // Leaflet thickness edge: G across to H.
    append_point(&mut polyline, p.g);
    append_point(&mut polyline, p.h);

    append_arc(&mut polyline, &a.hi1, p.h, p.i1, samples);
    append_arc(&mut polyline, &a.i1i2, p.i1, p.i2, samples);
    append_arc(&mut polyline, &a.i2d, p.i2, p.d, samples);
    append_arc(&mut polyline, &a.de, p.d, p.e, samples);

    append_point(&mut polyline, p.e);
    append_point(&mut polyline, p.e1);
    polyline
}

/// Assemble the closed boundary loop of the full lumen.
///
/// Left wall up (A1 to E1), top cap across to the right wall's E1, right
/// wall down (E1 to A1), bottom cap back to the start. Consecutive
/// duplicates are merged and the closing vertex is implicit: the last point
/// does not repeat the first.
#[must_use]
pub fn boundary_loop(section: &CrossSection, samples: usize) -> Vec<Point2<f64>> {
    let left = wall_polyline(&section.left, samples);
    let right = wall_polyline(&section.right, samples);

    let mut loop_points: Vec<Point2<f64>> = Vec::with_capacity(left.len() + right.len() + 2);
    for point in left {
        append_point(&mut loop_points, point);
    }
    for point in right.into_iter().rev() {
        append_point(&mut loop_points, point);
    }

    // Drop a trailing point that closes onto the start; closure is implicit.
    while loop_points.len() > 1 {
        let first = loop_points[0];
        let last = loop_points[loop_points.len() - 1];
        if !coincident(first, last) {
            break;
        }
        loop_points.pop();
    }
    loop_points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{solve_cross_section, solve_profile, ValveParams};
    use approx::assert_relative_eq;

    #[test]
    fn sample_arc_endpoints_match() {
        let arc = Arc::new(1.0, 0.0, 0.0);
        let from = Point2::new(1.0, 0.0);
        let to = Point2::new(0.0, 1.0);
        let points = sample_arc(&arc, from, to, 50);
        assert_eq!(points.len(), 50);
        assert_relative_eq!(points[0].x, from.x, epsilon = 1e-12);
        assert_relative_eq!(points[49].y, to.y, epsilon = 1e-12);
        for point in &points {
            assert_relative_eq!((point - arc.center).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sample_arc_takes_shorter_sweep_across_branch_cut() {
        // Endpoints straddle the atan2 discontinuity at pi; the shorter
        // sweep passes through (-1, 0), not around through (1, 0).
        let arc = Arc::new(1.0, 0.0, 0.0);
        let from = Point2::new(-0.8, 0.6);
        let to = Point2::new(-0.8, -0.6);
        let points = sample_arc(&arc, from, to, 101);
        let mid = points[50];
        assert!(mid.x < -0.99);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn wall_polyline_runs_from_a1_to_e1() {
        let profile = solve_profile(&ValveParams::default()).unwrap();
        let polyline = wall_polyline(&profile, DEFAULT_ARC_SAMPLES);
        assert!(polyline.len() > 6 * DEFAULT_ARC_SAMPLES / 2);
        assert_relative_eq!(polyline[0].y, profile.points.a1.y);
        assert_relative_eq!(polyline.last().unwrap().y, profile.points.e1.y);
        // No repeated adjacent vertices.
        for pair in polyline.windows(2) {
            assert!(!coincident(pair[0], pair[1]));
        }
    }

    #[test]
    fn wall_polyline_includes_extensions() {
        let params = ValveParams::default().with_extensions(0.5, 0.5);
        let profile = solve_profile(&params).unwrap();
        let polyline = wall_polyline(&profile, 30);
        assert_relative_eq!(polyline[0].y, -0.5);
        assert_relative_eq!(polyline.last().unwrap().y, 3.5);
    }

    #[test]
    fn boundary_loop_is_closed_and_deduplicated() {
        let section = solve_cross_section(&ValveParams::default()).unwrap();
        let loop_points = boundary_loop(&section, 60);

        for pair in loop_points.windows(2) {
            assert!(!coincident(pair[0], pair[1]));
        }
        // The closing vertex is implicit.
        assert!(!coincident(loop_points[0], *loop_points.last().unwrap()));

        // Symmetric about x = 0: leftmost and rightmost excursions match.
        let min_x = loop_points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = loop_points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min_x, -max_x, epsilon = 1e-9);
    }

    #[test]
    fn boundary_loop_is_simple() {
        // No two non-adjacent edges intersect.
        let section = solve_cross_section(&ValveParams::default()).unwrap();
        let pts = boundary_loop(&section, 24);
        let n = pts.len();

        let segments_intersect = |a: Point2<f64>, b: Point2<f64>, c: Point2<f64>, d: Point2<f64>| {
            let orient = |p: Point2<f64>, q: Point2<f64>, r: Point2<f64>| {
                (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
            };
            let d1 = orient(c, d, a);
            let d2 = orient(c, d, b);
            let d3 = orient(a, b, c);
            let d4 = orient(a, b, d);
            ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
                && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        };

        for i in 0..n {
            for j in (i + 2)..n {
                // Skip adjacent edges, including the wrap-around pair.
                if i == 0 && j == n - 1 {
                    continue;
                }
                assert!(
                    !segments_intersect(
                        pts[i],
                        pts[(i + 1) % n],
                        pts[j],
                        pts[(j + 1) % n]
                    ),
                    "edges {i} and {j} intersect"
                );
            }
        }
    }
}
