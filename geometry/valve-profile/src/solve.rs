//! Closed-form solver for the half-profile's points, arcs, and fillet.

use nalgebra::Point2;

use crate::error::{ProfileError, ProfileResult};
use crate::params::ValveParams;
use crate::profile::{Arc, CrossSection, Profile, ProfileArcs, ProfilePoints, ProfileSegments, Segment};

/// One of the two fillet placements produced by the circle-circle
/// intersection, together with its tangent points on the neighbor arcs.
#[derive(Debug, Clone, Copy)]
struct FilletCandidate {
    /// Candidate fillet center.
    center: Point2<f64>,
    /// Tangent point on the leaflet arc HI1.
    leaflet_tangent: Point2<f64>,
    /// Tangent point on the sinus arc I2D.
    sinus_tangent: Point2<f64>,
}

impl FilletCandidate {
    /// Average y of the two tangent points, the tie-break key: the lower
    /// placement is the physical fillet, the higher one is a mirror
    /// artifact of the intersection equation.
    fn mean_tangent_height(&self) -> f64 {
        (self.leaflet_tangent.y + self.sinus_tangent.y) * 0.5
    }
}

/// Intersect two circles, returning the "plus" and "minus" solutions.
///
/// Degenerate configurations (coincident centers, separated or nested
/// circles) have no fillet placement and are rejected. A tangent contact
/// (`h^2` rounding slightly negative) collapses both solutions onto the
/// chord point.
fn circle_intersections(
    c1: Point2<f64>,
    r1: f64,
    c2: Point2<f64>,
    r2: f64,
) -> ProfileResult<(Point2<f64>, Point2<f64>)> {
    let delta = c2 - c1;
    let distance = delta.norm();
    if distance == 0.0 || distance > r1 + r2 || distance < (r1 - r2).abs() {
        return Err(ProfileError::NoFilletSolution {
            center_distance: distance,
            radius_a: r1,
            radius_b: r2,
        });
    }

    let along = (r1 * r1 - r2 * r2 + distance * distance) / (2.0 * distance);
    let h_squared = r1 * r1 - along * along;
    let h = if h_squared < 0.0 { 0.0 } else { h_squared.sqrt() };

    let mid = c1 + delta * (along / distance);
    let normal = nalgebra::Vector2::new(-delta.y / distance, delta.x / distance);
    Ok((mid + normal * h, mid - normal * h))
}

/// Project from an arc center through a candidate fillet center onto the
/// arc circle, giving the tangency point.
fn tangent_point(
    arc_center: Point2<f64>,
    arc_radius: f64,
    toward: Point2<f64>,
) -> ProfileResult<Point2<f64>> {
    let direction = toward - arc_center;
    let distance = direction.norm();
    if distance == 0.0 {
        return Err(ProfileError::DegenerateTangent);
    }
    Ok(arc_center + direction * (arc_radius / distance))
}

/// Radius of the circle through both ends of a chord of half-width
/// `half_gap` spanning an axial run of `span`, tangent at the near end.
///
/// This is the original design's closed-form rule; it is taken as given
/// rather than re-derived.
fn tangent_circle_radius(half_gap: f64, span: f64) -> f64 {
    half_gap / 4.0 + span * span / (16.0 * half_gap)
}

/// Solve the left half-profile for the given parameters.
///
/// Pure function: no state is read or written, and a failed solve returns
/// no partial geometry.
///
/// # Errors
///
/// Any violated precondition from [`ProfileError`]; parameter-level checks
/// run before any point is placed.
///
/// # Example
///
/// ```
/// use valve_profile::{solve_profile, ValveParams};
///
/// let profile = solve_profile(&ValveParams::default()).unwrap();
/// assert_eq!(profile.named_points().len(), 10);
/// assert!(profile.segments.hg.length() > 0.0);
/// ```
pub fn solve_profile(params: &ValveParams) -> ProfileResult<Profile> {
    params.validate()?;

    let a = params.vein_radius;
    let b = params.sinus_radius;
    let lam = params.sinus_length;
    let z_d = params.axial_offset;
    let w_e = params.edge_spacing;
    let t_l = params.leaflet_thickness;
    let r_f = params.fillet_radius;

    // Named points of the left wall. F and D are interior control points at
    // one quarter and three quarters of the effective span.
    let point_a = Point2::new(-a, 0.0);
    let point_f = Point2::new(-a / 2.0 - w_e / 4.0, lam / 4.0 + z_d / 2.0);
    let point_g = Point2::new(-w_e / 2.0, lam / 2.0 + z_d);
    let point_h = Point2::new(-w_e / 2.0 - t_l, lam / 2.0 + z_d);
    let point_d = Point2::new(-(a + b) / 2.0, 3.0 * lam / 4.0);
    let point_e = Point2::new(-a, lam);
    let point_a1 = Point2::new(point_a.x, point_a.y - params.extension_bottom);
    let point_e1 = Point2::new(point_e.x, point_e.y + params.extension_top);

    // Equal radii for the AF/FG pair, driven by the vein-to-edge gap and
    // the axial run up to the free edge; the leaflet interior arc sits one
    // thickness inside it.
    let r_upper = tangent_circle_radius(a - w_e / 2.0, lam + 2.0 * z_d);
    let r_leaflet = r_upper - t_l;
    if r_leaflet <= 0.0 {
        return Err(ProfileError::LeafletTooThick {
            thickness: t_l,
            interior_radius: r_leaflet,
        });
    }

    // Equal radii for the I2D/DE pair, driven by the sinus bulge over the
    // sinus length.
    let r_sinus = tangent_circle_radius(b - a, lam);

    let arc_af = Arc::new(r_upper, -a + r_upper, 0.0);
    let arc_fg = Arc::new(r_upper, -w_e / 2.0 - r_upper, lam / 2.0 + z_d);
    let arc_hi1 = Arc::new(r_leaflet, arc_fg.center.x, arc_fg.center.y);
    let arc_i2d = Arc::new(r_sinus, -b + r_sinus, lam / 2.0);
    let arc_de = Arc::new(r_sinus, -a - r_sinus, lam);

    let fillet_limit = r_leaflet.min(r_sinus);
    if r_f <= 0.0 || r_f >= fillet_limit {
        return Err(ProfileError::InvalidFilletRadius {
            fillet_radius: r_f,
            limit: fillet_limit,
        });
    }

    // The fillet center lies on both circles shrunk by Rf; of the two
    // intersections, the physically correct placement is the lower one.
    let (center_plus, center_minus) = circle_intersections(
        arc_hi1.center,
        r_leaflet - r_f,
        arc_i2d.center,
        r_sinus - r_f,
    )?;

    let candidate = select_fillet(
        fillet_candidate(&arc_hi1, &arc_i2d, center_plus)?,
        fillet_candidate(&arc_hi1, &arc_i2d, center_minus)?,
    );

    let arc_fillet = Arc {
        radius: r_f,
        center: candidate.center,
    };

    Ok(Profile {
        points: ProfilePoints {
            a1: point_a1,
            a: point_a,
            f: point_f,
            g: point_g,
            h: point_h,
            i1: candidate.leaflet_tangent,
            i2: candidate.sinus_tangent,
            d: point_d,
            e: point_e,
            e1: point_e1,
        },
        arcs: ProfileArcs {
            af: arc_af,
            fg: arc_fg,
            hi1: arc_hi1,
            i1i2: arc_fillet,
            i2d: arc_i2d,
            de: arc_de,
        },
        segments: ProfileSegments {
            hg: Segment::new(point_h, point_g),
            aa1: Segment::new(point_a, point_a1),
            ee1: Segment::new(point_e, point_e1),
        },
    })
}

/// Build the tangent points for one candidate fillet center.
fn fillet_candidate(
    leaflet_arc: &Arc,
    sinus_arc: &Arc,
    center: Point2<f64>,
) -> ProfileResult<FilletCandidate> {
    Ok(FilletCandidate {
        center,
        leaflet_tangent: tangent_point(leaflet_arc.center, leaflet_arc.radius, center)?,
        sinus_tangent: tangent_point(sinus_arc.center, sinus_arc.radius, center)?,
    })
}

/// Pick the lower of the two fillet placements; ties go to the plus branch.
fn select_fillet(plus: FilletCandidate, minus: FilletCandidate) -> FilletCandidate {
    if plus.mean_tangent_height() <= minus.mean_tangent_height() {
        plus
    } else {
        minus
    }
}

/// Solve the left half and mirror it into the full cross-section.
///
/// # Errors
///
/// Same conditions as [`solve_profile`].
pub fn solve_cross_section(params: &ValveParams) -> ProfileResult<CrossSection> {
    let left = solve_profile(params)?;
    let right = left.mirrored();
    Ok(CrossSection { left, right })
}
