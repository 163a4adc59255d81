//! Profile geometry: named points, arcs, segments, and the mirror transform.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circular arc given by its radius and center.
///
/// The arc is implicitly bounded by two named profile points; both endpoints
/// lie at distance `radius` from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    /// Arc radius, always positive.
    pub radius: f64,
    /// Arc center.
    pub center: Point2<f64>,
}

impl Arc {
    /// Create an arc from radius and center coordinates.
    #[must_use]
    pub fn new(radius: f64, cx: f64, cy: f64) -> Self {
        Self {
            radius,
            center: Point2::new(cx, cy),
        }
    }

    /// Check that a point lies on this arc's circle, with a tolerance
    /// scaled by the radius so sub-unit arcs are held to the same relative
    /// accuracy as large ones.
    #[must_use]
    pub fn on_circle(&self, point: Point2<f64>, relative_tolerance: f64) -> bool {
        let distance = (point - self.center).norm();
        (distance - self.radius).abs() <= relative_tolerance * self.radius.abs()
    }
}

/// A straight segment of the profile wall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point2<f64>,
    /// End point.
    pub end: Point2<f64>,
}

impl Segment {
    /// Create a segment between two points.
    #[must_use]
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// Segment length; zero-length segments are valid (unused extensions).
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// The ten named points of one half-profile, ordered along the wall from
/// the vessel's near end (A1) to its far end (E1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub struct ProfilePoints {
    pub a1: Point2<f64>,
    pub a: Point2<f64>,
    pub f: Point2<f64>,
    pub g: Point2<f64>,
    pub h: Point2<f64>,
    pub i1: Point2<f64>,
    pub i2: Point2<f64>,
    pub d: Point2<f64>,
    pub e: Point2<f64>,
    pub e1: Point2<f64>,
}

/// The six arcs of one half-profile in wall order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub struct ProfileArcs {
    pub af: Arc,
    pub fg: Arc,
    pub hi1: Arc,
    pub i1i2: Arc,
    pub i2d: Arc,
    pub de: Arc,
}

/// The three straight segments of one half-profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub struct ProfileSegments {
    /// Leaflet thickness edge from H to G.
    pub hg: Segment,
    /// Bottom axial extension from A to A1.
    pub aa1: Segment,
    /// Top axial extension from E to E1.
    pub ee1: Segment,
}

/// One half (left or right) of the valve cross-section.
///
/// Consecutive arcs and segments share endpoints; the fillet arc `I1I2` is
/// internally tangent to both `HI1` and `I2D`. Profiles are immutable value
/// types: each solve produces a fresh one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    /// Named wall points.
    pub points: ProfilePoints,
    /// Wall arcs.
    pub arcs: ProfileArcs,
    /// Straight wall segments.
    pub segments: ProfileSegments,
}

impl Profile {
    /// The named points in wall order, for display tables and serialization.
    #[must_use]
    pub fn named_points(&self) -> [(&'static str, Point2<f64>); 10] {
        let p = &self.points;
        [
            ("A1", p.a1),
            ("A", p.a),
            ("F", p.f),
            ("G", p.g),
            ("H", p.h),
            ("I1", p.i1),
            ("I2", p.i2),
            ("D", p.d),
            ("E", p.e),
            ("E1", p.e1),
        ]
    }

    /// The named arcs in wall order.
    #[must_use]
    pub fn named_arcs(&self) -> [(&'static str, Arc); 6] {
        let a = &self.arcs;
        [
            ("AF", a.af),
            ("FG", a.fg),
            ("HI1", a.hi1),
            ("I1I2", a.i1i2),
            ("I2D", a.i2d),
            ("DE", a.de),
        ]
    }

    /// The named segments.
    #[must_use]
    pub fn named_segments(&self) -> [(&'static str, Segment); 3] {
        let s = &self.segments;
        [("HG", s.hg), ("AA1", s.aa1), ("EE1", s.ee1)]
    }

    /// Reflect this profile across the symmetry axis (x = 0).
    ///
    /// Radii, lengths, and adjacency are preserved exactly; this is a pure
    /// reflection, not a re-solve, and applying it twice reproduces the
    /// original profile bit for bit.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mirror_point = |p: Point2<f64>| Point2::new(-p.x, p.y);
        let mirror_arc = |a: Arc| Arc {
            radius: a.radius,
            center: mirror_point(a.center),
        };
        let mirror_segment = |s: Segment| Segment {
            start: mirror_point(s.start),
            end: mirror_point(s.end),
        };

        let p = &self.points;
        Self {
            points: ProfilePoints {
                a1: mirror_point(p.a1),
                a: mirror_point(p.a),
                f: mirror_point(p.f),
                g: mirror_point(p.g),
                h: mirror_point(p.h),
                i1: mirror_point(p.i1),
                i2: mirror_point(p.i2),
                d: mirror_point(p.d),
                e: mirror_point(p.e),
                e1: mirror_point(p.e1),
            },
            arcs: ProfileArcs {
                af: mirror_arc(self.arcs.af),
                fg: mirror_arc(self.arcs.fg),
                hi1: mirror_arc(self.arcs.hi1),
                i1i2: mirror_arc(self.arcs.i1i2),
                i2d: mirror_arc(self.arcs.i2d),
                de: mirror_arc(self.arcs.de),
            },
            segments: ProfileSegments {
                hg: mirror_segment(self.segments.hg),
                aa1: mirror_segment(self.segments.aa1),
                ee1: mirror_segment(self.segments.ee1),
            },
        }
    }
}

/// Both halves of the cross-section: the solved left profile and its mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossSection {
    /// Left half (negative x).
    pub left: Profile,
    /// Right half, mirror of the left.
    pub right: Profile,
}
