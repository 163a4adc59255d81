//! Parametric 2-D profile solver for an axisymmetric venous-valve geometry.
//!
//! Given seven physical parameters (plus two optional axial extensions),
//! this crate derives one half of the vein-sinus-leaflet cross-section as a
//! chain of tangent circular arcs and straight segments, mirrors it across
//! the symmetry axis, and assembles the closed boundary loop of the lumen:
//!
//! - [`ValveParams`] - the nine input parameters with canonical defaults
//! - [`solve_profile`] / [`solve_cross_section`] - the arc/fillet solver
//! - [`Profile::mirrored`] - the exact reflection onto the other half
//! - [`wall_polyline`] / [`boundary_loop`] - dense polyline sampling
//!
//! # Coordinate System
//!
//! The symmetry axis is `x = 0`; the left half lives at negative x. The
//! y axis is the axial (flow) direction, with A at `y = 0` and E at
//! `y = lam`. All coordinates are `f64` in one arbitrary model unit.
//!
//! # Example
//!
//! ```
//! use valve_profile::{boundary_loop, solve_cross_section, ValveParams, DEFAULT_ARC_SAMPLES};
//!
//! let section = solve_cross_section(&ValveParams::default()).unwrap();
//! assert_eq!(section.left.named_arcs().len(), 6);
//!
//! let loop_points = boundary_loop(&section, DEFAULT_ARC_SAMPLES);
//! assert!(loop_points.len() > 100);
//! ```
//!
//! # Errors
//!
//! Every physically invalid parameter set is rejected with a dedicated
//! [`ProfileError`] variant before any partial geometry escapes; the solver
//! never clamps or guesses.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod polyline;
mod profile;
mod solve;

pub use error::{ProfileError, ProfileResult};
pub use params::ValveParams;
pub use polyline::{
    boundary_loop, sample_arc, wall_polyline, DEFAULT_ARC_SAMPLES, STITCH_TOLERANCE,
};
pub use profile::{
    Arc, CrossSection, Profile, ProfileArcs, ProfilePoints, ProfileSegments, Segment,
};
pub use solve::{solve_cross_section, solve_profile};

// Re-export the point type used throughout the public API.
pub use nalgebra::Point2;
