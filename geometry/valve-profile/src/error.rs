//! Error types for profile solving.

use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while validating parameters or solving the profile.
///
/// Every variant is an input-validation failure: the solver never returns
/// partial geometry, and no variant indicates an internal bug.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Vein radius does not clear half the leaflet edge spacing.
    #[error("vein radius {vein_radius} must exceed half the edge spacing ({edge_spacing} / 2)")]
    InvalidVeinGeometry {
        /// Vein radius `a`.
        vein_radius: f64,
        /// Leaflet edge spacing `wE`.
        edge_spacing: f64,
    },

    /// Sinus maximum radius does not exceed the vein radius.
    #[error("sinus radius {sinus_radius} must exceed the vein radius {vein_radius}")]
    InvalidSinusGeometry {
        /// Sinus maximum radius `b`.
        sinus_radius: f64,
        /// Vein radius `a`.
        vein_radius: f64,
    },

    /// Leaflet thickness consumes the whole upper arc radius.
    #[error("leaflet thickness {thickness} leaves a non-positive interior radius {interior_radius}")]
    LeafletTooThick {
        /// Leaflet thickness `tL`.
        thickness: f64,
        /// Derived interior radius `R_HI1 = R_FG - tL`.
        interior_radius: f64,
    },

    /// Fillet radius is non-positive or too large for internal tangency.
    #[error("fillet radius {fillet_radius} must lie in (0, {limit})")]
    InvalidFilletRadius {
        /// Fillet radius `Rf`.
        fillet_radius: f64,
        /// Exclusive upper bound `min(R_HI1, R_I2D)`.
        limit: f64,
    },

    /// The two fillet-candidate circles do not intersect.
    #[error(
        "no fillet center: circles of radii {radius_a} and {radius_b} \
         with centers {center_distance} apart do not intersect"
    )]
    NoFilletSolution {
        /// Distance between the candidate circle centers.
        center_distance: f64,
        /// Shrunk leaflet-arc radius `R_HI1 - Rf`.
        radius_a: f64,
        /// Shrunk sinus-arc radius `R_I2D - Rf`.
        radius_b: f64,
    },

    /// A tangent-point projection would normalize a zero-length vector.
    #[error("degenerate tangent: fillet center coincides with an arc center")]
    DegenerateTangent,
}
