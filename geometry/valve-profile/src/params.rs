//! Valve geometry input parameters.

use crate::error::{ProfileError, ProfileResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical parameters describing one venous-valve cross-section.
///
/// All lengths share one (arbitrary) model unit. The two extensions may be
/// zero or negative; everything else must be positive for the solver to
/// produce a valid profile.
///
/// # Example
///
/// ```
/// use valve_profile::ValveParams;
///
/// let params = ValveParams::default()
///     .with_fillet_radius(0.25)
///     .with_extensions(0.5, 0.5);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValveParams {
    /// Vein radius `a`.
    pub vein_radius: f64,
    /// Maximum sinus radius `b`.
    pub sinus_radius: f64,
    /// Sinus length `lam`.
    pub sinus_length: f64,
    /// Axial distance of the leaflet free edge beyond the sinus maximum `zD`.
    pub axial_offset: f64,
    /// Leaflet inner-surface spacing at the free edge `wE`.
    pub edge_spacing: f64,
    /// Leaflet thickness `tL`.
    pub leaflet_thickness: f64,
    /// Fillet radius `Rf` joining the leaflet and sinus arcs.
    pub fillet_radius: f64,
    /// Axial extension below A (positive extends away from the sinus).
    pub extension_bottom: f64,
    /// Axial extension above E (positive extends away from the sinus).
    pub extension_top: f64,
}

impl Default for ValveParams {
    /// The canonical demonstration parameter set.
    fn default() -> Self {
        Self {
            vein_radius: 1.0,
            sinus_radius: 1.5,
            sinus_length: 3.0,
            axial_offset: 0.75,
            edge_spacing: 0.9,
            leaflet_thickness: 0.03,
            fillet_radius: 0.2,
            extension_bottom: 0.0,
            extension_top: 0.0,
        }
    }
}

impl ValveParams {
    /// Set the fillet radius.
    #[must_use]
    pub fn with_fillet_radius(mut self, fillet_radius: f64) -> Self {
        self.fillet_radius = fillet_radius;
        self
    }

    /// Set the leaflet thickness.
    #[must_use]
    pub fn with_leaflet_thickness(mut self, leaflet_thickness: f64) -> Self {
        self.leaflet_thickness = leaflet_thickness;
        self
    }

    /// Set both axial extensions (bottom, top).
    #[must_use]
    pub fn with_extensions(mut self, bottom: f64, top: f64) -> Self {
        self.extension_bottom = bottom;
        self.extension_top = top;
        self
    }

    /// Check the parameter-level preconditions.
    ///
    /// These are the constraints that can be rejected before any geometry
    /// exists; the derived-radius checks happen inside the solver.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::InvalidVeinGeometry`] if `a <= wE / 2`
    /// - [`ProfileError::InvalidSinusGeometry`] if `b <= a`
    pub fn validate(&self) -> ProfileResult<()> {
        if self.vein_radius <= self.edge_spacing / 2.0 {
            return Err(ProfileError::InvalidVeinGeometry {
                vein_radius: self.vein_radius,
                edge_spacing: self.edge_spacing,
            });
        }
        if self.sinus_radius <= self.vein_radius {
            return Err(ProfileError::InvalidSinusGeometry {
                sinus_radius: self.sinus_radius,
                vein_radius: self.vein_radius,
            });
        }
        Ok(())
    }
}
