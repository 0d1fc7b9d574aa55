//! User-chosen stellar formation parameters.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::model::StellarModel;

/// The three formation parameters a star is built from.
///
/// Values are plain numbers as supplied by UI controls; the engine clamps
/// them to physically sane ranges internally rather than rejecting them, so
/// every derivation is total. Copied by value on every call, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarParams {
    /// Stellar mass in solar masses, clamped to [0.1, 50]
    pub mass: f64,
    /// Heavy-element mass fraction Z, clamped to [0, 0.04]
    pub metallicity: f64,
    /// Fraction of Z attributable to carbon/nitrogen/oxygen, clamped to [0, 1]
    pub cno_fraction: f64,
}

impl StarParams {
    pub fn new(mass: f64, metallicity: f64, cno_fraction: f64) -> Self {
        Self {
            mass,
            metallicity,
            cno_fraction,
        }
    }

    /// Solar formation parameters (1 M☉, Z = 0.02, CNO fraction 0.3).
    pub fn solar() -> Self {
        Self::new(1.0, 0.02, 0.3)
    }

    /// The parameters as the engine actually uses them, clamped to the
    /// model's accepted ranges.
    pub fn clamped(&self, model: &StellarModel) -> Self {
        Self {
            mass: self.mass.clamp(model.mass_range.0, model.mass_range.1),
            metallicity: self.metallicity.clamp(0.0, model.metallicity_max),
            cno_fraction: self.cno_fraction.clamp(0.0, 1.0),
        }
    }
}
