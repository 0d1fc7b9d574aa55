//! Initial main-sequence state derivation.
//!
//! A pure function from formation parameters to a single physical snapshot
//! of the star at the start of its main-sequence life. Total over its input
//! domain: parameters are clamped, never rejected.

use serde::{Deserialize, Serialize};
use units::{Mass, Temperature};

use crate::model::StellarModel;
use crate::params::StarParams;
use crate::stellar_radius::StellarRadius;

/// Mass fractions of the stellar material.
///
/// Closure invariants: `x + y + z == 1` and `z_cno + z_other == z`, both
/// within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Hydrogen mass fraction
    pub x: f64,
    /// Helium mass fraction
    pub y: f64,
    /// Heavy-element mass fraction
    pub z: f64,
    /// Carbon/nitrogen/oxygen share of Z
    pub z_cno: f64,
    /// Remaining metals
    pub z_other: f64,
}

/// Physical state of the star at the start of its main-sequence life.
///
/// Computed once per distinct `StarParams`, immutable, and read-only input
/// to the timeline builder and the curve interpolator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialStarState {
    pub mass: Mass,
    pub composition: Composition,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub radius: StellarRadius,
    pub temperature: Temperature,
    /// log10 of luminosity (HR-diagram y axis)
    pub log_l: f64,
    /// log10 of effective temperature (HR-diagram x axis)
    pub log_t: f64,
}

/// Derive the initial main-sequence state from formation parameters using
/// the solar-calibrated model.
pub fn compute_initial_star(params: &StarParams) -> InitialStarState {
    compute_initial_star_with_model(params, &StellarModel::SOLAR_CALIBRATED)
}

/// Derive the initial main-sequence state under an explicit model.
pub fn compute_initial_star_with_model(
    params: &StarParams,
    model: &StellarModel,
) -> InitialStarState {
    let p = params.clamped(model);
    let m = p.mass;

    let composition = derive_composition(&p, model);
    let z_ratio = model.z_ratio(p.metallicity);

    // Three-segment power law in mass. The segments meet at the breakpoints
    // with an intentional discontinuity.
    let (lo, hi) = model.ml_breaks;
    let (exp_low, exp_mid, exp_high) = model.ml_exponents;
    let base_luminosity = match m {
        m if m < lo => m.powf(exp_low),
        m if m < hi => m.powf(exp_mid),
        m => m.powf(exp_high),
    };

    let radius = m.powf(model.mass_radius_exp);
    let mut luminosity = base_luminosity * z_ratio.powf(model.z_lum_exp);
    let mut temperature =
        model.stefan_temperature(luminosity, radius) * z_ratio.powf(model.z_temp_exp);

    // CNO-cycle correction: zero below the onset mass, ramping linearly to
    // full weight, scaling the deviation of the CNO fraction from its
    // reference value. Multiplicative and bounded.
    let weight = ((m - model.cno_mass_onset) / (model.cno_mass_full - model.cno_mass_onset))
        .clamp(0.0, 1.0);
    let deviation = p.cno_fraction - model.cno_reference;
    let lum_factor = (1.0 + weight * deviation)
        .clamp(model.cno_lum_factor_range.0, model.cno_lum_factor_range.1);
    let temp_factor = (1.0 + model.cno_temp_coupling * weight * deviation)
        .clamp(model.cno_temp_factor_range.0, model.cno_temp_factor_range.1);
    luminosity *= lum_factor;
    temperature *= temp_factor;

    InitialStarState {
        mass: Mass::from_solar_masses(m),
        composition,
        luminosity,
        radius: StellarRadius::from_solar_radii(radius),
        temperature: Temperature::from_kelvin(temperature),
        log_l: luminosity.max(1.0e-6).log10(),
        log_t: temperature.max(10.0).log10(),
    }
}

/// Partition the stellar material into hydrogen, helium, and metals.
///
/// Helium follows a linear enrichment law in Z; hydrogen takes the rest.
fn derive_composition(params: &StarParams, model: &StellarModel) -> Composition {
    let z = params.metallicity;
    let z_cno = z * params.cno_fraction;
    let z_other = z * (1.0 - params.cno_fraction);

    let y = (model.helium_intercept + model.helium_slope * z)
        .clamp(model.helium_range.0, model.helium_range.1);
    let x = (1.0 - y - z).max(0.0);

    Composition {
        x,
        y,
        z,
        z_cno,
        z_other,
    }
}
