//! Per-star keypoint table for curve interpolation.
//!
//! Each of the six shape categories carries a start/end pair of
//! (luminosity, radius, temperature) derived analytically from the previous
//! shape's end state and mass/metallicity-dependent multipliers. Every
//! shape's start point is the previous shape's end point, which chains
//! continuity through the whole sequence regardless of remnant branch.
//! Temperatures are recomputed from L and R wherever no direct target is
//! given, so every keypoint stays self-consistent with Stefan-Boltzmann.
//!
//! The table depends only on `(StarParams, Remnant)`; it is rebuilt on
//! every time-sample query, so callers sampling the same star repeatedly
//! should cache it (a performance choice only, the values are identical).

use crate::initial::InitialStarState;
use crate::model::{lerp, StellarModel};
use crate::params::StarParams;
use crate::phase::{PhaseId, Remnant};

/// Main-sequence brightening: fractional luminosity increase over the phase.
const MS_BRIGHTEN_COEFF: f64 = 0.3;
const MS_BRIGHTEN_EXP: f64 = 0.3;
const MS_BRIGHTEN_RANGE: (f64, f64) = (0.05, 0.4);
/// Main-sequence radius growth: fractional radius increase over the phase.
const MS_GROWTH_COEFF: f64 = 0.15;
const MS_GROWTH_EXP: f64 = 0.2;
const MS_GROWTH_RANGE: (f64, f64) = (0.03, 0.2);

/// RGB tip: logL = 4 + 1.3 log M, at least 0.8 dex above the main sequence
/// and at most 5.8 dex.
const RGB_TIP_LOG_L_BASE: f64 = 4.0;
const RGB_TIP_LOG_L_SLOPE: f64 = 1.3;
const RGB_TIP_MIN_RISE_DEX: f64 = 0.8;
const RGB_TIP_MAX_LOG_L: f64 = 5.8;
const RGB_RADIUS_COEFF: f64 = 50.0;
const RGB_RADIUS_EXP: f64 = 0.6;

/// AGB luminosity rise above the RGB tip, in dex, and its ceiling.
const AGB_RISE_DEX: (f64, f64) = (0.1, 0.5);
const AGB_MAX_LOG_L: f64 = 6.2;
const AGB_RADIUS_FACTOR: (f64, f64) = (1.2, 2.2);
const AGB_TEMP_FACTOR: f64 = 0.9;

/// Horizontal branch contraction relative to the RGB tip.
const HB_LUM_FACTOR: (f64, f64) = (0.2, 0.5);
const HB_RADIUS_FACTOR: (f64, f64) = (0.08, 0.25);

/// White dwarf cooling endpoint.
const WD_END_LUM_FACTOR: (f64, f64) = (5.0e-5, 5.0e-4);
const WD_END_TEMP_K: f64 = 4500.0;
const WD_RADIUS_COEFF: f64 = 0.015;
const WD_RADIUS_EXP: f64 = -0.2;

/// Luminosity floor shared by the supernova-progenitor endpoints, in dex.
const SUPERGIANT_MIN_LOG_L: f64 = 4.5;

/// Pre-supernova red supergiant endpoint (neutron star progenitor).
const NS_END_TEMP_BASE_K: f64 = 3600.0;
const NS_END_TEMP_SLOPE_K: f64 = 200.0;
const NS_END_TEMP_RANGE_K: (f64, f64) = (3400.0, 4300.0);

/// Wolf-Rayet / luminous-blue-variable endpoint (black hole progenitor).
const BH_END_LOG_L_RISE: f64 = 0.3;
const BH_END_LOG_L_RANGE: (f64, f64) = (5.2, 6.2);
const BH_END_TEMP_COEFF_K: f64 = 50_000.0;
const BH_END_TEMP_MASS_REF: f64 = 25.0;
const BH_END_TEMP_EXP: f64 = 0.15;
const BH_END_TEMP_RANGE_K: (f64, f64) = (40_000.0, 90_000.0);

/// Per-shape metallicity exponents on temperature.
const Z_TEMP_EXP_MS_END: f64 = -0.03;
const Z_TEMP_EXP_SUBGIANT: f64 = -0.05;
const Z_TEMP_EXP_RGB: f64 = -0.05;
const Z_TEMP_EXP_HB: f64 = -0.04;
const Z_TEMP_EXP_AGB: f64 = -0.05;
const Z_TEMP_EXP_WD: f64 = -0.05;

/// One interpolation endpoint: luminosity (L☉), radius (R☉),
/// effective temperature (K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePoint {
    pub luminosity: f64,
    pub radius: f64,
    pub temperature: f64,
}

/// Start/end keypoints bounding one shape category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseShape {
    pub start: PhasePoint,
    pub end: PhasePoint,
}

/// Keypoints for all six shape categories of one star.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTable {
    pub ms: PhaseShape,
    pub subgiant: PhaseShape,
    pub rgb: PhaseShape,
    pub hb: PhaseShape,
    pub agb: PhaseShape,
    /// Terminal shape; all three terminal phase ids map here, the endpoint
    /// physics branch on the remnant kind at construction.
    pub remnant: PhaseShape,
}

impl ShapeTable {
    /// Build the keypoint table for a star using the solar-calibrated model.
    pub fn for_star(initial: &InitialStarState, params: &StarParams, remnant: Remnant) -> Self {
        Self::for_star_with_model(initial, params, remnant, &StellarModel::SOLAR_CALIBRATED)
    }

    /// Build the keypoint table under an explicit model.
    pub fn for_star_with_model(
        initial: &InitialStarState,
        params: &StarParams,
        remnant: Remnant,
        model: &StellarModel,
    ) -> Self {
        let p = params.clamped(model);
        let m = p.mass;
        let z_ratio = model.z_ratio(p.metallicity);
        let u = model.log_mass_axis(m);

        let l0 = initial.luminosity;
        let r0 = initial.radius.to_solar_radii();

        let ms_start = PhasePoint {
            luminosity: l0,
            radius: r0,
            temperature: initial.temperature.to_kelvin(),
        };

        // Main sequence: slow brightening and growth toward turnoff.
        let brighten =
            (MS_BRIGHTEN_COEFF * (1.0 / m).powf(MS_BRIGHTEN_EXP)).clamp(MS_BRIGHTEN_RANGE.0, MS_BRIGHTEN_RANGE.1);
        let growth =
            (MS_GROWTH_COEFF * (1.0 / m).powf(MS_GROWTH_EXP)).clamp(MS_GROWTH_RANGE.0, MS_GROWTH_RANGE.1);
        let ms = chain(ms_start, |_| {
            let luminosity = l0 * (1.0 + brighten);
            let radius = r0 * (1.0 + growth);
            PhasePoint {
                luminosity,
                radius,
                temperature: model.stefan_temperature(luminosity, radius)
                    * z_ratio.powf(Z_TEMP_EXP_MS_END),
            }
        });

        // Subgiant: envelope expansion off the main sequence.
        let subgiant = chain(ms.end, |start| {
            let luminosity = start.luminosity * (1.5 + 1.0 * m.powf(0.3));
            let radius = start.radius * (3.0 + 2.0 * m.powf(0.2));
            PhasePoint {
                luminosity,
                radius,
                temperature: model.stefan_temperature(luminosity, radius)
                    * z_ratio.powf(Z_TEMP_EXP_SUBGIANT),
            }
        });

        // Red giant branch: climb to the tip.
        let rgb_tip_log_l = (RGB_TIP_LOG_L_BASE + RGB_TIP_LOG_L_SLOPE * m.log10())
            .max(l0.max(1.0e-6).log10() + RGB_TIP_MIN_RISE_DEX)
            .min(RGB_TIP_MAX_LOG_L);
        let rgb_nominal_temp = (4100.0 - 400.0 * m.log10()).clamp(3400.0, 4600.0);
        let rgb = chain(subgiant.end, |_| PhasePoint {
            luminosity: 10.0_f64.powf(rgb_tip_log_l),
            radius: r0 * RGB_RADIUS_COEFF * m.powf(RGB_RADIUS_EXP),
            temperature: rgb_nominal_temp * z_ratio.powf(Z_TEMP_EXP_RGB),
        });

        // Horizontal branch: core helium ignition, contraction and dimming.
        let hb = chain(rgb.end, |start| {
            let luminosity = start.luminosity * lerp(HB_LUM_FACTOR.0, HB_LUM_FACTOR.1, u);
            let radius = start.radius * lerp(HB_RADIUS_FACTOR.0, HB_RADIUS_FACTOR.1, u);
            PhasePoint {
                luminosity,
                radius,
                temperature: model.stefan_temperature(luminosity, radius)
                    * z_ratio.powf(Z_TEMP_EXP_HB),
            }
        });

        // Asymptotic giant branch: second ascent above the RGB tip.
        let rgb_tip = rgb.end;
        let agb = chain(hb.end, |_| {
            let log_l = (rgb_tip.luminosity.max(1.0e-6).log10()
                + lerp(AGB_RISE_DEX.0, AGB_RISE_DEX.1, u))
            .min(AGB_MAX_LOG_L);
            PhasePoint {
                luminosity: 10.0_f64.powf(log_l),
                radius: rgb_tip.radius * lerp(AGB_RADIUS_FACTOR.0, AGB_RADIUS_FACTOR.1, u),
                temperature: AGB_TEMP_FACTOR * rgb_nominal_temp * z_ratio.powf(Z_TEMP_EXP_AGB),
            }
        });

        // Terminal shape: the track endpoint branches on remnant kind, while
        // the start stays chained to the AGB for continuity.
        let end = match remnant {
            Remnant::Wd => {
                let fade = lerp(WD_END_LUM_FACTOR.0, WD_END_LUM_FACTOR.1, u);
                let temperature = WD_END_TEMP_K * z_ratio.powf(Z_TEMP_EXP_WD);
                PhasePoint {
                    luminosity: l0 * fade,
                    radius: WD_RADIUS_COEFF * m.powf(WD_RADIUS_EXP),
                    temperature,
                }
            }
            Remnant::Ns => {
                let luminosity = agb.end.luminosity.max(10.0_f64.powf(SUPERGIANT_MIN_LOG_L));
                let temperature = (NS_END_TEMP_BASE_K + NS_END_TEMP_SLOPE_K * m.log10())
                    .clamp(NS_END_TEMP_RANGE_K.0, NS_END_TEMP_RANGE_K.1);
                PhasePoint {
                    luminosity,
                    radius: model.radius_from_luminosity(luminosity, temperature),
                    temperature,
                }
            }
            Remnant::Bh => {
                let log_l = (agb.end.luminosity.max(1.0e-6).log10().max(SUPERGIANT_MIN_LOG_L)
                    + BH_END_LOG_L_RISE)
                    .clamp(BH_END_LOG_L_RANGE.0, BH_END_LOG_L_RANGE.1);
                let luminosity = 10.0_f64.powf(log_l);
                let temperature = (BH_END_TEMP_COEFF_K
                    * (m / BH_END_TEMP_MASS_REF).powf(BH_END_TEMP_EXP))
                .clamp(BH_END_TEMP_RANGE_K.0, BH_END_TEMP_RANGE_K.1);
                PhasePoint {
                    luminosity,
                    radius: model.radius_from_luminosity(luminosity, temperature),
                    temperature,
                }
            }
        };
        let remnant_shape = PhaseShape {
            start: agb.end,
            end,
        };

        Self {
            ms,
            subgiant,
            rgb,
            hb,
            agb,
            remnant: remnant_shape,
        }
    }

    /// The shape for a phase identifier. All three terminal ids collapse to
    /// the remnant shape; the match is exhaustive so no variant can fall
    /// through silently.
    pub fn shape(&self, id: PhaseId) -> &PhaseShape {
        match id {
            PhaseId::Ms => &self.ms,
            PhaseId::Subgiant => &self.subgiant,
            PhaseId::Rgb => &self.rgb,
            PhaseId::Hb => &self.hb,
            PhaseId::Agb => &self.agb,
            PhaseId::WdFinal | PhaseId::NsFinal | PhaseId::BhFinal => &self.remnant,
        }
    }
}

/// Build a shape whose start is the previous end and whose end is derived
/// from it.
fn chain(start: PhasePoint, end: impl Fn(&PhasePoint) -> PhasePoint) -> PhaseShape {
    let end = end(&start);
    PhaseShape { start, end }
}
