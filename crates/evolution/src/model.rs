//! Tunable constants of the physical model.
//!
//! Every scaling-law coefficient, breakpoint, and clamp range used by the
//! engine lives in a single [`StellarModel`] value so the model can be
//! audited or swapped without touching the interpolation logic. All entry
//! points have a `*_with_model` variant; the plain variants use
//! [`StellarModel::SOLAR_CALIBRATED`].

/// Complete set of tunable parameters for the evolution engine.
///
/// The calibration point is the Sun: a 1 M☉ star at Z = 0.02 lands on
/// L = 1 L☉, R = 1 R☉, T = 5772 K with a ~10 Gyr main-sequence lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct StellarModel {
    /// Solar effective temperature in Kelvin
    pub t_sun_kelvin: f64,
    /// Solar heavy-element mass fraction
    pub z_sun: f64,
    /// Solar hydrogen mass fraction, consistent with the enrichment law at Z☉
    pub x_sun: f64,

    /// Accepted structural mass range in solar masses
    pub mass_range: (f64, f64),
    /// Maximum heavy-element mass fraction
    pub metallicity_max: f64,

    /// Primordial helium fraction (intercept of the enrichment law)
    pub helium_intercept: f64,
    /// Helium enrichment per unit metallicity (dY/dZ)
    pub helium_slope: f64,
    /// Allowed helium fraction range
    pub helium_range: (f64, f64),

    /// Mass-luminosity law breakpoints; the three power-law segments meet
    /// here with an intentional discontinuity (no blending in the source
    /// relations)
    pub ml_breaks: (f64, f64),
    /// Exponents below, between, and above the breakpoints
    pub ml_exponents: (f64, f64, f64),
    /// Mass-radius exponent (R = M^x on the main sequence)
    pub mass_radius_exp: f64,

    /// Clamp range for the relative metallicity ratio Z/Z☉
    pub z_ratio_range: (f64, f64),
    /// Metallicity exponent on main-sequence luminosity
    pub z_lum_exp: f64,
    /// Metallicity exponent on main-sequence temperature
    pub z_temp_exp: f64,

    /// Mass where the CNO cycle starts to dominate over the pp chain
    pub cno_mass_onset: f64,
    /// Mass where the CNO weight ramp reaches 1
    pub cno_mass_full: f64,
    /// Reference CNO fraction with zero effect
    pub cno_reference: f64,
    /// Fraction of the CNO luminosity deviation applied to temperature
    pub cno_temp_coupling: f64,
    /// Bounds on the CNO luminosity factor
    pub cno_lum_factor_range: (f64, f64),
    /// Bounds on the CNO temperature factor
    pub cno_temp_factor_range: (f64, f64),

    /// Nominal main-sequence lifetime of the calibration star, in Gyr
    pub ms_lifetime_gyr: f64,
    /// Metallicity exponent on lifetime (metal-rich stars live longer)
    pub z_lifetime_exp: f64,
    /// Lifetime clamp range in Myr
    pub ms_lifetime_range_myr: (f64, f64),

    /// Mass range of the normalized log-mass axis used for phase shaping
    pub shape_mass_range: (f64, f64),
    /// Total post-main-sequence lifetime fraction at the low/high mass ends
    pub post_ms_total: (f64, f64),
    /// Raw subgiant fraction at the low/high mass ends
    pub subgiant_frac: (f64, f64),
    /// Raw red-giant-branch fraction at the low/high mass ends
    pub rgb_frac: (f64, f64),
    /// Raw horizontal-branch fraction at the low/high mass ends
    pub hb_frac: (f64, f64),
    /// Raw asymptotic-giant-branch fraction at the low/high mass ends
    pub agb_frac: (f64, f64),

    /// Terminal phase duration: factor · t_MS · M^exp, capped at cap · t_MS.
    /// The same white-dwarf-cooling formula is reused for all remnant kinds;
    /// only the endpoint physics differ.
    pub final_duration_factor: f64,
    pub final_mass_exp: f64,
    pub final_duration_cap: f64,
}

impl StellarModel {
    /// The default model, calibrated against the Sun.
    pub const SOLAR_CALIBRATED: StellarModel = StellarModel {
        t_sun_kelvin: 5772.0,
        z_sun: 0.02,
        x_sun: 0.698,

        mass_range: (0.1, 50.0),
        metallicity_max: 0.04,

        helium_intercept: 0.248,
        helium_slope: 1.7,
        helium_range: (0.22, 0.40),

        ml_breaks: (0.5, 2.0),
        ml_exponents: (2.3, 4.0, 3.5),
        mass_radius_exp: 0.8,

        z_ratio_range: (0.1, 3.0),
        z_lum_exp: -0.25,
        z_temp_exp: -0.10,

        cno_mass_onset: 1.3,
        cno_mass_full: 5.0,
        cno_reference: 0.3,
        cno_temp_coupling: 0.5,
        cno_lum_factor_range: (0.6, 1.4),
        cno_temp_factor_range: (0.85, 1.15),

        ms_lifetime_gyr: 10.0,
        z_lifetime_exp: 0.2,
        ms_lifetime_range_myr: (3.0, 200_000.0),

        shape_mass_range: (0.5, 50.0),
        post_ms_total: (0.27, 0.15),
        subgiant_frac: (0.10, 0.03),
        rgb_frac: (0.15, 0.06),
        hb_frac: (0.06, 0.05),
        agb_frac: (0.03, 0.06),

        final_duration_factor: 10.0,
        final_mass_exp: -0.7,
        final_duration_cap: 5.0,
    };

    /// Relative metallicity Z/Z☉, clamped to the model's sane range.
    pub fn z_ratio(&self, metallicity: f64) -> f64 {
        (metallicity / self.z_sun).clamp(self.z_ratio_range.0, self.z_ratio_range.1)
    }

    /// Effective temperature from luminosity and radius (both in solar
    /// units) via Stefan-Boltzmann: T/T☉ = (L/R²)^(1/4).
    pub fn stefan_temperature(&self, luminosity: f64, radius: f64) -> f64 {
        self.t_sun_kelvin * (luminosity / (radius * radius)).powf(0.25)
    }

    /// Radius in solar radii from luminosity and temperature, inverting the
    /// same relation: R = √L / (T/T☉)².
    pub fn radius_from_luminosity(&self, luminosity: f64, temperature: f64) -> f64 {
        luminosity.sqrt() / (temperature / self.t_sun_kelvin).powf(2.0)
    }

    /// Position of a mass on the normalized log-mass axis, in [0, 1].
    ///
    /// Masses below the low end of `shape_mass_range` are treated as the low
    /// end; this axis shapes phase durations and keypoints only, never the
    /// lifetime itself.
    pub fn log_mass_axis(&self, mass_solar: f64) -> f64 {
        let (lo, hi) = self.shape_mass_range;
        let m = mass_solar.max(lo);
        ((m.log10() - lo.log10()) / (hi.log10() - lo.log10())).clamp(0.0, 1.0)
    }
}

/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
