//! Seeded sampling of formation parameters from population distributions.
//!
//! Useful for generating whole populations of stars to feed through the
//! engine; the engine itself stays fully deterministic.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::params::StarParams;

/// Solar heavy-element mass fraction, the pivot of the metallicity
/// distribution.
const Z_SUN: f64 = 0.02;

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform
/// sampling.
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample a formation mass from a Kroupa-style broken power-law IMF
///
/// Limited to the engine's structural mass range [0.1, 50] M☉:
/// - 0.1 ≤ M < 0.5 M☉: α = -1.3
/// - 0.5 ≤ M < 1.0 M☉: α = -2.3
/// - M ≥ 1.0 M☉: α = -2.3
pub fn sample_formation_mass(rng: &mut ChaChaRng) -> f64 {
    // Segment weights from integrating each segment of the IMF
    let segment_weights = [0.80, 0.15, 0.05];
    let rand: f64 = rng.random();

    if rand < segment_weights[0] {
        sample_power_law(0.1, 0.5, -1.3, rng)
    } else if rand < segment_weights[0] + segment_weights[1] {
        sample_power_law(0.5, 1.0, -2.3, rng)
    } else {
        sample_power_law(1.0, 50.0, -2.3, rng)
    }
}

/// Sample a heavy-element mass fraction from the local galactic distribution
///
/// Drawn as [Fe/H] in dex about solar with σ ≈ 0.2, clamped to [-0.5, 0.4],
/// then converted to a mass fraction and clamped to the engine's accepted
/// range [0, 0.04].
pub fn sample_metallicity(rng: &mut ChaChaRng) -> f64 {
    let fe_h = sample_gaussian(rng, 0.0, 0.2).clamp(-0.5, 0.4);
    (Z_SUN * 10.0_f64.powf(fe_h)).clamp(0.0, 0.04)
}

/// Sample a CNO fraction about the 0.3 reference value
pub fn sample_cno_fraction(rng: &mut ChaChaRng) -> f64 {
    sample_gaussian(rng, 0.3, 0.1).clamp(0.0, 1.0)
}

/// Sample a complete set of formation parameters
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use evolution::sampling::sample_star_params;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let params = sample_star_params(&mut rng);
/// assert!(params.mass >= 0.1 && params.mass <= 50.0);
/// ```
pub fn sample_star_params(rng: &mut ChaChaRng) -> StarParams {
    let mass = sample_formation_mass(rng);
    let metallicity = sample_metallicity(rng);
    let cno_fraction = sample_cno_fraction(rng);

    StarParams::new(mass, metallicity, cno_fraction)
}
