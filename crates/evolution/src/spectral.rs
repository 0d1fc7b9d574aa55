//! Spectral classification from effective temperature.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Temperature boundaries for spectral types (in Kelvin)
const TEMP_BOUNDS: [(SpectralType, f64); 7] = [
    (SpectralType::O, 30000.0),
    (SpectralType::B, 10000.0),
    (SpectralType::A, 7500.0),
    (SpectralType::F, 6000.0),
    (SpectralType::G, 5200.0),
    (SpectralType::K, 3700.0),
    (SpectralType::M, 0.0),
];

/// Lower temperature edge of the M class, used for subtype scaling.
const M_CLASS_FLOOR_K: f64 = 2400.0;

/// Harvard spectral class, hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// Determine spectral type from effective temperature.
    pub fn from_temperature(temperature: f64) -> Self {
        for (spec_type, temp_bound) in TEMP_BOUNDS.iter() {
            if temperature >= *temp_bound {
                return *spec_type;
            }
        }
        SpectralType::M
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Calculate spectral subtype (0-9) from temperature.
pub fn spectral_subtype(temperature: f64) -> u8 {
    let mut upper_bound = TEMP_BOUNDS[0].1;
    let mut lower_bound = TEMP_BOUNDS[1].1;

    for window in TEMP_BOUNDS.windows(2) {
        if temperature >= window[1].1 {
            upper_bound = window[0].1;
            lower_bound = window[1].1;
            break;
        }
    }

    // The M class has no colder neighbor in the table
    if lower_bound == 0.0 {
        lower_bound = M_CLASS_FLOOR_K;
        if temperature <= lower_bound {
            return 9;
        }
    }

    let temp_range = upper_bound - lower_bound;
    let temp_position = upper_bound - temperature;
    let subtype = (9.0 * temp_position / temp_range).round() as u8;
    subtype.clamp(0, 9)
}
