//! Physical quantity types for stellar evolution calculations.
//!
//! All quantities are f64 newtypes with a fixed base unit chosen for
//! astrophysical convenience (solar masses, AU, Kelvin, years).

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod temperature_test;

pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_G};
pub use temperature::Temperature;
pub use time::Time;
