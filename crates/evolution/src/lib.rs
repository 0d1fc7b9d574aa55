//! Closed-form stellar evolution engine.
//!
//! Turns three formation parameters (mass, metallicity, CNO fraction) into
//! a continuous life history: an initial main-sequence state, a timeline of
//! named evolutionary phases ending in one of three remnant fates, and an
//! interpolated physical state (luminosity, radius, effective temperature,
//! HR-diagram coordinates) at any elapsed time.
//!
//! Everything is a pure, total function: inputs are clamped rather than
//! rejected, no state is shared or mutated between calls, and repeated
//! evaluation (e.g. once per animation frame) is safe without caching.
//!
//! # Example
//! ```
//! use evolution::{compute_evolution_timeline, star_state_at_time, StarParams};
//!
//! let params = StarParams::solar();
//! let timeline = compute_evolution_timeline(&params);
//!
//! // Halfway through the star's life
//! let state = star_state_at_time(&params, &timeline, timeline.total_lifetime_myr / 2.0);
//! assert!(state.luminosity > 0.0);
//! ```

pub mod initial;
pub mod keypoints;
pub mod model;
pub mod params;
pub mod phase;
pub mod sampling;
pub mod spectral;
pub mod state;
pub mod stellar_radius;
pub mod timeline;

#[cfg(test)]
mod phase_test;
#[cfg(test)]
mod spectral_test;
#[cfg(test)]
mod state_test;

// Re-export core types
pub use initial::{Composition, InitialStarState};
pub use keypoints::{PhasePoint, PhaseShape, ShapeTable};
pub use model::StellarModel;
pub use params::StarParams;
pub use phase::{PhaseId, Remnant};
pub use spectral::SpectralType;
pub use state::StarEvolutionState;
pub use stellar_radius::StellarRadius;
pub use timeline::{EvolutionPhase, EvolutionTimeline};

// Re-export engine entry points
pub use initial::{compute_initial_star, compute_initial_star_with_model};
pub use state::{star_state_at_time, star_state_at_time_with_model};
pub use timeline::{compute_evolution_timeline, compute_evolution_timeline_with_model};
