//! Evolution timeline construction.
//!
//! Partitions a star's total lifetime into six named, contiguous phases:
//! the main sequence, four post-main-sequence phases whose durations come
//! from mass-dependent fractions of the main-sequence lifetime, and one
//! terminal phase chosen by remnant kind.

use serde::{Deserialize, Serialize};
use units::Time;

use crate::initial::{compute_initial_star_with_model, InitialStarState};
use crate::model::{lerp, StellarModel};
use crate::params::StarParams;
use crate::phase::{PhaseId, Remnant};

/// One evolutionary phase with its position on the timeline.
///
/// Durations are non-negative; `t_end_myr = t_start_myr + duration_myr`;
/// `frac_start`/`frac_end` are the boundary times divided by the total
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPhase {
    pub id: PhaseId,
    pub label: String,
    pub t_start_myr: f64,
    pub t_end_myr: f64,
    pub duration_myr: f64,
    pub frac_start: f64,
    pub frac_end: f64,
}

impl EvolutionPhase {
    /// Whether the given (already clamped) time falls inside this phase.
    pub fn contains(&self, t_myr: f64) -> bool {
        t_myr >= self.t_start_myr && t_myr <= self.t_end_myr
    }
}

/// The full life history of a star as an ordered phase partition.
///
/// Phases form a contiguous, non-overlapping partition of
/// `[0, total_lifetime_myr]`: the first phase starts at 0 and the last ends
/// at the total. Constructed once per distinct `StarParams` and immutable
/// thereafter; callers sampling repeatedly may memoize on parameter
/// equality, though recomputation is deterministic and idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionTimeline {
    pub total_lifetime_myr: f64,
    pub phases: Vec<EvolutionPhase>,
    pub initial: InitialStarState,
    pub remnant: Remnant,
}

impl EvolutionTimeline {
    /// The phase containing the given (already clamped) time, if any.
    ///
    /// Boundary times belong to the earlier phase; keypoint chaining makes
    /// the two candidate states identical there anyway.
    pub fn phase_at(&self, t_myr: f64) -> Option<&EvolutionPhase> {
        self.phases.iter().find(|phase| phase.contains(t_myr))
    }

    /// Total lifetime as a `Time` quantity.
    pub fn total_lifetime(&self) -> Time {
        Time::from_myr(self.total_lifetime_myr)
    }
}

/// Build the evolution timeline for a star using the solar-calibrated model.
pub fn compute_evolution_timeline(params: &StarParams) -> EvolutionTimeline {
    compute_evolution_timeline_with_model(params, &StellarModel::SOLAR_CALIBRATED)
}

/// Build the evolution timeline under an explicit model.
pub fn compute_evolution_timeline_with_model(
    params: &StarParams,
    model: &StellarModel,
) -> EvolutionTimeline {
    let p = params.clamped(model);
    let initial = compute_initial_star_with_model(params, model);

    let remnant = Remnant::from_mass(p.mass);
    let t_ms = main_sequence_lifetime_myr(&p, &initial, model);
    let post_ms = post_main_sequence_durations_myr(p.mass, t_ms, model);
    let t_final = final_phase_duration_myr(p.mass, t_ms, model);

    let ids = [
        PhaseId::Ms,
        PhaseId::Subgiant,
        PhaseId::Rgb,
        PhaseId::Hb,
        PhaseId::Agb,
        remnant.final_phase(),
    ];
    let durations = [
        t_ms, post_ms[0], post_ms[1], post_ms[2], post_ms[3], t_final,
    ];
    let total: f64 = durations.iter().sum();

    let mut phases = Vec::with_capacity(ids.len());
    let mut cursor = 0.0;
    for (id, duration) in ids.iter().zip(durations.iter()) {
        let t_start = cursor;
        let t_end = t_start + duration;
        phases.push(EvolutionPhase {
            id: *id,
            label: id.label().to_string(),
            t_start_myr: t_start,
            t_end_myr: t_end,
            duration_myr: *duration,
            frac_start: t_start / total,
            frac_end: t_end / total,
        });
        cursor = t_end;
    }

    // Cumulative rounding must not leave the last phase short of the total.
    let total = cursor;
    if let Some(last) = phases.last_mut() {
        last.t_end_myr = total;
        last.frac_end = 1.0;
    }

    EvolutionTimeline {
        total_lifetime_myr: total,
        phases,
        initial,
        remnant,
    }
}

/// Main-sequence lifetime from a fuel/burn-rate model.
///
/// t_MS = 10 Gyr · (X/X☉) · (M/L), scaled by (Z/Z☉)^0.2 and clamped to
/// keep the timeline numerically sane at the mass extremes.
fn main_sequence_lifetime_myr(
    params: &StarParams,
    initial: &InitialStarState,
    model: &StellarModel,
) -> f64 {
    let fuel = initial.composition.x / model.x_sun;
    let burn = params.mass / initial.luminosity;
    let z_scale = model.z_ratio(params.metallicity).powf(model.z_lifetime_exp);

    let raw = model.ms_lifetime_gyr * 1000.0 * fuel * burn * z_scale;
    raw.clamp(model.ms_lifetime_range_myr.0, model.ms_lifetime_range_myr.1)
}

/// Durations of the four post-main-sequence phases, in Myr.
///
/// Two-step scheme: each raw fraction of t_MS is shaped by a lerp along the
/// normalized log-mass axis, then all four are uniformly rescaled so their
/// sum hits the mass-dependent total post-main-sequence fraction. This
/// decouples the relative phase durations from the absolute fraction of
/// life spent past the main sequence.
fn post_main_sequence_durations_myr(mass: f64, t_ms: f64, model: &StellarModel) -> [f64; 4] {
    let u = model.log_mass_axis(mass);

    let raw = [
        lerp(model.subgiant_frac.0, model.subgiant_frac.1, u),
        lerp(model.rgb_frac.0, model.rgb_frac.1, u),
        lerp(model.hb_frac.0, model.hb_frac.1, u),
        lerp(model.agb_frac.0, model.agb_frac.1, u),
    ];
    let raw_total: f64 = raw.iter().sum();
    let target_total = lerp(model.post_ms_total.0, model.post_ms_total.1, u);
    let scale = if raw_total > 0.0 {
        target_total / raw_total
    } else {
        0.0
    };

    raw.map(|fraction| fraction * scale * t_ms)
}

/// Terminal phase duration, in Myr.
///
/// White-dwarf-cooling formula reused for every remnant kind; only the
/// endpoint physics differ between remnants.
fn final_phase_duration_myr(mass: f64, t_ms: f64, model: &StellarModel) -> f64 {
    let cooling = model.final_duration_factor * t_ms * mass.powf(model.final_mass_exp);
    cooling.min(model.final_duration_cap * t_ms)
}
