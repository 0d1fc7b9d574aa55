//! Evolutionary phase and remnant identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Identifier for one evolutionary phase.
///
/// The five base phases are followed by exactly one of the three terminal
/// phases, chosen by the remnant kind. Keeping this a closed enum means the
/// shape-construction and shape-lookup logic is checked exhaustively at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum PhaseId {
    Ms,
    Subgiant,
    Rgb,
    Hb,
    Agb,
    WdFinal,
    NsFinal,
    BhFinal,
}

impl PhaseId {
    /// Human-readable phase name, carried through for UI consumers.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseId::Ms => "Main Sequence",
            PhaseId::Subgiant => "Subgiant",
            PhaseId::Rgb => "Red Giant Branch",
            PhaseId::Hb => "Horizontal Branch",
            PhaseId::Agb => "Asymptotic Giant Branch",
            PhaseId::WdFinal => "White Dwarf Cooling",
            PhaseId::NsFinal => "Red Supergiant",
            PhaseId::BhFinal => "Wolf-Rayet",
        }
    }

    /// Whether this is one of the three terminal phases.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PhaseId::WdFinal | PhaseId::NsFinal | PhaseId::BhFinal)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            PhaseId::Ms => "ms",
            PhaseId::Subgiant => "subgiant",
            PhaseId::Rgb => "rgb",
            PhaseId::Hb => "hb",
            PhaseId::Agb => "agb",
            PhaseId::WdFinal => "wdFinal",
            PhaseId::NsFinal => "nsFinal",
            PhaseId::BhFinal => "bhFinal",
        };
        write!(f, "{}", str)
    }
}

/// The end state of a star after nuclear burning ceases.
///
/// Determined solely by initial mass, fixed at timeline construction, and
/// never recomputed for the life of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Remnant {
    Wd,
    Ns,
    Bh,
}

impl Remnant {
    /// Classify the remnant from initial mass alone.
    ///
    /// * < 8 M☉: white dwarf
    /// * 8-25 M☉: neutron star
    /// * ≥ 25 M☉: black hole
    pub fn from_mass(mass_solar: f64) -> Self {
        match mass_solar {
            m if m < 8.0 => Remnant::Wd,
            m if m < 25.0 => Remnant::Ns,
            _ => Remnant::Bh,
        }
    }

    /// The terminal phase identifier for this remnant kind.
    pub fn final_phase(&self) -> PhaseId {
        match self {
            Remnant::Wd => PhaseId::WdFinal,
            Remnant::Ns => PhaseId::NsFinal,
            Remnant::Bh => PhaseId::BhFinal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Remnant::Wd => "White Dwarf",
            Remnant::Ns => "Neutron Star",
            Remnant::Bh => "Black Hole",
        }
    }
}

impl fmt::Display for Remnant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Remnant::Wd => "wd",
            Remnant::Ns => "ns",
            Remnant::Bh => "bh",
        };
        write!(f, "{}", str)
    }
}
