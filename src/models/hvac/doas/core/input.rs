//! Design-point configuration of a DOAS unit.
//!
//! Inputs are trusted. Out-of-range values (a wet bulb above the dry bulb,
//! efficiencies above 100 %) are computed as given, and any result they drive
//! to infinity or NaN surfaces as a [`SizingError`](super::SizingError).

mod air;
mod conditioning;
mod fans;
mod recovery;

pub use air::{ExhaustAir, OutdoorAir};
pub use conditioning::{Coil, CoilType, Reheat, ReheatSource};
pub use fans::{ComponentPressureDrops, Fans};
pub use recovery::{EnthalpyWheel, HeatPipe, SensibleWheel};

use uom::si::{f64::Length, length::meter};

/// Complete configuration for one sizing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInputs {
    /// Site altitude above sea level.
    pub altitude: Length,

    pub outdoor: OutdoorAir,
    pub exhaust: ExhaustAir,

    pub enthalpy_wheel: EnthalpyWheel,
    pub sensible_wheel: SensibleWheel,
    pub heat_pipe: HeatPipe,

    pub coil: Coil,
    pub reheat: Reheat,

    pub fans: Fans,
    pub pressure_drops: ComponentPressureDrops,
}

impl Default for SystemInputs {
    /// A sea-level unit on a 35/28 °C design day with an enthalpy wheel and a
    /// DX coil leaving at 12 °C.
    fn default() -> Self {
        Self {
            altitude: Length::new::<meter>(0.0),
            outdoor: OutdoorAir::default(),
            exhaust: ExhaustAir::default(),
            enthalpy_wheel: EnthalpyWheel::default(),
            sensible_wheel: SensibleWheel::default(),
            heat_pipe: HeatPipe::default(),
            coil: Coil::default(),
            reheat: Reheat::default(),
            fans: Fans::default(),
            pressure_drops: ComponentPressureDrops::default(),
        }
    }
}

impl SystemInputs {
    /// Returns a copy with every recovery device and supplementary reheat disabled.
    #[must_use]
    pub fn without_recovery(&self) -> Self {
        Self {
            enthalpy_wheel: EnthalpyWheel {
                enabled: false,
                ..self.enthalpy_wheel
            },
            sensible_wheel: SensibleWheel {
                enabled: false,
                ..self.sensible_wheel
            },
            heat_pipe: HeatPipe {
                enabled: false,
                ..self.heat_pipe
            },
            reheat: Reheat {
                enabled: false,
                ..self.reheat
            },
            ..self.clone()
        }
    }
}
