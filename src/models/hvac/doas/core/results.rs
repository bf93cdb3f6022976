//! Results of a sizing run.

use std::fmt;

use uom::{
    ConstZero,
    si::f64::{MassDensity, Power, Pressure, VolumeRate},
};

use crate::support::psychro::AirState;

/// One component's effect on an airstream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessStep {
    pub component: Component,
    pub entering: AirState,
    pub leaving: AirState,
}

/// Component tag of a [`ProcessStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    /// Exhaust side of the sensible wheel, ahead of the enthalpy wheel.
    SensibleWheelExhaust,
    EnthalpyWheelOutdoor,
    EnthalpyWheelExhaust,
    HeatPipePreCool,
    CoolingCoil,
    SupplyFanHeat,
    HeatPipeReheat,
    /// Supply side of the sensible wheel, after the coil.
    SensibleWheelReheat,
    SupplementaryReheat,
}

impl Component {
    /// Display name used in schedules and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SensibleWheelExhaust => "Sensible Wheel (Exh)",
            Self::EnthalpyWheelOutdoor => "Enthalpy Wheel (OA)",
            Self::EnthalpyWheelExhaust => "Enthalpy Wheel (EA)",
            Self::HeatPipePreCool => "HP Pre-Cool",
            Self::CoolingCoil => "Cooling Coil",
            Self::SupplyFanHeat => "Supply Fan Heat",
            Self::HeatPipeReheat => "HP Reheat",
            Self::SensibleWheelReheat => "Sensible Wheel (Re)",
            Self::SupplementaryReheat => "Supplementary Reheat",
        }
    }

    /// Whether the component acts on the exhaust airstream.
    #[must_use]
    pub fn is_exhaust_side(self) -> bool {
        matches!(self, Self::SensibleWheelExhaust | Self::EnthalpyWheelExhaust)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main coil cooling duty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoolingLoad {
    pub total: Power,
    pub sensible: Power,
    /// Never negative.
    pub latent: Power,
}

impl CoolingLoad {
    pub(super) const NONE: Self = Self {
        total: Power::ZERO,
        sensible: Power::ZERO,
        latent: Power::ZERO,
    };
}

/// Supplementary reheat duty and the flow of its energy source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReheatDuty {
    pub load: Power,
    /// Hot water flow, zero for other sources.
    pub water_flow: VolumeRate,
    /// Gas consumption, zero for other sources.
    pub gas_consumption: VolumeRate,
}

impl ReheatDuty {
    pub(super) const NONE: Self = Self {
        load: Power::ZERO,
        water_flow: VolumeRate::ZERO,
        gas_consumption: VolumeRate::ZERO,
    };
}

/// Heat taken out ahead of the coil by recovery devices and returned to the
/// supply air after it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoveredEnergy {
    pub heat_pipe: Power,
    pub sensible_wheel: Power,
}

impl RecoveredEnergy {
    pub(super) const NONE: Self = Self {
        heat_pipe: Power::ZERO,
        sensible_wheel: Power::ZERO,
    };

    #[must_use]
    pub fn total(&self) -> Power {
        self.heat_pipe + self.sensible_wheel
    }
}

/// Operating point and motor selection of one fan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanResult {
    pub internal_pressure_drop: Pressure,
    /// External plus internal static pressure.
    pub total_static_pressure: Pressure,
    pub volume_flow: VolumeRate,
    /// Shaft power.
    pub absorbed_power: Power,
    /// Input power after motor and drive losses.
    pub electrical_power: Power,
    /// Selected standard motor rating.
    pub motor: Power,
}

/// Complete outcome of sizing a DOAS unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemResults {
    /// Process steps in physical traversal order.
    pub steps: Vec<ProcessStep>,

    /// Outdoor (`"OA"`), return (`"RA"`) and final supply (`"SA"`) states.
    pub chart_points: Vec<AirState>,

    /// Dry-air density at outdoor conditions.
    pub air_density: MassDensity,

    pub cooling: CoolingLoad,

    /// Coil heating duty, nonzero only when the coil adds enthalpy.
    pub total_heating: Power,

    /// Chilled water flow, zero for a DX coil.
    pub main_coil_water_flow: VolumeRate,

    pub reheat: ReheatDuty,
    pub recovered: RecoveredEnergy,

    pub supply_fan: FanResult,
    pub extract_fan: FanResult,
}

impl SystemResults {
    /// Returns the first step produced by `component`, if it ran.
    #[must_use]
    pub fn step(&self, component: Component) -> Option<&ProcessStep> {
        self.steps.iter().find(|step| step.component == component)
    }

    /// Returns the chart point with the given label.
    #[must_use]
    pub fn chart_point(&self, label: &str) -> Option<&AirState> {
        self.chart_points.iter().find(|point| point.label() == label)
    }

    /// Returns the air state delivered to the space.
    #[must_use]
    pub fn supply_air(&self) -> Option<&AirState> {
        self.chart_point("SA")
    }

    /// Combined supply and extract shaft power.
    #[must_use]
    pub fn total_fan_power(&self) -> Power {
        self.supply_fan.absorbed_power + self.extract_fan.absorbed_power
    }

    /// Combined supply and extract electrical power.
    #[must_use]
    pub fn total_electrical_power(&self) -> Power {
        self.supply_fan.electrical_power + self.extract_fan.electrical_power
    }
}
