//! The ordered process pipeline.
//!
//! Each [`Stage`] inspects the configuration, and if it applies, transforms
//! the running supply and exhaust states and appends its steps. Stages that
//! do not apply leave everything untouched.

mod coil;
mod enthalpy_wheel;
mod fan_heat;
mod heat_pipe;
mod reheat;
mod sensible_wheel;

use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermodynamicTemperature, VolumeRate},
        power::kilowatt,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::psychro::{AirState, Atmosphere, CP_DRY_AIR, HumidityRatio};

use super::{
    Component, CoolingLoad, ProcessStep, RecoveredEnergy, ReheatDuty, SizingError, SystemInputs,
};

/// Specific heat of water, kJ/kg·K.
const CP_WATER: f64 = 4.186;

/// Pipeline stages in physical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stage {
    SensibleWheelPreCool,
    EnthalpyWheel,
    HeatPipePreCool,
    CoolingCoil,
    SupplyFanHeat,
    RecoveryReheat,
    SupplementaryReheat,
}

pub(super) const PIPELINE: [Stage; 7] = [
    Stage::SensibleWheelPreCool,
    Stage::EnthalpyWheel,
    Stage::HeatPipePreCool,
    Stage::CoolingCoil,
    Stage::SupplyFanHeat,
    Stage::RecoveryReheat,
    Stage::SupplementaryReheat,
];

impl Stage {
    /// Runs the stage against the current progress.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the stage produces an invalid state.
    pub(super) fn run(
        self,
        ctx: &Context<'_>,
        progress: &mut Progress,
    ) -> Result<(), SizingError> {
        let applied = match self {
            Self::SensibleWheelPreCool => sensible_wheel::pre_cool(ctx, progress)?,
            Self::EnthalpyWheel => enthalpy_wheel::apply(ctx, progress)?,
            Self::HeatPipePreCool => heat_pipe::pre_cool(ctx, progress)?,
            Self::CoolingCoil => coil::apply(ctx, progress)?,
            Self::SupplyFanHeat => fan_heat::apply(ctx, progress)?,
            Self::RecoveryReheat => reheat::recover(ctx, progress)?,
            Self::SupplementaryReheat => reheat::supplement(ctx, progress)?,
        };

        if applied {
            debug!(
                stage = ?self,
                supply_c = progress.supply.celsius(),
                supply_w = progress.supply.kg_per_kg(),
                "stage applied"
            );
        } else {
            trace!(stage = ?self, "stage bypassed");
        }
        Ok(())
    }
}

/// Fixed quantities shared by every stage.
pub(super) struct Context<'a> {
    pub(super) inputs: &'a SystemInputs,
    pub(super) atmosphere: Atmosphere,
    /// Outdoor air mass flow, kg/s.
    pub(super) m_oa: f64,
    /// Return air mass flow, kg/s.
    pub(super) m_ra: f64,
}

impl Context<'_> {
    fn off_coil_c(&self) -> f64 {
        self.inputs
            .coil
            .off_coil_temperature
            .get::<degree_celsius>()
    }

    /// Temperature change of the outdoor airstream for a heat flow in kW.
    fn supply_delta_t(&self, q: f64) -> f64 {
        delta_t(q, self.m_oa)
    }

    /// Saturation humidity ratio at `t` °C, kg/kg.
    fn saturation_w(&self, t: f64) -> f64 {
        self.atmosphere
            .saturation_humidity_ratio(ThermodynamicTemperature::new::<degree_celsius>(t))
            .kg_per_kg()
    }
}

/// Running state threaded through the pipeline.
#[derive(Debug, Clone)]
pub(super) struct Progress {
    pub(super) supply: AirState,
    pub(super) exhaust: AirState,
    pub(super) recovered: RecoveredEnergy,
    pub(super) steps: Vec<ProcessStep>,
    pub(super) cooling: CoolingLoad,
    pub(super) heating: Power,
    pub(super) coil_water_flow: VolumeRate,
    pub(super) reheat: ReheatDuty,
}

impl Progress {
    pub(super) fn new(outdoor: AirState, exhaust: AirState) -> Self {
        Self {
            supply: outdoor,
            exhaust,
            recovered: RecoveredEnergy::NONE,
            steps: Vec::new(),
            cooling: CoolingLoad::NONE,
            heating: Power::ZERO,
            coil_water_flow: VolumeRate::ZERO,
            reheat: ReheatDuty::NONE,
        }
    }

    /// Moves the supply air to `leaving` and records the step.
    fn advance_supply(&mut self, component: Component, leaving: AirState) {
        let entering = std::mem::replace(&mut self.supply, leaving.clone());
        self.steps.push(ProcessStep {
            component,
            entering,
            leaving,
        });
    }

    /// Moves the exhaust air to `leaving` and records the step.
    fn advance_exhaust(&mut self, component: Component, leaving: AirState) {
        let entering = std::mem::replace(&mut self.exhaust, leaving.clone());
        self.steps.push(ProcessStep {
            component,
            entering,
            leaving,
        });
    }
}

/// Builds a state from a computed dry bulb (°C) and humidity ratio (kg/kg).
///
/// # Errors
///
/// Fails if the temperature is not finite or the humidity ratio is negative or NaN.
fn state(label: &str, t: f64, w: f64) -> Result<AirState, SizingError> {
    let t = SizingError::check_finite("dry bulb", t)?;
    let w = HumidityRatio::new(w).map_err(|_| SizingError::InvalidHumidityRatio {
        point: label.to_owned(),
        value: w,
    })?;
    Ok(AirState::new(
        label,
        ThermodynamicTemperature::new::<degree_celsius>(t),
        w,
    ))
}

/// Temperature change of a stream for a heat flow `q` in kW.
///
/// A stream with zero capacity rate does not change temperature.
fn delta_t(q: f64, m_dot: f64) -> f64 {
    let capacity = m_dot * CP_DRY_AIR;
    if capacity == 0.0 { 0.0 } else { q / capacity }
}

/// Water flow in L/s carrying `q` kW across a temperature change of `dt` K.
///
/// Zero when the temperature change is not positive.
fn water_flow(q: f64, dt: f64) -> f64 {
    if dt > 0.0 { q.abs() / (CP_WATER * dt) } else { 0.0 }
}

fn kw(q: f64) -> Power {
    Power::new::<kilowatt>(q)
}
