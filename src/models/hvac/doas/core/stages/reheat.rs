//! Recovery and supplementary reheat.

use tracing::debug;
use uom::si::{
    f64::VolumeRate,
    power::kilowatt,
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::{cubic_meter_per_hour, liter_per_second},
};

use crate::support::{psychro::CP_DRY_AIR, units::TemperatureDifference};

use super::super::{ReheatDuty, ReheatSource};
use super::{Component, Context, Progress, SizingError, kw, state, water_flow};

/// Gas consumed per kW of burner input, m³/h.
const GAS_M3_PER_KWH: f64 = 1.0 / 10.0;

/// Returns the heat retained by the pre-cool stages to the supply air.
///
/// The heat pipe reheats first, then the sensible wheel. Each adds exactly
/// the heat it removed upstream.
pub(super) fn recover(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let retained = [
        (
            Component::HeatPipeReheat,
            "HP Reheat",
            progress.recovered.heat_pipe.get::<kilowatt>(),
        ),
        (
            Component::SensibleWheelReheat,
            "SW Reheat",
            progress.recovered.sensible_wheel.get::<kilowatt>(),
        ),
    ];

    let mut applied = false;
    for (component, label, q) in retained {
        if q > 0.0 {
            let supply = &progress.supply;
            let leaving = state(
                label,
                supply.celsius() + ctx.supply_delta_t(q),
                supply.kg_per_kg(),
            )?;
            progress.advance_supply(component, leaving);
            applied = true;
        }
    }
    Ok(applied)
}

/// Raises the supply air to the reheat target with the configured source.
pub(super) fn supplement(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let reheat = &ctx.inputs.reheat;
    let target = reheat.target_supply_temperature.get::<degree_celsius>();
    let supply = &progress.supply;
    if !reheat.enabled || target.is_nan() || target <= supply.celsius() {
        return Ok(false);
    }

    let load = ctx.m_oa * CP_DRY_AIR * (target - supply.celsius());
    let leaving = state("SA Reheat", target, supply.kg_per_kg())?;

    let mut duty = ReheatDuty {
        load: kw(load),
        ..ReheatDuty::NONE
    };
    match reheat.source {
        ReheatSource::Electric => {}
        ReheatSource::HotWater {
            entering: ewt,
            leaving: lwt,
        } => {
            let dt = ewt.minus(lwt).get::<delta_kelvin>().abs();
            duty.water_flow = VolumeRate::new::<liter_per_second>(water_flow(load, dt));
        }
        ReheatSource::Gas { efficiency } => {
            let efficiency = efficiency.get::<percent>();
            if efficiency > 0.0 {
                let burner_input = load / (efficiency / 100.0);
                duty.gas_consumption =
                    VolumeRate::new::<cubic_meter_per_hour>(burner_input * GAS_M3_PER_KWH);
            }
        }
    }

    debug!(load_kw = load, source = ?reheat.source, "supplementary reheat");
    progress.reheat = duty;
    progress.advance_supply(Component::SupplementaryReheat, leaving);
    Ok(true)
}
