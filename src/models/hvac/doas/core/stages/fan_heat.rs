//! Draw-through supply fan heat.

use tracing::debug;
use uom::si::{
    f64::VolumeRate, mass_density::kilogram_per_cubic_meter, power::kilowatt,
    volume_rate::cubic_meter_per_second,
};

use super::super::{fans, pressure_drop};
use super::{Component, Context, Progress, SizingError, state};

/// Adds the supply fan's absorbed power to the coil-leaving air.
pub(super) fn apply(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let fan_settings = &ctx.inputs.fans;
    if !fan_settings.include_fan_heat {
        return Ok(false);
    }

    let supply = &progress.supply;
    let rho = supply
        .density(&ctx.atmosphere)
        .get::<kilogram_per_cubic_meter>();
    let volume_flow = VolumeRate::new::<cubic_meter_per_second>(ctx.m_oa / rho);
    let q = fans::absorbed_power(
        volume_flow,
        fan_settings.supply_external_static + pressure_drop::supply(ctx.inputs),
        fan_settings.fan_efficiency,
    )
    .get::<kilowatt>();

    let leaving = state(
        "Fan Out",
        supply.celsius() + ctx.supply_delta_t(q),
        supply.kg_per_kg(),
    )?;

    debug!(q_kw = q, "supply fan heat");
    progress.advance_supply(Component::SupplyFanHeat, leaving);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::hvac::doas::core::{
        SystemInputs,
        stages::test_support::{air, context, progress},
    };
    use crate::support::psychro::CP_DRY_AIR;

    #[test]
    fn warms_coil_leaving_air() {
        let mut inputs = SystemInputs::default();
        inputs.fans.include_fan_heat = true;
        let ctx = context(&inputs);
        let mut progress = progress();
        progress.supply = air("Coil Out", 12.0, 0.0087);

        assert!(apply(&ctx, &mut progress).unwrap());

        // Supply TSP is 500 + 900 Pa at 60 % efficiency.
        let rho = ctx.atmosphere.density(progress.steps[0].entering.dry_bulb());
        let volume = ctx.m_oa / rho.get::<kilogram_per_cubic_meter>();
        let q = volume * 1400.0 / 0.6 / 1000.0;
        assert_relative_eq!(
            progress.supply.celsius(),
            12.0 + q / (ctx.m_oa * CP_DRY_AIR),
            epsilon = 1e-9
        );
        assert_relative_eq!(progress.supply.kg_per_kg(), 0.0087);
        assert_eq!(progress.steps[0].component, Component::SupplyFanHeat);
    }

    #[test]
    fn excluded_by_default() {
        let inputs = SystemInputs::default();
        let ctx = context(&inputs);
        let mut progress = progress();

        assert!(!apply(&ctx, &mut progress).unwrap());
        assert!(progress.steps.is_empty());
    }
}
