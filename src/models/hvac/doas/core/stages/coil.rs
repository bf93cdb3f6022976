//! Main coil.
//!
//! Drives the supply air to the off-coil temperature. Moisture above
//! saturation at the off-coil temperature condenses out, and the coil never
//! adds moisture.

use tracing::debug;
use uom::si::{
    f64::VolumeRate, temperature_interval::kelvin as delta_kelvin, volume_rate::liter_per_second,
};

use crate::support::psychro::CP_DRY_AIR;

use super::super::{CoilType, CoolingLoad};
use super::{Component, Context, Progress, SizingError, kw, state, water_flow};

pub(super) fn apply(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let entering = &progress.supply;
    let t_out = ctx.off_coil_c();
    let w_out = entering.kg_per_kg().min(ctx.saturation_w(t_out));
    let leaving = state("Coil Out", t_out, w_out)?;

    let dh = entering.kj_per_kg() - leaving.kj_per_kg();
    let duty = if dh >= 0.0 {
        let total = ctx.m_oa * dh;
        let sensible = ctx.m_oa * CP_DRY_AIR * (entering.celsius() - t_out);
        progress.cooling = CoolingLoad {
            total: kw(total),
            sensible: kw(sensible),
            latent: kw((total - sensible).max(0.0)),
        };
        total
    } else {
        let heating = -ctx.m_oa * dh;
        progress.heating = kw(heating);
        heating
    };

    if let CoilType::ChilledWater { delta_t } = ctx.inputs.coil.kind {
        let flow = water_flow(duty, delta_t.get::<delta_kelvin>());
        progress.coil_water_flow = VolumeRate::new::<liter_per_second>(flow);
    }

    debug!(duty_kw = duty, cooling = dh >= 0.0, "coil duty");
    progress.advance_supply(Component::CoolingCoil, leaving);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::TemperatureInterval, power::kilowatt};

    use crate::models::hvac::doas::core::{
        SystemInputs,
        stages::test_support::{air, context, progress},
    };

    #[test]
    fn dehumidifies_design_air() {
        let inputs = SystemInputs::default();
        let ctx = context(&inputs);
        let mut progress = progress();

        assert!(apply(&ctx, &mut progress).unwrap());

        let step = &progress.steps[0];
        assert_eq!(step.component, Component::CoolingCoil);
        assert_relative_eq!(step.leaving.celsius(), 12.0);
        assert_relative_eq!(step.leaving.kg_per_kg(), ctx.saturation_w(12.0));

        let cooling = progress.cooling;
        let total = cooling.total.get::<kilowatt>();
        let sensible = cooling.sensible.get::<kilowatt>();
        assert_relative_eq!(sensible, ctx.m_oa * CP_DRY_AIR * 23.0, epsilon = 1e-9);
        assert!(cooling.latent.get::<kilowatt>() > 0.0);
        assert_relative_eq!(total, sensible + cooling.latent.get::<kilowatt>(), epsilon = 1e-9);
        assert_relative_eq!(progress.heating.get::<kilowatt>(), 0.0);
        assert_relative_eq!(progress.coil_water_flow.get::<liter_per_second>(), 0.0);
    }

    #[test]
    fn dry_air_keeps_its_moisture() {
        let inputs = SystemInputs::default();
        let ctx = context(&inputs);
        let mut progress = progress();
        progress.supply = air("OA", 30.0, 0.006);

        apply(&ctx, &mut progress).unwrap();

        assert_relative_eq!(progress.supply.kg_per_kg(), 0.006);
        assert!(progress.cooling.latent.get::<kilowatt>() >= 0.0);
    }

    #[test]
    fn chilled_water_flow_follows_duty() {
        let mut inputs = SystemInputs::default();
        inputs.coil.kind = CoilType::ChilledWater {
            delta_t: TemperatureInterval::new::<delta_kelvin>(5.0),
        };
        let ctx = context(&inputs);
        let mut progress = progress();

        apply(&ctx, &mut progress).unwrap();

        let total = progress.cooling.total.get::<kilowatt>();
        assert_relative_eq!(
            progress.coil_water_flow.get::<liter_per_second>(),
            total / (4.186 * 5.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_water_delta_t_gives_no_flow() {
        let mut inputs = SystemInputs::default();
        inputs.coil.kind = CoilType::ChilledWater {
            delta_t: TemperatureInterval::new::<delta_kelvin>(0.0),
        };
        let ctx = context(&inputs);
        let mut progress = progress();

        apply(&ctx, &mut progress).unwrap();
        assert_eq!(progress.coil_water_flow, VolumeRate::new::<liter_per_second>(0.0));
    }

    #[test]
    fn winter_air_is_heated() {
        let inputs = SystemInputs::default();
        let ctx = context(&inputs);
        let mut progress = progress();
        progress.supply = air("OA", -5.0, 0.002);

        apply(&ctx, &mut progress).unwrap();

        assert_eq!(progress.cooling, CoolingLoad::NONE);
        let expected = ctx.m_oa * (progress.supply.kj_per_kg() - air("", -5.0, 0.002).kj_per_kg());
        assert_relative_eq!(progress.heating.get::<kilowatt>(), expected, epsilon = 1e-9);
        assert_relative_eq!(progress.supply.kg_per_kg(), 0.002);
    }
}
