//! Exhaust side of the sensible wheel.

use tracing::debug;
use uom::si::ratio::ratio;

use crate::support::psychro::CP_DRY_AIR;

use super::{Component, Context, Progress, SizingError, delta_t, kw, state};

/// Pre-cools the exhaust air toward the off-coil temperature.
///
/// The heat removed is retained in [`Progress::recovered`] and returned to
/// the supply air by the recovery reheat stage.
pub(super) fn pre_cool(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let wheel = &ctx.inputs.sensible_wheel;
    if !wheel.enabled || ctx.m_ra <= 0.0 {
        return Ok(false);
    }

    let exhaust = &progress.exhaust;
    let c_min = ctx.m_oa.min(ctx.m_ra) * CP_DRY_AIR;
    let q = wheel.effectiveness.get::<ratio>() * c_min * (exhaust.celsius() - ctx.off_coil_c());
    if q.is_nan() || q <= 0.0 {
        return Ok(false);
    }

    let leaving = state(
        "SW Exh Out",
        exhaust.celsius() - delta_t(q, ctx.m_ra),
        exhaust.kg_per_kg(),
    )?;

    debug!(q_kw = q, "sensible wheel heat retained for reheat");
    progress.recovered.sensible_wheel = kw(q);
    progress.advance_exhaust(Component::SensibleWheelExhaust, leaving);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        power::kilowatt, thermodynamic_temperature::degree_celsius,
        volume_rate::liter_per_second,
    };

    use crate::models::hvac::doas::core::{
        SystemInputs,
        stages::test_support::{air, context, progress},
    };

    fn enabled() -> SystemInputs {
        let mut inputs = SystemInputs::default();
        inputs.sensible_wheel.enabled = true;
        inputs
    }

    #[test]
    fn cools_exhaust_and_retains_heat() {
        let inputs = enabled();
        let ctx = context(&inputs);
        let mut progress = progress();

        assert!(pre_cool(&ctx, &mut progress).unwrap());

        // Exhaust has the smaller capacity rate, so it moves ε·(T_RA − T_off).
        assert_relative_eq!(progress.exhaust.celsius(), 24.0 - 0.65 * 12.0, epsilon = 1e-9);
        assert_relative_eq!(progress.exhaust.kg_per_kg(), 0.00929);
        assert_relative_eq!(
            progress.recovered.sensible_wheel.get::<kilowatt>(),
            0.65 * ctx.m_ra * CP_DRY_AIR * 12.0,
            epsilon = 1e-9
        );

        let step = &progress.steps[0];
        assert_eq!(step.component, Component::SensibleWheelExhaust);
        assert_eq!(step.entering.label(), "RA");
        assert_eq!(progress.supply.label(), "OA");
    }

    #[test]
    fn bypassed_when_disabled() {
        let inputs = SystemInputs::default();
        let ctx = context(&inputs);
        let mut progress = progress();

        assert!(!pre_cool(&ctx, &mut progress).unwrap());
        assert!(progress.steps.is_empty());
        assert_relative_eq!(progress.recovered.sensible_wheel.get::<kilowatt>(), 0.0);
    }

    #[test]
    fn bypassed_without_exhaust_flow() {
        let mut inputs = enabled();
        inputs.exhaust.flow = uom::si::f64::VolumeRate::new::<liter_per_second>(0.0);
        let ctx = context(&inputs);
        let mut progress = progress();

        assert!(!pre_cool(&ctx, &mut progress).unwrap());
        assert!(progress.steps.is_empty());
    }

    #[test]
    fn bypassed_when_exhaust_is_colder_than_off_coil() {
        let inputs = enabled();
        let ctx = context(&inputs);
        let mut progress = progress();
        progress.exhaust = air("RA", 10.0, 0.005);

        assert!(!pre_cool(&ctx, &mut progress).unwrap());
        assert_relative_eq!(progress.exhaust.dry_bulb().get::<degree_celsius>(), 10.0);
    }
}
