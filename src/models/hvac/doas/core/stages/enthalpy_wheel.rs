//! Rotary enthalpy wheel.
//!
//! The outdoor side follows the sensible and latent effectiveness. The
//! exhaust side is derived from the mass and energy balance of the outdoor
//! side's change, so heat and moisture are conserved across the wheel.

use tracing::debug;
use uom::si::ratio::ratio;

use crate::support::psychro::{CP_DRY_AIR, dry_bulb_from_enthalpy};

use super::{Component, Context, Progress, SizingError, delta_t, state};

pub(super) fn apply(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let wheel = &ctx.inputs.enthalpy_wheel;
    if !wheel.enabled || ctx.m_ra <= 0.0 {
        return Ok(false);
    }

    let oa = &progress.supply;
    let ra = &progress.exhaust;
    let m_min = ctx.m_oa.min(ctx.m_ra);

    let q_sensible = wheel.sensible_effectiveness.get::<ratio>()
        * m_min
        * CP_DRY_AIR
        * (oa.celsius() - ra.celsius());
    let t_oa_out = oa.celsius() - delta_t(q_sensible, ctx.m_oa);

    let flow_fraction = if ctx.m_oa == 0.0 { 0.0 } else { m_min / ctx.m_oa };
    let dw = wheel.latent_effectiveness.get::<ratio>()
        * flow_fraction
        * (oa.kg_per_kg() - ra.kg_per_kg());
    let w_oa_out = (oa.kg_per_kg() - dw).min(ctx.saturation_w(t_oa_out));
    let oa_out = state("EW OA Out", t_oa_out, w_oa_out)?;

    // Exhaust picks up what the outdoor air gave up, per unit of exhaust flow.
    let share = ctx.m_oa / ctx.m_ra;
    let w_ea_out = ra.kg_per_kg() + share * (oa.kg_per_kg() - w_oa_out);
    let h_ea_out = ra.kj_per_kg() + share * (oa.kj_per_kg() - oa_out.kj_per_kg());
    let ea_out = state("EW EA Out", dry_bulb_from_enthalpy(h_ea_out, w_ea_out), w_ea_out)?;

    debug!(
        q_total_kw = ctx.m_oa * (oa.kj_per_kg() - oa_out.kj_per_kg()),
        "enthalpy wheel transfer"
    );
    progress.advance_supply(Component::EnthalpyWheelOutdoor, oa_out);
    progress.advance_exhaust(Component::EnthalpyWheelExhaust, ea_out);
    Ok(true)
}
