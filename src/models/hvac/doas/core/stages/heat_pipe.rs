use tracing::debug;
use uom::si::ratio::ratio;

use crate::support::psychro::CP_DRY_AIR;

use super::{Component, Context, Progress, SizingError, kw, state};

/// Pre-cools the outdoor air ahead of the coil with the wrap-around heat pipe.
///
/// Only sensible heat moves. The heat removed is retained for the recovery
/// reheat stage.
pub(super) fn pre_cool(ctx: &Context<'_>, progress: &mut Progress) -> Result<bool, SizingError> {
    let heat_pipe = &ctx.inputs.heat_pipe;
    let supply = &progress.supply;
    let driving = supply.celsius() - ctx.off_coil_c();
    if !heat_pipe.enabled || driving.is_nan() || driving <= 0.0 {
        return Ok(false);
    }

    let q = heat_pipe.effectiveness.get::<ratio>() * ctx.m_oa * CP_DRY_AIR * driving;
    let leaving = state(
        "HP Pre",
        supply.celsius() - ctx.supply_delta_t(q),
        supply.kg_per_kg(),
    )?;

    debug!(q_kw = q, "heat pipe heat retained for reheat");
    progress.recovered.heat_pipe = kw(q);
    progress.advance_supply(Component::HeatPipePreCool, leaving);
    Ok(true)
}
