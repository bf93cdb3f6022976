//! Internal pressure drop of the supply and extract paths.

use uom::{
    ConstZero,
    si::{f64::Pressure, pressure::pascal},
};

use super::SystemInputs;

/// Enthalpy wheel allowance, Pa. Applies to both airstreams.
const ENTHALPY_WHEEL_PA: f64 = 250.0;

/// Sensible wheel or heat pipe allowance, Pa.
const SENSIBLE_RECOVERY_PA: f64 = 150.0;

/// Supplementary reheat coil allowance, Pa.
const REHEAT_PA: f64 = 50.0;

fn allowance(present: bool, pa: f64) -> Pressure {
    if present {
        Pressure::new::<pascal>(pa)
    } else {
        Pressure::ZERO
    }
}

/// Supply path: dampers, both filters, coil, and every enabled device.
pub(super) fn supply(inputs: &SystemInputs) -> Pressure {
    let drops = &inputs.pressure_drops;
    drops.damper
        + drops.pre_filter
        + drops.main_filter
        + allowance(inputs.enthalpy_wheel.enabled, ENTHALPY_WHEEL_PA)
        + drops.coil
        + allowance(
            inputs.sensible_wheel.enabled || inputs.heat_pipe.enabled,
            SENSIBLE_RECOVERY_PA,
        )
        + allowance(inputs.reheat.enabled, REHEAT_PA)
}

/// Extract path: the supply path without main filter, coil, and reheat.
pub(super) fn extract(inputs: &SystemInputs) -> Pressure {
    let drops = &inputs.pressure_drops;
    drops.damper
        + drops.pre_filter
        + allowance(inputs.enthalpy_wheel.enabled, ENTHALPY_WHEEL_PA)
        + allowance(
            inputs.sensible_wheel.enabled || inputs.heat_pipe.enabled,
            SENSIBLE_RECOVERY_PA,
        )
}
