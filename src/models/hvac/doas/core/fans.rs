//! Fan power and motor selection.

use uom::si::{
    f64::{Power, Pressure, Ratio, VolumeRate},
    power::watt,
    pressure::pascal,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::motor::select_standard_size;

use super::{FanResult, Fans};

/// Shaft power to move `volume_flow` against `total_static`.
pub(super) fn absorbed_power(
    volume_flow: VolumeRate,
    total_static: Pressure,
    fan_efficiency: Ratio,
) -> Power {
    Power::new::<watt>(
        volume_flow.get::<cubic_meter_per_second>() * total_static.get::<pascal>()
            / fan_efficiency.get::<ratio>(),
    )
}

/// Sizes one fan.
///
/// Zero efficiencies are not guarded and yield non-finite powers.
pub(super) fn size(
    volume_flow: VolumeRate,
    internal_pressure_drop: Pressure,
    external_static: Pressure,
    fans: &Fans,
) -> FanResult {
    let total_static_pressure = external_static + internal_pressure_drop;
    let absorbed_power = absorbed_power(volume_flow, total_static_pressure, fans.fan_efficiency);
    let electrical_power = absorbed_power
        / (fans.motor_efficiency.get::<ratio>() * fans.drive_efficiency.get::<ratio>());

    FanResult {
        internal_pressure_drop,
        total_static_pressure,
        volume_flow,
        absorbed_power,
        electrical_power,
        motor: select_standard_size(electrical_power),
    }
}
