//! Standard motor size selection.

use uom::si::{f64::Power, power::kilowatt};

/// Nominal motor ratings offered, kW.
pub const STANDARD_SIZES_KW: [f64; 18] = [
    0.37, 0.55, 0.75, 1.1, 1.5, 2.2, 3.0, 4.0, 5.5, 7.5, 11.0, 15.0, 18.5, 22.0, 30.0, 37.0, 45.0,
    55.0,
];

/// Margin applied to the electrical power before selecting a rating.
pub const SAFETY_MARGIN: f64 = 1.15;

/// Selects the motor rating for a fan's electrical power.
///
/// Applies [`SAFETY_MARGIN`] and returns the smallest entry in
/// [`STANDARD_SIZES_KW`] at or above the result. Requirements beyond the
/// largest standard rating round up to the next whole kilowatt.
#[must_use]
pub fn select_standard_size(electrical_power: Power) -> Power {
    let required = electrical_power.get::<kilowatt>() * SAFETY_MARGIN;
    let size = STANDARD_SIZES_KW
        .iter()
        .copied()
        .find(|&size| size >= required)
        .unwrap_or_else(|| required.ceil());
    Power::new::<kilowatt>(size)
}
