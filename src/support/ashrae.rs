//! ASHRAE 90.1 minimum efficiency lookup for unitary DX equipment.
//!
//! The DOAS pipeline never calls into this module. It is a helper for
//! callers comparing a sized cooling load against code minimums.

use uom::{
    ConstZero,
    si::{f64::Power, power::kilowatt},
};

/// Btu/h per kW.
const BTU_PER_HOUR_PER_KW: f64 = 3412.142;

/// Converts an EER (Btu/h per W) to a COP.
const EER_PER_COP: f64 = 3.412;

/// Capacity brackets in Btu/h and the minimum EER below each upper bound.
const EER_BRACKETS: [(f64, f64); 4] = [
    (65_000.0, 12.0),
    (135_000.0, 11.2),
    (240_000.0, 11.0),
    (760_000.0, 10.0),
];

/// Minimum EER above the largest bracket.
const EER_LARGEST: f64 = 9.7;

/// Code-minimum performance for a DX unit of a given cooling capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DxPerformance {
    /// Minimum energy efficiency ratio, Btu/h per W.
    pub min_eer: f64,
    /// Minimum coefficient of performance.
    pub min_cop: f64,
    /// Estimated compressor electrical power at the minimum COP.
    pub electrical_power: Power,
}

impl DxPerformance {
    const NONE: Self = Self {
        min_eer: 0.0,
        min_cop: 0.0,
        electrical_power: Power::ZERO,
    };
}

/// Looks up the minimum DX performance for a total cooling load.
///
/// A zero or negative load returns all zeros.
#[must_use]
pub fn minimum_dx_performance(cooling: Power) -> DxPerformance {
    let kw = cooling.get::<kilowatt>();
    if kw.is_nan() || kw <= 0.0 {
        return DxPerformance::NONE;
    }

    let btu_per_hour = kw * BTU_PER_HOUR_PER_KW;
    let min_eer = EER_BRACKETS
        .iter()
        .find(|(upper, _)| btu_per_hour < *upper)
        .map_or(EER_LARGEST, |&(_, eer)| eer);
    let min_cop = min_eer / EER_PER_COP;

    DxPerformance {
        min_eer,
        min_cop,
        electrical_power: Power::new::<kilowatt>(kw / min_cop),
    }
}
