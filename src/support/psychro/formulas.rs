//! Scalar psychrometric relations.
//!
//! Units: temperatures in °C, pressures in kPa, humidity ratios in kg/kg,
//! enthalpies in kJ/kg dry air.

/// Standard sea-level barometric pressure, kPa.
pub(super) const STANDARD_PRESSURE: f64 = 101.325;

/// Ratio of the molecular weights of water vapor and dry air.
const EPSILON: f64 = 0.622;

/// Smallest humidity ratio reported, kg/kg.
pub(super) const MIN_HUMIDITY_RATIO: f64 = 1e-6;

/// Specific heat of dry air, kJ/kg·K.
pub(crate) const CP_DRY_AIR: f64 = 1.006;

/// Specific heat of water vapor, kJ/kg·K.
const CP_VAPOR: f64 = 1.86;

/// Latent heat of vaporization at 0 °C, kJ/kg.
const H_FG_0: f64 = 2501.0;

/// Gas constant of dry air, kJ/kg·K.
const R_DRY_AIR: f64 = 0.287;

/// Psychrometer coefficient for a ventilated wet bulb, 1/K.
const PSYCHROMETER_A: f64 = 0.00066;

pub(super) fn barometric_pressure(altitude_m: f64) -> f64 {
    STANDARD_PRESSURE * (1.0 - 2.25577e-5 * altitude_m).powf(5.25588)
}

/// Buck (1981) saturation vapor pressure over water or ice.
pub(super) fn saturation_pressure(t: f64) -> f64 {
    if t >= 0.0 {
        0.61121 * (17.502 * t / (t + 240.97)).exp()
    } else {
        0.61115 * (22.452 * t / (t + 272.55)).exp()
    }
}

pub(super) fn vapor_pressure_from_wet_bulb(p: f64, t_db: f64, t_wb: f64) -> f64 {
    let a = PSYCHROMETER_A * (1.0 + 0.00115 * t_wb);
    saturation_pressure(t_wb) - p * a * (t_db - t_wb)
}

/// Humidity ratio for vapor pressure `p_v`, floored at [`MIN_HUMIDITY_RATIO`].
///
/// NaN propagates.
pub(super) fn humidity_ratio(p: f64, p_v: f64) -> f64 {
    if p_v.is_nan() {
        return f64::NAN;
    }
    if p - p_v <= 0.0 {
        return MIN_HUMIDITY_RATIO;
    }
    (EPSILON * p_v / (p - p_v)).max(MIN_HUMIDITY_RATIO)
}

/// Inverse of [`humidity_ratio`].
pub(super) fn vapor_pressure(p: f64, w: f64) -> f64 {
    w * p / (EPSILON + w)
}

pub(crate) fn enthalpy_kj_per_kg(t: f64, w: f64) -> f64 {
    CP_DRY_AIR * t + w * (H_FG_0 + CP_VAPOR * t)
}

/// Dry-bulb temperature at which moist air of humidity ratio `w` has enthalpy `h`.
pub(crate) fn dry_bulb_from_enthalpy(h: f64, w: f64) -> f64 {
    (h - H_FG_0 * w) / (CP_DRY_AIR + CP_VAPOR * w)
}

pub(super) fn density(p: f64, t: f64) -> f64 {
    p / (R_DRY_AIR * (t + 273.15))
}

/// Relative humidity in percent, clamped to `[0, 100]`.
pub(super) fn relative_humidity(p: f64, t: f64, w: f64) -> f64 {
    if w <= 0.0 {
        return 0.0;
    }
    let p_sat = saturation_pressure(t);
    if p_sat <= 0.0 {
        return 0.0;
    }
    (vapor_pressure(p, w) / p_sat * 100.0).clamp(0.0, 100.0)
}
