//! Moist-air (psychrometric) properties.
//!
//! Properties are evaluated for an ideal mixture of dry air and water vapor
//! at a site barometric pressure carried by an explicit [`Atmosphere`].
//! Nothing in this module holds global state, so independent calculations
//! may run concurrently with their own atmospheres.
//!
//! # Correlations
//!
//! - Saturation vapor pressure: Buck (1981), with separate coefficients over
//!   water (`T ≥ 0 °C`) and over ice (`T < 0 °C`).
//! - Humidity ratio: `W = 0.622·Pv / (P − Pv)`.
//! - Enthalpy: `h = 1.006·T + W·(2501 + 1.86·T)` kJ/kg dry air.
//! - Density: dry-air ideal gas, `ρ = P / (0.287·(T + 273.15))`.
//! - Wet bulb and dew point: bracketed bisection over `[−50 °C, T]`.
//!
//! # Example
//!
//! ```
//! use twine_doas::support::psychro::{Atmosphere, AirState};
//! use uom::si::{
//!     f64::{Length, Ratio, ThermodynamicTemperature},
//!     length::meter,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let atmosphere = Atmosphere::at_altitude(Length::new::<meter>(0.0)).unwrap();
//!
//! let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(35.0);
//! let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(28.0);
//! let w = atmosphere.humidity_ratio(atmosphere.vapor_pressure_from_wet_bulb(dry_bulb, wet_bulb));
//!
//! let outdoor = AirState::new("OA", dry_bulb, w);
//! let rh = outdoor.relative_humidity(&atmosphere).get::<percent>();
//! assert!(rh > 58.0 && rh < 60.0);
//! ```

mod air_state;
mod atmosphere;
mod formulas;
mod humidity_ratio;
mod solve;

pub use air_state::AirState;
pub use atmosphere::Atmosphere;
pub use humidity_ratio::HumidityRatio;
pub use solve::SolverConfig;

pub(crate) use formulas::{CP_DRY_AIR, dry_bulb_from_enthalpy, enthalpy_kj_per_kg};

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    available_energy::kilojoule_per_kilogram,
    pressure::kilopascal,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

/// Returns the saturation vapor pressure of water at `temperature`.
///
/// Uses the Buck (1981) correlation over water at or above 0 °C and over ice
/// below it.
#[must_use]
pub fn saturation_vapor_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    Pressure::new::<kilopascal>(formulas::saturation_pressure(
        temperature.get::<degree_celsius>(),
    ))
}

/// Returns the partial pressure of water vapor at a relative humidity.
#[must_use]
pub fn vapor_pressure_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: Ratio,
) -> Pressure {
    saturation_vapor_pressure(dry_bulb) * relative_humidity.get::<percent>() / 100.0
}

/// Returns the specific enthalpy of moist air per unit mass of dry air.
#[must_use]
pub fn enthalpy(
    dry_bulb: ThermodynamicTemperature,
    humidity_ratio: HumidityRatio,
) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<kilojoule_per_kilogram>(enthalpy_kj_per_kg(
        dry_bulb.get::<degree_celsius>(),
        humidity_ratio.kg_per_kg(),
    ))
}
