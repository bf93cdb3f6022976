//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval,
//! such as the water-side temperature drop across a reheat coil:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_doas::support::units::TemperatureDifference;
//!
//! let entering = ThermodynamicTemperature::new::<degree_celsius>(60.0);
//! let leaving = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let delta_t = entering.minus(leaving);
//! assert!((delta_t.get::<temperature_interval::kelvin>() - 20.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
