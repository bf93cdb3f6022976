//! Dedicated outdoor air system (DOAS) sizing model.
//!
//! [`Doas`] implements [`twine_core::Model`] for a single design-point
//! sizing run. The computational core is in the [`core`] module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_doas::models::hvac::doas::{Component, Doas, SystemInputs};
//! use uom::si::power::kilowatt;
//!
//! let results = Doas.call(&SystemInputs::default()).unwrap();
//!
//! assert!(results.cooling.total.get::<kilowatt>() > 0.0);
//! assert!(results.step(Component::EnthalpyWheelOutdoor).is_some());
//! ```

pub mod core;

use twine_core::Model;

pub use self::core::{
    Coil, CoilType, Component, ComponentPressureDrops, CoolingLoad, EnthalpyWheel, ExhaustAir,
    FanResult, Fans, HeatPipe, OutdoorAir, ProcessStep, RecoveredEnergy, Reheat, ReheatDuty,
    ReheatSource, SensibleWheel, SizingError, SystemInputs, SystemResults,
};

/// DOAS sizing as a [`Model`].
///
/// Stateless. Every call builds its own atmosphere from the inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doas;

impl Model for Doas {
    type Input = SystemInputs;
    type Output = SystemResults;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::size(input)
    }
}
