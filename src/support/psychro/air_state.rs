use uom::si::{
    f64::{MassDensity, Ratio, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

use super::{Atmosphere, HumidityRatio};

/// A labeled moist-air state defined by dry bulb and humidity ratio.
///
/// Every other property is derived on demand against an [`Atmosphere`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirState {
    label: String,
    dry_bulb: ThermodynamicTemperature,
    humidity_ratio: HumidityRatio,
}

impl AirState {
    /// Creates a labeled air state.
    pub fn new(
        label: impl Into<String>,
        dry_bulb: ThermodynamicTemperature,
        humidity_ratio: HumidityRatio,
    ) -> Self {
        Self {
            label: label.into(),
            dry_bulb,
            humidity_ratio,
        }
    }

    /// Returns a copy of this state with a new label.
    #[must_use]
    pub fn relabeled(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn dry_bulb(&self) -> ThermodynamicTemperature {
        self.dry_bulb
    }

    #[must_use]
    pub fn humidity_ratio(&self) -> HumidityRatio {
        self.humidity_ratio
    }

    /// Returns the specific enthalpy per unit mass of dry air.
    #[must_use]
    pub fn enthalpy(&self) -> SpecificEnthalpy {
        super::enthalpy(self.dry_bulb, self.humidity_ratio)
    }

    #[must_use]
    pub fn relative_humidity(&self, atmosphere: &Atmosphere) -> Ratio {
        atmosphere.relative_humidity(self.dry_bulb, self.humidity_ratio)
    }

    #[must_use]
    pub fn wet_bulb(&self, atmosphere: &Atmosphere) -> ThermodynamicTemperature {
        atmosphere.wet_bulb(self.dry_bulb, self.humidity_ratio)
    }

    /// Returns the dew point, derived from the clamped relative humidity.
    #[must_use]
    pub fn dew_point(&self, atmosphere: &Atmosphere) -> ThermodynamicTemperature {
        atmosphere.dew_point(self.dry_bulb, self.relative_humidity(atmosphere))
    }

    #[must_use]
    pub fn density(&self, atmosphere: &Atmosphere) -> MassDensity {
        atmosphere.density(self.dry_bulb)
    }

    /// Whether the state holds more moisture than saturated air at its dry bulb.
    #[must_use]
    pub fn is_supersaturated(&self, atmosphere: &Atmosphere) -> bool {
        self.humidity_ratio > atmosphere.saturation_humidity_ratio(self.dry_bulb)
    }

    pub(crate) fn celsius(&self) -> f64 {
        self.dry_bulb.get::<degree_celsius>()
    }

    pub(crate) fn kg_per_kg(&self) -> f64 {
        self.humidity_ratio.kg_per_kg()
    }

    pub(crate) fn kj_per_kg(&self) -> f64 {
        super::enthalpy_kj_per_kg(self.celsius(), self.kg_per_kg())
    }
}
