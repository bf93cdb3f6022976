use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

/// Main cooling (or heating) coil.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coil {
    /// Dry bulb of the air leaving the coil.
    pub off_coil_temperature: ThermodynamicTemperature,
    pub kind: CoilType,
}

impl Default for Coil {
    fn default() -> Self {
        Self {
            off_coil_temperature: ThermodynamicTemperature::new::<degree_celsius>(12.0),
            kind: CoilType::DirectExpansion,
        }
    }
}

/// Coil medium.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoilType {
    /// Refrigerant (DX) coil. No water flow is derived.
    DirectExpansion,
    /// Chilled-water coil with the given water temperature rise.
    ChilledWater { delta_t: TemperatureInterval },
}

/// Supplementary reheat after the recovery devices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reheat {
    pub enabled: bool,
    /// Supply temperature the reheat raises the air to.
    pub target_supply_temperature: ThermodynamicTemperature,
    pub source: ReheatSource,
}

impl Default for Reheat {
    fn default() -> Self {
        Self {
            enabled: false,
            target_supply_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            source: ReheatSource::Electric,
        }
    }
}

/// Energy source for supplementary reheat.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReheatSource {
    Electric,
    HotWater {
        entering: ThermodynamicTemperature,
        leaving: ThermodynamicTemperature,
    },
    Gas {
        /// Burner efficiency.
        efficiency: Ratio,
    },
}

impl ReheatSource {
    /// Hot water at 60 °C entering, 40 °C leaving.
    #[must_use]
    pub fn hot_water() -> Self {
        Self::HotWater {
            entering: ThermodynamicTemperature::new::<degree_celsius>(60.0),
            leaving: ThermodynamicTemperature::new::<degree_celsius>(40.0),
        }
    }

    /// Gas burner at 90 % efficiency.
    #[must_use]
    pub fn gas() -> Self {
        Self::Gas {
            efficiency: Ratio::new::<percent>(90.0),
        }
    }
}
