use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, VolumeRate},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_second,
};

/// Outdoor air entering the unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutdoorAir {
    /// Volumetric flow at outdoor conditions.
    pub flow: VolumeRate,
    pub dry_bulb: ThermodynamicTemperature,
    pub wet_bulb: ThermodynamicTemperature,
}

impl Default for OutdoorAir {
    fn default() -> Self {
        Self {
            flow: VolumeRate::new::<liter_per_second>(1000.0),
            dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(35.0),
            wet_bulb: ThermodynamicTemperature::new::<degree_celsius>(28.0),
        }
    }
}

/// Room air returned to the unit and exhausted through the recovery devices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustAir {
    /// Volumetric flow at room conditions.
    pub flow: VolumeRate,
    pub dry_bulb: ThermodynamicTemperature,
    pub relative_humidity: Ratio,
}

impl Default for ExhaustAir {
    fn default() -> Self {
        Self {
            flow: VolumeRate::new::<liter_per_second>(800.0),
            dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(24.0),
            relative_humidity: Ratio::new::<percent>(50.0),
        }
    }
}
