use uom::si::{f64::Ratio, ratio::percent};

/// Rotary enthalpy wheel between the outdoor and exhaust airstreams.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnthalpyWheel {
    pub enabled: bool,
    pub sensible_effectiveness: Ratio,
    pub latent_effectiveness: Ratio,
}

impl Default for EnthalpyWheel {
    fn default() -> Self {
        Self {
            enabled: true,
            sensible_effectiveness: Ratio::new::<percent>(75.0),
            latent_effectiveness: Ratio::new::<percent>(70.0),
        }
    }
}

/// Sensible wheel moving heat from the exhaust air into the coil-leaving air.
///
/// Its exhaust side sits upstream of the enthalpy wheel, so the exhaust air
/// reaches the enthalpy wheel already pre-cooled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensibleWheel {
    pub enabled: bool,
    pub effectiveness: Ratio,
}

impl Default for SensibleWheel {
    fn default() -> Self {
        Self {
            enabled: false,
            effectiveness: Ratio::new::<percent>(65.0),
        }
    }
}

/// Wrap-around heat pipe pre-cooling the air ahead of the coil and
/// reheating it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatPipe {
    pub enabled: bool,
    pub effectiveness: Ratio,
}

impl Default for HeatPipe {
    fn default() -> Self {
        Self {
            enabled: false,
            effectiveness: Ratio::new::<percent>(45.0),
        }
    }
}
