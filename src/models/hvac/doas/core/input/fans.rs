use uom::si::{
    f64::{Pressure, Ratio},
    pressure::pascal,
    ratio::percent,
};

/// Supply and extract fan parameters, shared by both fans.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fans {
    pub supply_external_static: Pressure,
    pub extract_external_static: Pressure,
    pub fan_efficiency: Ratio,
    pub motor_efficiency: Ratio,
    pub drive_efficiency: Ratio,
    /// Adds a draw-through supply fan heat step after the coil.
    pub include_fan_heat: bool,
}

impl Default for Fans {
    fn default() -> Self {
        Self {
            supply_external_static: Pressure::new::<pascal>(500.0),
            extract_external_static: Pressure::new::<pascal>(500.0),
            fan_efficiency: Ratio::new::<percent>(60.0),
            motor_efficiency: Ratio::new::<percent>(93.0),
            drive_efficiency: Ratio::new::<percent>(89.0),
            include_fan_heat: false,
        }
    }
}

/// Pressure drops of the fixed components.
///
/// Recovery devices and reheat add fixed allowances on top of these.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentPressureDrops {
    pub damper: Pressure,
    pub pre_filter: Pressure,
    pub main_filter: Pressure,
    pub coil: Pressure,
}

impl Default for ComponentPressureDrops {
    fn default() -> Self {
        Self {
            damper: Pressure::new::<pascal>(50.0),
            pre_filter: Pressure::new::<pascal>(100.0),
            main_filter: Pressure::new::<pascal>(250.0),
            coil: Pressure::new::<pascal>(250.0),
        }
    }
}
