use uom::si::{
    f64::{Length, MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::{
    HumidityRatio, SolverConfig,
    formulas::{self, STANDARD_PRESSURE},
    solve::{SEARCH_FLOOR, increasing_root},
};

/// Barometric conditions at a site.
///
/// Every pressure-dependent psychrometric property is evaluated against an
/// `Atmosphere`. Construct one per calculation, typically from the site
/// altitude with [`Atmosphere::at_altitude`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pressure: Constrained<Pressure, StrictlyPositive>,
}

impl Atmosphere {
    /// Creates an atmosphere at a site altitude using the standard barometric formula.
    ///
    /// `P = 101.325·(1 − 2.25577e-5·h)^5.25588` kPa, with `h` in meters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the altitude does not yield a strictly positive
    /// pressure (above roughly 44 km, or NaN).
    pub fn at_altitude(altitude: Length) -> ConstraintResult<Self> {
        let p = formulas::barometric_pressure(altitude.get::<meter>());
        Self::from_pressure(Pressure::new::<kilopascal>(p))
    }

    /// Creates an atmosphere with a known barometric pressure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the pressure is not strictly positive.
    pub fn from_pressure(pressure: Pressure) -> ConstraintResult<Self> {
        Ok(Self {
            pressure: StrictlyPositive::new(pressure)?,
        })
    }

    /// Standard sea-level atmosphere (101.325 kPa).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pressure: Constrained::new_unchecked(Pressure::new::<kilopascal>(STANDARD_PRESSURE)),
        }
    }

    /// Returns the barometric pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        *self.pressure.as_ref()
    }

    fn kpa(&self) -> f64 {
        self.pressure.as_ref().get::<kilopascal>()
    }

    /// Returns the vapor pressure implied by a psychrometer wet-bulb reading.
    #[must_use]
    pub fn vapor_pressure_from_wet_bulb(
        &self,
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    ) -> Pressure {
        Pressure::new::<kilopascal>(formulas::vapor_pressure_from_wet_bulb(
            self.kpa(),
            dry_bulb.get::<degree_celsius>(),
            wet_bulb.get::<degree_celsius>(),
        ))
    }

    /// Returns the humidity ratio for a water vapor partial pressure.
    ///
    /// The result is floored at a small positive value, which is also
    /// returned when the vapor pressure reaches the barometric pressure.
    /// A NaN vapor pressure also gives the floor; use
    /// [`Atmosphere::try_humidity_ratio`] to reject it instead.
    #[must_use]
    pub fn humidity_ratio(&self, vapor_pressure: Pressure) -> HumidityRatio {
        HumidityRatio::floor_of(self.raw_humidity_ratio(vapor_pressure))
    }

    /// Returns the floored humidity ratio for a water vapor partial pressure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the vapor pressure is NaN.
    pub fn try_humidity_ratio(&self, vapor_pressure: Pressure) -> ConstraintResult<HumidityRatio> {
        HumidityRatio::floored(self.raw_humidity_ratio(vapor_pressure))
    }

    fn raw_humidity_ratio(&self, vapor_pressure: Pressure) -> f64 {
        formulas::humidity_ratio(self.kpa(), vapor_pressure.get::<kilopascal>())
    }

    /// Returns the humidity ratio of saturated air at `dry_bulb`.
    #[must_use]
    pub fn saturation_humidity_ratio(&self, dry_bulb: ThermodynamicTemperature) -> HumidityRatio {
        self.humidity_ratio(super::saturation_vapor_pressure(dry_bulb))
    }

    /// Returns the water vapor partial pressure of air with humidity ratio `w`.
    #[must_use]
    pub fn vapor_pressure(&self, humidity_ratio: HumidityRatio) -> Pressure {
        Pressure::new::<kilopascal>(formulas::vapor_pressure(
            self.kpa(),
            humidity_ratio.kg_per_kg(),
        ))
    }

    /// Returns the dry-air density at `dry_bulb`.
    #[must_use]
    pub fn density(&self, dry_bulb: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(formulas::density(
            self.kpa(),
            dry_bulb.get::<degree_celsius>(),
        ))
    }

    /// Returns the relative humidity, clamped to `[0, 100] %`.
    #[must_use]
    pub fn relative_humidity(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity_ratio: HumidityRatio,
    ) -> Ratio {
        Ratio::new::<percent>(formulas::relative_humidity(
            self.kpa(),
            dry_bulb.get::<degree_celsius>(),
            humidity_ratio.kg_per_kg(),
        ))
    }

    /// Returns the thermodynamic wet-bulb temperature.
    ///
    /// See [`Atmosphere::wet_bulb_with`].
    #[must_use]
    pub fn wet_bulb(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity_ratio: HumidityRatio,
    ) -> ThermodynamicTemperature {
        self.wet_bulb_with(dry_bulb, humidity_ratio, &SolverConfig::default())
    }

    /// Returns the wet-bulb temperature using the given solver settings.
    ///
    /// Bisects over `[−50 °C, dry_bulb]` for the wet bulb whose psychrometer
    /// vapor pressure matches that of the air. The result never exceeds the
    /// dry bulb. Supersaturated air returns the dry bulb, and air too dry to
    /// bracket a root returns −50 °C.
    #[must_use]
    pub fn wet_bulb_with(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity_ratio: HumidityRatio,
        config: &SolverConfig,
    ) -> ThermodynamicTemperature {
        let p = self.kpa();
        let t_db = dry_bulb.get::<degree_celsius>();
        let target = formulas::vapor_pressure(p, humidity_ratio.kg_per_kg());

        let t_wb = increasing_root(
            |t_wb| formulas::vapor_pressure_from_wet_bulb(p, t_db, t_wb) - target,
            [SEARCH_FLOOR.min(t_db), t_db],
            config,
        );

        if t_wb >= t_db {
            dry_bulb
        } else {
            ThermodynamicTemperature::new::<degree_celsius>(t_wb)
        }
    }

    /// Returns the dew point of air at `dry_bulb` and `relative_humidity`.
    ///
    /// Bisects over `[−50 °C, dry_bulb]` with [`SolverConfig::dew_point`]
    /// settings. Bone-dry air returns −50 °C.
    #[must_use]
    pub fn dew_point(
        &self,
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> ThermodynamicTemperature {
        let t_db = dry_bulb.get::<degree_celsius>();
        let p_v = super::vapor_pressure_from_relative_humidity(dry_bulb, relative_humidity)
            .get::<kilopascal>();

        let t_dp = increasing_root(
            |t| formulas::saturation_pressure(t) - p_v,
            [SEARCH_FLOOR.min(t_db), t_db],
            &SolverConfig::dew_point(),
        );

        ThermodynamicTemperature::new::<degree_celsius>(t_dp)
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::standard()
    }
}
