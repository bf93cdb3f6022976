use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`], see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
/// This trait provides [`minus`](Self::minus) to fill that gap.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn approach_to_off_coil_target() {
        let outdoor = ThermodynamicTemperature::new::<degree_celsius>(35.0);
        let off_coil = ThermodynamicTemperature::new::<degree_celsius>(12.0);

        assert_relative_eq!(
            outdoor.minus(off_coil).get::<delta_celsius>(),
            23.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            off_coil.minus(outdoor).get::<delta_kelvin>(),
            -23.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn mixed_scales() {
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(24.0);
        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(75.2);
        assert_relative_eq!(
            t_in_f.minus(t_in_c).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
