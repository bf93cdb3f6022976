use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, NonNegative};

use super::formulas::MIN_HUMIDITY_RATIO;

/// Mass of water vapor per unit mass of dry air.
///
/// Always non-negative. Values produced by psychrometric calculations are
/// floored at 1e-6 kg/kg.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct HumidityRatio(Constrained<Ratio, NonNegative>);

impl HumidityRatio {
    /// Creates a humidity ratio from a value in kg water per kg dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or NaN.
    pub fn new(kg_per_kg: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(kg_per_kg))
    }

    /// Creates a humidity ratio from a dimensionless quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or NaN.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Floors a computed value at the smallest reportable humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if the value is NaN.
    pub(crate) fn floored(kg_per_kg: f64) -> ConstraintResult<Self> {
        if kg_per_kg.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        Ok(Self::floor_of(kg_per_kg))
    }

    /// Like [`HumidityRatio::floored`], but NaN maps to the floor.
    pub(crate) fn floor_of(kg_per_kg: f64) -> Self {
        let value = kg_per_kg.max(MIN_HUMIDITY_RATIO);
        Self(Constrained::new_unchecked(Ratio::new::<ratio>(value)))
    }

    /// Returns the value in kg water per kg dry air.
    #[must_use]
    pub fn kg_per_kg(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

impl Deref for HumidityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl TryFrom<f64> for HumidityRatio {
    type Error = ConstraintError;

    fn try_from(kg_per_kg: f64) -> Result<Self, Self::Error> {
        Self::new(kg_per_kg)
    }
}

impl From<HumidityRatio> for f64 {
    fn from(w: HumidityRatio) -> Self {
        w.kg_per_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(HumidityRatio::new(0.0093).is_ok());
        assert!(HumidityRatio::new(0.0).is_ok());
        assert_eq!(HumidityRatio::new(-0.001), Err(ConstraintError::Negative));
        assert_eq!(HumidityRatio::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn floor_applies_to_computed_values() {
        assert_relative_eq!(HumidityRatio::floored(-0.5).unwrap().kg_per_kg(), 1e-6);
        assert_relative_eq!(HumidityRatio::floored(0.0128).unwrap().kg_per_kg(), 0.0128);
        assert_relative_eq!(HumidityRatio::floor_of(f64::NAN).kg_per_kg(), 1e-6);
    }

    #[test]
    fn floor_rejects_nan() {
        assert_eq!(
            HumidityRatio::floored(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn derefs_to_ratio() {
        let w = HumidityRatio::new(0.02).unwrap();
        assert_relative_eq!(w.get::<ratio>(), 0.02);
        assert!(w > HumidityRatio::new(0.01).unwrap());
    }
}
