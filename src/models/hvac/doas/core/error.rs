use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while sizing a DOAS unit.
///
/// A run either succeeds completely or fails with one of these; no partial
/// results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// The site altitude does not yield a positive barometric pressure.
    #[error("altitude {altitude:?} gives a non-physical barometric pressure")]
    Altitude {
        altitude: Length,
        #[source]
        source: ConstraintError,
    },

    /// A computed state has a negative or NaN humidity ratio.
    #[error("invalid humidity ratio {value} kg/kg at {point}")]
    InvalidHumidityRatio {
        /// Label of the state being built.
        point: String,
        value: f64,
    },

    /// A computed quantity is infinite or NaN.
    #[error("{quantity} is not finite: {value}")]
    NonFinite {
        quantity: &'static str,
        value: f64,
    },
}

impl SizingError {
    /// Passes `value` through if it is finite.
    pub(super) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }
}
