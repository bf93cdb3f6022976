//! Bracketed root finding for wet-bulb and dew-point temperatures.

use std::convert::Infallible;

use thiserror::Error;
use tracing::{debug, warn};
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, TemperatureInterval},
    pressure::kilopascal,
    temperature_interval::kelvin as delta_kelvin,
};

/// Lower end of every temperature search, °C.
pub(super) const SEARCH_FLOOR: f64 = -50.0;

/// Solver configuration for wet-bulb and dew-point searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the vapor pressure residual.
    pub pressure_tol: Pressure,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-3),
            pressure_tol: Pressure::new::<kilopascal>(1e-9),
        }
    }
}

impl SolverConfig {
    /// Settings used for dew-point searches.
    #[must_use]
    pub fn dew_point() -> Self {
        Self {
            max_iters: 30,
            ..Self::default()
        }
    }

    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol.get::<kilopascal>(),
        }
    }
}

/// Finds the root of a residual that increases with temperature.
///
/// Temperatures are in °C. A residual that is still negative at the upper
/// bound returns the upper bound, and one that is already non-negative at the
/// lower bound returns the lower bound. If the solver fails the bracket
/// midpoint is returned.
pub(super) fn increasing_root<F>(residual: F, bracket: [f64; 2], config: &SolverConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    let [low, high] = bracket;
    if high <= low {
        return high;
    }
    let r_high = residual(high);
    if r_high.is_nan() || r_high <= 0.0 {
        return high;
    }
    if residual(low) >= 0.0 {
        return low;
    }

    let model = Residual(residual);

    let solution = bisection::solve(
        &model,
        &ZeroResidual,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A non-finite residual sits outside the physical region near the
            // upper bound, so steer the bracket downward.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    );

    match solution {
        Ok(solution) => {
            if solution.status != bisection::Status::Converged {
                debug!(
                    iters = solution.iters,
                    residual = solution.residual,
                    "temperature search stopped at iteration limit"
                );
            }
            solution.snapshot.output.temperature
        }
        Err(error) => {
            warn!(%error, low, high, "temperature search failed, using bracket midpoint");
            0.5 * (low + high)
        }
    }
}

#[derive(Debug, Error)]
#[error("residual is not finite at {temperature} °C")]
struct NonFiniteResidual {
    temperature: f64,
}

#[derive(Debug, Clone, Copy)]
struct Evaluation {
    temperature: f64,
    residual: f64,
}

/// Model adapter exposing a scalar residual function.
struct Residual<F>(F);

impl<F: Fn(f64) -> f64> Model for Residual<F> {
    type Input = f64;
    type Output = Evaluation;
    type Error = NonFiniteResidual;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = *input;
        let residual = (self.0)(temperature);
        if residual.is_finite() {
            Ok(Evaluation {
                temperature,
                residual,
            })
        } else {
            Err(NonFiniteResidual { temperature })
        }
    }
}

/// Drives the residual to zero.
struct ZeroResidual;

impl EquationProblem<1> for ZeroResidual {
    type Input = f64;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
