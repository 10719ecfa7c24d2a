use serde::{Deserialize, Serialize};

use crate::solver::RootError;

/// Tolerance used when the caller does not supply one.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Fixed bound on |P(x)| for accepting a candidate as a root, independent of
/// the positional tolerance.
pub const VALUE_TOLERANCE: f64 = 1e-14;

/// Past this many decimals rounding an `f64` is a no-op.
const MAX_DECIMAL_PLACES: i32 = 15;

/// Decides when a bracket [a, b] is narrow enough to stop halving.
pub trait IsConverged {
    fn is_converged(&self, a: f64, b: f64) -> bool;
}

/// Positional tolerance: the bracket width at which searching and refining
/// stop, and the precision roots are reported with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance {
    epsilon_abs: f64,
}

impl Tolerance {
    /// Fails unless `epsilon_abs` is positive and finite.  Anything else would
    /// keep bisection from halting.
    pub fn new(epsilon_abs: f64) -> Result<Tolerance, RootError> {
        if !(epsilon_abs > 0.0 && epsilon_abs.is_finite()) {
            return Err(RootError::InvalidTolerance {
                tolerance: epsilon_abs,
            });
        }
        Ok(Tolerance { epsilon_abs })
    }

    pub fn value(&self) -> f64 {
        self.epsilon_abs
    }

    /// Number of decimals `d` such that 10^-k > tolerance for every k < d.
    /// So 1e-5 gives 5 places, 0.3 gives 1 and anything >= 1 gives none.
    pub fn decimal_places(&self) -> i32 {
        let mut places = 0;
        while places < MAX_DECIMAL_PLACES && 10f64.powi(-places) > self.epsilon_abs {
            places += 1;
        }
        places
    }

    /// Rounds `x` to the precision this tolerance can vouch for.  Ties go to
    /// the even neighbour, so 0.125 at two places is 0.12.
    pub fn round(&self, x: f64) -> f64 {
        let places = self.decimal_places();
        if places >= MAX_DECIMAL_PLACES {
            return x;
        }
        let scale = 10f64.powi(places);
        let rounded = (x * scale).round_ties_even() / scale;
        if rounded.is_finite() {
            rounded
        } else {
            x
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            epsilon_abs: DEFAULT_TOLERANCE,
        }
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = RootError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Tolerance::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tol: Tolerance) -> f64 {
        tol.epsilon_abs
    }
}

impl IsConverged for Tolerance {
    fn is_converged(&self, a: f64, b: f64) -> bool {
        (b - a).abs() < self.epsilon_abs
    }
}

/// Rounds to the fixed value precision, matching `VALUE_TOLERANCE`.
pub fn round_value(y: f64) -> f64 {
    Tolerance {
        epsilon_abs: VALUE_TOLERANCE,
    }
    .round(y)
}
