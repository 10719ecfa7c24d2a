//! Real polynomials in one variable.

use std::fmt;
use std::ops::Add;

use serde::Serialize;

use crate::bracket::Interval;
use crate::convergence::Tolerance;
use crate::solver::{isolate, RootError};
use crate::wrap::RealFnEval;

/// Polynomial with real coefficients, stored lowest power first.
///
/// The representation is always trimmed: no trailing zero high-order
/// coefficients, and the zero polynomial is the single coefficient `[0]`.
#[derive(Clone, Debug, Serialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    #[serde(skip)]
    variable: char,
}

impl Polynomial {
    /// Builds `c[0] + c[1]*x + c[2]*x^2 + ...` from `coefficients`.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Polynomial {
        let mut coefficients = coefficients.into();
        while coefficients.len() > 1 && coefficients.last() == Some(&0.0) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Polynomial {
            coefficients,
            variable: 'x',
        }
    }

    pub fn zero() -> Polynomial {
        Polynomial::new(vec![0.0])
    }

    /// Sets the variable name used by `Display`.
    pub fn with_variable(mut self, variable: char) -> Polynomial {
        self.variable = variable;
        self
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.is_constant() && self.coefficients[0] == 0.0
    }

    pub fn is_constant(&self) -> bool {
        self.coefficients.len() == 1
    }

    pub fn is_linear(&self) -> bool {
        self.coefficients.len() == 2
    }

    /// Evaluates the power sum `c[0] + c[1]*x + ... + c[n]*x^n`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum()
    }

    /// First derivative.  Constants differentiate to the zero polynomial.
    pub fn derivative(&self) -> Polynomial {
        if self.is_constant() {
            return Polynomial::zero().with_variable(self.variable);
        }
        let coefficients: Vec<f64> = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| i as f64 * c)
            .collect();
        Polynomial::new(coefficients).with_variable(self.variable)
    }

    /// All roots in [min, max], rounded to the precision implied by
    /// `tolerance` and sorted ascending.
    ///
    /// Roots of even multiplicity, where the polynomial touches zero without
    /// changing sign, are found through the derivative chain.  An invalid
    /// interval (`min >= max`) yields no roots.
    ///
    /// The bracket search only accepts strict sign changes between the
    /// endpoints it samples, and it samples by halving [min, max].  A simple
    /// root sitting exactly on one of those midpoints is therefore never
    /// bracketed and, not being a root of P', is missed by the derivative
    /// chain too.  `x^2 - x` on [-2, 2] has both roots on sample points and
    /// yields nothing; shifting an endpoint, e.g. to [-2.1, 2], finds them.
    ///
    /// # Errors
    /// * `InvalidTolerance` if `tolerance` is not positive and finite
    /// * `NonFiniteBounds` if `min` or `max` is NaN or infinite
    /// * `InfinitelyManyRoots` for the zero polynomial on a valid interval
    pub fn roots(&self, min: f64, max: f64, tolerance: f64) -> Result<Vec<f64>, RootError> {
        let (bounds, tol) = search_window(min, max, tolerance)?;
        isolate::isolate_roots(self, &bounds, &tol)
    }
}

/// Validates the arguments shared by every analysis entry point.
pub(crate) fn search_window(
    min: f64,
    max: f64,
    tolerance: f64,
) -> Result<(Interval, Tolerance), RootError> {
    let tol = Tolerance::new(tolerance)?;
    if !(min.is_finite() && max.is_finite()) {
        return Err(RootError::NonFiniteBounds {
            low: min,
            high: max,
        });
    }
    Ok((Interval::new(min, max), tol))
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Polynomial) -> bool {
        self.coefficients == other.coefficients
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Polynomial {
        Polynomial::new(coefficients)
    }
}

impl RealFnEval for Polynomial {
    fn eval_f(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(other.coefficients.len());
        let coefficients: Vec<f64> = (0..len)
            .map(|i| {
                self.coefficients.get(i).copied().unwrap_or(0.0)
                    + other.coefficients.get(i).copied().unwrap_or(0.0)
            })
            .collect();
        Polynomial::new(coefficients).with_variable(self.variable)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

/// Conventional notation, highest power first: `x^3 - 3x + 0.5`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let magnitude = c.abs();
            if magnitude != 1.0 || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "{}", self.variable)?,
                _ => write!(f, "{}^{}", self.variable, power)?,
            }
        }
        Ok(())
    }
}
