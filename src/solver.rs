//! Root refinement and polynomial root isolation.
//!
//! `bisection` refines a single sign-change bracket and works for any
//! continuous function wrapped through the `wrap` module.  The `isolate`
//! submodule finds every root of a polynomial on an interval, including the
//! ones of even multiplicity that never change sign.
//!
//! # Examples
//!
//! ```
//! use polyscan::bracket::Interval;
//! use polyscan::convergence::Tolerance;
//! use polyscan::solver::bisection;
//! use polyscan::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let tol = Tolerance::new(1e-9).expect("tolerance");
//! let root = bisection(&f, &Interval::new(2.0, 3.0), &tol).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::bracket::{is_sign_change, Interval};
use crate::convergence::IsConverged;
use crate::wrap::RealFnEval;

pub mod isolate;

/// Root finding error conditions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RootError {
    /// Tolerance was zero, negative or not finite.
    #[error("tolerance must be positive and finite, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    /// An interval endpoint was NaN or infinite.
    #[error("interval endpoints must be finite, got [{low}, {high}]")]
    NonFiniteBounds { low: f64, high: f64 },

    /// Bisection was handed an interval without a sign change.
    #[error("no sign change on [{low}, {high}]")]
    NoSignChange { low: f64, high: f64 },

    /// The zero polynomial vanishes on the whole interval.
    #[error("the zero polynomial has infinitely many roots")]
    InfinitelyManyRoots,
}

/// Root finding via Bisection Method.
///
/// Halves `bracket`, keeping the half whose endpoints still differ in sign,
/// until `finish` reports convergence or the midpoint evaluates to exactly
/// zero.  Returns the final midpoint.
///
/// It always converges given a valid starting bracket, but the speed of
/// convergence is linear.
pub fn bisection<F, C>(f: &F, bracket: &Interval, finish: &C) -> Result<f64, RootError>
where
    F: RealFnEval,
    C: IsConverged,
{
    let mut window = *bracket;
    let mut f_low = f.eval_f(window.low());

    // ensure we started with valid bracket
    if !is_sign_change(f_low, f.eval_f(window.high())) {
        return Err(RootError::NoSignChange {
            low: window.low(),
            high: window.high(),
        });
    }

    loop {
        let mid = window.midpoint();

        // convergence criteria
        if finish.is_converged(window.low(), window.high()) || !window.contains_interior(mid) {
            return Ok(mid);
        }

        let f_mid = f.eval_f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }

        if is_sign_change(f_low, f_mid) {
            window = Interval::new(window.low(), mid);
        } else {
            window = Interval::new(mid, window.high());
            f_low = f_mid;
        }
    }
}
