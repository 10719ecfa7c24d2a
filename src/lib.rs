//! Numerical analysis of real polynomials on a bounded interval.
//!
//! Finds all real roots, strict local extrema and strict inflection points
//! using nothing but evaluation and interval bisection.  Roots of even
//! multiplicity, where the polynomial touches zero without crossing, are
//! recovered by searching the derivative chain P', P'', ...
//!
//! The bracket search and bisection in `bracket` and `solver` are generic;
//! any continuous function can be wrapped for them.  See the `wrap` module
//! for how to do this.
//!
//! # Examples
//! Roots of a cubic:
//!
//! ```
//! use polyscan::Polynomial;
//!
//! // x^3 - 3x, coefficients lowest power first
//! let p = Polynomial::new(vec![0.0, -3.0, 0.0, 1.0]);
//!
//! let roots = p.roots(-3.0, 3.0, 1e-5).expect("roots");
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] + 3f64.sqrt()).abs() < 1e-5);
//! assert_eq!(roots[1], 0.0);
//! assert!((roots[2] - 3f64.sqrt()).abs() < 1e-5);
//! ```
//!
//! A double root that never changes sign:
//!
//! ```
//! use polyscan::Polynomial;
//!
//! // (x-2)^2
//! let p = Polynomial::new(vec![4.0, -4.0, 1.0]);
//! assert_eq!(p.roots(-5.0, 5.0, 1e-5).expect("roots"), vec![2.0]);
//!
//! let vertex = p.extrema(-5.0, 5.0, 1e-5).expect("extrema");
//! assert!(vertex[0].is_minimum());
//! ```

pub mod analysis;
pub mod bracket;
pub mod convergence;
pub mod point;
pub mod polynomial;
pub mod solver;
pub mod wrap;

pub use analysis::Analysis;
pub use bracket::Interval;
pub use convergence::{Tolerance, DEFAULT_TOLERANCE, VALUE_TOLERANCE};
pub use point::{Point, PointKind};
pub use polynomial::Polynomial;
pub use solver::RootError;
