//! Extrema and inflection points, built on root isolation of derivatives.
//!
//! A stationary point of P (a root of P') is a strict extremum when P'
//! changes sign across it, and P inflects exactly where P' has a strict
//! extremum.  Both questions therefore reduce to isolating the roots of one
//! derivative and applying the first derivative test.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::bracket::{is_sign_change, Interval};
use crate::convergence::{round_value, Tolerance, DEFAULT_TOLERANCE};
use crate::point::Point;
use crate::polynomial::{search_window, Polynomial};
use crate::solver::isolate::isolate_roots;
use crate::solver::RootError;

impl Polynomial {
    /// Strict local extrema in [min, max], in ascending order of `x`.
    ///
    /// `x` is rounded to the precision implied by `tolerance`, the value to
    /// the fixed value precision.  Stationary points where the slope keeps its
    /// sign are skipped.
    pub fn extrema(&self, min: f64, max: f64, tolerance: f64) -> Result<Vec<Point>, RootError> {
        let (bounds, tol) = search_window(min, max, tolerance)?;
        strict_extrema(self, &bounds, &tol)
    }

    /// Strict inflection points in [min, max], in ascending order of `x`.
    pub fn inflections(
        &self,
        min: f64,
        max: f64,
        tolerance: f64,
    ) -> Result<Vec<Point>, RootError> {
        let (bounds, tol) = search_window(min, max, tolerance)?;
        inflection_points(self, &bounds, &tol)
    }

    /// Roots, extrema and inflection points in one report.
    ///
    /// # Errors
    /// Same as `roots`: the zero polynomial cannot be summarized over a valid
    /// interval.
    pub fn analyze(&self, min: f64, max: f64, tolerance: f64) -> Result<Analysis, RootError> {
        let (bounds, tol) = search_window(min, max, tolerance)?;
        Ok(Analysis {
            polynomial: self.clone(),
            interval: bounds,
            tolerance: tol,
            roots: isolate_roots(self, &bounds, &tol)?,
            extrema: strict_extrema(self, &bounds, &tol)?,
            inflections: inflection_points(self, &bounds, &tol)?,
        })
    }

    /// `analyze` with `DEFAULT_TOLERANCE`.
    pub fn analyze_default(&self, min: f64, max: f64) -> Result<Analysis, RootError> {
        self.analyze(min, max, DEFAULT_TOLERANCE)
    }
}

fn strict_extrema(
    p: &Polynomial,
    bounds: &Interval,
    tol: &Tolerance,
) -> Result<Vec<Point>, RootError> {
    if p.is_constant() || !bounds.is_valid() {
        return Ok(Vec::new());
    }

    let slope = p.derivative();
    let candidates = isolate_roots(&slope, bounds, tol)?;
    debug!(
        degree = ?p.degree(),
        candidates = candidates.len(),
        "classifying stationary points"
    );

    let mut extrema = Vec::new();
    for (i, &x) in candidates.iter().enumerate() {
        let around = neighbourhood(&candidates, i, bounds);
        match first_derivative_test(&slope, x, &around) {
            Some(is_minimum) => {
                extrema.push(Point::extremum(
                    tol.round(x),
                    round_value(p.evaluate(x)),
                    is_minimum,
                ));
            }
            None => trace!(x, "stationary point is not a strict extremum"),
        }
    }
    Ok(extrema)
}

/// The slope test window for candidate `i`: reaches to the neighbouring
/// candidate on the inner side and to the search boundary on the outer side
/// of the first and last candidates.
fn neighbourhood(candidates: &[f64], i: usize, bounds: &Interval) -> Interval {
    let last = candidates.len() - 1;
    match (i, last) {
        (_, 0) => *bounds,
        (0, _) => Interval::new(bounds.low(), candidates[1]),
        (i, last) if i == last => Interval::new(candidates[last - 1], bounds.high()),
        (i, _) => Interval::new(candidates[i - 1], candidates[i + 1]),
    }
}

/// Samples the slope halfway to each end of `around`.  Returns whether `x` is
/// a minimum, or `None` if the slope does not change sign across `x`.
fn first_derivative_test(slope: &Polynomial, x: f64, around: &Interval) -> Option<bool> {
    let (left, right) = around.split(x);
    let slope_left = slope.evaluate(left.midpoint());
    let slope_right = slope.evaluate(right.midpoint());

    if !is_sign_change(slope_left, slope_right) {
        return None;
    }
    Some(slope_left < 0.0)
}

/// P inflects where P' has a strict extremum.  Each extremum of P' is relabeled
/// as is, value included: a minimum of P' means the concavity turns from down
/// to up.
fn inflection_points(
    p: &Polynomial,
    bounds: &Interval,
    tol: &Tolerance,
) -> Result<Vec<Point>, RootError> {
    let slope = p.derivative();
    let points = strict_extrema(&slope, bounds, tol)?
        .into_iter()
        .map(|e| Point::inflection(e.x(), e.value(), e.is_minimum()))
        .collect();
    Ok(points)
}

/// Qualitative picture of a polynomial on an interval.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub polynomial: Polynomial,
    pub interval: Interval,
    pub tolerance: Tolerance,
    pub roots: Vec<f64>,
    pub extrema: Vec<Point>,
    pub inflections: Vec<Point>,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} on [{}, {}]",
            self.polynomial,
            self.interval.low(),
            self.interval.high()
        )?;

        writeln!(f, "Roots:")?;
        if self.roots.is_empty() {
            writeln!(f, "  none")?;
        }
        for root in &self.roots {
            writeln!(f, "  {}", root)?;
        }

        for (title, points) in [("Extrema", &self.extrema), ("Inflections", &self.inflections)] {
            writeln!(f, "{}:", title)?;
            if points.is_empty() {
                writeln!(f, "  none")?;
            }
            for point in points {
                writeln!(f, "  {}", point)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PointKind;

    #[test]
    fn test_neighbourhood() {
        let bounds = Interval::new(-10.0, 10.0);
        assert_eq!(neighbourhood(&[1.0], 0, &bounds), bounds);

        let cs = [-2.0, 0.0, 3.0];
        assert_eq!(neighbourhood(&cs, 0, &bounds), Interval::new(-10.0, 0.0));
        assert_eq!(neighbourhood(&cs, 1, &bounds), Interval::new(-2.0, 3.0));
        assert_eq!(neighbourhood(&cs, 2, &bounds), Interval::new(0.0, 10.0));

        let pair = [-1.0, 1.0];
        assert_eq!(neighbourhood(&pair, 0, &bounds), Interval::new(-10.0, 1.0));
        assert_eq!(neighbourhood(&pair, 1, &bounds), Interval::new(-1.0, 10.0));
    }

    #[test]
    fn test_first_derivative_test() {
        // slope of x^3 - 3x
        let slope = Polynomial::new(vec![-3.0, 0.0, 3.0]);
        let around = Interval::new(-3.0, 1.0);
        assert_eq!(first_derivative_test(&slope, -1.0, &around), Some(false));
        let around = Interval::new(-1.0, 3.0);
        assert_eq!(first_derivative_test(&slope, 1.0, &around), Some(true));

        // slope of x^3 keeps its sign
        let slope = Polynomial::new(vec![0.0, 0.0, 3.0]);
        assert_eq!(first_derivative_test(&slope, 0.0, &Interval::new(-2.0, 2.0)), None);
    }

    #[test]
    fn test_cubic_extrema() {
        let p = Polynomial::new(vec![0.0, -3.0, 0.0, 1.0]);
        let extrema = p.extrema(-3.0, 3.0, 1e-5).expect("extrema");
        assert_eq!(
            extrema,
            vec![
                Point::extremum(-1.0, 2.0, false),
                Point::extremum(1.0, -2.0, true)
            ]
        );
    }

    #[test]
    fn test_parabola_minimum() {
        // (x-2)^2, vertex found through a sign-changing slope
        let p = Polynomial::new(vec![4.0, -4.0, 1.0]);
        let extrema = p.extrema(-5.0, 5.0, 1e-5).expect("extrema");
        assert_eq!(extrema, vec![Point::extremum(2.0, 0.0, true)]);
    }

    #[test]
    fn test_constant_and_linear_have_nothing() {
        for p in [Polynomial::new(vec![4.0]), Polynomial::new(vec![1.0, 2.0])] {
            assert!(p.extrema(-5.0, 5.0, 1e-3).expect("extrema").is_empty());
            assert!(p.inflections(-5.0, 5.0, 1e-3).expect("inflections").is_empty());
        }
        // the zero polynomial is flat, not an error here
        assert!(Polynomial::zero().extrema(-1.0, 1.0, 1e-3).unwrap().is_empty());
        assert!(Polynomial::zero().inflections(-1.0, 1.0, 1e-3).unwrap().is_empty());
    }

    #[test]
    fn test_cubic_inflection() {
        let p = Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]);
        assert!(p.extrema(-2.0, 2.0, 1e-5).expect("extrema").is_empty());

        let inflections = p.inflections(-2.0, 2.0, 1e-5).expect("inflections");
        assert_eq!(inflections, vec![Point::inflection(0.0, 0.0, true)]);
        assert_eq!(inflections[0].kind(), PointKind::InflectionDownToUp);
    }

    #[test]
    fn test_inflection_relabels_slope_extremum() {
        // x^3 + x inflects at x=0 where P=0 but P'=1
        let p = Polynomial::new(vec![0.0, 1.0, 0.0, 1.0]);
        let inflections = p.inflections(-2.0, 2.0, 1e-5).expect("inflections");
        assert_eq!(inflections, vec![Point::inflection(0.0, 1.0, true)]);

        let slope_extrema = p.derivative().extrema(-2.0, 2.0, 1e-5).expect("extrema");
        assert_eq!(slope_extrema, vec![Point::extremum(0.0, 1.0, true)]);

        // -x^3 + 3x^2 + 1 turns from concave up to down at x=1, P'(1)=3
        let p = Polynomial::new(vec![1.0, 0.0, 3.0, -1.0]);
        let inflections = p.inflections(-4.0, 4.0, 1e-4).expect("inflections");
        assert_eq!(inflections, vec![Point::inflection(1.0, 3.0, false)]);
    }

    #[test]
    fn test_analysis_display() {
        let p = Polynomial::new(vec![-1.0, 0.0, 1.0]);
        let analysis = p.analyze(-2.0, 2.0, 1e-5).expect("analysis");
        assert_eq!(
            analysis.to_string(),
            "x^2 - 1 on [-2, 2]\n\
             Roots:\n  -1\n  1\n\
             Extrema:\n  (0, -1) local minimum\n\
             Inflections:\n  none\n"
        );
    }
}
