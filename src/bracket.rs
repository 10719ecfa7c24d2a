use serde::Serialize;

use crate::convergence::IsConverged;
use crate::wrap::RealFnEval;

/// Interval represents the closed interval [low, high].
///
/// Nothing is enforced at construction.  An interval with `low >= high` is
/// "invalid" and callers check `is_valid` before searching inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Interval {
        Interval { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn is_valid(&self) -> bool {
        self.low < self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Whether `x` lies in [low, high].
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Whether `x` lies in (low, high).
    pub fn contains_interior(&self, x: f64) -> bool {
        self.low < x && x < self.high
    }

    /// Splits into [low, x] and [x, high].  If `x` is not inside the interval
    /// one of the halves comes back invalid.
    pub fn split(&self, x: f64) -> (Interval, Interval) {
        self.split_with_margin(x, 0.0)
    }

    /// Splits into [low, x - margin] and [x + margin, high], carving out a
    /// neighbourhood of `x`.  Either half may come back invalid.
    pub fn split_with_margin(&self, x: f64, margin: f64) -> (Interval, Interval) {
        (
            Interval::new(self.low, x - margin),
            Interval::new(x + margin, self.high),
        )
    }
}

/// Whether the values have strictly opposite signs.  A zero on either side is
/// not a sign change.  Compares signs instead of testing `lhs * rhs < 0` since
/// the product can underflow to zero.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// Searches `bounds` for a sub-interval whose endpoints have opposite signs.
///
/// The search halves windows depth-first, always probing the left half before
/// the right one, and gives up on a window once `resolution` reports it as
/// converged.  The bracket returned is the first one met in left-to-right
/// order, not necessarily the narrowest one.  For a continuous function the
/// Intermediate Value Theorem guarantees it contains at least one root.
///
/// Roots where the function touches zero without crossing are invisible to
/// this search.
pub fn first_bracket<F, C>(f: &F, bounds: &Interval, resolution: &C) -> Option<Interval>
where
    F: RealFnEval,
    C: IsConverged,
{
    // worklist instead of recursion; right pushed before left keeps the
    // left-first visiting order
    let mut pending = vec![(*bounds, f.eval_f(bounds.low), f.eval_f(bounds.high))];

    while let Some((win, f_low, f_high)) = pending.pop() {
        if is_sign_change(f_low, f_high) {
            return Some(win);
        }
        if resolution.is_converged(win.low, win.high) {
            continue;
        }

        let mid = win.midpoint();
        if !win.contains_interior(mid) {
            // floating point resolution exhausted
            continue;
        }
        let f_mid = f.eval_f(mid);
        let (left, right) = win.split(mid);
        pending.push((right, f_mid, f_high));
        pending.push((left, f_low, f_mid));
    }
    None
}
