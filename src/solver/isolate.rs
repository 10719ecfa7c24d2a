use tracing::{debug, trace};

use super::{bisection, RootError};
use crate::bracket::{first_bracket, Interval};
use crate::convergence::{Tolerance, VALUE_TOLERANCE};
use crate::polynomial::Polynomial;
use crate::wrap::RealFnEval;

/// A sign-change bracket together with the search window it was found in.
/// Once the bracket's root is refined, the window is carved around it.
struct BracketJob {
    window: Interval,
    bracket: Interval,
}

/// Finds every root of `p` inside `bounds`, rounded to the precision of `tol`
/// and sorted ascending.
///
/// Sign-change roots are bracketed and refined by bisection, then the window
/// is split around the root with a margin of `tol` on each side and both
/// halves are searched again.  Whatever no bracket can reach (roots where `p`
/// touches zero without crossing) goes to `constant_sign_roots`.
///
/// An invalid `bounds` has no roots.  The zero polynomial vanishes everywhere
/// and is reported as `RootError::InfinitelyManyRoots`.
pub fn isolate_roots(
    p: &Polynomial,
    bounds: &Interval,
    tol: &Tolerance,
) -> Result<Vec<f64>, RootError> {
    if !bounds.is_valid() {
        return Ok(Vec::new());
    }
    if p.is_zero() {
        return Err(RootError::InfinitelyManyRoots);
    }
    debug!(
        degree = ?p.degree(),
        low = bounds.low(),
        high = bounds.high(),
        "isolating roots"
    );

    let mut roots = Vec::new();
    let mut jobs = Vec::new();

    match first_bracket(p, bounds, tol) {
        Some(bracket) => jobs.push(BracketJob {
            window: *bounds,
            bracket,
        }),
        None => roots.extend(constant_sign_roots(p, bounds, tol)?),
    }

    while let Some(job) = jobs.pop() {
        let root = bisection(p, &job.bracket, tol)?;
        trace!(root, "refined sign-change root");
        roots.push(root);

        let (left, right) = job.window.split_with_margin(root, tol.value());
        for window in [left, right] {
            if !window.is_valid() {
                continue;
            }
            match first_bracket(p, &window, tol) {
                Some(bracket) => jobs.push(BracketJob { window, bracket }),
                None => roots.extend(constant_sign_roots(p, &window, tol)?),
            }
        }
    }

    let mut roots: Vec<f64> = roots.into_iter().map(|x| tol.round(x)).collect();
    roots.sort_by(f64::total_cmp);
    Ok(roots)
}

/// Roots of `p` on a window where `p` never changes sign.
///
/// Such a root has even multiplicity, so it is also a root of every derivative
/// down to the first one that does not vanish there.  Walks the derivative
/// chain p', p'', ... until it turns constant, isolating the roots of each
/// derivative and keeping the candidates where |p(x)| is within
/// `VALUE_TOLERANCE`.  Degree drops at every step, which bounds the recursion.
fn constant_sign_roots(
    p: &Polynomial,
    window: &Interval,
    tol: &Tolerance,
) -> Result<Vec<f64>, RootError> {
    let mut accepted: Vec<f64> = Vec::new();
    if p.is_constant() {
        return Ok(accepted);
    }

    let mut current = p.derivative();
    loop {
        for x in isolate_roots(&current, window, tol)? {
            if p.eval_f(x).abs() >= VALUE_TOLERANCE {
                continue;
            }
            // deeper derivatives keep rediscovering roots of high multiplicity
            if accepted.iter().any(|&r| (r - x).abs() <= tol.value()) {
                continue;
            }
            trace!(x, "accepted root without sign change");
            accepted.push(x);
        }

        if current.is_constant() {
            break;
        }
        current = current.derivative();
    }
    Ok(accepted)
}
