use crate::error::AbcomputeErr;
use crate::util::error::RootFindErr;

/// Number of times the search window may be doubled before giving up
const MAX_EXPANSIONS: usize = 20;
/// Number of bisection steps before giving up
const MAX_BISECTIONS: usize = 200;

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbcomputeErr>
where
    F: Fn(f64) -> f64,
{
    let f_lower_bound = checked_eval(&f, lower_bound)?;
    if f_lower_bound >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut f_upper_bound = f_lower_bound;
    let mut expansions = 0;
    while f_upper_bound < target {
        if expansions == MAX_EXPANSIONS {
            return Err(RootFindErr::NoBracket {
                target,
                upper_bound,
            }
            .into());
        }
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        f_upper_bound = checked_eval(&f, upper_bound)?;
        expansions += 1;
    }
    tracing::trace!(lower_bound, upper_bound, expansions, "bracketed root");

    // Perform search
    let mut x = (lower_bound + upper_bound) / 2.;
    let mut y = checked_eval(&f, x)?;
    let mut bisections = 0;
    while (lower_bound - upper_bound).abs() > tol / 2. && (y - target).abs() > tol {
        if bisections == MAX_BISECTIONS {
            return Err(RootFindErr::FailedToConverge(bisections).into());
        }
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.;
        y = checked_eval(&f, x)?;
        bisections += 1;
    }
    Ok(x)
}

fn checked_eval<F>(f: &F, x: f64) -> Result<f64, AbcomputeErr>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_nan() {
        return Err(RootFindErr::NotANumber(x).into());
    }
    Ok(y)
}
