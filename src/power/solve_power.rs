use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::power::error::PowerErr;
use crate::power::ttest_power::{MIN_SAMPLE_SIZE, check_significance_level, ttest_ind_power};
use crate::util::{error::RootFindErr, root_find::root_find_monotonic};

/// Default tolerance (in units of power) for the sample size search
pub const DEFAULT_TOL: f64 = 1e-8;

/// Solves for the (fractional) per-group sample size at which the
/// independent two-sample t-test reaches `target_power`.
///
/// Power is increasing in n whenever the effect points in the direction of
/// the alternative, so this is a monotone root find starting at the minimum
/// usable sample size. If that minimum already achieves the target it is
/// returned as is. If the target is out of reach (an effect size near zero,
/// or a one-sided hypothesis pointing the other way), the search gives up
/// with `SolverNonConvergence` instead of growing n without bound.
///
/// The search window stops growing at about 3·10⁶ per group. Effects that
/// need more than that (|d| below roughly 0.0025 at 80% power and a
/// two-sided 5% level) also report `SolverNonConvergence`, even though a
/// finite answer exists.
pub fn solve_sample_size(
    effect_size: f64,
    target_power: f64,
    alpha: f64,
    hypothesis: HypothesisType,
    tol: f64,
) -> Result<f64, AbcomputeErr> {
    if !effect_size.is_finite() {
        return Err(PowerErr::NonFiniteEffectSize(effect_size).into());
    }
    if !(target_power > 0. && target_power < 1.) {
        return Err(PowerErr::BadPower(target_power).into());
    }
    check_significance_level(alpha)?;

    let min_power = ttest_ind_power(effect_size, MIN_SAMPLE_SIZE, alpha, hypothesis)?;
    if min_power >= target_power {
        tracing::debug!(effect_size, target_power, min_power, "target met at minimum n");
        return Ok(MIN_SAMPLE_SIZE);
    }

    // Errors can't occur for n >= MIN_SAMPLE_SIZE with the arguments checked
    // above; NaN makes the root finder bail out if they ever do
    let power_by_n =
        |n: f64| ttest_ind_power(effect_size, n, alpha, hypothesis).unwrap_or(f64::NAN);

    match root_find_monotonic(power_by_n, MIN_SAMPLE_SIZE, target_power, tol) {
        Ok(n) => {
            tracing::debug!(effect_size, target_power, alpha, n, "solved sample size");
            Ok(n)
        }
        Err(AbcomputeErr::RootFind(RootFindErr::NoBracket { upper_bound, .. })) => {
            tracing::debug!(effect_size, target_power, upper_bound, "power out of reach");
            Err(PowerErr::SolverNonConvergence {
                effect_size,
                power: target_power,
            }
            .into())
        }
        Err(e) => Err(e),
    }
}
