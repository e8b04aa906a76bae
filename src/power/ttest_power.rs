use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::power::error::PowerErr;
use crate::power::noncentral_t::{noncentral_t_cdf, noncentral_t_sf};

/// Smallest per-group size for which the t-test has degrees of freedom left
pub const MIN_SAMPLE_SIZE: f64 = 2.;

pub(crate) fn check_significance_level(alpha: f64) -> Result<(), AbcomputeErr> {
    if !(alpha > 0. && alpha < 1.) {
        return Err(PowerErr::BadSignificanceLevel(alpha).into());
    }
    Ok(())
}

/// Power of the independent two-sample t-test with `nobs1` observations in
/// each group. `nobs1` may be fractional so that the sample size solver can
/// treat power as a continuous function of n.
///
/// Under the alternative the pooled t statistic follows a noncentral t
/// distribution with `2n - 2` degrees of freedom and noncentrality
/// `d * sqrt(n / 2)`.
pub fn ttest_ind_power(
    effect_size: f64,
    nobs1: f64,
    alpha: f64,
    hypothesis: HypothesisType,
) -> Result<f64, AbcomputeErr> {
    if !effect_size.is_finite() {
        return Err(PowerErr::NonFiniteEffectSize(effect_size).into());
    }
    if nobs1.is_nan() || nobs1 < MIN_SAMPLE_SIZE {
        return Err(PowerErr::InsufficientSampleSize(nobs1).into());
    }
    check_significance_level(alpha)?;

    let df = 2. * nobs1 - 2.;
    let nc = effect_size * (nobs1 / 2.).sqrt();
    let t_dist = StudentsT::new(0., 1., df).map_err(PowerErr::Distribution)?;
    let crit = t_dist.inverse_cdf(1. - hypothesis.tail_alpha(alpha));

    let power = match hypothesis {
        HypothesisType::NotEqual => {
            noncentral_t_sf(crit, df, nc) + noncentral_t_cdf(-crit, df, nc)
        }
        HypothesisType::TrtGreater => noncentral_t_sf(crit, df, nc),
        HypothesisType::TrtLess => noncentral_t_cdf(-crit, df, nc),
    };
    tracing::trace!(effect_size, nobs1, alpha, df, nc, crit, power, "t-test power");
    Ok(power)
}
