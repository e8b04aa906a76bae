//----------------------------------------
// power errors
//----------------------------------------
use crate::error::AbcomputeErr;
use statrs::StatsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerErr {
    #[error("t-test needs at least 2 observations per group; got {0}")]
    InsufficientSampleSize(f64),
    #[error("significance level should be in (0, 1); got {0}")]
    BadSignificanceLevel(f64),
    #[error("target power should be in (0, 1); got {0}")]
    BadPower(f64),
    #[error("effect size should be finite; got {0}")]
    NonFiniteEffectSize(f64),
    #[error(
        "insufficient effect size to solve for sample size (effect size {effect_size}, \
        target power {power})"
    )]
    SolverNonConvergence { effect_size: f64, power: f64 },
    #[error("invalid t distribution: {0}")]
    Distribution(StatsError),
}

impl From<PowerErr> for AbcomputeErr {
    fn from(e: PowerErr) -> Self {
        AbcomputeErr::Power(e)
    }
}
