//----------------------------------------
// root finding errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error("target {target} not reached before upper bound {upper_bound}")]
    NoBracket { target: f64, upper_bound: f64 },
    #[error("failed to converge after {0} iterations")]
    FailedToConverge(usize),
    #[error("function returned NaN at x = {0}")]
    NotANumber(f64),
}

impl From<RootFindErr> for AbcomputeErr {
    fn from(e: RootFindErr) -> Self {
        AbcomputeErr::RootFind(e)
    }
}
