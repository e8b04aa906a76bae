//----------------------------------------
// effect size errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EffectSizeErr {
    #[error("both standard deviations are zero; effect size is undefined")]
    DegenerateInput,
    #[error("{name} should be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("standard deviation should be non-negative; got {0}")]
    NegativeStdDev(f64),
}

impl From<EffectSizeErr> for AbcomputeErr {
    fn from(e: EffectSizeErr) -> Self {
        AbcomputeErr::EffectSize(e)
    }
}
