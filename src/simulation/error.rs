//----------------------------------------
// simulation errors
//----------------------------------------
use crate::error::AbcomputeErr;
use statrs::StatsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationErr {
    #[error("sample size should be at least 1")]
    EmptySample,
    #[error("{test} needs at least {needed} observations per group; got {got}")]
    InsufficientSamples {
        test: &'static str,
        needed: usize,
        got: usize,
    },
    #[error("samples have zero standard error; test statistic is undefined")]
    DegenerateSamples,
    #[error("paired samples should have equal lengths (group A {len_a}, group B {len_b})")]
    MismatchedLengths { len_a: usize, len_b: usize },
    #[error("samples should be finite; got {0}")]
    NonFiniteSample(f64),
    #[error("number of histogram bins should be at least 1")]
    BadBins,
    #[error("invalid distribution parameters: {0}")]
    Distribution(StatsError),
}

impl From<SimulationErr> for AbcomputeErr {
    fn from(e: SimulationErr) -> Self {
        AbcomputeErr::Simulation(e)
    }
}
