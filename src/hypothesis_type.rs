use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Alternative hypothesis, phrased as group B ("treatment") against group A
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisType {
    #[default]
    NotEqual,
    TrtGreater,
    TrtLess,
}

impl HypothesisType {
    /// Significance level assigned to each rejection tail
    pub fn tail_alpha(&self, alpha: f64) -> f64 {
        match self {
            HypothesisType::NotEqual => alpha / 2.,
            HypothesisType::TrtGreater | HypothesisType::TrtLess => alpha,
        }
    }
}
