//----------------------------------------
// reconcile mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::hypothesis_type::HypothesisType;

/// Quantity derived by the reconciliation (the one the user did not fix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationTarget {
    SampleSize,
    Power,
}

/// The experiment parameter held fixed by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlledParam {
    /// Observations per group
    SampleSize(usize),
    Power(f64),
}

impl ControlledParam {
    pub fn target(&self) -> ComputationTarget {
        match self {
            ControlledParam::SampleSize(_) => ComputationTarget::Power,
            ControlledParam::Power(_) => ComputationTarget::SampleSize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub significance_level: f64,
    pub controlled: ControlledParam,
    pub hypothesis: HypothesisType,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            controlled: ControlledParam::SampleSize(10),
            hypothesis: HypothesisType::NotEqual,
        }
    }
}

/// Consistent set of effect size, sample size and power
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reconciliation {
    pub effect_size: f64,
    /// Observations per group
    pub sample_size: usize,
    /// Unrounded solution, present when the sample size was solved for
    pub sample_size_exact: Option<f64>,
    /// Achieved power when the sample size was fixed, otherwise the target.
    /// Never rounded; see `power_display`
    pub power: f64,
    pub significance_level: f64,
    pub hypothesis: HypothesisType,
    pub target: ComputationTarget,
}

impl Reconciliation {
    /// Power rounded to two decimals, for display only
    pub fn power_display(&self) -> f64 {
        (self.power * 100.).round() / 100.
    }
}
