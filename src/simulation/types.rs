//----------------------------------------
// simulation mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceAssumption {
    /// Student's t-test with a pooled variance estimate
    #[default]
    Pooled,
    /// Welch's t-test with Satterthwaite degrees of freedom
    Welch,
}

/// How the two simulated groups are summarised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationStrategy {
    /// Independent two-sample t-test, two-sided
    TTest(VarianceAssumption),
    /// Share of index-paired draws where group B exceeds group A. This is
    /// an empirical summary of overlap and not a p-value.
    Proportion,
}

impl Default for SimulationStrategy {
    fn default() -> Self {
        SimulationStrategy::TTest(VarianceAssumption::Pooled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    /// (mean_a - mean_b) / standard error
    pub statistic: f64,
    /// Two-sided
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SimulationSummary {
    TTest(TTestResult),
    Proportion { proportion_b_greater: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub samples_a: Vec<f64>,
    pub samples_b: Vec<f64>,
    pub summary: SimulationSummary,
}
