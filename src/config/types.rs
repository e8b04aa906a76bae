//----------------------------------------
// config mod types
//----------------------------------------
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::effect_size::types::GroupSpec;
use crate::hypothesis_type::HypothesisType;
use crate::simulation::types::{SimulationStrategy, VarianceAssumption};

/// Which parameter the experiment file fixes
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ControlledKind {
    #[default]
    SampleSize,
    Power,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Student's t-test (pooled variance)
    #[default]
    TTest,
    /// Welch's t-test
    Welch,
    /// Share of paired draws where B exceeds A
    Proportion,
}

impl From<StrategyKind> for SimulationStrategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::TTest => SimulationStrategy::TTest(VarianceAssumption::Pooled),
            StrategyKind::Welch => SimulationStrategy::TTest(VarianceAssumption::Welch),
            StrategyKind::Proportion => SimulationStrategy::Proportion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentSection {
    pub significance_level: f64,
    pub controlled: ControlledKind,
    /// Per group; used when `controlled = "sample_size"`
    pub sample_size: usize,
    /// Used when `controlled = "power"`
    pub power: f64,
    pub hypothesis: HypothesisType,
}

impl Default for ExperimentSection {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            controlled: ControlledKind::SampleSize,
            sample_size: 10,
            power: 0.8,
            hypothesis: HypothesisType::NotEqual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    pub strategy: StrategyKind,
    /// Unseeded (entropy) when absent
    pub seed: Option<u64>,
    pub bins: usize,
    /// Repetitions for the simulated power estimate; skipped when absent
    pub reps: Option<usize>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::TTest,
            seed: None,
            bins: 20,
            reps: None,
        }
    }
}

/// A `[group_*]` section; absent fields keep that group's default
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GroupSection {
    mean: Option<f64>,
    std_dev: Option<f64>,
}

impl GroupSection {
    fn or(self, fallback: GroupSpec) -> GroupSpec {
        GroupSpec {
            mean: self.mean.unwrap_or(fallback.mean),
            std_dev: self.std_dev.unwrap_or(fallback.std_dev),
        }
    }
}

pub(crate) fn group_a_section<'de, D>(de: D) -> Result<GroupSpec, D::Error>
where
    D: Deserializer<'de>,
{
    GroupSection::deserialize(de).map(|section| section.or(default_group_a()))
}

pub(crate) fn group_b_section<'de, D>(de: D) -> Result<GroupSpec, D::Error>
where
    D: Deserializer<'de>,
{
    GroupSection::deserialize(de).map(|section| section.or(default_group_b()))
}

pub(crate) fn default_group_a() -> GroupSpec {
    GroupSpec {
        mean: 50.,
        std_dev: 5.,
    }
}

pub(crate) fn default_group_b() -> GroupSpec {
    GroupSpec {
        mean: 52.,
        std_dev: 5.,
    }
}
