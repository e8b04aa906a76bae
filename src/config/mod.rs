//----------------------------------------
// config mod
//----------------------------------------
//! Experiment files.
//!
//! ```toml
//! [group_a]
//! mean = 50.0
//! std_dev = 5.0
//!
//! [experiment]
//! controlled = "power"
//! power = 0.8
//!
//! [simulation]
//! strategy = "welch"
//! seed = 24601
//! ```
//!
//! Missing sections and fields fall back to the dashboard defaults.
pub mod error;
pub mod types;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigErr;
use crate::config::types::{
    ControlledKind, ExperimentSection, SimulationSection, default_group_a, default_group_b,
    group_a_section, group_b_section,
};
use crate::effect_size::types::GroupSpec;
use crate::error::AbcomputeErr;
use crate::reconcile::types::{ControlledParam, ExperimentConfig};
use crate::simulation::types::SimulationStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentFile {
    #[serde(default = "default_group_a", deserialize_with = "group_a_section")]
    pub group_a: GroupSpec,
    #[serde(default = "default_group_b", deserialize_with = "group_b_section")]
    pub group_b: GroupSpec,
    #[serde(default)]
    pub experiment: ExperimentSection,
    #[serde(default)]
    pub simulation: SimulationSection,
}

impl Default for ExperimentFile {
    fn default() -> Self {
        Self {
            group_a: default_group_a(),
            group_b: default_group_b(),
            experiment: ExperimentSection::default(),
            simulation: SimulationSection::default(),
        }
    }
}

fn invalid(name: &'static str, expected: &'static str, value: impl ToString) -> AbcomputeErr {
    ConfigErr::InvalidParameter {
        name,
        expected,
        value: value.to_string(),
    }
    .into()
}

impl ExperimentFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AbcomputeErr> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigErr::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded experiment file");
        Self::from_toml_str(&content)
    }

    /// Parses and validates
    pub fn from_toml_str(content: &str) -> Result<Self, AbcomputeErr> {
        let file: ExperimentFile = toml::from_str(content).map_err(ConfigErr::Parse)?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        for (name, group) in [("group_a", &self.group_a), ("group_b", &self.group_b)] {
            if !group.mean.is_finite() {
                return Err(invalid(name, "a group with a finite mean", group.mean));
            }
            if !(group.std_dev.is_finite() && group.std_dev >= 0.) {
                return Err(invalid(
                    name,
                    "a group with a finite, non-negative std_dev",
                    group.std_dev,
                ));
            }
        }

        let exp = &self.experiment;
        if !(exp.significance_level > 0. && exp.significance_level < 1.) {
            return Err(invalid(
                "significance_level",
                "in (0, 1)",
                exp.significance_level,
            ));
        }
        match exp.controlled {
            ControlledKind::SampleSize if exp.sample_size == 0 => {
                return Err(invalid("sample_size", "at least 1", exp.sample_size));
            }
            ControlledKind::Power if !(exp.power > 0. && exp.power < 1.) => {
                return Err(invalid("power", "in (0, 1)", exp.power));
            }
            _ => {}
        }

        let sim = &self.simulation;
        if sim.bins == 0 {
            return Err(invalid("bins", "at least 1", sim.bins));
        }
        if let Some(0) = sim.reps {
            return Err(invalid("reps", "at least 1", 0));
        }
        Ok(())
    }

    pub fn experiment_config(&self) -> ExperimentConfig {
        let controlled = match self.experiment.controlled {
            ControlledKind::SampleSize => ControlledParam::SampleSize(self.experiment.sample_size),
            ControlledKind::Power => ControlledParam::Power(self.experiment.power),
        };
        ExperimentConfig {
            significance_level: self.experiment.significance_level,
            controlled,
            hypothesis: self.experiment.hypothesis,
        }
    }

    pub fn strategy(&self) -> SimulationStrategy {
        self.simulation.strategy.into()
    }
}
