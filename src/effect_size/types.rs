use serde::{Deserialize, Serialize};

use crate::effect_size::error::EffectSizeErr;
use crate::error::AbcomputeErr;

/// Normal distribution assumed for one group of the experiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub mean: f64,
    pub std_dev: f64,
}

impl GroupSpec {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, AbcomputeErr> {
        let group = GroupSpec { mean, std_dev };
        group.validate()?;
        Ok(group)
    }

    /// Fields are public (and deserialized), so everything downstream
    /// re-checks through here
    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        if !self.mean.is_finite() {
            return Err(EffectSizeErr::NonFinite {
                name: "mean",
                value: self.mean,
            }
            .into());
        }
        if !self.std_dev.is_finite() {
            return Err(EffectSizeErr::NonFinite {
                name: "standard deviation",
                value: self.std_dev,
            }
            .into());
        }
        if self.std_dev < 0. {
            return Err(EffectSizeErr::NegativeStdDev(self.std_dev).into());
        }
        Ok(())
    }
}
