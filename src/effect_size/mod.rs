//----------------------------------------
// effect size mod
//----------------------------------------
pub mod error;
pub mod types;

use crate::effect_size::{error::EffectSizeErr, types::GroupSpec};
use crate::error::AbcomputeErr;

/// Standardized mean difference (B minus A) over the root mean square of
/// the two standard deviations
pub fn effect_size(group_a: &GroupSpec, group_b: &GroupSpec) -> Result<f64, AbcomputeErr> {
    group_a.validate()?;
    group_b.validate()?;
    if group_a.std_dev == 0. && group_b.std_dev == 0. {
        return Err(EffectSizeErr::DegenerateInput.into());
    }
    let pooled_sd = ((group_a.std_dev.powi(2) + group_b.std_dev.powi(2)) / 2.).sqrt();
    Ok((group_b.mean - group_a.mean) / pooled_sd)
}
