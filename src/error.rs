//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::config::error::ConfigErr;
pub use crate::effect_size::error::EffectSizeErr;
pub use crate::power::error::PowerErr;
pub use crate::simulation::error::SimulationErr;
pub use crate::util::error::RootFindErr;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("while computing effect size: {0}")]
    EffectSize(EffectSizeErr),
    #[error("while computing power: {0}")]
    Power(PowerErr),
    #[error("while root finding: {0}")]
    RootFind(RootFindErr),
    #[error("while simulating experiment: {0}")]
    Simulation(SimulationErr),
    #[error("while loading configuration: {0}")]
    Config(ConfigErr),
}
