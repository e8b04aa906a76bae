//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::config::ExperimentFile;
pub use crate::config::types::{ControlledKind, StrategyKind};
pub use crate::effect_size::types::GroupSpec;
pub use crate::hypothesis_type::HypothesisType;
pub use crate::reconcile::types::{
    ComputationTarget, ControlledParam, ExperimentConfig, Reconciliation,
};
pub use crate::simulation::histogram::OverlaidHistogram;
pub use crate::simulation::types::{
    SimulationResult, SimulationStrategy, SimulationSummary, TTestResult, VarianceAssumption,
};
