//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::effect_size::effect_size;
pub use crate::power::noncentral_t::noncentral_t_cdf;
pub use crate::power::solve_power::solve_sample_size;
pub use crate::power::ttest_power::ttest_ind_power;
pub use crate::reconcile::reconcile;
pub use crate::simulation::histogram::overlay_histogram;
pub use crate::simulation::simulate::{draw_group, empirical_power, simulate, simulate_seeded};
pub use crate::simulation::{proportion::proportion_b_greater, ttest::ttest_ind};
