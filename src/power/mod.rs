//----------------------------------------
// power mod
//----------------------------------------
pub mod error;
pub mod noncentral_t;
pub mod solve_power;
mod std_normal;
pub mod ttest_power;
