//----------------------------------------
// simulation mod
//----------------------------------------
pub mod error;
pub mod histogram;
pub mod proportion;
pub mod simulate;
pub mod ttest;
pub mod types;
