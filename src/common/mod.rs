pub mod constants;
pub mod hash;
pub mod logging;
pub mod parallel;
