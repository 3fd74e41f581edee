pub mod config;
pub mod day;
pub mod task;

pub use config::*;
pub use day::*;
pub use task::*;
