pub mod config;
pub mod output;
pub mod task;

pub use config::*;
pub use output::*;
pub use task::*;
