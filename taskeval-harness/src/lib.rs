pub mod artifacts;
pub mod dataset;
pub mod evaluator;

pub use artifacts::*;
pub use dataset::*;
pub use evaluator::*;
