pub mod aggregators;
pub mod structured;

pub use aggregators::*;
pub use structured::*;
