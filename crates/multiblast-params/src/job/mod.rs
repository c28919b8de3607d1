//! Job body assembly: job config plus blast query config.

pub mod build;
pub mod types;

pub use build::*;
pub use types::*;
