//! Blast query config: tool dispatch and per-tool option builders.

pub mod build;
pub mod tool;
pub mod types;

pub use build::*;
pub use tool::*;
pub use types::*;
