//! Question parameters: names and value normalization.

use std::collections::HashMap;

pub mod names;
pub mod normalize;

pub use names::*;
pub use normalize::*;

/// Raw question parameter values keyed by parameter name.
pub type ParamMap = HashMap<String, String>;
