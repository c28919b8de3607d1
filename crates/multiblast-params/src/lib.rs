//! Map multi-blast question parameters into the JSON body accepted by the
//! multi-blast job service.
//!
//! [`build_create_job_body`] is the entry point; it is a pure function of the
//! site id and the raw param map.

pub mod blast;
pub mod config;
pub mod error;
pub mod job;
pub mod paramfile;
pub mod params;
pub mod registry;
pub mod targets;

pub use blast::{QueryConfig, Tool, ToolOptions};
pub use error::MapError;
pub use job::{CreateJobBody, JobConfig, build_create_job_body};
pub use params::{ParamMap, ParamName};
pub use targets::TargetDescriptor;
