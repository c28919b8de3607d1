use serde::Serialize;

use crate::blast::QueryConfig;
use crate::targets::TargetDescriptor;

/// Job-level settings: where the job comes from and what it searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub site: String,
    pub targets: Vec<TargetDescriptor>,
    pub query: String,
    /// Jobs exported from a question never land in the user's job list.
    pub add_to_user_collection: bool,
}

/// Request body for the multi-blast "create job" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobBody {
    pub job_config: JobConfig,
    pub blast_config: QueryConfig,
}
