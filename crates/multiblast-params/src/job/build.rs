use super::types::{CreateJobBody, JobConfig};
use crate::blast::build_query_config;
use crate::error::Result;
use crate::params::{ParamMap, ParamName, normalize};
use crate::targets::targets_from_params;

/// Map question params into the multi-blast create-job body.
///
/// Either the whole document is built or the first failure is returned.
pub fn build_create_job_body(site: &str, params: &ParamMap) -> Result<CreateJobBody> {
    let job_config = build_job_config(site, params)?;
    let blast_config = build_query_config(params)?;
    tracing::debug!(
        "mapped job body (site={}, tool={}, targets={})",
        site,
        blast_config.tool,
        job_config.targets.len()
    );
    Ok(CreateJobBody {
        job_config,
        blast_config,
    })
}

pub fn build_job_config(site: &str, params: &ParamMap) -> Result<JobConfig> {
    Ok(JobConfig {
        site: site.to_string(),
        targets: targets_from_params(params)?,
        query: normalize(params, ParamName::QuerySequence)?,
        add_to_user_collection: false,
    })
}
