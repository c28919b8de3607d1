//! Dispatch on the selected tool and build its query config.

use super::tool::Tool;
use super::types::{
    DomainOptions, GappedOptions, LowComplexityFilter, NucleotideOptions, QueryConfig,
    ToolOptions, UngappedOptions,
};
use crate::error::Result;
use crate::params::{ParamMap, ParamName, as_boolean, as_int, as_int_pair, normalize};

/// Build the `blastConfig` section for the tool named by `BlastAlgorithm`.
pub fn build_query_config(params: &ParamMap) -> Result<QueryConfig> {
    let tool_name = normalize(params, ParamName::Algorithm)?;

    let e_value = normalize(params, ParamName::ExpectationValue)?;
    let soft_masking = as_boolean(params, ParamName::SoftMask)?;
    let lowercase_masking = as_boolean(params, ParamName::LowerCaseMask)?;
    let max_target_sequences = as_int(params, ParamName::NumQueryResults)?;
    let max_hsps = as_int(params, ParamName::MaxMatchesQueryRange)?;

    let tool: Tool = tool_name.parse()?;
    tracing::debug!("building blast config for tool={}", tool);
    let options = tool_options(tool, params)?;

    Ok(QueryConfig {
        tool,
        e_value,
        soft_masking,
        lowercase_masking,
        max_target_sequences,
        max_hsps,
        options,
    })
}

/// Tool-specific fields layered on the common query config.
pub fn tool_options(tool: Tool, params: &ParamMap) -> Result<ToolOptions> {
    let options = match tool {
        Tool::Blastn => ToolOptions::Nucleotide(nucleotide(params)?),
        Tool::Blastp | Tool::Blastx | Tool::Tblastn => {
            ToolOptions::Gapped(gapped(Some(tool), params)?)
        }
        Tool::Deltablast | Tool::Psiblast => ToolOptions::Gapped(gapped(None, params)?),
        Tool::Tblastx => ToolOptions::Ungapped(UngappedOptions {
            word_size: as_int(params, ParamName::WordSize)?,
            matrix: normalize(params, ParamName::ScoringMatrix)?,
            seg: low_complexity_filter(params)?,
        }),
        Tool::Rpsblast | Tool::Rpstblastn => ToolOptions::Domain(DomainOptions {
            comp_based_stats: normalize(params, ParamName::CompAdjust)?,
            seg: low_complexity_filter(params)?,
        }),
    };
    Ok(options)
}

fn nucleotide(params: &ParamMap) -> Result<NucleotideOptions> {
    let (gap_open, gap_extend) = as_int_pair(params, ParamName::GapCosts)?;
    let (reward, penalty) = as_int_pair(params, ParamName::MatchMismatchScore)?;
    Ok(NucleotideOptions {
        task: Tool::Blastn,
        gap_open,
        gap_extend,
        reward,
        penalty,
        word_size: as_int(params, ParamName::WordSize)?,
        dust: low_complexity_filter(params)?,
    })
}

fn gapped(task: Option<Tool>, params: &ParamMap) -> Result<GappedOptions> {
    let (gap_open, gap_extend) = as_int_pair(params, ParamName::GapCosts)?;
    Ok(GappedOptions {
        task,
        gap_open,
        gap_extend,
        word_size: as_int(params, ParamName::WordSize)?,
        matrix: normalize(params, ParamName::ScoringMatrix)?,
        comp_based_stats: normalize(params, ParamName::CompAdjust)?,
        seg: low_complexity_filter(params)?,
    })
}

/// Masking is on unless the filter value starts with `no`.
pub fn low_complexity_filter(params: &ParamMap) -> Result<LowComplexityFilter> {
    let value = normalize(params, ParamName::FilterLowComplex)?;
    Ok(LowComplexityFilter {
        enabled: !value.starts_with("no"),
    })
}
