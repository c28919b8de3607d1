//! Typed shape of the `blastConfig` section of a job body.

use serde::Serialize;

use super::tool::Tool;

/// Low-complexity masking toggle, emitted as `dust` or `seg` depending on tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LowComplexityFilter {
    pub enabled: bool,
}

/// Query config shared by every tool, plus the tool-specific options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    pub tool: Tool,
    pub e_value: String,
    pub soft_masking: bool,
    pub lowercase_masking: bool,
    pub max_target_sequences: i32,
    #[serde(rename = "maxHSPs")]
    pub max_hsps: i32,
    #[serde(flatten)]
    pub options: ToolOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolOptions {
    /// blastn
    Nucleotide(NucleotideOptions),
    /// blastp, blastx, tblastn, deltablast, psiblast
    Gapped(GappedOptions),
    /// tblastx
    Ungapped(UngappedOptions),
    /// rpsblast, rpstblastn
    Domain(DomainOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NucleotideOptions {
    pub task: Tool,
    pub gap_open: i32,
    pub gap_extend: i32,
    pub reward: i32,
    pub penalty: i32,
    pub word_size: i32,
    pub dust: LowComplexityFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GappedOptions {
    /// Only set for tools the service runs through a `-task` switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Tool>,
    pub gap_open: i32,
    pub gap_extend: i32,
    pub word_size: i32,
    pub matrix: String,
    pub comp_based_stats: String,
    pub seg: LowComplexityFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UngappedOptions {
    pub word_size: i32,
    pub matrix: String,
    pub seg: LowComplexityFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainOptions {
    pub comp_based_stats: String,
    pub seg: LowComplexityFilter,
}
