//! Build the list of blast targets from the organism and database-type params.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::{ParamMap, ParamName, raw};

/// Organism tokens this short are placeholders, not real organisms.
/// Length is counted in `char`s, not UTF-16 units.
const MIN_ORGANISM_LEN: usize = 4;

/// One database file the remote service will search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    pub target_display_name: String,
    pub target_file: String,
}

/// Database-type suffix used when composing target file names.
///
/// `PopSet` databases are stored as `Isolates` files on the blast side.
pub fn blast_target_type(db_type: &str) -> &str {
    if db_type == "PopSet" { "Isolates" } else { db_type }
}

/// Targets for a comma-separated organism list, in input order.
pub fn build_targets(organisms: &str, db_type: &str) -> Vec<TargetDescriptor> {
    let suffix = blast_target_type(db_type);
    let mut dropped = 0usize;
    let targets: Vec<TargetDescriptor> = organisms
        .split(',')
        .filter(|organism| {
            let keep = organism.chars().count() >= MIN_ORGANISM_LEN;
            if !keep {
                dropped += 1;
            }
            keep
        })
        .map(|organism| TargetDescriptor {
            target_display_name: organism.to_string(),
            target_file: format!("{organism}{suffix}"),
        })
        .collect();
    tracing::debug!(
        "built {} blast targets (dropped {} short organism tokens, type={})",
        targets.len(),
        dropped,
        suffix
    );
    targets
}

/// Targets from the raw (un-normalized) organism and database-type params.
pub fn targets_from_params(params: &ParamMap) -> Result<Vec<TargetDescriptor>> {
    let organisms = raw(params, ParamName::DatabaseOrganism)?;
    let db_type = raw(params, ParamName::DatabaseType)?;
    Ok(build_targets(organisms, db_type))
}

#[cfg(test)]
mod tests {
    use super::{TargetDescriptor, blast_target_type, build_targets, targets_from_params};
    use crate::error::MapError;
    use crate::params::{ParamMap, ParamName};
    use proptest::prelude::*;

    fn names(targets: &[TargetDescriptor]) -> Vec<(&str, &str)> {
        targets
            .iter()
            .map(|t| (t.target_display_name.as_str(), t.target_file.as_str()))
            .collect()
    }

    #[test]
    fn drops_short_tokens_and_keeps_order() {
        let targets = build_targets("Homo,Pf,Plasmodium falciparum", "Genome");
        assert_eq!(
            names(&targets),
            vec![
                ("Homo", "HomoGenome"),
                ("Plasmodium falciparum", "Plasmodium falciparumGenome"),
            ]
        );
    }

    #[test]
    fn popset_maps_to_isolates() {
        let targets = build_targets("Toxoplasma gondii", "PopSet");
        assert_eq!(targets[0].target_file, "Toxoplasma gondiiIsolates");
        // only the exact value is remapped
        assert_eq!(blast_target_type("popset"), "popset");
        assert_eq!(blast_target_type("ESTs"), "ESTs");
    }

    #[test]
    fn empty_or_all_short_selection_yields_no_targets() {
        assert!(build_targets("", "Genome").is_empty());
        assert!(build_targets("Pf,Tg,abc", "Genome").is_empty());
        assert!(build_targets(",,,", "Genome").is_empty());
    }

    #[test]
    fn tokens_are_not_trimmed() {
        let targets = build_targets("Homo, Mus musculus", "Proteins");
        assert_eq!(
            names(&targets),
            vec![
                ("Homo", "HomoProteins"),
                (" Mus musculus", " Mus musculusProteins"),
            ]
        );
    }

    #[test]
    fn length_counts_chars_not_bytes_or_utf16_units() {
        // two astral-plane chars: 8 bytes, 4 UTF-16 units, still too short
        assert!(build_targets("\u{1D538}\u{1D539}", "Genome").is_empty());
        let targets = build_targets("\u{00C9}col", "Genome");
        assert_eq!(targets[0].target_file, "\u{00C9}colGenome");
    }

    #[test]
    fn targets_read_raw_values() {
        let mut params = ParamMap::new();
        params.insert("BlastDatabaseOrganism".into(), "'Homo sapiens'".into());
        params.insert("MultiBlastDatabaseType".into(), "Genome".into());
        let targets = targets_from_params(&params).expect("targets");
        assert_eq!(targets[0].target_display_name, "'Homo sapiens'");

        params.remove("MultiBlastDatabaseType");
        assert_eq!(
            targets_from_params(&params),
            Err(MapError::MissingParameter(ParamName::DatabaseType))
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let t = TargetDescriptor {
            target_display_name: "Homo".into(),
            target_file: "HomoGenome".into(),
        };
        let v = serde_json::to_value(&t).expect("serialize");
        assert_eq!(
            v,
            serde_json::json!({"targetDisplayName": "Homo", "targetFile": "HomoGenome"})
        );
    }

    proptest! {
        #[test]
        fn never_emits_short_targets(tokens in prop::collection::vec("[A-Za-z ]{0,8}", 0..10)) {
            let joined = tokens.join(",");
            let targets = build_targets(&joined, "Genome");
            let expected: Vec<&String> = tokens.iter().filter(|t| t.chars().count() > 3).collect();
            prop_assert_eq!(targets.len(), expected.len());
            for (t, e) in targets.iter().zip(expected) {
                prop_assert_eq!(&t.target_display_name, e);
                prop_assert_eq!(t.target_file.clone(), format!("{e}Genome"));
            }
        }
    }
}
