//! Question parameter names understood by the mapper.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every parameter the multi-blast question form can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    DatabaseType,
    Algorithm,
    DatabaseOrganism,
    QuerySequence,
    // General config for all BLAST applications
    ExpectationValue,
    NumQueryResults,
    MaxMatchesQueryRange,
    // Config specific to each BLAST application
    WordSize,
    ScoringMatrix,
    MatchMismatchScore,
    GapCosts,
    CompAdjust,
    // Filter and masking config
    FilterLowComplex,
    SoftMask,
    LowerCaseMask,
}

impl ParamName {
    pub const ALL: [ParamName; 15] = [
        ParamName::DatabaseType,
        ParamName::Algorithm,
        ParamName::DatabaseOrganism,
        ParamName::QuerySequence,
        ParamName::ExpectationValue,
        ParamName::NumQueryResults,
        ParamName::MaxMatchesQueryRange,
        ParamName::WordSize,
        ParamName::ScoringMatrix,
        ParamName::MatchMismatchScore,
        ParamName::GapCosts,
        ParamName::CompAdjust,
        ParamName::FilterLowComplex,
        ParamName::SoftMask,
        ParamName::LowerCaseMask,
    ];

    /// Key used for this parameter in the question's param map.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::DatabaseType => "MultiBlastDatabaseType",
            ParamName::Algorithm => "BlastAlgorithm",
            ParamName::DatabaseOrganism => "BlastDatabaseOrganism",
            ParamName::QuerySequence => "BlastQuerySequence",
            ParamName::ExpectationValue => "ExpectationValue",
            ParamName::NumQueryResults => "NumQueryResults",
            ParamName::MaxMatchesQueryRange => "MaxMatchesQueryRange",
            ParamName::WordSize => "WordSize",
            ParamName::ScoringMatrix => "ScoringMatrix",
            ParamName::MatchMismatchScore => "MatchMismatchScore",
            ParamName::GapCosts => "GapCosts",
            ParamName::CompAdjust => "CompAdjust",
            ParamName::FilterLowComplex => "FilterLowComplex",
            ParamName::SoftMask => "SoftMask",
            ParamName::LowerCaseMask => "LowerCaseMask",
        }
    }

    /// Exact, case-sensitive lookup of a param map key.
    pub fn lookup(key: &str) -> Option<ParamName> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// Keys in `keys` that are not a known parameter name.
    pub fn unknown_keys<'a, I>(keys: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        keys.into_iter()
            .map(String::as_str)
            .filter(|k| Self::lookup(k).is_none())
            .collect()
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter name '{0}'")]
pub struct UnknownParamName(pub String);

impl FromStr for ParamName {
    type Err = UnknownParamName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownParamName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_names_are_distinct_and_round_trip() {
        let keys: HashSet<&str> = ParamName::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(keys.len(), ParamName::ALL.len());
        for p in ParamName::ALL {
            assert_eq!(p.as_str().parse::<ParamName>(), Ok(p));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ParamName::lookup("GapCosts"), Some(ParamName::GapCosts));
        assert_eq!(ParamName::lookup("gapcosts"), None);
        assert_eq!(
            "BlastProgram".parse::<ParamName>(),
            Err(UnknownParamName("BlastProgram".into()))
        );
    }

    #[test]
    fn unknown_name_error_message() {
        let err = "BlastProgram".parse::<ParamName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown parameter name 'BlastProgram'");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn unknown_keys_are_reported_in_order() {
        let keys = vec![
            "WordSize".to_string(),
            "Foo".to_string(),
            "SoftMask".to_string(),
            "bar".to_string(),
        ];
        assert_eq!(ParamName::unknown_keys(&keys), vec!["Foo", "bar"]);
    }
}
