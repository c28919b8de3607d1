//! Blast applications the multi-blast service accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Blastn,
    Blastp,
    Blastx,
    Tblastn,
    Tblastx,
    Deltablast,
    Psiblast,
    Rpsblast,
    Rpstblastn,
}

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::Blastn,
        Tool::Blastp,
        Tool::Blastx,
        Tool::Tblastn,
        Tool::Tblastx,
        Tool::Deltablast,
        Tool::Psiblast,
        Tool::Rpsblast,
        Tool::Rpstblastn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Blastn => "blastn",
            Tool::Blastp => "blastp",
            Tool::Blastx => "blastx",
            Tool::Tblastn => "tblastn",
            Tool::Tblastx => "tblastx",
            Tool::Deltablast => "deltablast",
            Tool::Psiblast => "psiblast",
            Tool::Rpsblast => "rpsblast",
            Tool::Rpstblastn => "rpstblastn",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MapError::UnrecognizedTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_tool() {
        for tool in Tool::ALL {
            assert_eq!(tool.as_str().parse::<Tool>(), Ok(tool));
            assert_eq!(
                serde_json::to_value(tool).expect("serialize"),
                serde_json::Value::String(tool.as_str().to_string())
            );
        }
    }

    #[test]
    fn unknown_tool_carries_value() {
        assert_eq!(
            "megablast".parse::<Tool>(),
            Err(MapError::UnrecognizedTool("megablast".into()))
        );
        assert_eq!(
            "BLASTN".parse::<Tool>(),
            Err(MapError::UnrecognizedTool("BLASTN".into()))
        );
    }
}
