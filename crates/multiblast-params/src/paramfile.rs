//! Readers for parameter files handed to the command-line tool.
//!
//! A parameter file is a flat table of question param name to value. Scalar
//! values are accepted and rendered the way the question form would submit
//! them; nested values are rejected. TOML floats are rejected too, since their
//! text form does not survive parsing (`1e-5` would come back as `0.00001`).

use std::path::Path;

use anyhow::{Context as _, Result, bail};

use crate::params::ParamMap;

/// Parser for one parameter file format.
pub trait ParamFileParser {
    fn supports(path: &Path) -> bool;
    fn parse(content: &str) -> Result<ParamMap>;
}

pub struct JsonParamFile;

impl ParamFileParser for JsonParamFile {
    fn supports(path: &Path) -> bool {
        has_extension(path, "json")
    }

    fn parse(content: &str) -> Result<ParamMap> {
        let table: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(content).context("param file is not a JSON object")?;
        let mut params = ParamMap::with_capacity(table.len());
        for (key, value) in table {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                other => bail!("param '{}' must be a scalar, got {}", key, other),
            };
            params.insert(key, value);
        }
        Ok(params)
    }
}

pub struct TomlParamFile;

impl ParamFileParser for TomlParamFile {
    fn supports(path: &Path) -> bool {
        has_extension(path, "toml")
    }

    fn parse(content: &str) -> Result<ParamMap> {
        let table: toml::Table = toml::from_str(content).context("param file is not a TOML table")?;
        let mut params = ParamMap::with_capacity(table.len());
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(_) => bail!(
                    "param '{}' is a float; quote it so the value is passed through as written",
                    key
                ),
                toml::Value::Boolean(b) => b.to_string(),
                other => bail!("param '{}' must be a scalar, got {}", key, other.type_str()),
            };
            params.insert(key, value);
        }
        Ok(params)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Read and parse a parameter file, choosing the format by extension.
pub fn load_param_file(path: &Path) -> Result<ParamMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read param file {}", path.display()))?;
    let parsed = if JsonParamFile::supports(path) {
        JsonParamFile::parse(&content)
    } else if TomlParamFile::supports(path) {
        TomlParamFile::parse(&content)
    } else {
        bail!(
            "unsupported param file {} (expected .json or .toml)",
            path.display()
        );
    };
    parsed.with_context(|| format!("failed to parse param file {}", path.display()))
}
