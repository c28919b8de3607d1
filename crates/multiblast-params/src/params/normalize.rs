//! Readers that turn raw question param values into typed values.

use super::{ParamMap, ParamName};
use crate::error::{MapError, Result};

/// Strip one leading and one trailing single quote, each end on its own.
///
/// A trailing quote is also stripped when it sits just before a final line
/// terminator, so `'10'\n` becomes `10\n`.
pub fn strip_quotes(value: &str) -> String {
    let value = value.strip_prefix('\'').unwrap_or(value);
    if let Some(stripped) = value.strip_suffix('\'') {
        return stripped.to_string();
    }
    let (body, terminator) = split_final_terminator(value);
    match body.strip_suffix('\'') {
        Some(stripped) => format!("{stripped}{terminator}"),
        None => value.to_string(),
    }
}

fn split_final_terminator(value: &str) -> (&str, &str) {
    if let Some(body) = value.strip_suffix("\r\n") {
        return (body, "\r\n");
    }
    match value.chars().next_back() {
        Some(c @ ('\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')) => {
            let at = value.len() - c.len_utf8();
            (&value[..at], &value[at..])
        }
        _ => (value, ""),
    }
}

/// The value as submitted, without normalization.
pub fn raw(params: &ParamMap, name: ParamName) -> Result<&str> {
    params
        .get(name.as_str())
        .map(String::as_str)
        .ok_or(MapError::MissingParameter(name))
}

pub fn normalize(params: &ParamMap, name: ParamName) -> Result<String> {
    raw(params, name).map(strip_quotes)
}

/// Only the exact string `true` counts as true.
pub fn as_boolean(params: &ParamMap, name: ParamName) -> Result<bool> {
    Ok(normalize(params, name)? == "true")
}

pub fn as_int(params: &ParamMap, name: ParamName) -> Result<i32> {
    let value = normalize(params, name)?;
    parse_int(name, &value)
}

/// Parse `a,b` into a pair. Components after the second are ignored.
pub fn as_int_pair(params: &ParamMap, name: ParamName) -> Result<(i32, i32)> {
    let value = normalize(params, name)?;
    let mut parts = value.split(',');
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => Ok((parse_int(name, first)?, parse_int(name, second)?)),
        _ => Err(malformed(name, &value)),
    }
}

fn parse_int(name: ParamName, value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|_| malformed(name, value))
}

fn malformed(param: ParamName, value: &str) -> MapError {
    MapError::MalformedNumeric {
        param,
        value: value.to_string(),
    }
}
