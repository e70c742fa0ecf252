//! Building a parameter table from command-line input.
//!
//! Values come from a JSON file (`--params`) and from individual
//! `--param name=value` flags, applied in that order so flags win.

use std::fs;
use std::path::Path;

use paramprog_common::{ParameterId, ParameterSet};
use paramprog_compiler::{parse_number, CompileError, UNITS_PER_MM};
use thiserror::Error;

/// Errors from reading parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid parameter assignment '{0}' (expected name=value)")]
    Assignment(String),

    #[error("unknown parameter name '{0}'")]
    UnknownName(String),

    #[error("invalid value '{value}' for parameter {name}: {source}")]
    Value {
        name: ParameterId,
        value: String,
        #[source]
        source: CompileError,
    },

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid parameter file '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Parse one `name=value` assignment. Values may be integers or
/// millimeter literals such as `1.5mm`.
pub fn parse_assignment(text: &str) -> Result<(ParameterId, i64), ParamsError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| ParamsError::Assignment(text.to_string()))?;
    let id = ParameterId::from_name(name.trim())
        .ok_or_else(|| ParamsError::UnknownName(name.trim().to_string()))?;
    let value = parse_number(value.trim()).map_err(|source| ParamsError::Value {
        name: id,
        value: value.to_string(),
        source,
    })?;
    Ok((id, value))
}

/// Read a JSON parameter file: `{ "width": 42, "pitch": 1270000 }`.
pub fn load_file(path: &Path) -> Result<ParameterSet, ParamsError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ParamsError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ParamsError::Json {
        path: display,
        source,
    })
}

/// Combine an optional file with individual assignments.
pub fn collect(file: Option<&Path>, assignments: &[String]) -> Result<ParameterSet, ParamsError> {
    let mut set = match file {
        Some(path) => load_file(path)?,
        None => ParameterSet::new(),
    };
    for text in assignments {
        let (id, value) = parse_assignment(text)?;
        set.insert(id, value);
    }
    Ok(set)
}

/// Render a value in millimeters, e.g. `1500000` → `1.5mm`.
pub fn format_millimeters(value: i64) -> String {
    let units = UNITS_PER_MM as u64;
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let whole = magnitude / units;
    let frac = magnitude % units;
    if frac == 0 {
        return format!("{sign}{whole}mm");
    }
    let digits = format!("{frac:06}");
    format!("{sign}{whole}.{}mm", digits.trim_end_matches('0'))
}
