use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level description of a state: its domains and its entries.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateToml {
    /// Domains referenced by field entries.
    #[serde(default)]
    pub domains: Vec<DomainToml>,

    /// State entries, in order.
    #[serde(default)]
    pub entries: Vec<EntryToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainToml {
    pub name: String,
    /// Canonical axis order. Defaults to the order of `axes`.
    #[serde(default)]
    pub grid_order: Option<Vec<String>>,
    /// Physical order of the axes in entry data. Defaults to `grid_order`.
    #[serde(default)]
    pub storage_order: Option<Vec<String>>,
    pub axes: Vec<AxisToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisToml {
    pub name: String,
    pub points: Vec<f64>,
    pub bounds: Vec<f64>,
    #[serde(default)]
    pub units: Option<String>,
}

/// One state entry.
///
/// With `domain` set the entry is a field and needs `shape` and `data`.
/// Without it, `value` gives a scalar and `data` alone a bare array.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryToml {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub shape: Option<Vec<usize>>,
    #[serde(default)]
    pub data: Option<Vec<f64>>,
    #[serde(default)]
    pub interfaces: Option<Vec<bool>>,
    #[serde(default)]
    pub value: Option<ScalarToml>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarToml {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Reads and parses a state TOML file.
pub fn load(path: &Path) -> Result<StateToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse state TOML")
}
