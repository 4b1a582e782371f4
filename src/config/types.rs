use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Project configuration from `redocly.yaml`.
///
/// Only the commonly used sections are typed. Every other top-level key is
/// kept in `extra` and handed on untouched; validating it is the sync
/// service's job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RedoclyConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub apis: IndexMap<String, ApiEntry>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, YamlValue>,
    #[serde(flatten)]
    pub extra: IndexMap<String, YamlValue>,
    /// File the config was read from. `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// API entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiEntry {
    /// Path to the API description's root document.
    pub root: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, YamlValue>,
}

// ---------------------------------------------------------------------------
// Loader options
// ---------------------------------------------------------------------------

/// What the resolver passes to a [`ConfigLoader`](super::loader::ConfigLoader).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Explicit config file. `None` lets the loader discover one.
    pub config_path: Option<PathBuf>,
}
