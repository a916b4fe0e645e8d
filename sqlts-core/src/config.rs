//! `sqlts.toml` configuration.

use std::{path::Path, str::FromStr};

use eyre::{Result, WrapErr};
use serde::Deserialize;

/// Root of a `sqlts.toml` file.
///
/// ```toml
/// [typescript]
/// database_import = "../db.ts"
/// header = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Options for the TypeScript generator
    #[serde(default)]
    pub typescript: TypeScriptConfig,
}

/// Options for generated TypeScript units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TypeScriptConfig {
    /// Module that exports the shared `db` handle, relative to the output directory
    pub database_import: String,
    /// Whether to start every file with a generated-code comment
    pub header: bool,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            database_import: "../db.ts".to_string(),
            header: true,
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
        content
            .parse()
            .wrap_err_with(|| format!("failed to parse config '{}'", path.display()))
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
