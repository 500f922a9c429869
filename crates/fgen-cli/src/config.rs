//! `fgen.toml` configuration
//!
//! Every setting has a default, so the file and each of its tables are
//! optional. Command-line flags override what the file says.

use anyhow::Context;
use fgen_fortran::DEFAULT_LINE_BUDGET;
use fgen_tools::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "fgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FgenConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default, rename = "check-api")]
    pub check_api: CheckApiConfig,
}

/// Settings for `fgen generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GenerateConfig {
    /// Module name; derived from the header file name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default = "default_line_budget")]
    pub line_budget: usize,
    /// Put the generation time in the banner comment
    #[serde(default)]
    pub stamp: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            module: None,
            line_budget: default_line_budget(),
            stamp: false,
        }
    }
}

/// Settings for `fgen check-api`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckApiConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CheckApiConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_line_budget() -> usize {
    DEFAULT_LINE_BUDGET
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl FgenConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly named config, or `fgen.toml` from `dir` if there is
    /// one, or fall back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            return Self::from_file(candidate);
        }

        Ok(Self::default())
    }
}
