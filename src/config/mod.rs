//! Program configuration.
//!
//! Requirement buckets, credit targets and answer settings are data, not
//! code: changing a program means editing a config file, never the audit
//! logic.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Plus option {0} is also listed as required")]
    OverlappingBuckets(String),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Every code here must be completed.
    pub required: BTreeSet<String>,
    /// Completing any one of these satisfies the plus requirement.
    pub plus_options: BTreeSet<String>,
    pub thresholds: CreditThresholds,
    pub default_top_k: usize,
    /// Number of documents retrieved to ground an answer.
    pub answer_k: usize,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditThresholds {
    pub required_cr: u32,
    pub elective_cr: u32,
    pub program_cr: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub enabled: bool,
    /// Environment variable holding the text-generation credential.
    pub credential_env: String,
}

impl ProgramConfig {
    pub fn v0() -> Self {
        Self {
            required: ["CIS 512", "CIS 600", "MAT 646", "MAT 616", "DSA 688"]
                .into_iter()
                .map(String::from)
                .collect(),
            plus_options: ["PSM 601", "PSM 602"].into_iter().map(String::from).collect(),
            thresholds: CreditThresholds::default(),
            default_top_k: 6,
            answer_k: 5,
            generation: GenerationConfig::default(),
        }
    }

    /// Parse a config override. Missing fields fall back to [`ProgramConfig::v0`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// The required and plus buckets must be disjoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(code) = self.plus_options.intersection(&self.required).next() {
            return Err(ConfigError::OverlappingBuckets(code.clone()));
        }
        Ok(())
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl Default for CreditThresholds {
    fn default() -> Self {
        Self {
            required_cr: 18,
            elective_cr: 12,
            program_cr: 30,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            credential_env: "OPENAI_API_KEY".into(),
        }
    }
}

impl GenerationConfig {
    /// Non-empty credential from the configured environment variable.
    pub fn resolve_credential(&self) -> Option<String> {
        std::env::var(&self.credential_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    /// Delegation needs both the flag and a credential.
    pub fn delegation_active(&self) -> bool {
        self.enabled && self.resolve_credential().is_some()
    }
}
