//! Harness configuration.
//!
//! `HarnessConfig` controls where the workflow definition and the artifacts
//! directory live, relative to the project under verification. Orchestrators
//! embedding the engine can deserialize it from their own config files; all
//! fields have defaults.

use serde::{Deserialize, Serialize};

/// Configuration for a verification harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// File name of the workflow definition, resolved against the project
    /// root (default `verify.yml`).
    #[serde(default = "default_definition_file")]
    pub definition_file: String,

    /// Artifacts directory, resolved against the project root unless
    /// absolute (default `artifacts`). Created if absent, never deleted.
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: String,
}

fn default_definition_file() -> String {
    "verify.yml".to_string()
}

fn default_artifacts_dir() -> String {
    "artifacts".to_string()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            definition_file: default_definition_file(),
            artifacts_dir: default_artifacts_dir(),
        }
    }
}
