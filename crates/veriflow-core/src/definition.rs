//! Workflow definition loading and validation.
//!
//! Reads `verify.yml` from disk, deserializes it into a
//! `WorkflowDefinition`, and validates the per-step constraints serde cannot
//! express (non-empty commands, sane retry/timeout values). The definition
//! is parsed once per run; a definition that fails here never executes.

use std::path::{Path, PathBuf};

use thiserror::Error;
use veriflow_types::workflow::{Phase, StepSpec, WorkflowDefinition};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that make a workflow definition unusable.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// No definition file at the expected path.
    #[error("definition file not found: {path}")]
    NotFound { path: PathBuf },

    /// Filesystem I/O failure while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization failure (includes unknown phase keys and
    /// malformed step objects).
    #[error("parse error: {0}")]
    Parse(String),

    /// Structural validation failure.
    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Loading / parsing
// ---------------------------------------------------------------------------

/// Load and validate a workflow definition from a YAML file.
pub fn load_definition(path: &Path) -> Result<WorkflowDefinition, DefinitionError> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            DefinitionError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DefinitionError::Io(err)
        }
    })?;
    parse_definition(&content)
}

/// Parse a YAML string into a validated `WorkflowDefinition`.
///
/// Runs `validate_definition` after deserialization, so the returned value
/// is guaranteed to be executable as far as static checks go.
pub fn parse_definition(yaml: &str) -> Result<WorkflowDefinition, DefinitionError> {
    let def: WorkflowDefinition =
        serde_yaml_ng::from_str(yaml).map_err(|e| DefinitionError::Parse(e.to_string()))?;
    validate_definition(&def)?;
    Ok(def)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

const KNOWN_METHODS: [&str; 7] = ["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"];

/// Validate the constraints serde leaves open.
///
/// Checks, per step:
/// - `run`: non-empty command, timeout > 0
/// - `http`: non-empty url, known method, retries >= 1, timeout > 0,
///   non-empty expected status set
/// - `port_open`: port != 0, timeout > 0
/// - `file_exists` / `env_var_set`: at least one non-empty entry
pub fn validate_definition(def: &WorkflowDefinition) -> Result<(), DefinitionError> {
    for phase in Phase::ORDER {
        for (index, spec) in def.steps(phase).iter().enumerate() {
            validate_step(spec).map_err(|msg| {
                DefinitionError::Validation(format!("step {phase}_{index}: {msg}"))
            })?;
        }
    }
    Ok(())
}

fn validate_step(spec: &StepSpec) -> Result<(), String> {
    match spec {
        StepSpec::Run(run) => {
            if run.command().trim().is_empty() {
                return Err("command must not be empty".to_string());
            }
            if run.timeout().is_zero() {
                return Err("timeout_seconds must be > 0".to_string());
            }
        }
        StepSpec::Http(http) => {
            if http.url.trim().is_empty() {
                return Err("url must not be empty".to_string());
            }
            if !KNOWN_METHODS.contains(&http.method.to_ascii_uppercase().as_str()) {
                return Err(format!("unknown HTTP method '{}'", http.method));
            }
            if http.retries == 0 {
                return Err("retries must be >= 1".to_string());
            }
            if http.timeout_seconds == 0 {
                return Err("timeout_seconds must be > 0".to_string());
            }
            if http.expect_status.is_empty() {
                return Err("expect_status must not be empty".to_string());
            }
        }
        StepSpec::PortOpen(port) => {
            if port.port() == 0 {
                return Err("port must be a non-zero port number".to_string());
            }
            if port.timeout().is_zero() {
                return Err("timeout_seconds must be > 0".to_string());
            }
        }
        StepSpec::FileExists(paths) => {
            if paths.paths().is_empty() {
                return Err("file_exists needs at least one path".to_string());
            }
            if paths.paths().iter().any(|p| p.trim().is_empty()) {
                return Err("file_exists paths must not be empty".to_string());
            }
        }
        StepSpec::EnvVarSet(names) => {
            if names.names().is_empty() {
                return Err("env_var_set needs at least one variable name".to_string());
            }
            if names.names().iter().any(|n| n.trim().is_empty()) {
                return Err("env_var_set names must not be empty".to_string());
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
