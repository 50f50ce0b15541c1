//! Failure taxonomy surfaced on step results.
//!
//! Codes are stable strings (`E101` .. `E999`) so downstream orchestrators
//! can match on them without knowing Rust variant names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable failure code carried by a failing step result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Workflow definition or a required file is missing.
    #[serde(rename = "E101")]
    MissingFile,
    /// A required environment variable is not set.
    #[serde(rename = "E102")]
    MissingEnvVar,
    /// Command exited non-zero when zero was expected.
    #[serde(rename = "E201")]
    CommandFailed,
    /// Command exit code did not match the expected non-zero value.
    #[serde(rename = "E202")]
    ExitCodeMismatch,
    /// Command exceeded its timeout and was killed.
    #[serde(rename = "E203")]
    CommandTimeout,
    /// Command could not be executed at all.
    #[serde(rename = "E204")]
    SpawnFailure,
    /// HTTP response status was not in the expected set.
    #[serde(rename = "E301")]
    UnexpectedStatus,
    /// HTTP response body is missing a required substring.
    #[serde(rename = "E302")]
    BodyMismatch,
    /// HTTP retries exhausted without ever receiving a response.
    #[serde(rename = "E303")]
    RetriesExhausted,
    /// Port did not open within the timeout window.
    #[serde(rename = "E304")]
    PortClosed,
    /// Unexpected internal executor error.
    #[serde(rename = "E999")]
    Internal,
}

impl ErrorCode {
    /// The literal code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFile => "E101",
            ErrorCode::MissingEnvVar => "E102",
            ErrorCode::CommandFailed => "E201",
            ErrorCode::ExitCodeMismatch => "E202",
            ErrorCode::CommandTimeout => "E203",
            ErrorCode::SpawnFailure => "E204",
            ErrorCode::UnexpectedStatus => "E301",
            ErrorCode::BodyMismatch => "E302",
            ErrorCode::RetriesExhausted => "E303",
            ErrorCode::PortClosed => "E304",
            ErrorCode::Internal => "E999",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
