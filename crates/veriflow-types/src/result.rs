//! Outcome records: per-invocation, per-step, and per-run.
//!
//! Every failure mode an executor can hit is folded into these records --
//! executors never raise. Instances are created once and never mutated.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::workflow::Phase;

// ---------------------------------------------------------------------------
// Execution Result (one executor invocation)
// ---------------------------------------------------------------------------

/// Outcome of a single executor invocation, before step identity is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the invocation satisfied the step's expectations.
    pub passed: bool,
    /// Failure taxonomy code (absent on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    /// Human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Captured stdout: full command output, or a bounded HTTP body preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    /// Captured stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl ExecutionResult {
    /// Successful invocation with no captured output.
    pub fn pass() -> Self {
        Self {
            passed: true,
            error_code: None,
            message: None,
            stdout: None,
            stderr: None,
        }
    }

    /// Successful invocation with an outcome message.
    pub fn pass_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::pass()
        }
    }

    /// Failed invocation with a taxonomy code and message.
    pub fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            passed: false,
            error_code: Some(code),
            message: Some(message.into()),
            stdout: None,
            stderr: None,
        }
    }

    /// Attach captured stdout.
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }

    /// Attach captured stderr.
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Step Result (execution outcome + run identity)
// ---------------------------------------------------------------------------

/// One executed step: the executor outcome with identity flattened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Derived name: `<phase>_<index>`, index 0-based within the phase.
    pub name: String,
    /// Kind tag of the step (`run`, `http`, ...; `setup` for the synthetic
    /// definition-failure result).
    pub step: String,
    /// Phase the step was declared in.
    pub phase: Phase,
    /// Wall-clock duration of the invocation in milliseconds.
    pub duration_ms: u64,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl StepResult {
    /// Wrap an executor outcome with step identity.
    pub fn from_execution(
        name: impl Into<String>,
        step: impl Into<String>,
        phase: Phase,
        duration_ms: u64,
        execution: ExecutionResult,
    ) -> Self {
        Self {
            name: name.into(),
            step: step.into(),
            phase,
            duration_ms,
            passed: execution.passed,
            error_code: execution.error_code,
            message: execution.message,
            stdout: execution.stdout,
            stderr: execution.stderr,
        }
    }
}

// ---------------------------------------------------------------------------
// Verification Result (terminal artifact of a run)
// ---------------------------------------------------------------------------

/// The terminal artifact of a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// UUIDv7 run ID, also attached to every log event of the run.
    pub run_id: Uuid,
    /// Aggregate verdict over non-teardown steps only.
    pub passed: bool,
    /// Every executed step in run order, teardown included.
    pub steps: Vec<StepResult>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the whole run in milliseconds.
    pub total_duration_ms: u64,
    /// Directory where step artifacts (command logs) were written.
    pub artifacts_path: PathBuf,
}

impl VerificationResult {
    /// First non-teardown step that failed, scanning in run order.
    ///
    /// This is the actionable failure of the run. Teardown failures are
    /// excluded for the same reason they are excluded from `passed`: on an
    /// otherwise-green run a flaky teardown must not present itself as the
    /// reason verification failed.
    pub fn first_failed_step(&self) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|step| !step.phase.is_teardown() && !step.passed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, phase: Phase, passed: bool) -> StepResult {
        let execution = if passed {
            ExecutionResult::pass()
        } else {
            ExecutionResult::fail(ErrorCode::CommandFailed, "exited 1, expected 0")
        };
        StepResult::from_execution(name, "run", phase, 12, execution)
    }

    #[test]
    fn test_execution_result_constructors() {
        let pass = ExecutionResult::pass_with_message("port 3000 open")
            .with_stdout("hello")
            .with_stderr("");
        assert!(pass.passed);
        assert!(pass.error_code.is_none());
        assert_eq!(pass.stdout.as_deref(), Some("hello"));

        let fail = ExecutionResult::fail(ErrorCode::PortClosed, "port 9 did not open");
        assert!(!fail.passed);
        assert_eq!(fail.error_code, Some(ErrorCode::PortClosed));
        assert_eq!(fail.message.as_deref(), Some("port 9 did not open"));
    }

    #[test]
    fn test_step_result_flattens_execution_fields() {
        let execution = ExecutionResult::fail(ErrorCode::UnexpectedStatus, "status 500")
            .with_stdout("Internal Server Error");
        let result = StepResult::from_execution("checks_0", "http", Phase::Checks, 87, execution);
        assert_eq!(result.name, "checks_0");
        assert_eq!(result.step, "http");
        assert_eq!(result.phase, Phase::Checks);
        assert_eq!(result.duration_ms, 87);
        assert!(!result.passed);
        assert_eq!(result.error_code, Some(ErrorCode::UnexpectedStatus));
        assert_eq!(result.stdout.as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn test_first_failed_step_scans_in_run_order() {
        let result = VerificationResult {
            run_id: Uuid::now_v7(),
            passed: false,
            steps: vec![
                step("setup_0", Phase::Setup, true),
                step("checks_0", Phase::Checks, false),
                step("teardown_0", Phase::Teardown, false),
            ],
            started_at: Utc::now(),
            total_duration_ms: 40,
            artifacts_path: PathBuf::from("/tmp/project/artifacts"),
        };
        let first = result.first_failed_step().expect("a failed step");
        assert_eq!(first.name, "checks_0");
    }

    #[test]
    fn test_first_failed_step_ignores_teardown_failure_on_green_run() {
        let result = VerificationResult {
            run_id: Uuid::now_v7(),
            passed: true,
            steps: vec![
                step("setup_0", Phase::Setup, true),
                step("checks_0", Phase::Checks, true),
                step("teardown_0", Phase::Teardown, false),
            ],
            started_at: Utc::now(),
            total_duration_ms: 30,
            artifacts_path: PathBuf::from("artifacts"),
        };
        assert!(
            result.first_failed_step().is_none(),
            "a failing teardown on a green run is not the actionable failure"
        );
    }

    #[test]
    fn test_first_failed_step_none_when_all_pass() {
        let result = VerificationResult {
            run_id: Uuid::now_v7(),
            passed: true,
            steps: vec![step("setup_0", Phase::Setup, true)],
            started_at: Utc::now(),
            total_duration_ms: 12,
            artifacts_path: PathBuf::from("artifacts"),
        };
        assert!(result.first_failed_step().is_none());
    }

    #[test]
    fn test_step_result_json_omits_empty_fields() {
        let result = StepResult::from_execution(
            "tests_0",
            "run",
            Phase::Tests,
            5,
            ExecutionResult::pass(),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"name\":\"tests_0\""));
        assert!(!json.contains("error_code"));
        assert!(!json.contains("stdout"));
    }
}
