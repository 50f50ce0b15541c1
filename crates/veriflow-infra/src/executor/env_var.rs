//! Presence checks for `env_var_set` steps.
//!
//! Presence only: an empty value still counts as set. All missing names are
//! aggregated into one failure message.

use std::future::Future;
use std::pin::Pin;

use veriflow_core::executor::{StepContext, StepExecutor};
use veriflow_types::error::ErrorCode;
use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{NameList, StepSpec};

/// Executes `env_var_set` steps.
#[derive(Debug, Clone, Default)]
pub struct EnvVarSetExecutor;

impl EnvVarSetExecutor {
    fn check(&self, names: &NameList) -> ExecutionResult {
        let missing: Vec<&str> = names
            .names()
            .iter()
            .filter(|name| std::env::var_os(name.as_str()).is_none())
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            ExecutionResult::pass_with_message(format!(
                "{} variable(s) set",
                names.names().len()
            ))
        } else {
            ExecutionResult::fail(
                ErrorCode::MissingEnvVar,
                format!("missing environment variable(s): {}", missing.join(", ")),
            )
        }
    }
}

impl StepExecutor for EnvVarSetExecutor {
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        _ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            match spec {
                StepSpec::EnvVarSet(names) => self.check(names),
                other => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("env_var_set executor received a '{}' step", other.kind()),
                ),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
