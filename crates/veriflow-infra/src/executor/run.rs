//! Shell command execution for `run` steps.
//!
//! Commands go through the platform shell with both output streams captured
//! and a hard timeout. On Unix the child gets its own process group, and the
//! whole group is killed when the timeout fires, so servers started by a
//! build script cannot outlive the step. Every invocation leaves a command
//! log artifact, whatever the outcome.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;

use veriflow_core::executor::{StepContext, StepExecutor};
use veriflow_types::error::ErrorCode;
use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{RunSpec, StepSpec};

use crate::artifacts;

/// Executes `run` steps.
#[derive(Debug, Clone, Default)]
pub struct RunExecutor;

impl RunExecutor {
    pub fn new() -> Self {
        Self
    }

    async fn run_command(&self, spec: &RunSpec, ctx: &StepContext) -> ExecutionResult {
        let command = spec.command();
        let timeout = spec.timeout();
        let expected = spec.expect_exit();

        let mut cmd = shell_command(command);
        cmd.current_dir(&ctx.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => {
                log_invocation(ctx, command, "(failed to start)", "", "");
                return ExecutionResult::fail(
                    ErrorCode::SpawnFailure,
                    format!("failed to execute '{command}': {err}"),
                );
            }
        };

        #[cfg(unix)]
        let pid = child.id();

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                log_invocation(ctx, command, "(failed to execute)", "", "");
                return ExecutionResult::fail(
                    ErrorCode::SpawnFailure,
                    format!("failed to execute '{command}': {err}"),
                );
            }
            Err(_) => {
                // kill_on_drop has already taken the shell down; sweep the
                // rest of its process group so grandchildren die with it.
                #[cfg(unix)]
                if let Some(pid) = pid {
                    unsafe { libc::killpg(pid as i32, libc::SIGKILL) };
                }
                log_invocation(ctx, command, "(timed out)", "", "");
                return ExecutionResult::fail(
                    ErrorCode::CommandTimeout,
                    format!("'{command}' timed out after {}s", timeout.as_secs()),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // Death by signal has no exit code; report -1 so it can never
        // satisfy an expectation.
        let exit_code = output.status.code().unwrap_or(-1);
        log_invocation(ctx, command, &exit_code.to_string(), &stdout, &stderr);

        if exit_code == expected {
            ExecutionResult::pass()
                .with_stdout(stdout)
                .with_stderr(stderr)
        } else {
            let code = if expected == 0 {
                ErrorCode::CommandFailed
            } else {
                ErrorCode::ExitCodeMismatch
            };
            ExecutionResult::fail(
                code,
                format!("'{command}' exited with code {exit_code} (expected {expected})"),
            )
            .with_stdout(stdout)
            .with_stderr(stderr)
        }
    }
}

impl StepExecutor for RunExecutor {
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            match spec {
                StepSpec::Run(run) => self.run_command(run, ctx).await,
                other => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("run executor received a '{}' step", other.kind()),
                ),
            }
        })
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

fn log_invocation(ctx: &StepContext, command: &str, exit: &str, stdout: &str, stderr: &str) {
    if let Err(err) = artifacts::write_command_log(
        &ctx.artifacts_dir,
        &ctx.step_name,
        command,
        exit,
        stdout,
        stderr,
    ) {
        tracing::warn!(step = %ctx.step_name, error = %err, "failed to write command log");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
