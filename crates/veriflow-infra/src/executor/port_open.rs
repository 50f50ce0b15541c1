//! TCP connect polling for `port_open` steps.
//!
//! "Build succeeded" does not imply "server is listening yet": start-up is
//! asynchronous relative to the verification run, so this step polls the
//! target with short connect attempts and backoff sleeps until the port
//! opens or the overall window elapses.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use tokio::net::TcpStream;

use veriflow_core::backoff::Backoff;
use veriflow_core::executor::{StepContext, StepExecutor};
use veriflow_types::error::ErrorCode;
use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{PortSpec, StepSpec};

/// Per-attempt connect timeout; the overall window comes from the spec.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Executes `port_open` steps.
#[derive(Debug, Clone, Default)]
pub struct PortOpenExecutor;

impl PortOpenExecutor {
    pub fn new() -> Self {
        Self
    }

    async fn poll(&self, spec: &PortSpec) -> ExecutionResult {
        let addr = format!("{}:{}", spec.host(), spec.port());
        let window = spec.timeout();
        let deadline = Instant::now() + window;
        let mut backoff = Backoff::probe();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(addr.as_str())).await {
                Ok(Ok(_stream)) => {
                    return ExecutionResult::pass_with_message(format!(
                        "port {addr} open after {attempt} attempt(s)"
                    ));
                }
                Ok(Err(err)) => {
                    tracing::debug!(addr = %addr, attempt, error = %err, "connect attempt failed");
                }
                Err(_) => {
                    tracing::debug!(addr = %addr, attempt, "connect attempt timed out");
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return ExecutionResult::fail(
                    ErrorCode::PortClosed,
                    format!(
                        "port {addr} did not open within {}s",
                        window.as_secs()
                    ),
                );
            }
            // Never sleep past the deadline; the last attempt fires right
            // at the end of the window.
            tokio::time::sleep(backoff.next_delay().min(remaining)).await;
        }
    }
}

impl StepExecutor for PortOpenExecutor {
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        _ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            match spec {
                StepSpec::PortOpen(port) => self.poll(port).await,
                other => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("port_open executor received a '{}' step", other.kind()),
                ),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
