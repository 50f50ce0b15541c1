//! HTTP probes for `http` steps.
//!
//! A probe sends one request per attempt with a per-attempt timeout. Network
//! failures (connection refused, DNS, timeout) are retried with backoff up
//! to the configured attempt budget; any received response is evaluated
//! immediately and never retried, whatever its status.

use std::future::Future;
use std::pin::Pin;

use veriflow_core::backoff::Backoff;
use veriflow_core::executor::{StepContext, StepExecutor};
use veriflow_types::error::ErrorCode;
use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{HttpSpec, StepSpec};

/// Longest response-body slice echoed into results.
const BODY_PREVIEW_CHARS: usize = 500;

/// Executes `http` steps against a shared client.
pub struct HttpProbeExecutor {
    client: reqwest::Client,
}

impl HttpProbeExecutor {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("veriflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    async fn probe(&self, spec: &HttpSpec) -> ExecutionResult {
        let method: reqwest::Method = match spec.method.to_ascii_uppercase().parse() {
            Ok(method) => method,
            Err(_) => {
                return ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("invalid HTTP method: {}", spec.method),
                );
            }
        };

        // Header problems are definition mistakes; catching them here fails
        // fast instead of spending the retry budget on them.
        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &spec.headers {
            let name: reqwest::header::HeaderName = match name.parse() {
                Ok(name) => name,
                Err(_) => {
                    return ExecutionResult::fail(
                        ErrorCode::Internal,
                        format!("invalid HTTP header name: '{name}'"),
                    );
                }
            };
            let value: reqwest::header::HeaderValue = match value.parse() {
                Ok(value) => value,
                Err(_) => {
                    return ExecutionResult::fail(
                        ErrorCode::Internal,
                        format!("invalid value for HTTP header '{name}'"),
                    );
                }
            };
            headers.insert(name, value);
        }

        let attempts = spec.retries.max(1);
        let mut backoff = Backoff::probe();
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            let mut request = self
                .client
                .request(method.clone(), &spec.url)
                .timeout(spec.timeout())
                .headers(headers.clone());
            if let Some(body) = &spec.body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => return evaluate(spec, response).await,
                Err(err) => {
                    last_error = err.to_string();
                    tracing::debug!(
                        url = %spec.url,
                        attempt,
                        error = %last_error,
                        "http probe attempt failed"
                    );
                    if attempt < attempts {
                        tokio::time::sleep(backoff.next_delay()).await;
                    }
                }
            }
        }

        ExecutionResult::fail(
            ErrorCode::RetriesExhausted,
            format!(
                "request to {} failed after {attempts} attempt(s): {last_error}",
                spec.url
            ),
        )
    }
}

impl Default for HttpProbeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl StepExecutor for HttpProbeExecutor {
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        _ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            match spec {
                StepSpec::Http(http) => self.probe(http).await,
                other => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("http executor received a '{}' step", other.kind()),
                ),
            }
        })
    }
}

/// Check a received response against the step's expectations.
async fn evaluate(spec: &HttpSpec, response: reqwest::Response) -> ExecutionResult {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(url = %spec.url, error = %err, "failed to read response body");
            String::new()
        }
    };
    let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();

    if !spec.expect_status.matches(status) {
        return ExecutionResult::fail(
            ErrorCode::UnexpectedStatus,
            format!(
                "{} returned status {status} (expected {})",
                spec.url, spec.expect_status
            ),
        )
        .with_stdout(preview);
    }

    for needle in &spec.expect_body_contains {
        if !body.contains(needle.as_str()) {
            return ExecutionResult::fail(
                ErrorCode::BodyMismatch,
                format!("response body from {} does not contain '{needle}'", spec.url),
            )
            .with_stdout(preview);
        }
    }

    ExecutionResult::pass_with_message(format!("{} returned status {status}", spec.url))
        .with_stdout(preview)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
