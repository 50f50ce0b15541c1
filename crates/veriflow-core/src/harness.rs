//! Verification harness: the run state machine.
//!
//! Drives `loading -> running(phase) -> done`: loads the workflow
//! definition, resolves every step's executor up front, iterates the fixed
//! phase order with fail-fast, runs teardown exactly once best-effort, and
//! aggregates everything into a `VerificationResult`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use veriflow_types::config::HarnessConfig;
use veriflow_types::error::ErrorCode;
use veriflow_types::result::{ExecutionResult, StepResult, VerificationResult};
use veriflow_types::workflow::{Phase, StepKind, StepSpec, WorkflowDefinition};

use crate::definition::{self, DefinitionError};
use crate::executor::{ExecutorRegistry, StepContext, StepExecutor};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that abort a run before any step executes.
///
/// Everything else -- missing definition, failing steps, broken executors --
/// is folded into the `VerificationResult` so callers always get a complete
/// diagnostic trail.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A declared step's kind has no registered executor; the definition
    /// cannot be meaningfully executed.
    #[error("no executor registered for step '{step}' of kind '{kind}'")]
    UnregisteredKind { step: String, kind: StepKind },
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// One step with its executor resolved, ready to run.
struct PlannedStep<'a> {
    phase: Phase,
    name: String,
    spec: &'a StepSpec,
    executor: Arc<dyn StepExecutor>,
}

/// Drives verification runs against a project directory.
pub struct Harness {
    project_dir: PathBuf,
    config: HarnessConfig,
    registry: ExecutorRegistry,
}

impl Harness {
    /// Harness with the default configuration (`verify.yml`, `artifacts/`).
    pub fn new(project_dir: impl Into<PathBuf>, registry: ExecutorRegistry) -> Self {
        Self::with_config(project_dir, HarnessConfig::default(), registry)
    }

    pub fn with_config(
        project_dir: impl Into<PathBuf>,
        config: HarnessConfig,
        registry: ExecutorRegistry,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            config,
            registry,
        }
    }

    /// The project directory under verification.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The artifacts directory for this harness: the configured directory
    /// resolved against the project root (absolute overrides win).
    pub fn artifacts_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.artifacts_dir)
    }

    /// Run the workflow and return the verification result.
    ///
    /// The only `Err` is an unregistered step kind, raised before any phase
    /// begins. Every runtime failure -- including a missing or unparsable
    /// definition -- is returned as data inside the `VerificationResult`.
    pub async fn run(&self) -> Result<VerificationResult, HarnessError> {
        let run_id = Uuid::now_v7();
        let started_at = Utc::now();
        let run_start = Instant::now();

        // Created once per run, never deleted. Creation failure only costs
        // command logs, so it is logged rather than failing the run.
        let artifacts_dir = self.artifacts_dir();
        if let Err(err) = std::fs::create_dir_all(&artifacts_dir) {
            tracing::warn!(
                run_id = %run_id,
                path = %artifacts_dir.display(),
                error = %err,
                "failed to create artifacts directory"
            );
        }

        let definition_path = self.project_dir.join(&self.config.definition_file);
        let definition = match definition::load_definition(&definition_path) {
            Ok(definition) => definition,
            Err(err) => {
                tracing::warn!(run_id = %run_id, error = %err, "workflow definition unusable");
                return Ok(synthetic_failure(
                    run_id,
                    started_at,
                    run_start,
                    artifacts_dir,
                    &definition_path,
                    &err,
                ));
            }
        };

        // Resolution happens once per step, before any phase begins; a miss
        // is a configuration error, not a step failure.
        let plan = self.plan(&definition)?;
        let (main, teardown): (Vec<_>, Vec<_>) =
            plan.into_iter().partition(|step| !step.phase.is_teardown());

        tracing::info!(
            run_id = %run_id,
            project = %self.project_dir.display(),
            steps = definition.step_count(),
            "verification run starting"
        );

        let mut steps: Vec<StepResult> = Vec::with_capacity(definition.step_count());
        for planned in &main {
            let result = self.run_step(run_id, planned, &artifacts_dir).await;
            let failed = !result.passed;
            steps.push(result);
            if failed {
                tracing::info!(
                    run_id = %run_id,
                    step = %planned.name,
                    "fail-fast: skipping remaining non-teardown phases"
                );
                break;
            }
        }

        // Teardown runs exactly once, whether the main loop completed or
        // failed fast. Its results are recorded but never feed back into
        // sequencing or the verdict.
        for planned in &teardown {
            let result = self.run_step(run_id, planned, &artifacts_dir).await;
            steps.push(result);
        }

        let passed = steps
            .iter()
            .filter(|step| !step.phase.is_teardown())
            .all(|step| step.passed);
        let total_duration_ms = run_start.elapsed().as_millis() as u64;
        tracing::info!(run_id = %run_id, passed, total_duration_ms, "verification run finished");

        Ok(VerificationResult {
            run_id,
            passed,
            steps,
            started_at,
            total_duration_ms,
            artifacts_path: artifacts_dir,
        })
    }

    /// Resolve an executor for every declared step, in run order.
    fn plan<'a>(
        &self,
        definition: &'a WorkflowDefinition,
    ) -> Result<Vec<PlannedStep<'a>>, HarnessError> {
        let mut plan = Vec::with_capacity(definition.step_count());
        for phase in Phase::ORDER {
            for (index, spec) in definition.steps(phase).iter().enumerate() {
                let name = format!("{phase}_{index}");
                let kind = spec.kind();
                let executor =
                    self.registry
                        .resolve(kind)
                        .ok_or_else(|| HarnessError::UnregisteredKind {
                            step: name.clone(),
                            kind,
                        })?;
                plan.push(PlannedStep {
                    phase,
                    name,
                    spec,
                    executor,
                });
            }
        }
        Ok(plan)
    }

    /// Execute one step inside the catch boundary: a panicking executor
    /// becomes an E999 result, never a crashed run.
    async fn run_step(
        &self,
        run_id: Uuid,
        planned: &PlannedStep<'_>,
        artifacts_dir: &Path,
    ) -> StepResult {
        let kind = planned.spec.kind();
        tracing::debug!(run_id = %run_id, step = %planned.name, kind = %kind, "executing step");
        let step_start = Instant::now();

        let ctx = StepContext {
            project_dir: self.project_dir.clone(),
            artifacts_dir: artifacts_dir.to_path_buf(),
            step_name: planned.name.clone(),
        };
        let executor = Arc::clone(&planned.executor);
        let spec = planned.spec.clone();
        let execution =
            match tokio::spawn(async move { executor.execute(&spec, &ctx).await }).await {
                Ok(execution) => execution,
                Err(join_err) => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("executor task failed: {join_err}"),
                ),
            };

        let duration_ms = step_start.elapsed().as_millis() as u64;
        let result = StepResult::from_execution(
            planned.name.clone(),
            kind.as_str(),
            planned.phase,
            duration_ms,
            execution,
        );
        if result.passed {
            tracing::debug!(run_id = %run_id, step = %result.name, duration_ms, "step passed");
        } else {
            tracing::warn!(
                run_id = %run_id,
                step = %result.name,
                code = result.error_code.map(|c| c.as_str()),
                message = result.message.as_deref(),
                duration_ms,
                "step failed"
            );
        }
        result
    }
}

/// The single synthetic result for a run whose definition never loaded.
///
/// No phases ran, so no teardown is attempted: there is no configuration to
/// read teardown steps from.
fn synthetic_failure(
    run_id: Uuid,
    started_at: DateTime<Utc>,
    run_start: Instant,
    artifacts_path: PathBuf,
    definition_path: &Path,
    err: &DefinitionError,
) -> VerificationResult {
    let message = match err {
        DefinitionError::NotFound { .. } => {
            format!(
                "workflow definition not found at {}",
                definition_path.display()
            )
        }
        other => format!("workflow definition unusable: {other}"),
    };
    let step = StepResult::from_execution(
        "setup",
        "setup",
        Phase::Setup,
        0,
        ExecutionResult::fail(ErrorCode::MissingFile, message),
    );
    VerificationResult {
        run_id,
        passed: false,
        steps: vec![step],
        started_at,
        total_duration_ms: run_start.elapsed().as_millis() as u64,
        artifacts_path,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
