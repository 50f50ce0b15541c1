//! Step execution contract and registry.
//!
//! `StepExecutor` is the seam between the harness and the concrete step
//! implementations in `veriflow-infra`. It is object-safe via boxed futures
//! so the registry can hold heterogeneous executors behind `Arc<dyn ...>`.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{StepKind, StepSpec};

// ---------------------------------------------------------------------------
// Execution contract
// ---------------------------------------------------------------------------

/// Per-invocation context handed to executors.
#[derive(Debug, Clone)]
pub struct StepContext {
    /// Project directory the checks run against: command working directory
    /// and base for relative paths.
    pub project_dir: PathBuf,
    /// Artifacts directory for step logs. The harness creates it up front.
    pub artifacts_dir: PathBuf,
    /// Derived step name (`<phase>_<index>`), used for artifact file names.
    pub step_name: String,
}

/// An executor for one step kind.
///
/// Every failure mode is folded into the returned [`ExecutionResult`];
/// executors do not raise. Returns a boxed future so the trait stays
/// object-safe.
pub trait StepExecutor: Send + Sync {
    /// Execute `spec` against the project described by `ctx`.
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>>;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable kind -> executor table.
///
/// Built once and injected into the harness as a constructor parameter,
/// never a process-wide singleton, so tests can swap in scripted executors
/// for any kind.
#[derive(Clone, Default)]
pub struct ExecutorRegistry {
    executors: HashMap<StepKind, Arc<dyn StepExecutor>>,
}

impl ExecutorRegistry {
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    /// Register (or override) the executor for `kind`.
    pub fn register(mut self, kind: StepKind, executor: Arc<dyn StepExecutor>) -> Self {
        self.executors.insert(kind, executor);
        self
    }

    /// The executor for `kind`, if one is registered.
    pub fn resolve(&self, kind: StepKind) -> Option<Arc<dyn StepExecutor>> {
        self.executors.get(&kind).cloned()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
