//! Built-in step executors and run artifacts for Veriflow.
//!
//! This crate holds the production implementations of the
//! [`StepExecutor`](veriflow_core::executor::StepExecutor) trait: shell
//! command execution, HTTP probes, TCP port polling, and filesystem /
//! environment assertions, plus the artifact log writer the command
//! executor feeds. [`default_registry`] wires all of them up under their
//! step kinds.

pub mod artifacts;
pub mod executor;

use std::sync::Arc;

use veriflow_core::executor::ExecutorRegistry;
use veriflow_types::workflow::StepKind;

use crate::executor::env_var::EnvVarSetExecutor;
use crate::executor::file_exists::FileExistsExecutor;
use crate::executor::http_probe::HttpProbeExecutor;
use crate::executor::port_open::PortOpenExecutor;
use crate::executor::run::RunExecutor;

/// Registry with every built-in executor registered under its step kind.
pub fn default_registry() -> ExecutorRegistry {
    ExecutorRegistry::new()
        .register(StepKind::Run, Arc::new(RunExecutor::new()))
        .register(StepKind::Http, Arc::new(HttpProbeExecutor::new()))
        .register(StepKind::PortOpen, Arc::new(PortOpenExecutor::new()))
        .register(StepKind::FileExists, Arc::new(FileExistsExecutor))
        .register(StepKind::EnvVarSet, Arc::new(EnvVarSetExecutor))
}
