//! Verification engine core.
//!
//! Loads a `verify.yml` definition, drives the fixed phase sequence with
//! fail-fast and single best-effort teardown, and dispatches each step to a
//! registered executor. Concrete executors live in `veriflow-infra`; this
//! crate owns the contract (`StepExecutor`), the registry, and the state
//! machine (`Harness`).

pub mod backoff;
pub mod definition;
pub mod executor;
pub mod harness;
