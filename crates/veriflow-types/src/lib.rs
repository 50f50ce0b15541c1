//! Shared domain types for veriflow.
//!
//! This crate contains the data model used across the verification engine:
//! the `verify.yml` workflow definition, step outcome records, the error-code
//! taxonomy, and harness configuration.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, uuid, chrono.

pub mod config;
pub mod error;
pub mod result;
pub mod workflow;
