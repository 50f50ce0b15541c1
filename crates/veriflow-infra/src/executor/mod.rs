//! The built-in executors, one module per step kind.

pub mod env_var;
pub mod file_exists;
pub mod http_probe;
pub mod port_open;
pub mod run;

pub use env_var::EnvVarSetExecutor;
pub use file_exists::FileExistsExecutor;
pub use http_probe::HttpProbeExecutor;
pub use port_open::PortOpenExecutor;
pub use run::RunExecutor;
