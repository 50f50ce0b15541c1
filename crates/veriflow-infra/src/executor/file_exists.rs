//! Existence checks for `file_exists` steps.
//!
//! Paths resolve against the project directory. All missing paths are named
//! together in one failure, so the step stays atomic and the diagnostic is
//! complete in a single message.

use std::future::Future;
use std::pin::Pin;

use veriflow_core::executor::{StepContext, StepExecutor};
use veriflow_types::error::ErrorCode;
use veriflow_types::result::ExecutionResult;
use veriflow_types::workflow::{PathList, StepSpec};

/// Executes `file_exists` steps.
#[derive(Debug, Clone, Default)]
pub struct FileExistsExecutor;

impl FileExistsExecutor {
    fn check(&self, paths: &PathList, ctx: &StepContext) -> ExecutionResult {
        let missing: Vec<&str> = paths
            .paths()
            .iter()
            .filter(|path| !ctx.project_dir.join(path.as_str()).exists())
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            ExecutionResult::pass_with_message(format!(
                "{} path(s) present",
                paths.paths().len()
            ))
        } else {
            ExecutionResult::fail(
                ErrorCode::MissingFile,
                format!("missing file(s): {}", missing.join(", ")),
            )
        }
    }
}

impl StepExecutor for FileExistsExecutor {
    fn execute<'a>(
        &'a self,
        spec: &'a StepSpec,
        ctx: &'a StepContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            match spec {
                StepSpec::FileExists(paths) => self.check(paths, ctx),
                other => ExecutionResult::fail(
                    ErrorCode::Internal,
                    format!("file_exists executor received a '{}' step", other.kind()),
                ),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ctx(dir: &Path) -> StepContext {
        StepContext {
            project_dir: dir.to_path_buf(),
            artifacts_dir: dir.join("artifacts"),
            step_name: "checks_0".to_string(),
        }
    }

    fn step(yaml: &str) -> StepSpec {
        serde_yaml_ng::from_str(yaml).expect("step yaml")
    }

    async fn execute(spec: &StepSpec, ctx: &StepContext) -> ExecutionResult {
        FileExistsExecutor.execute(spec, ctx).await
    }

    #[tokio::test]
    async fn all_paths_present_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("dist")).unwrap();
        std::fs::write(dir.path().join("dist/index.js"), "x").unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();

        let result = execute(
            &step("file_exists: [dist/index.js, package.json]"),
            &ctx(dir.path()),
        )
        .await;
        assert!(result.passed, "got: {:?}", result.message);
        assert_eq!(result.message.as_deref(), Some("2 path(s) present"));
    }

    #[tokio::test]
    async fn single_path_form_passes_for_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        let result = execute(&step("file_exists: node_modules"), &ctx(dir.path())).await;
        assert!(result.passed);
    }

    #[tokio::test]
    async fn missing_paths_fail_once_naming_only_the_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();

        let result = execute(&step("file_exists: [a.txt, b.txt]"), &ctx(dir.path())).await;
        assert!(!result.passed);
        assert_eq!(result.error_code, Some(ErrorCode::MissingFile));
        let msg = result.message.as_deref().unwrap();
        assert!(msg.contains("b.txt"), "got: {msg}");
        assert!(!msg.contains("a.txt"), "got: {msg}");
    }

    #[tokio::test]
    async fn several_missing_paths_appear_in_one_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute(
            &step("file_exists: [x.txt, y.txt, z.txt]"),
            &ctx(dir.path()),
        )
        .await;
        assert!(!result.passed);
        assert_eq!(
            result.message.as_deref(),
            Some("missing file(s): x.txt, y.txt, z.txt")
        );
    }

    #[tokio::test]
    async fn rejects_other_step_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute(&step("port_open: 3000"), &ctx(dir.path())).await;
        assert!(!result.passed);
        assert_eq!(result.error_code, Some(ErrorCode::Internal));
    }
}
