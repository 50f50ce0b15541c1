//! Command log artifacts.
//!
//! Every `run` invocation leaves a plain-text log under the run's artifacts
//! directory, one file per step, so a failing run can be diagnosed without
//! re-executing anything. The directory itself is created by the harness and
//! never deleted.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Write the log for one command invocation to `{artifacts_dir}/{step_name}.log`.
///
/// `exit` is the exit code as text, or a label such as `(timed out)` when
/// there is no code to report. Returns the path written.
pub fn write_command_log(
    artifacts_dir: &Path,
    step_name: &str,
    command: &str,
    exit: &str,
    stdout: &str,
    stderr: &str,
) -> anyhow::Result<PathBuf> {
    let path = artifacts_dir.join(format!("{step_name}.log"));

    let mut body = String::with_capacity(64 + stdout.len() + stderr.len());
    body.push_str("COMMAND: ");
    body.push_str(command);
    body.push('\n');
    body.push_str("EXIT CODE: ");
    body.push_str(exit);
    body.push('\n');
    push_section(&mut body, "STDOUT:", stdout);
    push_section(&mut body, "STDERR:", stderr);

    std::fs::write(&path, body)
        .with_context(|| format!("failed to write command log {}", path.display()))?;
    Ok(path)
}

fn push_section(body: &mut String, header: &str, content: &str) {
    body.push('\n');
    body.push_str(header);
    body.push('\n');
    let content = content.trim_end_matches('\n');
    if !content.is_empty() {
        body.push_str(content);
        body.push('\n');
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
