//! Invoking the external compiler and capturing what it did.
//!
//! The compiler is a black box consumed through one synchronous subprocess
//! call per fixture. A non-zero exit is ordinary, meaningful data here and
//! is returned as part of the result, never as an error. The only error
//! case is failing to start the process at all.

use crate::config::HarnessConfig;
use std::process::Command;
use thiserror::Error;

/// Captured outcome of one compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    /// Standard output, verbatim and untruncated.
    pub stdout: String,
    /// Standard error, verbatim and untruncated.
    pub stderr: String,
}

impl ProcessResult {
    /// True only for a clean zero exit.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Both streams concatenated, stdout first. All containment checks run
    /// against this view so an expected diagnostic may land on either
    /// stream.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Exit status rendered for failure messages.
    pub fn status_display(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "none".to_string(),
        }
    }
}

/// The compiler could not be started at all, as opposed to running and
/// exiting non-zero.
#[derive(Debug, Error)]
#[error("failed to spawn compiler '{command}': {source}")]
pub struct SpawnError {
    pub command: String,
    #[source]
    pub source: std::io::Error,
}

/// Compiles one fixture as the program entry point.
///
/// Equivalent command line, run from the project root so relative paths
/// resolve consistently:
///
/// ```text
/// <compiler> <build-file> -cp <fixtures-dir> -main <Base> -js <out-dir>/<Base>.js
/// ```
pub fn invoke(config: &HarnessConfig, base_name: &str) -> Result<ProcessResult, SpawnError> {
    let output_file = config.out_dir.join(format!("{base_name}.js"));
    let output = Command::new(&config.compiler)
        .arg(&config.build_file)
        .arg("-cp")
        .arg(&config.fixtures_dir)
        .arg("-main")
        .arg(base_name)
        .arg("-js")
        .arg(&output_file)
        .current_dir(&config.project_root)
        .output()
        .map_err(|source| SpawnError {
            command: config.compiler.clone(),
            source,
        })?;

    Ok(ProcessResult {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
