//! Harness-level errors.
//!
//! Per-fixture failures (unreadable file, unclassifiable markers, spawn
//! failure, expectation mismatch) never escape the run loop; they are folded
//! into failing verdicts. Only `Discovery` aborts a run.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    /// A discovered fixture file could not be read.
    #[error("failed to read fixture '{}': {source}", path.display())]
    #[diagnostic(code(crucible::fixture::unreadable))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixtures directory itself could not be enumerated.
    #[error("failed to list fixtures in '{}': {source}", path.display())]
    #[diagnostic(
        code(crucible::discovery::failed),
        help("check that the fixtures directory exists and is readable")
    )]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
