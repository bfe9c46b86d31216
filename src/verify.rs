//! Turning a captured compiler result into a verdict.
//!
//! Both expectation kinds dispatch through one verification function rather
//! than two parallel code paths. Failure messages carry the full captured
//! output, never truncated.

use crate::compiler::ProcessResult;
use crate::expectation::Expectation;
use std::fmt::Write as _;

/// Outcome state for one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Pass,
    Fail,
    /// Reserved for disabled fixtures; nothing produces it today.
    Skip,
}

/// The per-fixture result shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub name: String,
    pub status: VerdictStatus,
    pub message: String,
    /// A non-fatal classification warning, printed before the verdict line.
    pub warning: Option<String>,
}

impl Verdict {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: VerdictStatus::Pass,
            message: message.into(),
            warning: None,
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: VerdictStatus::Fail,
            message: message.into(),
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

/// Checks a captured compiler result against the fixture's expectation.
pub fn verify(name: &str, expectation: &Expectation, result: &ProcessResult) -> Verdict {
    match expectation {
        Expectation::Error(needle) => verify_error(name, needle, result),
        Expectation::Output(needles) => verify_output(name, needles, result),
    }
}

/// Compile-error protocol: the compiler must exit non-zero and its combined
/// output must contain the expected substring.
fn verify_error(name: &str, needle: &str, result: &ProcessResult) -> Verdict {
    if result.success() {
        return Verdict::fail(
            name,
            format!("Compilation succeeded, but expected error: \"{needle}\""),
        );
    }
    let output = result.combined_output();
    if output.contains(needle) {
        Verdict::pass(name, format!("Got expected error: \"{needle}\""))
    } else {
        Verdict::fail(
            name,
            format!(
                "Got different error than expected.\nExpected: \"{needle}\"\nActual output:\n{output}"
            ),
        )
    }
}

/// Output protocol: every required substring must appear somewhere in the
/// combined output, independent of exit status. Every missing substring is
/// listed, not just the first, so one failing run surfaces all gaps.
fn verify_output(name: &str, needles: &[String], result: &ProcessResult) -> Verdict {
    let output = result.combined_output();
    let missing: Vec<&str> = needles
        .iter()
        .filter(|needle| !output.contains(needle.as_str()))
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        return Verdict::pass(name, "Got all expected output");
    }

    let mut message = String::from("Missing expected output:\n");
    for needle in &missing {
        let _ = writeln!(message, "  \"{needle}\"");
    }
    let _ = write!(
        message,
        "Exit status: {}\nActual output:\n{output}",
        result.status_display()
    );
    Verdict::fail(name, message)
}
