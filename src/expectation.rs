//! Classifying fixtures by their expectation markers.
//!
//! Exactly one of the two marker kinds determines a fixture's verification
//! protocol. The error marker takes priority when both tokens appear in the
//! same fixture; absence of both is a fixture-level failure, not a crash.

use crate::fixture::{self, ERROR_TOKEN, OUTPUT_TOKEN};
use thiserror::Error;

/// The verification protocol a fixture's markers select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Compilation must fail, and the failure text must contain the
    /// substring.
    Error(String),
    /// Combined stdout+stderr must contain every substring, in any order,
    /// regardless of exit status. An empty list means the fixture only has
    /// to run at all.
    Output(Vec<String>),
}

/// A successful classification: the expectation plus any warning worth
/// surfacing in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub expectation: Expectation,
    pub warning: Option<String>,
}

/// Why a fixture could not be classified. The compiler is never invoked for
/// an unclassifiable fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("No EXPECTED_ERROR or EXPECTED_OUTPUT comments found")]
    NoMarker,
    #[error("Malformed EXPECTED_ERROR marker, expected `// EXPECTED_ERROR: \"<substring>\"`")]
    MalformedMarker,
}

/// Decides which protocol governs a fixture.
pub fn classify(text: &str) -> Result<Classified, ClassifyError> {
    if text.contains(ERROR_TOKEN) {
        let needle =
            fixture::extract_error_marker(text).ok_or(ClassifyError::MalformedMarker)?;
        let warning = (fixture::count_error_markers(text) > 1).then(|| {
            "multiple EXPECTED_ERROR markers; only the first is honored".to_string()
        });
        return Ok(Classified {
            expectation: Expectation::Error(needle),
            warning,
        });
    }
    if text.contains(OUTPUT_TOKEN) {
        return Ok(Classified {
            expectation: Expectation::Output(fixture::extract_output_markers(text)),
            warning: None,
        });
    }
    Err(ClassifyError::NoMarker)
}
