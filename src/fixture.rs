//! Fixture files and their expectation markers.
//!
//! A fixture is a single source file paired with an expectation encoded in
//! its own comments. The harness treats the file as opaque text apart from
//! two single-line markers:
//!
//! ```text
//! // EXPECTED_ERROR: "<substring>"
//! // EXPECTED_OUTPUT: "<substring>"
//! ```
//!
//! Marker payloads are double-quoted with no escape processing; an embedded
//! `"` cannot be expressed.

use crate::errors::HarnessError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Literal token whose presence anywhere in a fixture selects the
/// compile-error protocol.
pub const ERROR_TOKEN: &str = "EXPECTED_ERROR:";
/// Literal token selecting the output protocol.
pub const OUTPUT_TOKEN: &str = "EXPECTED_OUTPUT:";

static ERROR_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"//\s*EXPECTED_ERROR:\s*"([^"]+)""#).expect("valid marker regex"));
static OUTPUT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"//\s*EXPECTED_OUTPUT:\s*"([^"]+)""#).expect("valid marker regex"));

/// A single test case file, identified by its base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// File name without extension; also the compiler entry point.
    pub name: String,
    pub path: PathBuf,
}

impl Fixture {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: path.to_path_buf(),
        }
    }

    /// Reads the fixture's full text. An unreadable fixture is a harness
    /// configuration problem, so the failure is propagated rather than
    /// swallowed; the runner records it as a failing verdict.
    pub fn read(&self) -> Result<String, HarnessError> {
        fs::read_to_string(&self.path).map_err(|source| HarnessError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Returns the payload of the first `// EXPECTED_ERROR: "..."` marker, if
/// any. Later markers are ignored; first match wins.
pub fn extract_error_marker(text: &str) -> Option<String> {
    ERROR_MARKER.captures(text).map(|caps| caps[1].to_string())
}

/// Returns the payloads of every `// EXPECTED_OUTPUT: "..."` marker, in
/// file order. The whole text is scanned once.
pub fn extract_output_markers(text: &str) -> Vec<String> {
    OUTPUT_MARKER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Number of well-formed `EXPECTED_ERROR` markers in the text. The
/// classifier flags more than one as a warning.
pub fn count_error_markers(text: &str) -> usize {
    ERROR_MARKER.captures_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_error_marker() {
        let text = r#"
class BadType {
    // EXPECTED_ERROR: "Int should be String"
    // EXPECTED_ERROR: "second marker is ignored"
}
"#;
        assert_eq!(
            extract_error_marker(text),
            Some("Int should be String".to_string())
        );
        assert_eq!(count_error_markers(text), 2);
    }

    #[test]
    fn error_marker_tolerates_comment_whitespace() {
        let text = "//   EXPECTED_ERROR:   \"missing semicolon\"";
        assert_eq!(
            extract_error_marker(text),
            Some("missing semicolon".to_string())
        );
    }

    #[test]
    fn unterminated_error_marker_extracts_nothing() {
        let text = "// EXPECTED_ERROR: \"quote never closes";
        assert_eq!(extract_error_marker(text), None);
        assert_eq!(count_error_markers(text), 0);
    }

    #[test]
    fn output_markers_come_back_in_file_order() {
        let text = r#"
// EXPECTED_OUTPUT: "unused variable x"
class WarnUnused {}
// EXPECTED_OUTPUT: "unused variable y"
"#;
        assert_eq!(
            extract_output_markers(text),
            vec!["unused variable x".to_string(), "unused variable y".to_string()]
        );
    }

    #[test]
    fn no_markers_means_no_payloads() {
        let text = "class Plain {}\n";
        assert_eq!(extract_error_marker(text), None);
        assert!(extract_output_markers(text).is_empty());
    }

    #[test]
    fn fixture_name_is_the_file_stem() {
        let fixture = Fixture::from_path(Path::new("tests/compile-errors/BadType.hx"));
        assert_eq!(fixture.name, "BadType");
    }
}
