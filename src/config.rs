//! Run configuration for the harness.
//!
//! Every path and executable name the harness touches is injected here once
//! at startup instead of living as process-wide constants. The defaults
//! reproduce the fixed invocation template described in the CLI help.

use std::path::PathBuf;

/// Immutable configuration for a single harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory the compiler is invoked from; relative paths in the
    /// command template resolve against it.
    pub project_root: PathBuf,
    /// Directory scanned for fixture files, relative to the project root.
    pub fixtures_dir: PathBuf,
    /// Compiler executable name or path.
    pub compiler: String,
    /// Build descriptor passed as the compiler's first argument.
    pub build_file: PathBuf,
    /// Directory the compiler writes generated code into, one file per
    /// fixture base name.
    pub out_dir: PathBuf,
    /// Extension of recognized fixture files, without the dot.
    pub fixture_ext: String,
    /// Whether the report is colorized.
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            fixtures_dir: PathBuf::from("tests/compile-errors"),
            compiler: "haxe".to_string(),
            build_file: PathBuf::from("lib.hxml"),
            out_dir: PathBuf::from("bin/compile-tests"),
            fixture_ext: "hx".to_string(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}
