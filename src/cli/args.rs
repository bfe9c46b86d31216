//! Defines the command-line arguments for the Crucible CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. The defaults
//! reproduce the fixed invocation template the harness was built around; a
//! bare `crucible` run works from a project checkout.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "crucible",
    version,
    about = "A fixture-driven compile-fail test harness for compiler diagnostics."
)]
pub struct CrucibleArgs {
    /// Directory containing the fixture files.
    #[arg(default_value = "tests/compile-errors")]
    pub fixtures_dir: PathBuf,

    /// Project root the compiler is invoked from.
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Compiler executable to invoke.
    #[arg(long, default_value = "haxe")]
    pub compiler: String,

    /// Build descriptor passed as the compiler's first argument.
    #[arg(long, default_value = "lib.hxml")]
    pub build_file: PathBuf,

    /// Directory the compiler emits generated code into.
    #[arg(long, default_value = "bin/compile-tests")]
    pub out_dir: PathBuf,

    /// Fixture file extension, without the dot.
    #[arg(long, default_value = "hx")]
    pub ext: String,
}
