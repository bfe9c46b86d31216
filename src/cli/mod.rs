//! The Crucible command-line interface.
//!
//! This module is the entry point for the binary: it turns parsed arguments
//! into a `HarnessConfig`, runs the harness, renders the report, and maps
//! the outcome to the process exit status automation depends on.

use crate::cli::args::CrucibleArgs;
use crate::config::HarnessConfig;
use crate::report::Reporter;
use crate::runner;
use clap::Parser;

pub mod args;

/// Parses arguments, runs the harness, and returns the process exit code:
/// zero when every fixture passed (including the empty suite), one
/// otherwise.
pub fn run() -> i32 {
    let args = CrucibleArgs::parse();
    let config = HarnessConfig {
        project_root: args.project_root,
        fixtures_dir: args.fixtures_dir,
        compiler: args.compiler,
        build_file: args.build_file,
        out_dir: args.out_dir,
        fixture_ext: args.ext,
        ..HarnessConfig::default()
    };

    let summary = match runner::run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            return 1;
        }
    };

    let reporter = Reporter::new(config.use_colors);
    if let Err(e) = reporter.render(&summary) {
        eprintln!("failed to render report: {e}");
        return 1;
    }

    if summary.all_passed() {
        0
    } else {
        1
    }
}
