//! Discovers fixtures and runs each through the verification pipeline.
//!
//! Fixtures are processed strictly sequentially: each compiler invocation
//! completes before the next begins, and verdicts are kept in discovery
//! order so re-running an unchanged suite produces identical output.

use crate::compiler;
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::expectation::{self, Classified};
use crate::fixture::Fixture;
use crate::verify::{self, Verdict, VerdictStatus};
use walkdir::WalkDir;

/// Aggregate outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Verdicts in discovery order.
    pub verdicts: Vec<Verdict>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    /// The exit-status contract: true when no fixture failed, including
    /// the empty suite.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let mut summary = Self {
            verdicts,
            ..Self::default()
        };
        for verdict in &summary.verdicts {
            match verdict.status {
                VerdictStatus::Pass => summary.passed += 1,
                VerdictStatus::Fail => summary.failed += 1,
                VerdictStatus::Skip => summary.skipped += 1,
            }
        }
        summary
    }
}

/// Lists fixture files directly inside the fixtures directory, sorted
/// lexicographically by name for a deterministic, reproducible run order.
pub fn discover(config: &HarnessConfig) -> Result<Vec<Fixture>, HarnessError> {
    let dir = config.project_root.join(&config.fixtures_dir);
    let mut fixtures = Vec::new();
    for entry in WalkDir::new(&dir).max_depth(1) {
        let entry = entry.map_err(|source| HarnessError::Discovery {
            path: dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .map_or(false, |ext| ext == config.fixture_ext.as_str())
        {
            fixtures.push(Fixture::from_path(path));
        }
    }
    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fixtures)
}

/// Runs one fixture through read → classify → invoke → verify.
///
/// Every per-fixture error becomes a failing verdict; nothing here aborts
/// the run. A fixture that cannot be classified never reaches the compiler.
pub fn run_fixture(config: &HarnessConfig, fixture: &Fixture) -> Verdict {
    let text = match fixture.read() {
        Ok(text) => text,
        Err(e) => return Verdict::fail(&fixture.name, e.to_string()),
    };

    let Classified {
        expectation,
        warning,
    } = match expectation::classify(&text) {
        Ok(classified) => classified,
        Err(e) => return Verdict::fail(&fixture.name, e.to_string()),
    };

    let result = match compiler::invoke(config, &fixture.name) {
        Ok(result) => result,
        Err(e) => return Verdict::fail(&fixture.name, e.to_string()).with_warning(warning),
    };

    verify::verify(&fixture.name, &expectation, &result).with_warning(warning)
}

/// Full run: discover, verify each fixture sequentially, aggregate.
pub fn run(config: &HarnessConfig) -> Result<RunSummary, HarnessError> {
    let fixtures = discover(config)?;
    let verdicts = fixtures
        .iter()
        .map(|fixture| run_fixture(config, fixture))
        .collect();
    Ok(RunSummary::from_verdicts(verdicts))
}
