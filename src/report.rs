//! Console rendering of a run's verdicts.
//!
//! One line per fixture, an indented detail block under each failure, a
//! summary line, and a total. Colors go through termcolor and are disabled
//! entirely when the run was configured without them, so piped output is
//! plain text and byte-identical across runs.

use crate::runner::RunSummary;
use crate::verify::{Verdict, VerdictStatus};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const SEPARATOR_WIDTH: usize = 50;

pub struct Reporter {
    use_colors: bool,
}

impl Reporter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints the full report for a run.
    pub fn render(&self, summary: &RunSummary) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.color_choice());

        self.write_line(&mut out, "Running compile-fail tests...", Some(Color::Cyan))?;
        writeln!(out)?;

        if summary.verdicts.is_empty() {
            self.write_line(&mut out, "No compile-fail tests found.", Some(Color::Yellow))?;
            return Ok(());
        }

        for verdict in &summary.verdicts {
            self.write_verdict(&mut out, verdict)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        self.write_summary_line(&mut out, summary)?;
        writeln!(out, "Total: {}", summary.total())?;
        writeln!(out)?;

        if summary.all_passed() {
            self.write_line(&mut out, "All compile-fail tests passed!", Some(Color::Green))?;
        } else {
            self.write_line(&mut out, "Some compile-fail tests failed.", Some(Color::Red))?;
        }
        Ok(())
    }

    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }

    fn write_verdict(&self, out: &mut StandardStream, verdict: &Verdict) -> io::Result<()> {
        if let Some(warning) = &verdict.warning {
            self.write_line(
                out,
                &format!("⚠ {}: {}", verdict.name, warning),
                Some(Color::Yellow),
            )?;
        }

        let (marker, color) = match verdict.status {
            VerdictStatus::Pass => ("✓", Color::Green),
            VerdictStatus::Fail => ("✗", Color::Red),
            VerdictStatus::Skip => ("⊘", Color::Yellow),
        };
        self.write_colored(out, marker, color)?;
        writeln!(out, " {}", verdict.name)?;

        if verdict.status == VerdictStatus::Fail {
            for line in verdict.message.lines() {
                self.write_line(out, &format!("  {line}"), Some(Color::Red))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_summary_line(&self, out: &mut StandardStream, summary: &RunSummary) -> io::Result<()> {
        self.write_colored(out, &format!("Passed: {}", summary.passed), Color::Green)?;
        write!(out, " | ")?;
        self.write_colored(out, &format!("Failed: {}", summary.failed), Color::Red)?;
        write!(out, " | ")?;
        self.write_colored(out, &format!("Skipped: {}", summary.skipped), Color::Yellow)?;
        writeln!(out)
    }

    fn write_colored(&self, out: &mut StandardStream, text: &str, color: Color) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{text}")?;
        out.reset()
    }

    fn write_line(
        &self,
        out: &mut StandardStream,
        text: &str,
        color: Option<Color>,
    ) -> io::Result<()> {
        match color {
            Some(color) => {
                self.write_colored(out, text, color)?;
                writeln!(out)
            }
            None => writeln!(out, "{text}"),
        }
    }
}
