//! Human-readable reporting of a rename plan and its application.
//!
//! No machine-parseable format is promised; lines are written to any `io::Write` (stdout in `app`).

use std::{fmt::Display, io::Write};

use owo_colors::{OwoColorize, Style};

use crate::{
        apply::ApplySummary,
        error::{Error, Result},
        plan::{RenamePair, RenamePlan},
};

const RULE_WIDTH: usize = 60;

/// Writes report lines, coloring them only when asked to.
#[derive(Debug)]
pub struct Reporter<W: Write> {
        out: W,
        color: bool,
}

impl<W: Write> Reporter<W> {
        pub fn new(out: W, color: bool) -> Self {
                Self { out, color }
        }

        /// Uncolored reporter (for captured output).
        pub fn plain(out: W) -> Self {
                Self::new(out, false)
        }

        pub fn into_inner(self) -> W {
                self.out
        }

        fn paint(&self, text: impl Display, style: Style) -> String {
                match self.color {
                        true => text.style(style).to_string(),
                        false => text.to_string(),
                }
        }

        fn rule(&mut self) -> Result<()> {
                writeln!(self.out)?;
                writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
                Ok(())
        }

        pub fn nothing_to_do(&mut self) -> Result<()> {
                writeln!(self.out, "No files to rename.")?;
                Ok(())
        }

        /// Count header followed by one `relOld -> relNew` line per pair, in plan order.
        pub fn plan(&mut self, plan: &RenamePlan, dry_run: bool) -> Result<()> {
                let mode = if dry_run { self.paint("DRY RUN - ", Style::new().yellow().bold()) } else { String::new() };
                let count = self.paint(plan.len(), Style::new().cyan());
                writeln!(self.out, "{}Found {} files to rename:", mode, count)?;
                writeln!(self.out)?;
                for pair in plan.pairs() {
                        let old = self.paint(plan.relative(&pair.original).display(), Style::new().blue());
                        let new = self.paint(plan.relative(&pair.target).display(), Style::new().green());
                        writeln!(self.out, "  {} -> {}", old, new)?;
                }
                Ok(())
        }

        pub fn dry_run_notice(&mut self) -> Result<()> {
                let dry_run = self.paint("DRY RUN", Style::new().yellow().bold());
                let flag = self.paint("--execute", Style::new().bold());
                self.rule()?;
                writeln!(self.out, "This was a {}. No files were actually renamed.", dry_run)?;
                writeln!(self.out, "Run with {} to perform the actual renaming.", flag)?;
                Ok(())
        }

        pub fn apply_banner(&mut self) -> Result<()> {
                self.rule()?;
                writeln!(self.out, "Renaming files...")?;
                writeln!(self.out)?;
                Ok(())
        }

        pub fn renamed(&mut self, pair: &RenamePair) -> Result<()> {
                let mark = self.paint("✓", Style::new().green());
                let new = self.paint(pair.target_name().to_string_lossy(), Style::new().green());
                writeln!(self.out, "{} Renamed: {} -> {}", mark, pair.original_name().to_string_lossy(), new)?;
                Ok(())
        }

        /// Per-pair failure line: offending path (relative to base) plus the underlying cause.
        pub fn rename_failed(&mut self, plan: &RenamePlan, pair: &RenamePair, err: &Error) -> Result<()> {
                let cause = match err {
                        Error::RenameFailed { source, .. } => source.to_string(),
                        other => other.to_string(),
                };
                let mark = self.paint("✗", Style::new().red());
                let cause = self.paint(cause, Style::new().red());
                writeln!(self.out, "{} Error renaming {}: {}", mark, plan.relative(&pair.original).display(), cause)?;
                Ok(())
        }

        pub fn completed(&mut self, summary: &ApplySummary) -> Result<()> {
                let renamed = self.paint(summary.renamed, Style::new().cyan());
                writeln!(self.out)?;
                writeln!(self.out, "Completed! Renamed {} of {} files.", renamed, summary.attempted)?;
                if summary.failed() > 0 {
                        let failed = self.paint(summary.failed(), Style::new().red().bold());
                        writeln!(self.out, "{} renames failed.", failed)?;
                }
                Ok(())
        }
}
