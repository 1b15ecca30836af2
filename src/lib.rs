//! CLI interface to flatten nested fixture trees by renaming files in place.
//! Each file below the base directory gets its relative directory path as a hyphenated prefix:
//! `decs/array/1.in` ~~> `decs/array/decs-array-1.in`.

pub mod apply;
pub mod error;
pub mod logging;
pub mod plan;
pub mod report;

use std::{
        io::{IsTerminal, Write},
        path::PathBuf,
};

use clap::Parser;
use error::Result;

use crate::{
        apply::{ApplySummary, apply},
        plan::build_plan,
        report::Reporter,
};

/// Prefix every file below DIRECTORY with its relative directory path (joined by `-`).
///
/// Files *directly* in DIRECTORY are left alone. Nothing is renamed unless `--execute` is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub struct Args {
        /// Root of the tree to process.
        directory: PathBuf,

        /// Actually perform the renames (default is a dry run).
        #[arg(long)]
        execute: bool,
}

/// What a run ended up doing.
#[derive(Debug)]
pub enum Outcome {
        /// Plan was empty.
        NothingToDo,
        /// Plan was reported, filesystem untouched.
        DryRun { planned: usize },
        /// Plan was reported and applied.
        Applied(ApplySummary),
}

/// Application code.  (main in lib.rs)
#[tracing::instrument]
pub fn app(args: &Args) -> Result<Outcome> {
        let stdout = std::io::stdout();
        let color = stdout.is_terminal();
        let mut reporter = Reporter::new(stdout.lock(), color);
        run(args, &mut reporter)
}

/// Walk ~> plan ~> report ~> (optionally) apply, writing the report to `reporter`.
///
/// Fatal errors (missing base directory, unwritable report) return early;
/// per-pair rename failures are collected in the returned `ApplySummary`.
#[tracing::instrument(skip(reporter))]
pub fn run<W: Write>(args: &Args, reporter: &mut Reporter<W>) -> Result<Outcome> {
        let plan = build_plan(&args.directory)?;
        // Guard: nothing to do
        if plan.is_empty() {
                reporter.nothing_to_do()?;
                return Ok(Outcome::NothingToDo);
        }
        let dry_run = !args.execute;
        reporter.plan(&plan, dry_run)?;
        // Guard: dry run
        if dry_run {
                reporter.dry_run_notice()?;
                return Ok(Outcome::DryRun { planned: plan.len() });
        }
        reporter.apply_banner()?;
        let summary = apply(&plan, reporter)?;
        reporter.completed(&summary)?;
        Ok(Outcome::Applied(summary))
}
