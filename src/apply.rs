//! Apply a rename plan: one in-place rename per pair, failures isolated to their pair.

use std::{fs, io::Write};

use crate::{
        error::{Error, Result},
        plan::{RenamePair, RenamePlan},
        report::Reporter,
};

/// Outcome counts of one apply pass.
#[derive(Debug, Default)]
pub struct ApplySummary {
        pub attempted: usize,
        pub renamed: usize,
        /// Every per-pair failure, in plan order.
        pub failures: Vec<Error>,
}

impl ApplySummary {
        pub fn failed(&self) -> usize {
                self.failures.len()
        }
}

/// Rename each pair in plan order, reporting progress as it goes.
///
/// A failed pair is reported and skipped; already-applied renames stay applied.
/// Only a failure to *write the report* aborts the pass.
#[tracing::instrument(skip(reporter), fields(pairs = plan.len()))]
pub fn apply<W: Write>(plan: &RenamePlan, reporter: &mut Reporter<W>) -> Result<ApplySummary> {
        let mut summary = ApplySummary::default();
        for pair in plan.pairs() {
                summary.attempted += 1;
                match rename_pair(pair) {
                        Ok(()) => {
                                summary.renamed += 1;
                                reporter.renamed(pair)?;
                        }
                        Err(e) => {
                                tracing::warn!("{}", e);
                                reporter.rename_failed(plan, pair, &e)?;
                                summary.failures.push(e);
                        }
                }
        }
        Ok(summary)
}

/// Rename a single pair, refusing to overwrite an existing destination.
fn rename_pair(pair: &RenamePair) -> Result<()> {
        let failed = |source: std::io::Error| Error::RenameFailed {
                from: pair.original.clone(),
                to: pair.target.clone(),
                source,
        };
        // Guard: collision (`fs::rename` would silently replace on unix)
        if pair.target.try_exists().map_err(failed)? {
                return Err(failed(std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        "destination already exists",
                )));
        }
        fs::rename(&pair.original, &pair.target).map_err(failed)
}
