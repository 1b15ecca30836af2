//! CLI interface to flatten nested fixture trees.
//!
//! # Example:
//! ```bash
//! flatten_fixtures tests/fixtures            # dry run: report planned renames
//! flatten_fixtures tests/fixtures --execute  # perform them
//! ```

use clap::{Parser, error::ErrorKind};
use flatten_fixtures::{Args, app, logging};

fn main() {
        logging::tracing_subscribe_boilerplate("warn");
        let args = match Args::try_parse() {
                Ok(args) => args,
                // --help & --version are not failures
                Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
                Err(e) => {
                        e.print().ok(); // usage text
                        std::process::exit(1);
                }
        };

        match app(&args) {
                Ok(outcome) => tracing::debug!(?outcome, "run finished"),
                Err(e) => {
                        eprintln!("Error: {}", e); // bubling error will not pretty-print cause
                        std::process::exit(1);
                }
        }
}
