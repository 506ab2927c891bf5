//! Handler for the `adjustments` command group.

use std::fs::File;
use std::io;

use crate::cli::command::AdjustmentsExportArgs;
use crate::cli::output;
use crate::error::Result;
use crate::source::{export_adjustments, load_pool};

/// Execute `adjustments export`.
///
/// With `--output` the CSV goes to a file and a confirmation is printed;
/// without it the CSV itself is the stdout payload, so nothing else is
/// written there.
pub fn execute_export(args: AdjustmentsExportArgs) -> Result<()> {
    let pool = load_pool(&args.pool)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let written = export_adjustments(&pool, file)?;
            output::success(&format!(
                "Exported {written} adjustments to {}",
                path.display()
            ));
        }
        None => {
            export_adjustments(&pool, io::stdout().lock())?;
        }
    }

    Ok(())
}
