//! Application orchestrator.
//! Resolves the root, initializes logging, and runs the flatten pass with a
//! console reporter, translating typed errors into structured error logs.

use anyhow::Result;
use tracing::{debug, error};

use dir_flatten::cli::{Args, LogLevel};
use dir_flatten::output as out;
use dir_flatten::{flatten, ConsoleReport, FlattenError};

use crate::logging::init_tracing;

/// Run the CLI application. Returns Err (nonzero exit) only for propagated
/// filesystem failures; a missing root is reported and exits 0.
pub fn run(args: Args) -> Result<()> {
    let level = args.effective_log_level().unwrap_or(LogLevel::Normal);
    init_tracing(&level);

    debug!("Starting dir_flatten: {:?}", args);

    let root = match args.resolved_root() {
        Ok(p) => p,
        Err(e) => {
            out::print_error(&format!("Could not determine the working directory: {e}"));
            return Err(e.into());
        }
    };

    let mut report = ConsoleReport;
    match flatten(&root, args.depth, &mut report) {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Some(fe) = e.downcast_ref::<FlattenError>() {
                let code = fe.code();
                match fe {
                    FlattenError::ReadDir { path, .. } => {
                        error!(code, path = %path.display(), "Flatten failed while reading a directory")
                    }
                    FlattenError::MoveFile { from, to, .. } => {
                        error!(code, from = %from.display(), to = %to.display(), "Flatten failed while moving a file")
                    }
                    FlattenError::RemoveDir { path, .. } => {
                        error!(code, path = %path.display(), "Flatten failed while removing a directory")
                    }
                }
            } else {
                error!(error = ?e, "Flatten failed");
            }
            Err(e)
        }
    }
}
