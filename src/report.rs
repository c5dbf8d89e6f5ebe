//! Diagnostic reporting for flatten passes.
//!
//! The core never writes to stdout/stderr directly; it pushes `Event`s into
//! an injected `Report` sink. That keeps the traversal testable without
//! capturing process output and reusable in non-interactive contexts.
//!
//! Three sinks are provided:
//! - `TracingReport`: forwards events as structured tracing events.
//! - `ConsoleReport`: user-facing lines via `output` (what the binary uses).
//! - `RecordingReport`: collects events in memory for assertions.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::output as out;

/// A single diagnostic event emitted during a flatten pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The supplied root does not exist (or is not a directory); the pass
    /// performed no traversal.
    MissingRoot { root: PathBuf },
    /// A lone file was moved from its wrapper directory up to the parent.
    MovedFile { from: PathBuf, to: PathBuf },
    /// A wrapper directory was deleted after its file was moved out.
    RemovedDir { dir: PathBuf },
    /// A move was skipped because the destination name already exists.
    SkippedConflict { file: PathBuf, existing: PathBuf },
}

/// Sink for diagnostic events. Implementations must not fail; reporting is
/// best-effort and never influences traversal behavior.
pub trait Report {
    fn event(&mut self, event: Event);
}

/// Forwards events to the `tracing` dispatcher with structured path fields.
#[derive(Debug, Default)]
pub struct TracingReport;

impl Report for TracingReport {
    fn event(&mut self, event: Event) {
        match event {
            Event::MissingRoot { root } => {
                warn!(root = %root.display(), "Root directory does not exist; nothing to do");
            }
            Event::MovedFile { from, to } => {
                info!(src = %from.display(), dest = %to.display(), "Moved lone file to parent");
            }
            Event::RemovedDir { dir } => {
                info!(dir = %dir.display(), "Removed emptied directory");
            }
            Event::SkippedConflict { file, existing } => {
                warn!(file = %file.display(), existing = %existing.display(), "Skipping move, name already taken in parent");
            }
        }
    }
}

/// Prints user-facing lines. Moves and removals go out as plain lines that
/// users may script against; conflicts and a missing root are warnings.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn event(&mut self, event: Event) {
        match event {
            Event::MissingRoot { root } => {
                out::print_warn(&format!("Directory does not exist: {}", root.display()));
            }
            Event::MovedFile { from, to } => {
                out::print_user(&format!("Moved '{}' -> '{}'", from.display(), to.display()));
            }
            Event::RemovedDir { dir } => {
                out::print_user(&format!("Deleted now-empty directory '{}'", dir.display()));
            }
            Event::SkippedConflict { file, existing } => {
                out::print_warn(&format!(
                    "Skipping move of '{}', file already exists in parent: {}",
                    file.display(),
                    existing.display()
                ));
            }
        }
    }
}

/// Collects events in order; used by tests to assert on what a pass did.
#[derive(Debug, Default)]
pub struct RecordingReport {
    pub events: Vec<Event>,
}

impl RecordingReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Report for RecordingReport {
    fn event(&mut self, event: Event) {
        self.events.push(event);
    }
}
