//! Core library for `dir_flatten`.
//!
//! Collapses directories that hold exactly one file and no subdirectories
//! into their parent, recursively, so single-item wrapper folders in
//! media-library trees disappear and their content rises to the enclosing
//! directory.
//!
//! Keep the library small and ergonomic: one side-effecting entry point
//! ([`flatten`]), a diagnostic sink trait ([`report::Report`]) so callers
//! decide where messages go, and typed errors for the failures that
//! propagate.

pub mod cli;
pub mod errors;
pub mod flatten;
pub mod output;
pub mod report;

pub use errors::FlattenError;
pub use flatten::flatten;
pub use report::{ConsoleReport, Event, RecordingReport, Report, TracingReport};
