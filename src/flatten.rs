//! Recursive collapsing of single-file wrapper directories.
//!
//! A post-order walk below the root: children are processed before their
//! parent is judged, so nested single-file chains collapse fully upward in
//! one pass. A directory qualifies when, after its own subtree has been
//! processed, it holds exactly one file and no subdirectories; its file is
//! then renamed into the parent and the emptied directory is deleted.
//!
//! The move is a plain same-filesystem `fs::rename` and the delete is
//! non-recursive; ordering is move-then-delete so an interruption between
//! the two leaves the file already relocated.

use anyhow::Result;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::FlattenError;
use crate::report::{Event, Report};

/// Collapse every single-file wrapper directory strictly below `root`.
///
/// - `max_depth`: `None` descends without bound; `Some(k)` processes
///   directories down to nesting level `k` (0 = the root's direct children)
///   and leaves anything deeper untouched.
/// - `report`: sink for diagnostics (moves, removals, conflicts).
///
/// A root that does not exist (or is not a directory) is reported through
/// the sink and the call returns `Ok` without traversing. Any other
/// filesystem failure propagates as a [`FlattenError`] and halts the pass.
pub fn flatten(root: &Path, max_depth: Option<usize>, report: &mut dyn Report) -> Result<()> {
    if !root.is_dir() {
        report.event(Event::MissingRoot {
            root: root.to_path_buf(),
        });
        return Ok(());
    }

    debug!(root = %root.display(), ?max_depth, "Starting flatten pass");
    flatten_children(root, 0, max_depth, report)
}

/// Process the subdirectories of `parent`, which sit at nesting level
/// `depth` (0 = the root's direct children). Recursion descends only while
/// `depth` stays below the bound; the parent itself has already been
/// cleared for inspection by the caller, so every enumerated child gets the
/// single-file check.
fn flatten_children(
    parent: &Path,
    depth: usize,
    max_depth: Option<usize>,
    report: &mut dyn Report,
) -> Result<()> {
    let (_, subdirs) = read_entries(parent)?;

    for dir in subdirs {
        if max_depth.map_or(true, |limit| depth < limit) {
            flatten_children(&dir, depth + 1, max_depth, report)?;
        }

        // Re-read after recursion; the subtree may have collapsed into `dir`.
        let (files, nested) = read_entries(&dir)?;
        if files.len() != 1 || !nested.is_empty() {
            continue;
        }

        let name = &files[0];
        let src = dir.join(name);
        let dest = parent.join(name);

        if dest.exists() {
            report.event(Event::SkippedConflict {
                file: src,
                existing: dest,
            });
            continue;
        }

        fs::rename(&src, &dest).map_err(|source| FlattenError::MoveFile {
            from: src.clone(),
            to: dest.clone(),
            source,
        })?;
        report.event(Event::MovedFile {
            from: src,
            to: dest,
        });

        fs::remove_dir(&dir).map_err(|source| FlattenError::RemoveDir {
            path: dir.clone(),
            source,
        })?;
        report.event(Event::RemovedDir { dir });
    }

    Ok(())
}

/// List a directory's immediate entries, split into file names and
/// subdirectory paths. Anything whose file type is not a directory counts
/// as a file; symlinks are not followed.
fn read_entries(dir: &Path) -> Result<(Vec<OsString>, Vec<PathBuf>), FlattenError> {
    let wrap = |source| FlattenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(wrap)? {
        let entry = entry.map_err(wrap)?;
        if entry.file_type().map_err(wrap)?.is_dir() {
            subdirs.push(entry.path());
        } else {
            files.push(entry.file_name());
        }
    }
    Ok((files, subdirs))
}
