//! Apply the normalizer to files and directory trees in place.
//!
//! Every file is rewritten through a sibling `<name>.new` temp file that is
//! renamed over the original only after it was fully written and synced, so
//! the original name never points at a partially written file.
//!
//! Entries whose name starts with `.` are skipped during traversal: hidden
//! files are left alone and hidden directories are not descended into.

use std::fs::{self, File, Permissions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::decode::{DecodeError, DecodeMode};
use super::error::{CleanupError, Result};
use super::normalize::Normalizer;

/// Suffix appended to a file name to form its temp file.
const TEMP_SUFFIX: &str = ".new";

/// Result of cleaning one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Not an existing regular file; nothing was read or written.
    Skipped,
    /// Rewritten in place. `changed` is false when the new bytes equal the old ones.
    Cleaned { changed: bool },
}

/// Counters for a run over one or more paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files rewritten.
    pub files: usize,
    /// Files whose content actually changed.
    pub changed: usize,
    /// Paths that were missing or not regular files.
    pub skipped: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Cleaned { changed } => {
                self.files += 1;
                if changed {
                    self.changed += 1;
                }
            }
        }
    }

    pub fn merge(&mut self, other: Summary) {
        self.files += other.files;
        self.changed += other.changed;
        self.skipped += other.skipped;
    }
}

/// Sibling temp path: `dir/name` -> `dir/name.new`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Returns `true` if the entry's file name starts with `.`, whether or not the
/// rest of the name is valid UTF-8.
pub fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().first() == Some(&b'.')
}

/// Clean a single file in place.
///
/// Returns [`FileOutcome::Skipped`] when `path` is not an existing regular file
/// (symlinks are followed). On error the original file is left untouched and
/// the temp file is removed.
pub fn normalize_file(path: &Path, mode: DecodeMode) -> Result<FileOutcome> {
    if !path.is_file() {
        debug!("skip {}: not a regular file", path.display());
        return Ok(FileOutcome::Skipped);
    }

    let read_err = |source| CleanupError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let permissions = file.metadata().map_err(read_err)?.permissions();

    let tmp = temp_path(path);
    let changed = match write_temp(path, BufReader::new(file), &tmp, mode, permissions) {
        Ok(changed) => changed,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CleanupError::Replace {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(
        "cleaned {}{}",
        path.display(),
        if changed { "" } else { " (unchanged)" }
    );
    Ok(FileOutcome::Cleaned { changed })
}

/// Write the cleaned content of `reader` to `tmp`, then sync it. Returns whether any line changed.
fn write_temp<R: BufRead>(
    path: &Path,
    reader: R,
    tmp: &Path,
    mode: DecodeMode,
    permissions: Permissions,
) -> Result<bool> {
    let write_err = |source| CleanupError::Write {
        path: tmp.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(tmp).map_err(write_err)?);
    let changed = clean_lines(path, reader, &mut writer, mode)?;
    let file = writer
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;
    file.set_permissions(permissions).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    Ok(changed)
}

/// Normalize line by line; line endings are copied as-is.
fn clean_lines<R: BufRead, W: Write>(
    path: &Path,
    mut reader: R,
    writer: &mut W,
    mode: DecodeMode,
) -> Result<bool> {
    let normalizer = Normalizer::shared();
    let mut line = Vec::new();
    let mut offset = 0;
    let mut changed = false;
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| CleanupError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        let text = mode.decode(&line).map_err(|e| CleanupError::Decode {
            path: path.to_path_buf(),
            source: DecodeError {
                offset: offset + e.offset,
            },
        })?;
        let cleaned = normalizer.apply(&text);
        changed |= cleaned.as_bytes() != line.as_slice();
        writer
            .write_all(cleaned.as_bytes())
            .map_err(|source| CleanupError::Write {
                path: temp_path(path),
                source,
            })?;
        offset += n;
    }
    Ok(changed)
}

/// Recursively clean every non-hidden file under `path`.
///
/// A path that is not an existing directory is counted as skipped. The root
/// itself is walked even when its own name starts with `.`. Symlinked
/// directories are not followed. The first error stops the walk.
pub fn normalize_dir(path: &Path, mode: DecodeMode) -> Result<Summary> {
    let mut summary = Summary::default();
    if !path.is_dir() {
        debug!("skip {}: not a directory", path.display());
        summary.skipped += 1;
        return Ok(summary);
    }

    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        summary.record(normalize_file(entry.path(), mode)?);
    }

    debug!(
        "{}: {} file(s), {} changed",
        path.display(),
        summary.files,
        summary.changed
    );
    Ok(summary)
}

/// Clean each path: directories recursively, everything else as a single file.
/// Missing paths are skipped.
pub fn normalize_paths<I, P>(paths: I, mode: DecodeMode) -> Result<Summary>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = Summary::default();
    for p in paths {
        let p = p.as_ref();
        if p.is_dir() {
            summary.merge(normalize_dir(p, mode)?);
        } else {
            summary.record(normalize_file(p, mode)?);
        }
    }
    info!(
        "{} file(s) cleaned, {} changed, {} skipped",
        summary.files, summary.changed, summary.skipped
    );
    Ok(summary)
}
