use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::errors::CorpusError;

// ============================================================================
// Output Writers
// ============================================================================
//
// Each file is written to a sibling `.tmp` path and renamed into place once
// complete, so a failed write never leaves a truncated output behind. Callers
// writing several related files stage all of them before committing any.
//
// ============================================================================

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn ensure_parent(path: &Path) -> Result<(), CorpusError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// An output written in full to its `.tmp` sibling but not yet renamed
/// into place.
#[derive(Debug)]
pub struct StagedFile {
    tmp: PathBuf,
    path: PathBuf,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename into place, replacing any previous output.
    pub fn commit(self) -> Result<(), CorpusError> {
        fs::rename(&self.tmp, &self.path).map_err(|e| CorpusError::io(&self.path, e))
    }

    /// Drop the staged copy; the previous output stays untouched.
    pub fn discard(self) {
        remove_staged(&self.tmp);
    }
}

fn remove_staged(tmp: &Path) {
    if tmp.is_file() {
        if let Err(e) = fs::remove_file(tmp) {
            tracing::warn!(path = %tmp.display(), error = %e, "Failed to remove staged file");
        }
    }
}

/// Run `write` against the `.tmp` sibling of `path`, cleaning it up on failure.
fn stage<F>(path: &Path, write: F) -> Result<StagedFile, CorpusError>
where
    F: FnOnce(&Path) -> Result<(), CorpusError>,
{
    ensure_parent(path)?;
    let tmp = temp_path(path);

    if let Err(e) = write(&tmp) {
        remove_staged(&tmp);
        return Err(e);
    }

    Ok(StagedFile {
        tmp,
        path: path.to_path_buf(),
    })
}

/// Stage a pretty-printed JSON array
pub fn stage_json<T: Serialize>(path: &Path, records: &[T]) -> Result<StagedFile, CorpusError> {
    stage(path, |tmp| {
        let file = File::create(tmp).map_err(|e| CorpusError::io(tmp, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records).map_err(|e| CorpusError::json(tmp, e))?;
        writer.flush().map_err(|e| CorpusError::io(tmp, e))
    })
}

/// Stage a CSV with a header row derived from `T`'s field names
pub fn stage_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<StagedFile, CorpusError> {
    stage(path, |tmp| {
        let mut writer = csv::Writer::from_path(tmp).map_err(|e| CorpusError::csv(tmp, e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| CorpusError::csv(tmp, e))?;
        }
        writer.flush().map_err(|e| CorpusError::io(tmp, e))
    })
}

pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), CorpusError> {
    stage_json(path, records)?.commit()
}

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), CorpusError> {
    stage_csv(path, rows)?.commit()
}
