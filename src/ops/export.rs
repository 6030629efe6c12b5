//! Writing the CSV export to a file or a stream.

use crate::constants::DEFAULT_EXPORT_FILE_NAME;
use crate::errors::AppResult;
use crate::export::export_csv;
use crate::mood::MoodEntry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the CSV export of `entries` to `out`.
pub fn write_export<W: Write>(entries: &[MoodEntry], out: &mut W) -> AppResult<()> {
    out.write_all(export_csv(entries).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Writes the CSV export to `path`, returning the file actually written.
///
/// When `path` is an existing directory the export is placed inside it under
/// the default file name.
pub fn export_to_file(entries: &[MoodEntry], path: &Path) -> AppResult<PathBuf> {
    let target = if path.is_dir() {
        path.join(DEFAULT_EXPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    fs::write(&target, export_csv(entries))?;
    info!("Exported {} entries to {:?}", entries.len(), target);
    Ok(target)
}
