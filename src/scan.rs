use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// List the entries directly under `dir`, sorted by file name.
///
/// Subdirectories are returned too (the extension filter drops them) but
/// never descended into.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry_result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry_result {
            Ok(e) => e,
            // Depth 0 is the directory itself; failing to open it is fatal
            Err(err) if err.depth() == 0 => {
                return Err(ConvertError::Scan {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                if let Some(path) = err.path() {
                    warn!("Failed to access {}: {}", path.display(), err);
                } else {
                    warn!("WalkDir error: {}", err);
                }
                continue;
            }
        };

        entries.push(entry.into_path());
    }

    Ok(entries)
}
