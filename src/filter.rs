use std::path::{Path, PathBuf};

use crate::media::{FileSet, MediaProfile, SourcePath};

/// True if `path` is an existing regular file whose extension is exactly
/// `extension` (case-sensitive, leading dot optional).
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Where the converted counterpart of `source` is expected in `dest_dir`.
///
/// Built from the raw stem, so names that are not UTF-8 map one to one.
pub fn converted_path(dest_dir: &Path, source: &SourcePath, target_extension: &str) -> PathBuf {
    let mut name = source.file_stem().to_os_string();
    name.push(".");
    name.push(target_extension);
    dest_dir.join(name)
}

impl FileSet {
    /// Keep the entries of `listing` that match the profile's source extension.
    pub fn collect(profile: MediaProfile, listing: &[PathBuf]) -> Self {
        let files = listing
            .iter()
            .filter(|path| matches_extension(path, profile.source_extension()))
            .map(|path| SourcePath::new(path.clone()))
            .collect();
        FileSet::from_matched(profile, files)
    }

    /// Drop files whose `<stem>.<target_ext>` already exists in `dest_dir`.
    pub fn without_converted(self, dest_dir: &Path) -> Self {
        let target_extension = self.profile().target_extension().to_string();
        self.retain(|source| !converted_path(dest_dir, source, &target_extension).exists())
    }
}
