use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// iOS still photos
pub const PHOTO_EXTENSION: &str = "HEIC";
/// iOS video clips
pub const VIDEO_EXTENSION: &str = "HEVC";
pub const PHOTO_TARGET_EXTENSION: &str = "jpg";
pub const VIDEO_TARGET_EXTENSION: &str = "mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "Photos"),
            MediaKind::Video => write!(f, "Videos"),
        }
    }
}

/// Source and converted extensions for one media kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaProfile {
    pub kind: MediaKind,
    source_extension: String,
    target_extension: String,
}

impl MediaProfile {
    /// Extensions may be given with or without the leading dot.
    pub fn new(kind: MediaKind, source_extension: &str, target_extension: &str) -> Self {
        MediaProfile {
            kind,
            source_extension: strip_dot(source_extension).to_string(),
            target_extension: strip_dot(target_extension).to_string(),
        }
    }

    pub fn photo() -> Self {
        Self::new(MediaKind::Photo, PHOTO_EXTENSION, PHOTO_TARGET_EXTENSION)
    }

    pub fn video() -> Self {
        Self::new(MediaKind::Video, VIDEO_EXTENSION, VIDEO_TARGET_EXTENSION)
    }

    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    pub fn target_extension(&self) -> &str {
        &self.target_extension
    }
}

fn strip_dot(ext: &str) -> &str {
    ext.trim_start_matches('.')
}

/// A listed file that matched a profile's source extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    path: PathBuf,
}

impl SourcePath {
    pub(crate) fn new(path: PathBuf) -> Self {
        SourcePath { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file stem, empty if the path has no file name.
    pub fn file_stem(&self) -> &OsStr {
        self.path.file_stem().unwrap_or_default()
    }

    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|s| s.to_str())
    }
}

impl AsRef<Path> for SourcePath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Ordered, extension-matched files of a single media kind.
///
/// Only the extension filter builds one, so every entry is known to carry
/// the profile's source extension. Later stages can only shrink it.
#[derive(Debug, Clone)]
pub struct FileSet {
    profile: MediaProfile,
    files: Vec<SourcePath>,
}

impl FileSet {
    pub(crate) fn from_matched(profile: MediaProfile, files: Vec<SourcePath>) -> Self {
        FileSet { profile, files }
    }

    pub fn profile(&self) -> &MediaProfile {
        &self.profile
    }

    pub fn kind(&self) -> MediaKind {
        self.profile.kind
    }

    pub fn files(&self) -> &[SourcePath] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn retain<F>(mut self, keep: F) -> Self
    where
        F: FnMut(&SourcePath) -> bool,
    {
        self.files.retain(keep);
        self
    }
}
