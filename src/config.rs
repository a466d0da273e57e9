use std::path::{Path, PathBuf};

use crate::converter::DEFAULT_BATCH_SIZE;
use crate::error::{ConvertError, Result};
use crate::media::MediaProfile;

/// Settings for a single run. Built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub exclude_photo: bool,
    pub exclude_video: bool,
    pub ignore_converted: bool,
    pub batch_size: usize,
    pub photo: MediaProfile,
    pub video: MediaProfile,
}

impl Config {
    pub fn new(source_dir: PathBuf, dest_dir: PathBuf) -> Self {
        Config {
            source_dir,
            dest_dir,
            exclude_photo: false,
            exclude_video: false,
            ignore_converted: true,
            batch_size: DEFAULT_BATCH_SIZE,
            photo: MediaProfile::photo(),
            video: MediaProfile::video(),
        }
    }

    /// Both directories must already exist; neither is ever created.
    pub fn validate(&self) -> Result<()> {
        validate_directory("Source", &self.source_dir)?;
        validate_directory("Destination", &self.dest_dir)?;
        Ok(())
    }
}

fn validate_directory(role: &'static str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConvertError::MissingDirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ConvertError::NotADirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
