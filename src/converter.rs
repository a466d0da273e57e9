use log::{debug, info};
use std::path::Path;
use std::process::Command;

use crate::error::{ConvertError, Result};
use crate::media::SourcePath;

/// Upper bound on files per tool invocation, keeps command lines short.
pub const DEFAULT_BATCH_SIZE: usize = 100;

pub const DEFAULT_MAGICK_PROGRAM: &str = "magick";
const OUTPUT_FORMAT: &str = "jpg";

/// Converts one batch of files, writing the results into `dest_dir`.
pub trait Converter {
    fn convert(&self, dest_dir: &Path, batch: &[SourcePath]) -> Result<()>;
}

/// Runs `magick mogrify -format jpg -path <dest> <files...>`.
#[derive(Debug, Clone)]
pub struct MagickConverter {
    program: String,
}

impl MagickConverter {
    pub fn new(program: impl Into<String>) -> Self {
        MagickConverter {
            program: program.into(),
        }
    }

    fn build_command(&self, dest_dir: &Path, batch: &[SourcePath]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["mogrify", "-format", OUTPUT_FORMAT, "-path"]);
        cmd.arg(dest_dir);
        cmd.args(batch.iter().map(SourcePath::path));
        cmd
    }
}

impl Default for MagickConverter {
    fn default() -> Self {
        Self::new(DEFAULT_MAGICK_PROGRAM)
    }
}

impl Converter for MagickConverter {
    fn convert(&self, dest_dir: &Path, batch: &[SourcePath]) -> Result<()> {
        // Blocks until the tool exits, stdout and stderr are captured
        let output = self
            .build_command(dest_dir, batch)
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{}: {}", self.program, stdout.trim());
        }

        if !output.status.success() {
            return Err(ConvertError::ToolFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

/// Feed `files` to `converter` in consecutive chunks of at most `batch_size`.
///
/// Stops at the first failing chunk; outputs of earlier chunks stay on disk.
/// Returns the number of chunks converted.
pub fn convert_in_batches(
    converter: &dyn Converter,
    dest_dir: &Path,
    files: &[SourcePath],
    batch_size: usize,
) -> Result<usize> {
    let batch_size = batch_size.max(1);
    let total_batches = files.len().div_ceil(batch_size);

    for (index, batch) in files.chunks(batch_size).enumerate() {
        let number = index + 1;
        println!(
            "Converting batch {}/{} ({} files)",
            number,
            total_batches,
            batch.len()
        );

        converter
            .convert(dest_dir, batch)
            .map_err(|err| ConvertError::Batch {
                batch: number,
                total: total_batches,
                source: Box::new(err),
            })?;
    }

    info!("Converted {} files in {} batches", files.len(), total_batches);
    Ok(total_batches)
}
