use clap::builder::{BoolishValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::converter::{DEFAULT_BATCH_SIZE, DEFAULT_MAGICK_PROGRAM};

/// Convert iOS HEIC photos to JPEG with ImageMagick
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Source folder (not searched recursively)
    #[arg(long)]
    pub source: PathBuf,

    /// Destination folder, must already exist
    #[arg(long)]
    pub dest: PathBuf,

    /// Skip photo conversion
    #[arg(long)]
    pub exclude_photo: bool,

    /// Skip video conversion
    #[arg(long)]
    pub exclude_video: bool,

    /// Removes file from conversion if it exists in destination folder
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub ignore_dest_files: bool,

    /// Maximum number of files passed to one magick invocation
    #[arg(
        long,
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub batch_size: usize,

    /// ImageMagick executable
    #[arg(long, default_value = DEFAULT_MAGICK_PROGRAM)]
    pub magick: String,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config {
            exclude_photo: self.exclude_photo,
            exclude_video: self.exclude_video,
            ignore_converted: self.ignore_dest_files,
            batch_size: self.batch_size,
            ..Config::new(self.source, self.dest)
        }
    }
}
