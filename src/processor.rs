use log::{debug, info};
use std::path::PathBuf;

use crate::config::Config;
use crate::converter::{convert_in_batches, Converter};
use crate::error::Result;
use crate::media::{FileSet, MediaKind, MediaProfile};
use crate::scan::list_directory;

pub struct Processor {
    config: Config,
}

/// Counts gathered during a run. Excluded media kinds stay at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub photos_found: usize,
    pub videos_found: usize,
    pub photos_pending: usize,
    pub videos_pending: usize,
    pub batches_run: usize,
}

impl Processor {
    /// Fails before any work if either directory is missing.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Processor { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, converter: &dyn Converter) -> Result<RunSummary> {
        let config = &self.config;
        info!("Scanning directory: {}", config.source_dir.display());
        let listing = list_directory(&config.source_dir)?;
        debug!("{} entries in {}", listing.len(), config.source_dir.display());

        let mut photos = collect(&config.photo, config.exclude_photo, &listing);
        let mut videos = collect(&config.video, config.exclude_video, &listing);

        let mut summary = RunSummary {
            photos_found: photos.as_ref().map_or(0, FileSet::len),
            videos_found: videos.as_ref().map_or(0, FileSet::len),
            ..RunSummary::default()
        };
        print_counts(photos.as_ref(), videos.as_ref());

        if config.ignore_converted {
            println!("Filtering files that exist in output folder...");
            photos = photos.map(|set| set.without_converted(&config.dest_dir));
            videos = videos.map(|set| set.without_converted(&config.dest_dir));
            print_counts(photos.as_ref(), videos.as_ref());
        }

        summary.photos_pending = photos.as_ref().map_or(0, FileSet::len);
        summary.videos_pending = videos.as_ref().map_or(0, FileSet::len);

        if let Some(photos) = photos.filter(|set| !set.is_empty()) {
            summary.batches_run =
                convert_in_batches(converter, &config.dest_dir, photos.files(), config.batch_size)?;
        }

        if summary.videos_pending > 0 {
            info!(
                "Video conversion is not supported, {} videos left unconverted",
                summary.videos_pending
            );
        }

        Ok(summary)
    }
}

fn collect(profile: &MediaProfile, excluded: bool, listing: &[PathBuf]) -> Option<FileSet> {
    if excluded {
        info!("Skipping {} (excluded)", profile.kind.to_string().to_lowercase());
        return None;
    }
    Some(FileSet::collect(profile.clone(), listing))
}

fn print_counts(photos: Option<&FileSet>, videos: Option<&FileSet>) {
    println!("{}", format_counts(photos, videos));
}

/// Two-line count report, one line per media kind.
fn format_counts(photos: Option<&FileSet>, videos: Option<&FileSet>) -> String {
    format!(
        "{}\n{}",
        format_count(MediaKind::Photo, photos),
        format_count(MediaKind::Video, videos)
    )
}

fn format_count(kind: MediaKind, set: Option<&FileSet>) -> String {
    match set {
        Some(set) => format!("{} found: {}", kind, set.len()),
        None => format!("{} found: skipped", kind),
    }
}
