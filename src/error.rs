use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{role} directory does not exist: {}", path.display())]
    MissingDirectory { role: &'static str, path: PathBuf },

    #[error("{role} path is not a directory: {}", path.display())]
    NotADirectory { role: &'static str, path: PathBuf },

    #[error("Failed to list {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external tool ran but exited non-zero.
    #[error("{program} exited with {}: {}", exit_label(*code), stderr.trim())]
    ToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A chunk of files could not be converted; later chunks were not started.
    #[error("Batch {batch} of {total} failed")]
    Batch {
        batch: usize,
        total: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
