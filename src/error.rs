use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can go wrong while building the world at startup.
///
/// None of these are recoverable: the driver logs [`LoadError::path`] and
/// exits before the first tick.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed descriptor {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid descriptor {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("tile {gid} at layer {layer}, index {index} is not owned by any tileset")]
    UnresolvedTile { layer: usize, index: usize, gid: u32 },
}

impl LoadError {
    /// The asset that caused the failure, if the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Image { path, .. }
            | LoadError::Invalid { path, .. } => Some(path),
            LoadError::UnresolvedTile { .. } => None,
        }
    }

    pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        LoadError::Invalid { path: path.to_path_buf(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
