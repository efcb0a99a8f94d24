use std::path::PathBuf;

use thiserror::Error;

use crate::store::AlbumId;

/// Library error type for album and image operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The cover handed to create-album holds no pixels.
    #[error("album cover is not a usable image")]
    InvalidCover,

    /// An operation referenced an album that does not exist.
    #[error("unknown album id {0}")]
    UnknownAlbum(AlbumId),

    /// An image could not be decoded into an RGB buffer.
    #[error("failed to decode image {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// Writing the album data file failed. In-memory state is still valid.
    #[error("failed to save album data to {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw sample vector does not match its stated dimensions.
    #[error("pixel buffer holds {len} bytes, expected {expected} for {width}x{height} RGB")]
    BufferShape {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },

    /// A bulk-import directory is invalid or unreadable.
    #[error("invalid photo directory: {0}")]
    BadDir(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
