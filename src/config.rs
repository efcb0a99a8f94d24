//! Runtime configuration loaded from a YAML file.

use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use serde::Deserialize;

/// Tunables for an album session. Every field has a default, so an absent
/// or empty config file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Text file the album collection is mirrored to.
    pub album_data_path: PathBuf,
    /// Covers returned by list-albums are scaled to fit this square.
    pub cover_thumbnail_size: u32,
    /// Photos shown per page when browsing an album.
    pub photos_per_page: usize,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate invariants that serde defaults alone cannot express.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.album_data_path.as_os_str().is_empty(),
            "album-data-path must not be empty"
        );
        ensure!(
            self.cover_thumbnail_size > 0,
            "cover-thumbnail-size must be greater than zero"
        );
        ensure!(
            self.photos_per_page > 0,
            "photos-per-page must be greater than zero"
        );
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            album_data_path: PathBuf::from("album_data.txt"),
            cover_thumbnail_size: 100,
            photos_per_page: 3,
        }
    }
}
