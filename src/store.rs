//! In-memory album collection with write-through persistence.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Error;
use crate::loader::PhotoDecoder;
use crate::persist;
use crate::pixel::PixelBuffer;

/// Opaque handle to an album inside an [`AlbumStore`].
///
/// Handed out by [`AlbumStore::create_album`] and passed back to every
/// album operation; callers never hold live references into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlbumId(usize);

impl From<usize> for AlbumId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single photo: decoded pixels plus the path they came from.
///
/// `source_path` is empty for an album cover supplied as a bare buffer with
/// no backing file. `buffer` is `None` when the entry was reloaded from disk
/// with nothing to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub buffer: Option<PixelBuffer>,
    pub source_path: PathBuf,
}

impl Photo {
    /// Cover entry around freshly decoded pixels; no backing file yet.
    pub(crate) fn cover(buffer: PixelBuffer) -> Self {
        Self {
            buffer: Some(buffer),
            source_path: PathBuf::new(),
        }
    }

    /// Whether this photo points at a file on disk.
    #[must_use]
    pub fn has_backing_file(&self) -> bool {
        !self.source_path.as_os_str().is_empty()
    }
}

/// A titled, ordered photo collection. The first photo is the cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub(crate) title: String,
    pub(crate) photos: Vec<Photo>,
}

impl Album {
    pub(crate) fn new(title: String, photos: Vec<Photo>) -> Self {
        Self { title, photos }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// The album cover, by convention the first photo.
    #[must_use]
    pub fn cover(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// One page of photos starting at `start`. Out-of-range pages are empty.
    #[must_use]
    pub fn page(&self, start: usize, per_page: usize) -> &[Photo] {
        let start = start.min(self.photos.len());
        let end = start.saturating_add(per_page).min(self.photos.len());
        &self.photos[start..end]
    }

    /// Where browsing lands after stepping one page forward from `start`.
    /// Stays put when no further page exists.
    #[must_use]
    pub fn next_page_start(&self, start: usize, per_page: usize) -> usize {
        if start + per_page < self.photos.len() {
            start + per_page
        } else {
            start
        }
    }

    /// Where browsing lands after stepping one page back from `start`.
    #[must_use]
    pub fn prev_page_start(&self, start: usize, per_page: usize) -> usize {
        if start >= per_page { start - per_page } else { start }
    }
}

/// Row for an album grid: title plus a scaled cover thumbnail.
#[derive(Debug, Clone)]
pub struct AlbumSummary {
    pub title: String,
    pub photo_count: usize,
    pub cover: Option<PixelBuffer>,
}

/// Every album in the session plus the data file they are mirrored to.
///
/// Mutating operations rewrite the data file before returning. When the
/// write fails the mutation is kept (memory stays authoritative, the
/// on-disk copy is merely stale) and the error goes back to the caller.
#[derive(Debug)]
pub struct AlbumStore {
    albums: Vec<Album>,
    data_file: PathBuf,
}

impl AlbumStore {
    /// Load the store mirrored at `data_file`, starting empty when the file
    /// is missing or unreadable.
    pub fn open(data_file: impl Into<PathBuf>, decoder: &dyn PhotoDecoder) -> Self {
        let data_file = data_file.into();
        let albums = persist::load(&data_file, decoder);
        info!(
            albums = albums.len(),
            file = %data_file.display(),
            "album store loaded"
        );
        Self { albums, data_file }
    }

    /// Create a new album around `cover` and persist it.
    ///
    /// # Errors
    /// [`Error::InvalidCover`] when the cover holds no pixels;
    /// [`Error::Save`] when the write-through save fails.
    pub fn create_album(
        &mut self,
        title: impl Into<String>,
        cover: PixelBuffer,
    ) -> Result<AlbumId, Error> {
        if cover.is_empty() {
            return Err(Error::InvalidCover);
        }
        let title = title.into();
        debug!(album = %title, "creating album");
        self.albums.push(Album::new(title, vec![Photo::cover(cover)]));
        let id = AlbumId(self.albums.len() - 1);
        self.save()?;
        Ok(id)
    }

    /// Append a decoded photo to an album and persist the change.
    ///
    /// # Errors
    /// [`Error::UnknownAlbum`] for a bad id; [`Error::Decode`] when `buffer`
    /// holds no pixels (the decode never happened); [`Error::Save`] when the
    /// write-through save fails.
    pub fn add_photo(
        &mut self,
        id: AlbumId,
        path: impl Into<PathBuf>,
        buffer: PixelBuffer,
    ) -> Result<(), Error> {
        let path = path.into();
        let album = self.album_mut(id)?;
        if buffer.is_empty() {
            return Err(Error::Decode {
                path,
                reason: "no decoded pixels".to_owned(),
            });
        }
        debug!(album = %album.title, photo = %path.display(), "adding photo");
        album.photos.push(Photo {
            buffer: Some(buffer),
            source_path: path,
        });
        self.save()
    }

    /// Pop the most recently added photo. Does nothing, and skips the
    /// save, when the album has no photos left.
    ///
    /// # Errors
    /// [`Error::UnknownAlbum`] for a bad id; [`Error::Save`] when the
    /// write-through save fails.
    pub fn remove_last_photo(&mut self, id: AlbumId) -> Result<(), Error> {
        let album = self.album_mut(id)?;
        if album.photos.pop().is_none() {
            return Ok(());
        }
        debug!(album = %album.title, "removed last photo");
        self.save()
    }

    /// Grid rows for every album, covers scaled to fit `thumbnail_size`.
    #[must_use]
    pub fn list_albums(&self, thumbnail_size: u32) -> Vec<AlbumSummary> {
        self.albums
            .iter()
            .map(|album| AlbumSummary {
                title: album.title.clone(),
                photo_count: album.photos.len(),
                cover: album
                    .cover()
                    .and_then(|photo| photo.buffer.as_ref())
                    .map(|buffer| buffer.thumbnail(thumbnail_size)),
            })
            .collect()
    }

    /// Read-only view of one album.
    ///
    /// # Errors
    /// [`Error::UnknownAlbum`] for a bad id.
    pub fn get_album(&self, id: AlbumId) -> Result<&Album, Error> {
        self.albums.get(id.0).ok_or(Error::UnknownAlbum(id))
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn album_mut(&mut self, id: AlbumId) -> Result<&mut Album, Error> {
        self.albums.get_mut(id.0).ok_or(Error::UnknownAlbum(id))
    }

    fn save(&self) -> Result<(), Error> {
        persist::save(&self.albums, &self.data_file)
    }
}
