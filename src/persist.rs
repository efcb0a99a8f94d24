//! Line-oriented album persistence.
//!
//! One block per album: the title line, one line per photo source path (a
//! path-less cover is an empty line), then the `END_ALBUM` terminator:
//!
//! ```text
//! Summer Trip
//!
//! /photos/beach.jpg
//! END_ALBUM
//! ```
//!
//! `END_ALBUM` is a reserved sentinel. It is a control token only at block
//! boundaries and can never be stored as data; the format has no escaping
//! mechanism, so titles and photo paths must not equal it. The first line
//! after a boundary is always the title, even when it looks like a path.
//! There is no version field; the format is not forward-compatible.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Error;
use crate::loader::PhotoDecoder;
use crate::store::{Album, Photo};

/// Block terminator. Reserved; never valid as a title or photo path.
pub const END_ALBUM: &str = "END_ALBUM";

/// Mirror every album block to `path`, truncating and rewriting the whole
/// file on each call.
///
/// # Errors
/// Returns [`Error::Save`] when the file cannot be written.
pub fn save(albums: &[Album], path: &Path) -> Result<(), Error> {
    let mut out = String::new();
    for album in albums {
        out.push_str(album.title());
        out.push('\n');
        for photo in album.photos() {
            out.push_str(&photo.source_path.to_string_lossy());
            out.push('\n');
        }
        out.push_str(END_ALBUM);
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(albums = albums.len(), file = %path.display(), "album data saved");
    Ok(())
}

/// Read every album block from `path`, resolving photo paths through
/// `decoder`.
///
/// Load fails softly: a missing or unreadable file yields an empty
/// collection. A path that no longer decodes is dropped from its album,
/// so the on-disk path count and the loaded photo count can diverge. An
/// empty path line is a path-less cover entry and is kept without pixels.
/// A block left with no photos at all is dropped entirely, as is a trailing
/// block with no terminator.
pub fn load(path: &Path, decoder: &dyn PhotoDecoder) -> Vec<Album> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(file = %path.display(), "no album data file; starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                file = %path.display(),
                error = %err,
                "could not read album data; starting empty"
            );
            return Vec::new();
        }
    };

    struct Block {
        title: String,
        photos: Vec<Photo>,
    }

    let mut albums = Vec::new();
    let mut block: Option<Block> = None;
    for line in text.lines() {
        match block.take() {
            // First line of a block is always the title, even when it looks
            // like a path.
            None => {
                block = Some(Block {
                    title: line.to_owned(),
                    photos: Vec::new(),
                });
            }
            Some(mut current) => {
                if line == END_ALBUM {
                    if current.photos.is_empty() {
                        warn!(album = %current.title, "dropping album with no loadable photos");
                    } else {
                        albums.push(Album::new(current.title, current.photos));
                    }
                } else {
                    current.photos.extend(resolve_photo(line, decoder));
                    block = Some(current);
                }
            }
        }
    }
    if let Some(unterminated) = block {
        warn!(album = %unterminated.title, "discarding unterminated album block");
    }
    albums
}

fn resolve_photo(line: &str, decoder: &dyn PhotoDecoder) -> Option<Photo> {
    if line.is_empty() {
        // A cover that never had a backing file: keep the entry, no pixels.
        return Some(Photo {
            buffer: None,
            source_path: PathBuf::new(),
        });
    }
    let path = PathBuf::from(line);
    match decoder.decode(&path) {
        Ok(buffer) => Some(Photo {
            buffer: Some(buffer),
            source_path: path,
        }),
        Err(err) => {
            warn!(photo = line, error = %err, "dropping photo that failed to decode");
            None
        }
    }
}
