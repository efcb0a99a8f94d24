//! Photo album core: tone adjustments over raw RGB buffers plus a
//! persistent, titled album collection.
//!
//! The crate contains no UI. Callers hand in validated file paths and
//! decoded buffers and get transformed buffers or status back; windowing,
//! dialogs and redisplay live outside.

pub mod adjust;
pub mod config;
pub mod error;
pub mod loader;
pub mod persist;
pub mod pixel;
pub mod scan;
pub mod store;

pub use adjust::{ToneParams, adjust};
pub use error::Error;
pub use loader::{FileDecoder, PhotoDecoder};
pub use pixel::PixelBuffer;
pub use store::{Album, AlbumId, AlbumStore, AlbumSummary, Photo};
