//! Binary entrypoint for the album tool.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rust_photo_album::adjust::{self, ToneParams};
use rust_photo_album::config::Configuration;
use rust_photo_album::loader::{self, FileDecoder, PhotoDecoder};
use rust_photo_album::scan;
use rust_photo_album::store::{AlbumId, AlbumStore};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "rust-photo-album", about = "Photo albums with tone adjustments")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every album with its photo count
    List,
    /// Create a new album around a cover image
    Create {
        title: String,
        /// Image file used as the album cover
        #[arg(long, value_name = "FILE")]
        cover: PathBuf,
    },
    /// Add one photo to an album
    Add { album: usize, photo: PathBuf },
    /// Add every supported image under a directory to an album
    AddDir { album: usize, dir: PathBuf },
    /// Remove the most recently added photo from an album
    Remove { album: usize },
    /// Show one page of an album's photos
    Show {
        album: usize,
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Apply tone adjustments to an image and write the result
    Adjust {
        photo: PathBuf,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        brightness: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        saturation: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        contrast: i32,
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,
    },
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("rust_photo_album={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = if cli.config.exists() {
        Configuration::from_yaml_file(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
            .validated()
            .context("validating configuration")?
    } else {
        Configuration::default()
    };

    let decoder = FileDecoder;
    let mut store = AlbumStore::open(&cfg.album_data_path, &decoder);

    match cli.command {
        Command::List => {
            if store.is_empty() {
                println!("no albums");
            }
            for (index, summary) in store.list_albums(cfg.cover_thumbnail_size).iter().enumerate()
            {
                let cover = summary
                    .cover
                    .as_ref()
                    .map(|c| format!(", cover {}x{}", c.width(), c.height()))
                    .unwrap_or_default();
                println!(
                    "{index}: {} ({} photos{cover})",
                    summary.title, summary.photo_count
                );
            }
        }
        Command::Create { title, cover } => {
            let buffer = decoder.decode(&cover)?;
            let id = store.create_album(&title, buffer)?;
            info!(album = %title, id = %id, "album created");
            println!("created album {id}: {title}");
        }
        Command::Add { album, photo } => {
            let buffer = decoder.decode(&photo)?;
            store.add_photo(AlbumId::from(album), photo.as_path(), buffer)?;
            println!("added {}", photo.display());
        }
        Command::AddDir { album, dir } => {
            let id = AlbumId::from(album);
            let photos = scan::scan_dir(&dir)?;
            if photos.is_empty() {
                bail!("no supported images under {}", dir.display());
            }
            let mut added = 0usize;
            for photo in photos {
                match decoder.decode(&photo) {
                    Ok(buffer) => {
                        store.add_photo(id, photo.as_path(), buffer)?;
                        added += 1;
                    }
                    Err(err) => warn!(photo = %photo.display(), error = %err, "skipping photo"),
                }
            }
            println!("added {added} photos from {}", dir.display());
        }
        Command::Remove { album } => {
            store.remove_last_photo(AlbumId::from(album))?;
            println!("removed last photo from album {album}");
        }
        Command::Show { album, page } => {
            let album = store.get_album(AlbumId::from(album))?;
            let start = page * cfg.photos_per_page;
            let photos = album.page(start, cfg.photos_per_page);
            println!("{} / page {page}", album.title());
            if photos.is_empty() {
                println!("  (no photos on this page)");
            }
            for (offset, photo) in photos.iter().enumerate() {
                let label = if photo.has_backing_file() {
                    photo.source_path.display().to_string()
                } else {
                    "(cover, no file)".to_owned()
                };
                let dims = photo
                    .buffer
                    .as_ref()
                    .map(|b| format!("{}x{}", b.width(), b.height()))
                    .unwrap_or_else(|| "-".to_owned());
                println!("  {:>3}  {dims:>9}  {label}", start + offset);
            }
        }
        Command::Adjust {
            photo,
            brightness,
            saturation,
            contrast,
            out,
        } => {
            let original = decoder.decode(&photo)?;
            let adjusted = adjust::adjust(
                &original,
                ToneParams {
                    brightness,
                    saturation,
                    contrast,
                },
            );
            loader::encode(&adjusted)
                .save(&out)
                .with_context(|| format!("writing adjusted image to {}", out.display()))?;
            println!("wrote {}", out.display());
        }
    }
    Ok(())
}
