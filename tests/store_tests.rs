use std::fs;

use rust_photo_album::error::Error;
use rust_photo_album::loader::FileDecoder;
use rust_photo_album::pixel::PixelBuffer;
use rust_photo_album::store::{AlbumId, AlbumStore};
use tempfile::tempdir;

fn buffer(width: u32, height: u32, samples: &[u8]) -> PixelBuffer {
    PixelBuffer::from_raw(width, height, samples.to_vec()).unwrap()
}

fn cover() -> PixelBuffer {
    buffer(2, 1, &[10, 10, 10, 200, 200, 200])
}

fn open_store(dir: &tempfile::TempDir) -> AlbumStore {
    AlbumStore::open(dir.path().join("album_data.txt"), &FileDecoder)
}

#[test]
fn create_album_rejects_empty_cover() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    assert!(matches!(
        store.create_album("Trip", PixelBuffer::empty()),
        Err(Error::InvalidCover)
    ));
    assert!(store.is_empty());
}

#[test]
fn unknown_album_ids_are_rejected() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    assert!(matches!(
        store.add_photo(AlbumId::from(0), "p.png", cover()),
        Err(Error::UnknownAlbum(_))
    ));
    assert!(matches!(
        store.remove_last_photo(AlbumId::from(9)),
        Err(Error::UnknownAlbum(_))
    ));
    assert!(matches!(
        store.get_album(AlbumId::from(0)),
        Err(Error::UnknownAlbum(_))
    ));
}

#[test]
fn add_photo_requires_decoded_pixels() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    let id = store.create_album("Trip", cover()).unwrap();
    assert!(matches!(
        store.add_photo(id, "p.png", PixelBuffer::empty()),
        Err(Error::Decode { .. })
    ));
    assert_eq!(store.get_album(id).unwrap().photos().len(), 1);
}

#[test]
fn every_mutation_writes_through_to_disk() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("album_data.txt");
    let mut store = AlbumStore::open(&file, &FileDecoder);

    let id = store.create_album("Trip", cover()).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), "Trip\n\nEND_ALBUM\n");

    store
        .add_photo(id, "p.png", buffer(1, 3, &[0, 0, 0, 255, 255, 255, 128, 128, 128]))
        .unwrap();
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Trip\n\np.png\nEND_ALBUM\n"
    );
    assert_eq!(store.get_album(id).unwrap().photos().len(), 2);

    store.remove_last_photo(id).unwrap();
    assert_eq!(store.get_album(id).unwrap().photos().len(), 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), "Trip\n\nEND_ALBUM\n");
}

#[test]
fn remove_on_empty_album_is_a_noop() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    let id = store.create_album("Trip", cover()).unwrap();
    store.remove_last_photo(id).unwrap();
    assert!(store.get_album(id).unwrap().photos().is_empty());
    // Popping past empty neither errors nor rewrites anything.
    store.remove_last_photo(id).unwrap();
    assert!(store.get_album(id).unwrap().photos().is_empty());
}

#[test]
fn list_albums_scales_cover_thumbnails() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    store
        .create_album("Wide", buffer(8, 4, &[50; 8 * 4 * 3]))
        .unwrap();

    let summaries = store.list_albums(2);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Wide");
    assert_eq!(summaries[0].photo_count, 1);
    let thumb = summaries[0].cover.as_ref().unwrap();
    assert_eq!((thumb.width(), thumb.height()), (2, 1));
}

#[test]
fn paging_steps_three_at_a_time() {
    let tmp = tempdir().unwrap();
    let mut store = open_store(&tmp);
    let id = store.create_album("Trip", cover()).unwrap();
    for i in 0..6u8 {
        store
            .add_photo(id, format!("p{i}.png"), buffer(1, 1, &[i, i, i]))
            .unwrap();
    }

    let album = store.get_album(id).unwrap();
    assert_eq!(album.photos().len(), 7);
    assert_eq!(album.page(0, 3).len(), 3);
    assert_eq!(album.page(6, 3).len(), 1);
    assert_eq!(album.page(9, 3).len(), 0);

    // Forward stops once no further page exists; back stops at the start.
    assert_eq!(album.next_page_start(0, 3), 3);
    assert_eq!(album.next_page_start(3, 3), 6);
    assert_eq!(album.next_page_start(6, 3), 6);
    assert_eq!(album.prev_page_start(6, 3), 3);
    assert_eq!(album.prev_page_start(0, 3), 0);
}
