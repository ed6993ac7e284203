//! Tile type catalog tests

use std::sync::Arc;
use std::thread;

use tile_islands::core::TileTypeCatalog;
use tile_islands::types::{Rgb, TileDescription};

fn color(r: u8, g: u8, b: u8) -> TileDescription {
    TileDescription::new(Rgb::new(r, g, b))
}

#[test]
fn test_same_attributes_same_index() {
    let catalog = TileTypeCatalog::new();
    let a = catalog.register(color(10, 20, 30)).unwrap();
    let b = catalog.register(color(10, 20, 30)).unwrap();
    assert_eq!(a, b);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_distinct_attributes_stable_indices() {
    let catalog = TileTypeCatalog::new();
    let first = catalog.register(color(1, 0, 0)).unwrap();
    let second = catalog.register(color(0, 1, 0)).unwrap();
    assert_eq!((first, second), (0, 1));

    // Later registrations never renumber earlier ones.
    catalog.register(color(0, 0, 1)).unwrap();
    assert_eq!(catalog.register(color(1, 0, 0)).unwrap(), 0);
    assert_eq!(catalog.lookup(1), color(0, 1, 0));
}

#[test]
fn test_lookup_out_of_range_returns_fallback() {
    let catalog = TileTypeCatalog::new();
    catalog.register(color(9, 9, 9)).unwrap();
    assert_eq!(catalog.lookup(42), TileDescription::default());
    assert_eq!(catalog.lookup(42).color, Rgb::WHITE);
}

#[test]
fn test_independent_catalogs_do_not_share_state() {
    let one = TileTypeCatalog::new();
    let two = TileTypeCatalog::new();
    one.register(color(1, 1, 1)).unwrap();
    assert_eq!(two.register(color(2, 2, 2)).unwrap(), 0);
    assert_eq!(one.lookup(0), color(1, 1, 1));
}

#[test]
fn test_shared_catalog_concurrent_registration() {
    let catalog = Arc::new(TileTypeCatalog::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                (0..16u8)
                    .map(|i| catalog.register(color(i, i, i)).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<u16>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(catalog.len(), 16);
    // Every thread saw the same index for the same color.
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    for (i, &idx) in results[0].iter().enumerate() {
        assert_eq!(catalog.lookup(idx), color(i as u8, i as u8, i as u8));
    }
}
