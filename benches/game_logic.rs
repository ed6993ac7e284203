use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_islands::core::{EngineConfig, Grid, GridEngine, TileTypeCatalog};
use tile_islands::types::{Rgb, TileDescription};

fn catalog(colors: u8) -> Arc<TileTypeCatalog> {
    let catalog = TileTypeCatalog::new();
    catalog
        .register_all((0..colors).map(|i| TileDescription::new(Rgb::new(i, i, i))))
        .unwrap();
    Arc::new(catalog)
}

fn bench_new_engine(c: &mut Criterion) {
    let catalog = catalog(4);
    c.bench_function("new_engine_10x12_4", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let config = EngineConfig::new(10, 12, 4).with_seed(seed);
            GridEngine::new(black_box(config), Arc::clone(&catalog))
        })
    });
}

fn bench_legal_move_scan_dead_board(c: &mut Criterion) {
    // Checkerboard: the scan has to visit every cell.
    let mut grid = Grid::new(64, 64).unwrap();
    for y in 0..64u16 {
        for x in 0..64u16 {
            grid.set(x, y, Some((x + y) % 2));
        }
    }

    c.bench_function("legal_move_scan_64x64_dead", |b| {
        b.iter(|| black_box(&grid).has_legal_move())
    });
}

fn bench_remove_and_compact(c: &mut Criterion) {
    let engine = GridEngine::new(EngineConfig::new(20, 20, 3).with_seed(7), catalog(3)).unwrap();

    c.bench_function("remove_first_island_20x20", |b| {
        b.iter(|| {
            let mut engine = engine.clone();
            let island = engine.removable_islands().remove(0);
            let pos = engine.grid().pos(island.seed());
            engine.try_remove_at(pos.x, pos.y)
        })
    });
}

fn bench_compact_half_empty(c: &mut Criterion) {
    let mut grid = Grid::new(32, 32).unwrap();
    for idx in 0..grid.len() {
        if (idx / 3) % 2 == 0 {
            grid.set_at(idx, Some((idx % 5) as u16));
        }
    }

    c.bench_function("compact_32x32_striped", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            grid.compact()
        })
    });
}

criterion_group!(
    benches,
    bench_new_engine,
    bench_legal_move_scan_dead_board,
    bench_remove_and_compact,
    bench_compact_half_empty
);
criterion_main!(benches);
