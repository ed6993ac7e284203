//! Core engine of the tile-islands puzzle - pure, deterministic, and testable
//!
//! A rectangular board of colored tiles. The player removes same-colored connected
//! groups ("islands") of at least [`MIN_ISLAND_SIZE`](types::MIN_ISLAND_SIZE) tiles,
//! the tiles above fall into the holes, and the game is over when no removable island
//! is left. This crate has **no** dependencies on rendering, input or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major board storage with `y = 0` at the bottom
//! - [`island`]: same-type neighbours, flood fill and whole-board legal-move scans
//! - [`visited`]: bitset shared by the flood fills of one scan
//! - [`compact`]: per-column gap discovery and the gravity pass
//! - [`engine`]: [`GridEngine`], removal requests, locks and the settling window
//! - [`catalog`]: [`TileTypeCatalog`], the shared type index → description registry
//! - [`rng`]: seeded LCG used for board randomisation
//! - [`snapshot`]: read-only board export for renderers and logs
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tile_islands_core::types::{Rgb, TileDescription};
//! use tile_islands_core::{EngineConfig, GridEngine, RemovalOutcome, TileTypeCatalog};
//!
//! // The catalog has to describe every type the engine may place.
//! let catalog = Arc::new(TileTypeCatalog::new());
//! for color in [Rgb::new(200, 40, 40), Rgb::new(40, 200, 40), Rgb::new(40, 40, 200)] {
//!     catalog.register(TileDescription::new(color)).unwrap();
//! }
//!
//! let config = EngineConfig::new(6, 8, 3).with_seed(42);
//! let mut engine = GridEngine::new(config, catalog).unwrap();
//! assert!(engine.has_legal_move());
//!
//! // Click the seed cell of the first removable island.
//! let island = engine.removable_islands().remove(0);
//! let pos = engine.grid().pos(island.seed());
//! match engine.try_remove_at(pos.x, pos.y) {
//!     RemovalOutcome::Removed(removal) => assert_eq!(removal.summary.count, island.len()),
//!     RemovalOutcome::NoOp(why) => panic!("unexpected rejection: {}", why.message()),
//! }
//!
//! // The caller animates the falls, then releases the settling window.
//! engine.finish_settling();
//! assert!(!engine.is_locked());
//! ```

pub mod catalog;
pub mod compact;
pub mod engine;
pub mod error;
pub mod grid;
pub mod island;
pub mod rng;
pub mod snapshot;
pub mod visited;

pub use tile_islands_types as types;

// Re-export commonly used types for convenience
pub use catalog::TileTypeCatalog;
pub use compact::{CompactionReport, FallDescriptor, Gap};
pub use engine::{
    EngineConfig, GridEngine, Rejection, Removal, RemovalOutcome, RemovalSummary,
};
pub use error::{CatalogError, ConfigError, GridTextError};
pub use grid::Grid;
pub use island::Island;
pub use rng::SimpleRng;
pub use snapshot::GridSnapshot;
pub use visited::VisitedSet;
