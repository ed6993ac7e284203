//! Tile islands (workspace facade crate).
//!
//! Re-exports the engine crates under `tile_islands::{core, types}` and hosts the
//! headless autoplay driver used by the `tile-islands` binary.

pub use tile_islands_core as core;
pub use tile_islands_types as types;

pub mod autoplay;
pub mod config;
pub mod replay;
