//! Engine module - owns a board and applies the game rules to it
//!
//! The engine ties the grid, island discovery and compaction together:
//!
//! - Construction and [`GridEngine::reset`] randomise tiles until a legal move exists.
//! - [`GridEngine::try_remove_at`] removes the island under a cell, drops the tiles
//!   above the hole and refreshes the cached legal-move flag.
//! - Two locks gate removals: an external one owned by the caller (pause, menus) and a
//!   settling window that covers the fall animation of the last removal. The window is
//!   logical time; the caller advances it with [`GridEngine::tick`].
//!
//! Every engine holds the shared [`TileTypeCatalog`] and refuses to start unless the
//! catalog describes each type it may place. The catalog never shrinks, so this holds
//! for the engine's whole life.
//!
//! Gameplay outcomes are plain values: a click that does nothing is a
//! [`RemovalOutcome::NoOp`] carrying the [`Rejection`] reason.

use std::sync::Arc;

use crate::catalog::TileTypeCatalog;
use crate::compact::CompactionReport;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::island::Island;
use crate::rng::SimpleRng;
use crate::types::{
    Cell, CellPos, TypeIndex, DEFAULT_COLOR_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_ISLAND_SIZE,
};

/// Random fills attempted before a legal move is planted by hand.
const MAX_RANDOMIZE_ATTEMPTS: u32 = 10_000;

/// Board dimensions, number of tile types and RNG seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    pub color_count: u16,
    pub seed: u32,
}

impl EngineConfig {
    pub fn new(width: u16, height: u16, color_count: u16) -> Self {
        Self {
            width,
            height,
            color_count,
            seed: 1,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.color_count == 0 {
            return Err(ConfigError::ZeroColors);
        }
        check_cell_count(self.width as usize * self.height as usize)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_COLOR_COUNT)
    }
}

fn check_cell_count(cells: usize) -> Result<(), ConfigError> {
    if cells < MIN_ISLAND_SIZE {
        return Err(ConfigError::TooFewCells { cells });
    }
    Ok(())
}

fn check_catalog(catalog: &TileTypeCatalog, color_count: u16) -> Result<(), ConfigError> {
    if !catalog.covers(color_count) {
        return Err(ConfigError::UncoveredColors {
            colors: color_count,
            registered: catalog.len(),
        });
    }
    Ok(())
}

/// What was removed, captured before the board was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalSummary {
    pub count: usize,
    pub type_index: TypeIndex,
}

/// A successful removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub summary: RemovalSummary,
    /// Cell the removal was requested at.
    pub cell: CellPos,
    /// Positions the island occupied before compaction.
    pub removed: Vec<CellPos>,
    pub compaction: CompactionReport,
    /// Legal-move flag after the board settled.
    pub has_legal_move: bool,
}

/// Why a removal request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Locked,
    Settling,
    NoLegalMoves,
    OutOfBounds,
    EmptyCell,
    IslandTooSmall { size: usize },
}

impl Rejection {
    pub fn code(self) -> &'static str {
        match self {
            Rejection::Locked => "locked",
            Rejection::Settling => "settling",
            Rejection::NoLegalMoves => "no_legal_moves",
            Rejection::OutOfBounds => "out_of_bounds",
            Rejection::EmptyCell => "empty_cell",
            Rejection::IslandTooSmall { .. } => "island_too_small",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rejection::Locked => "board is locked by the caller",
            Rejection::Settling => "tiles are still falling",
            Rejection::NoLegalMoves => "no removable island is left",
            Rejection::OutOfBounds => "cell is outside the board",
            Rejection::EmptyCell => "cell is empty",
            Rejection::IslandTooSmall { .. } => "island is smaller than the minimum size",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed(Removal),
    NoOp(Rejection),
}

impl RemovalOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemovalOutcome::Removed(_))
    }

    pub fn removal(&self) -> Option<&Removal> {
        match self {
            RemovalOutcome::Removed(removal) => Some(removal),
            RemovalOutcome::NoOp(_) => None,
        }
    }

    pub fn summary(&self) -> Option<RemovalSummary> {
        self.removal().map(|removal| removal.summary)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            RemovalOutcome::Removed(_) => None,
            RemovalOutcome::NoOp(rejection) => Some(*rejection),
        }
    }
}

/// Board state plus the rules that mutate it.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    color_count: u16,
    catalog: Arc<TileTypeCatalog>,
    rng: SimpleRng,
    /// Cached result of the last legal-move scan.
    has_legal_move: bool,
    /// Caller-driven lock (pause, menus, game over screens).
    locked: bool,
    /// Remaining fall animation time of the last removal.
    settle_remaining_ms: u32,
}

impl GridEngine {
    /// Create an engine with a random board that has at least one legal move.
    ///
    /// `catalog` must already describe types `0..config.color_count`.
    pub fn new(config: EngineConfig, catalog: Arc<TileTypeCatalog>) -> Result<Self, ConfigError> {
        config.validate()?;
        check_catalog(&catalog, config.color_count)?;
        let mut engine = Self {
            grid: Grid::new(config.width, config.height)?,
            color_count: config.color_count,
            catalog,
            rng: SimpleRng::new(config.seed),
            has_legal_move: false,
            locked: false,
            settle_remaining_ms: 0,
        };
        engine.randomize_until_playable();
        Ok(engine)
    }

    /// Create an engine around a prepared board.
    ///
    /// The board is used as is, so it may start without a legal move. Every tile must
    /// be below `color_count`, and `catalog` must describe all of `0..color_count`.
    pub fn from_grid(
        grid: Grid,
        color_count: u16,
        catalog: Arc<TileTypeCatalog>,
    ) -> Result<Self, ConfigError> {
        if color_count == 0 {
            return Err(ConfigError::ZeroColors);
        }
        check_cell_count(grid.len())?;
        check_catalog(&catalog, color_count)?;
        if let Some(type_index) = grid
            .cells()
            .iter()
            .flatten()
            .copied()
            .find(|&t| t >= color_count)
        {
            return Err(ConfigError::TypeOutOfRange {
                type_index,
                color_count,
            });
        }
        let has_legal_move = grid.has_legal_move();
        Ok(Self {
            grid,
            color_count,
            catalog,
            rng: SimpleRng::default(),
            has_legal_move,
            locked: false,
            settle_remaining_ms: 0,
        })
    }

    /// Replace the board with a new random one that has a legal move.
    ///
    /// The RNG stream continues, so consecutive resets give different boards. The
    /// settling window is cleared; the external lock is left alone.
    pub fn reset(&mut self) {
        self.settle_remaining_ms = 0;
        self.randomize_until_playable();
    }

    /// Restart the RNG stream from `seed` and reset the board.
    pub fn reseed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.reset();
    }

    fn randomize_until_playable(&mut self) {
        let color_count = self.color_count;
        for _ in 0..MAX_RANDOMIZE_ATTEMPTS {
            let rng = &mut self.rng;
            self.grid.fill_with(|| rng.next_type(color_count));
            if self.grid.has_legal_move() {
                self.has_legal_move = true;
                return;
            }
        }

        // Cells 0, 1 and 2 are always connected: a row when the board is at least
        // three wide, otherwise two cells of the bottom row plus the one above cell 0.
        let kind = self.grid.at(0).unwrap_or(0);
        self.grid.set_at(1, Some(kind));
        self.grid.set_at(2, Some(kind));
        self.has_legal_move = true;
    }

    /// Remove the island under `(x, y)` if it is large enough and the board accepts
    /// input, then let the tiles above fall.
    pub fn try_remove_at(&mut self, x: u16, y: u16) -> RemovalOutcome {
        if self.locked {
            return RemovalOutcome::NoOp(Rejection::Locked);
        }
        if self.is_settling() {
            return RemovalOutcome::NoOp(Rejection::Settling);
        }
        if !self.has_legal_move {
            return RemovalOutcome::NoOp(Rejection::NoLegalMoves);
        }
        let Some(index) = self.grid.index(x, y) else {
            return RemovalOutcome::NoOp(Rejection::OutOfBounds);
        };
        self.remove_island_at(index)
    }

    fn remove_island_at(&mut self, index: usize) -> RemovalOutcome {
        let Some(island) = self.grid.find_island(index) else {
            return RemovalOutcome::NoOp(Rejection::EmptyCell);
        };
        if !island.is_removable() {
            return RemovalOutcome::NoOp(Rejection::IslandTooSmall { size: island.len() });
        }

        // Summarise while the tiles are still on the board.
        let summary = RemovalSummary {
            count: island.len(),
            type_index: island.type_index,
        };
        let removed = island.positions(self.grid.width());

        for &idx in &island.indices {
            self.grid.set_at(idx, None);
        }
        let compaction = self.grid.compact();
        self.has_legal_move = self.grid.has_legal_move();
        self.settle_remaining_ms = compaction.settle_ms();

        RemovalOutcome::Removed(Removal {
            summary,
            cell: self.grid.pos(index),
            removed,
            compaction,
            has_legal_move: self.has_legal_move,
        })
    }

    /// Island under `(x, y)`, whatever its size. `None` for empty or off-board cells.
    pub fn island_at(&self, x: u16, y: u16) -> Option<Island> {
        let index = self.grid.index(x, y)?;
        self.grid.find_island(index)
    }

    /// Every island that could be removed right now.
    pub fn removable_islands(&self) -> Vec<Island> {
        self.grid.removable_islands()
    }

    /// Whether a removable island exists. Cached; refreshed after every removal.
    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether removals are currently refused by either lock.
    pub fn is_locked(&self) -> bool {
        self.locked || self.is_settling()
    }

    /// Whether the caller's lock is held.
    pub fn is_externally_locked(&self) -> bool {
        self.locked
    }

    /// Whether tiles from the last removal are still falling.
    pub fn is_settling(&self) -> bool {
        self.settle_remaining_ms > 0
    }

    pub fn settle_remaining_ms(&self) -> u32 {
        self.settle_remaining_ms
    }

    /// Advance the settling window by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.settle_remaining_ms = self.settle_remaining_ms.saturating_sub(elapsed_ms);
    }

    /// End the settling window immediately (no animation is being shown).
    pub fn finish_settling(&mut self) {
        self.settle_remaining_ms = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `(x, y)`, `None` when off the board.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.grid.get(x, y)
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn color_count(&self) -> u16 {
        self.color_count
    }

    /// Descriptions for the types on this board.
    pub fn catalog(&self) -> &TileTypeCatalog {
        &self.catalog
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }
}
