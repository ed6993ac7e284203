//! Headless driver: plays an engine to the end with a fixed island-choice policy.
//!
//! There is no animation, so the settling window is released right after each removal.

use anyhow::{bail, Result};

use crate::config::Policy;
use crate::core::{GridEngine, Island, RemovalOutcome};
use crate::replay::Event;

/// Why an autoplay run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    NoLegalMoves,
    MoveLimit,
}

impl FinishReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FinishReason::NoLegalMoves => "no_legal_moves",
            FinishReason::MoveLimit => "move_limit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayReport {
    pub moves: u32,
    pub tiles_removed: usize,
    pub tiles_left: usize,
    pub finish: FinishReason,
}

impl AutoplayReport {
    pub fn finish_event(&self) -> Event {
        Event::Finish {
            moves: self.moves,
            tiles_removed: self.tiles_removed,
            tiles_left: self.tiles_left,
            reason: self.finish.as_str().to_string(),
        }
    }
}

/// Island the policy would remove next, if any.
pub fn choose(engine: &GridEngine, policy: Policy) -> Option<Island> {
    let islands = engine.removable_islands();
    // Islands come ordered by seed index. `max_by_key` returns the last of equal
    // maxima, so search in reverse to prefer the lowest seed.
    match policy {
        Policy::First => islands.into_iter().next(),
        Policy::Smallest => islands.into_iter().min_by_key(Island::len),
        Policy::Largest => islands.into_iter().rev().max_by_key(Island::len),
    }
}

/// Play `engine` until no legal move is left or `max_moves` removals were made.
/// Every removal is reported to `on_event`.
pub fn run(
    engine: &mut GridEngine,
    policy: Policy,
    max_moves: Option<u32>,
    mut on_event: impl FnMut(&Event) -> Result<()>,
) -> Result<AutoplayReport> {
    let mut moves = 0u32;
    let mut tiles_removed = 0usize;

    let finish = loop {
        if !engine.has_legal_move() {
            break FinishReason::NoLegalMoves;
        }
        if max_moves.is_some_and(|limit| moves >= limit) {
            break FinishReason::MoveLimit;
        }
        let Some(island) = choose(engine, policy) else {
            bail!("legal-move flag is set but no removable island was found");
        };

        let cell = engine.grid().pos(island.seed());
        match engine.try_remove_at(cell.x, cell.y) {
            RemovalOutcome::Removed(removal) => {
                moves += 1;
                tiles_removed += removal.summary.count;
                let hash = engine.snapshot().board_hash;
                on_event(&Event::removal(moves, &removal, hash))?;
            }
            RemovalOutcome::NoOp(rejection) => {
                on_event(&Event::rejection(cell, rejection))?;
                bail!("removal at {} rejected: {}", cell, rejection.message());
            }
        }
        engine.finish_settling();
    };

    Ok(AutoplayReport {
        moves,
        tiles_removed,
        tiles_left: engine.occupied_count(),
        finish,
    })
}
