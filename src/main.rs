//! Headless autoplay runner (default binary).
//!
//! Builds a board from `ISLANDS_*` environment variables and command-line flags, plays
//! it to the end with the configured policy and prints a summary. Progress goes to
//! stderr; `--log PATH` (or `ISLANDS_LOG_PATH`) also writes a JSON-lines event log.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use tile_islands::autoplay;
use tile_islands::config::AutoplayConfig;
use tile_islands::core::{GridEngine, TileTypeCatalog};
use tile_islands::replay::{Event, EventLog};
use tile_islands::types::{Rgb, TileDescription};

/// Colors handed to the catalog, one per tile type.
const DEMO_PALETTE: [Rgb; 12] = [
    Rgb::new(230, 57, 70),
    Rgb::new(42, 157, 143),
    Rgb::new(244, 162, 97),
    Rgb::new(69, 123, 157),
    Rgb::new(233, 196, 106),
    Rgb::new(131, 56, 236),
    Rgb::new(6, 214, 160),
    Rgb::new(255, 0, 110),
    Rgb::new(58, 134, 255),
    Rgb::new(251, 86, 7),
    Rgb::new(141, 153, 174),
    Rgb::new(128, 185, 24),
];

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AutoplayConfig::from_env().apply_args(&args)?;
    let quiet = config.quiet;
    let progress = |line: String| {
        if !quiet {
            eprintln!("[Autoplay] {}", line);
        }
    };

    let color_count = config.engine.color_count as usize;
    if color_count > DEMO_PALETTE.len() {
        return Err(anyhow!(
            "--colors {} exceeds the {} colors of the demo palette",
            color_count,
            DEMO_PALETTE.len()
        ));
    }
    let catalog = Arc::new(TileTypeCatalog::new());
    catalog.register_all(
        DEMO_PALETTE[..color_count]
            .iter()
            .copied()
            .map(TileDescription::new),
    )?;

    let mut engine = GridEngine::new(config.engine, catalog)?;
    progress(format!(
        "board {}x{}, {} colors, seed {}, policy {}",
        engine.width(),
        engine.height(),
        engine.color_count(),
        config.engine.seed,
        config.policy.as_str()
    ));

    let mut log = match config.log_path.as_deref() {
        Some(path) => {
            progress(format!("writing event log to {}", path));
            Some(EventLog::append_to(path)?)
        }
        None => None,
    };
    if let Some(log) = log.as_mut() {
        log.record(&Event::start(&engine, config.engine.seed, config.policy.as_str()))?;
    }

    let report = autoplay::run(&mut engine, config.policy, config.max_moves, |event| {
        if let Event::Removal {
            move_no,
            x,
            y,
            count,
            has_legal_move,
            ..
        } = event
        {
            progress(format!(
                "move {}: removed {} tiles at ({}, {}){}",
                move_no,
                count,
                x,
                y,
                if *has_legal_move { "" } else { ", no moves left" }
            ));
        }
        match log.as_mut() {
            Some(log) => log.record(event),
            None => Ok(()),
        }
    })?;

    if let Some(log) = log.as_mut() {
        log.record(&report.finish_event())?;
        log.flush()?;
    }

    println!(
        "moves: {}  tiles removed: {}  tiles left: {}  ({})",
        report.moves,
        report.tiles_removed,
        report.tiles_left,
        report.finish.as_str()
    );
    print!("{}", engine.grid().to_text());
    for type_index in 0..engine.color_count() {
        let Rgb { r, g, b } = engine.catalog().lookup(type_index).color;
        let symbol = std::char::from_digit(type_index as u32, 36).unwrap_or('#');
        println!("  {} = #{:02x}{:02x}{:02x}", symbol, r, g, b);
    }
    Ok(())
}
