//! JSON-lines event log for autoplay runs.
//!
//! One JSON object per line, tagged by `type`. Engine types are mapped into plain wire
//! structs here so the core crate stays free of serialization concerns.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::core::{FallDescriptor, GridEngine, Rejection, Removal};
use crate::types::CellPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallRecord {
    pub column: u16,
    pub from_row: u16,
    pub to_row: u16,
}

impl From<FallDescriptor> for FallRecord {
    fn from(value: FallDescriptor) -> Self {
        Self {
            column: value.column,
            from_row: value.from_row,
            to_row: value.to_row,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Start {
        width: u16,
        height: u16,
        color_count: u16,
        seed: u32,
        policy: String,
        /// Top row first; `0` is empty, otherwise `type_index + 1`.
        board: Vec<Vec<u16>>,
        board_hash: u64,
    },
    Removal {
        #[serde(rename = "move")]
        move_no: u32,
        x: u16,
        y: u16,
        count: usize,
        type_index: u16,
        falls: Vec<FallRecord>,
        settle_ms: u32,
        has_legal_move: bool,
        board_hash: u64,
    },
    Rejection {
        x: u16,
        y: u16,
        code: String,
    },
    Finish {
        moves: u32,
        tiles_removed: usize,
        tiles_left: usize,
        reason: String,
    },
}

impl Event {
    pub fn start(engine: &GridEngine, seed: u32, policy: &str) -> Self {
        let snap = engine.snapshot();
        Event::Start {
            width: snap.width,
            height: snap.height,
            color_count: engine.color_count(),
            seed,
            policy: policy.to_string(),
            board: snap.rows_top_down(),
            board_hash: snap.board_hash,
        }
    }

    pub fn removal(move_no: u32, removal: &Removal, board_hash: u64) -> Self {
        Event::Removal {
            move_no,
            x: removal.cell.x,
            y: removal.cell.y,
            count: removal.summary.count,
            type_index: removal.summary.type_index,
            falls: removal
                .compaction
                .falls
                .iter()
                .copied()
                .map(FallRecord::from)
                .collect(),
            settle_ms: removal.compaction.settle_ms(),
            has_legal_move: removal.has_legal_move,
            board_hash,
        }
    }

    pub fn rejection(cell: CellPos, rejection: Rejection) -> Self {
        Event::Rejection {
            x: cell.x,
            y: cell.y,
            code: rejection.code().to_string(),
        }
    }
}

/// Writes events as JSON lines to any writer.
pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(512),
        }
    }

    pub fn record(&mut self, event: &Event) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, event)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl EventLog<BufWriter<std::fs::File>> {
    /// Append to the log file at `path`, creating it if needed.
    pub fn append_to(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("event log: open {} failed: {}", path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_tagged_json_lines() {
        let mut log = EventLog::new(Vec::new());
        log.record(&Event::Rejection {
            x: 1,
            y: 2,
            code: "empty_cell".to_string(),
        })
        .unwrap();
        log.record(&Event::Finish {
            moves: 4,
            tiles_removed: 20,
            tiles_left: 5,
            reason: "no_legal_moves".to_string(),
        })
        .unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"type":"rejection","x":1,"y":2,"code":"empty_cell"}"#);

        let finish: Event = serde_json::from_str(lines[1]).unwrap();
        assert!(matches!(finish, Event::Finish { moves: 4, .. }));
    }

    #[test]
    fn test_removal_event_uses_move_key() {
        let event = Event::Removal {
            move_no: 3,
            x: 0,
            y: 0,
            count: 3,
            type_index: 1,
            falls: vec![FallRecord {
                column: 0,
                from_row: 4,
                to_row: 1,
            }],
            settle_ms: 450,
            has_legal_move: true,
            board_hash: 7,
        };
        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "removal");
        assert_eq!(value["move"], 3);
        assert_eq!(value["falls"][0]["from_row"], 4);
    }
}
