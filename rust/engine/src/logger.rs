use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::deck::PLAYERS;
use crate::engine::{Engine, GameOutcome};
use crate::round::TraceEntry;

/// Complete record of one deal: the cards dealt, every turn and the result.
/// Serialized to JSONL for history and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this deal (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Shuffle seed (enables deterministic replay)
    pub seed: u64,
    /// Seat that took the kitty
    pub landlord_id: usize,
    /// Compact hand strings per seat, after the kitty was handed over
    pub hands: [String; PLAYERS],
    /// Compact string of the kitty
    pub kitty: String,
    /// Chronological list of turns
    pub actions: Vec<TraceEntry>,
    /// Seat that went out first, if any
    pub winner: Option<usize>,
    /// Payoff per seat when the deal finished
    #[serde(default)]
    pub payoff: Option<[u32; PLAYERS]>,
    /// Timestamp when the deal was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Snapshot of a finished (or capped) deal. `ts` is left empty until
    /// the record is written.
    pub fn from_outcome(game_id: String, engine: &Engine, outcome: &GameOutcome) -> Self {
        Self {
            game_id,
            seed: engine.seed(),
            landlord_id: outcome.landlord_id,
            hands: engine.initial_hands().clone(),
            kitty: engine.kitty().iter().map(|c| c.rank.symbol()).collect(),
            actions: outcome.trace.clone(),
            winner: outcome.winner,
            payoff: outcome.payoff,
            ts: None,
        }
    }

    /// Fills `ts` with the current UTC time unless already set.
    pub fn stamped(mut self) -> Self {
        if self.ts.is_none() {
            self.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self
    }

    /// One JSONL line, newline included.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Game id: deal date plus a six-digit sequence number, `YYYYMMDD-NNNNNN`.
pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends game records to a JSONL history file, one deal per line.
pub struct GameLogger {
    /// `None` for an id-only logger that discards records
    out: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for writing, creating missing parent directories. Ids
    /// are dated today (UTC).
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => create_dir_all(dir)?,
            _ => {}
        }
        Ok(Self {
            out: Some(BufWriter::new(File::create(path)?)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger with a fixed date that writes nothing; for id tests.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            out: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    /// Writes `record`, stamping it first when it has no timestamp.
    pub fn write(&mut self, record: &GameRecord) -> io::Result<()> {
        let line = record.clone().stamped().to_json_line().map_err(io::Error::other)?;
        if let Some(out) = self.out.as_mut() {
            out.write_all(line.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id to the engine's finished deal, writes it and
    /// returns the written record.
    pub fn record(&mut self, engine: &Engine, outcome: &GameOutcome) -> io::Result<GameRecord> {
        let record = GameRecord::from_outcome(self.next_id(), engine, outcome).stamped();
        self.write(&record)?;
        Ok(record)
    }
}
