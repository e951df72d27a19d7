//! Opening book: a JSON map from position snapshots to candidate moves.
//!
//! The file format is an object whose keys are snapshot strings and whose
//! values are arrays of `[start_rank, start_file, end_rank, end_file]`
//! quadruples. Listing a move more than once weights it more heavily in
//! the random probe.

use crate::core::board::Square;
use crate::core::moves::Move;
use rand::RngExt;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading an opening book.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read opening book: {0}")]
    Io(#[from] std::io::Error),
    #[error("opening book is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Opening book: snapshot string -> candidate coordinate quadruples.
#[derive(Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<[u8; 4]>>,
}

impl OpeningBook {
    /// Load a book from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BookError> {
        let text = fs::read_to_string(path)?;
        let entries = serde_json::from_str(&text)?;
        Ok(OpeningBook { entries })
    }

    /// Add a candidate move for a snapshot key.
    pub fn insert(&mut self, snapshot: &str, mv: Move) {
        self.entries
            .entry(snapshot.to_string())
            .or_default()
            .push([mv.start.rank, mv.start.file, mv.end.rank, mv.end.file]);
    }

    /// Probe the book for a position: a uniformly random candidate move for
    /// the snapshot key, if the key is present.
    pub fn probe(&self, snapshot: &str, rng: &mut StdRng) -> Option<Move> {
        let candidates = self.entries.get(snapshot)?;
        if candidates.is_empty() {
            return None;
        }
        let [sr, sf, er, ef] = candidates[rng.random_range(0..candidates.len())];
        Some(Move::new(Square::new(sr, sf), Square::new(er, ef)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
