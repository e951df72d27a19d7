//! Move selection: a two-ply material search.
//!
//! The engine evaluates its one-ply best candidate against the opponent's
//! best reply; if the exchange still comes out ahead it plays the candidate,
//! otherwise it runs every legal move through the same exchange and keeps
//! the best survivor.

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::book::OpeningBook;
use crate::engine::eval::material_score;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error};

/// The automated player. Holds no board of its own: every method operates
/// on the live position passed in.
pub struct Engine {
    color: Color,
    book: Option<OpeningBook>,
    in_opening: bool,
    rng: StdRng,
}

impl Engine {
    /// An engine playing `color`, with OS-seeded randomness for book probes.
    pub fn new(color: Color) -> Self {
        Self::from_rng(color, StdRng::from_rng(&mut rand::rng()))
    }

    /// An engine with a fixed seed, for reproducible behaviour.
    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self::from_rng(color, StdRng::seed_from_u64(seed))
    }

    fn from_rng(color: Color, rng: StdRng) -> Self {
        Engine {
            color,
            book: None,
            in_opening: true,
            rng,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Attach an opening book. It is consulted before searching until the
    /// first probe miss, after which the game is out of book for good.
    pub fn set_book(&mut self, book: OpeningBook) {
        self.book = Some(book);
    }

    /// Select and play a move on the live board, returning the move played.
    /// `None` means no legal move exists; the caller tells checkmate from
    /// stalemate via the board's own queries.
    pub fn make_move(&mut self, board: &mut Board) -> Option<Move> {
        if self.in_opening {
            if let Some(mv) = self.probe_book(board) {
                debug!(%mv, "playing book move");
                board.make(mv);
                return Some(mv);
            }
            self.in_opening = false;
        }
        let mv = self.choose_move(board)?;
        match board.make(mv) {
            Some(captured) => debug!(%mv, captured = %captured.to_char(), "playing move"),
            None => debug!(%mv, "playing move"),
        }
        Some(mv)
    }

    /// The two-ply decision procedure. Speculative lines run inside a
    /// snapshot guard, so the board always comes back untouched.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        let opponent = self.color.opposite();
        let baseline = material_score(board, self.color);
        let own_moves = board.legal_moves(self.color);
        if own_moves.is_empty() {
            return None;
        }

        // The one-ply favourite, probed against the opponent's best answer.
        let (candidate, after_exchange) = {
            let mut probe = Restore::new(board);
            let candidate = best_reply(&mut probe, &own_moves, self.color)?;
            probe.make(candidate);
            let replies = probe.legal_moves(opponent);
            if let Some(reply) = best_reply(&mut probe, &replies, opponent) {
                probe.make(reply);
            }
            (candidate, material_score(&probe, self.color))
        };
        if after_exchange > baseline {
            debug!(%candidate, baseline, after_exchange, "candidate survives the exchange");
            return Some(candidate);
        }

        // Otherwise run every legal move through the same exchange and keep
        // the best outcome; ties go to the last move enumerated.
        let mut best: Option<Move> = None;
        let mut best_score = i32::MIN;
        for &mv in &own_moves {
            let score = {
                let mut probe = Restore::new(board);
                probe.make(mv);
                let replies = probe.legal_moves(opponent);
                if let Some(reply) = best_reply(&mut probe, &replies, opponent) {
                    probe.make(reply);
                }
                material_score(&probe, self.color)
            };
            if score >= best_score {
                best_score = score;
                best = Some(mv);
            }
        }
        debug!(score = best_score, "two-ply sweep complete");
        best
    }

    fn probe_book(&mut self, board: &mut Board) -> Option<Move> {
        let book = self.book.as_ref()?;
        let mv = book.probe(&board.snapshot(), &mut self.rng)?;
        // A book entry is only trusted when it is legal right now.
        if board.legal_moves(self.color).contains(&mv) {
            Some(mv)
        } else {
            None
        }
    }
}

/// The move in `moves` that maximises `color`'s material score one ply
/// ahead, simulated via make/unmake. Ties keep the first move reaching the
/// best score; an empty list yields `None`.
pub fn best_reply(board: &mut Board, moves: &[Move], color: Color) -> Option<Move> {
    let mut best: Option<Move> = None;
    let mut best_score = i32::MIN;
    for &mv in moves {
        let captured = board.make(mv);
        let score = material_score(board, color);
        board.unmake(mv, captured);
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }
    best
}

/// Scoped snapshot of a board: dereferences to the board for speculative
/// play and restores the saved position when dropped, whatever the exit
/// path.
struct Restore<'a> {
    board: &'a mut Board,
    saved: String,
}

impl<'a> Restore<'a> {
    fn new(board: &'a mut Board) -> Self {
        let saved = board.snapshot();
        Restore { board, saved }
    }
}

impl Deref for Restore<'_> {
    type Target = Board;
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Restore<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        // A snapshot the board itself exported always parses.
        if let Err(err) = self.board.restore(&self.saved) {
            error!(%err, "failed to restore position snapshot");
        }
    }
}
