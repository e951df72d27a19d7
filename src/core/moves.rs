//! Move representation
//!
//! A move is an ordered pair of squares. It carries no piece or capture
//! metadata: the mover is whatever occupies the start square when the move
//! is applied.

use super::board::Square;
use std::fmt;

/// A relocation from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Move { start, end }
    }

    /// The same relocation backwards. Replaying a capture this way does not
    /// resurrect the captured piece; pair it with an explicit record of the
    /// captured occupant.
    #[inline]
    pub const fn reversed(self) -> Self {
        Move {
            start: self.end,
            end: self.start,
        }
    }

    /// Parse from coordinate notation (e.g. "e2e4").
    pub fn from_coords(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let start = Square::from_coords(&s[0..2])?;
        let end = Square::from_coords(&s[2..4])?;
        Some(Move::new(start, end))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
