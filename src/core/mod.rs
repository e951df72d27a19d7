//! Core chess types
//!
//! This module contains the position model and move representation:
//! - Squares, colors, and pieces
//! - The 8x8 board with legality filtering and check detection
//! - The snapshot codec used for save/restore during search

pub mod board;
pub mod moves;

pub use board::{Board, BoardError, CharGrid, Color, EMPTY_SQUARE, Piece, PieceKind, Square};
pub use moves::Move;
