pub mod cli;
pub mod core;
pub mod engine;

pub use crate::core::board::{Board, BoardError, Color, Piece, PieceKind, Square};
pub use crate::core::moves::Move;
pub use cli::Cli;
pub use engine::book::OpeningBook;
pub use engine::search::Engine;
