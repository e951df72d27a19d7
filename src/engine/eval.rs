//! Material evaluation.

use crate::core::board::{Board, Color, PieceKind};

/// Fixed point value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Material advantage from `perspective`'s point of view: the signed sum of
/// piece values (White positive, Black negative), negated for Black.
pub fn material_score(board: &Board, perspective: Color) -> i32 {
    let total: i32 = board
        .pieces()
        .map(|piece| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum();
    match perspective {
        Color::White => total,
        Color::Black => -total,
    }
}
