//! Pseudo-legal move generation
//!
//! One pure function per piece kind, consuming only the occupant-character
//! grid. Nothing here knows about check; `Board::is_legal` layers king
//! safety on top.

use crate::core::board::{CharGrid, Color, EMPTY_SQUARE, PieceKind, Square};
use crate::core::moves::Move;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All pseudo-legal moves for a piece of `kind` and `color` standing on
/// `from`. Recomputed fresh on every call.
pub fn piece_moves(kind: PieceKind, from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    match kind {
        PieceKind::Pawn => pawn_moves(from, color, grid),
        PieceKind::Knight => knight_moves(from, color, grid),
        PieceKind::Bishop => bishop_moves(from, color, grid),
        PieceKind::Rook => rook_moves(from, color, grid),
        PieceKind::Queen => queen_moves(from, color, grid),
        PieceKind::King => king_moves(from, color, grid),
    }
}

/// Forward pushes onto empty squares (double step from the start rank only,
/// with both squares empty) and diagonal captures onto enemy occupants.
pub fn pawn_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    if let Some(ahead) = from.offset(dir, 0) {
        if at(grid, ahead) == EMPTY_SQUARE {
            moves.push(Move::new(from, ahead));
            if from.rank == color.pawn_start_rank() {
                if let Some(two_ahead) = ahead.offset(dir, 0) {
                    if at(grid, two_ahead) == EMPTY_SQUARE {
                        moves.push(Move::new(from, two_ahead));
                    }
                }
            }
        }
    }

    for df in [1, -1] {
        if let Some(target) = from.offset(dir, df) {
            if is_enemy(at(grid, target), color) {
                moves.push(Move::new(from, target));
            }
        }
    }

    moves
}

/// The eight "L" jumps, clipped to the board and to non-friendly squares.
pub fn knight_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    offset_moves(from, color, grid, &KNIGHT_OFFSETS)
}

/// The four diagonal rays.
pub fn bishop_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    sliding_moves(from, color, grid, &DIAGONALS)
}

/// The four orthogonal rays.
pub fn rook_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    sliding_moves(from, color, grid, &ORTHOGONALS)
}

/// Orthogonal and diagonal rays combined.
pub fn queen_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    let mut moves = sliding_moves(from, color, grid, &ORTHOGONALS);
    moves.extend(sliding_moves(from, color, grid, &DIAGONALS));
    moves
}

/// The eight unit steps, clipped to the board and to non-friendly squares.
/// No castling.
pub fn king_moves(from: Square, color: Color, grid: &CharGrid) -> Vec<Move> {
    offset_moves(from, color, grid, &KING_OFFSETS)
}

fn offset_moves(from: Square, color: Color, grid: &CharGrid, offsets: &[(i8, i8)]) -> Vec<Move> {
    offsets
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| !is_friendly(at(grid, to), color))
        .map(|to| Move::new(from, to))
        .collect()
}

/// Walk each ray one square at a time: empty squares are destinations, the
/// first occupant ends the ray and is a destination only when enemy.
fn sliding_moves(from: Square, color: Color, grid: &CharGrid, directions: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(dr, df) in directions {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, df) {
            let occupant = at(grid, next);
            if occupant == EMPTY_SQUARE {
                moves.push(Move::new(from, next));
                sq = next;
                continue;
            }
            if is_enemy(occupant, color) {
                moves.push(Move::new(from, next));
            }
            break;
        }
    }
    moves
}

#[inline]
fn at(grid: &CharGrid, sq: Square) -> char {
    grid[sq.rank as usize][sq.file as usize]
}

#[inline]
fn is_friendly(c: char, color: Color) -> bool {
    match color {
        Color::White => c.is_ascii_uppercase(),
        Color::Black => c.is_ascii_lowercase(),
    }
}

#[inline]
fn is_enemy(c: char, color: Color) -> bool {
    is_friendly(c, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;

    fn sq(s: &str) -> Square {
        Square::from_coords(s).unwrap()
    }

    fn grid_of(snapshot: &str) -> CharGrid {
        Board::from_snapshot(snapshot).unwrap().to_char_grid()
    }

    #[test]
    fn test_knight_moves_center() {
        let grid = grid_of("8/8/8/8/4N3/8/8/8");
        assert_eq!(knight_moves(sq("e4"), Color::White, &grid).len(), 8);
    }

    #[test]
    fn test_knight_moves_corner() {
        let grid = grid_of("8/8/8/8/8/8/8/N7");
        assert_eq!(knight_moves(sq("a1"), Color::White, &grid).len(), 2);
    }

    #[test]
    fn test_king_moves_center() {
        let grid = grid_of("8/8/8/8/4K3/8/8/8");
        assert_eq!(king_moves(sq("e4"), Color::White, &grid).len(), 8);
    }

    #[test]
    fn test_king_moves_corner() {
        let grid = grid_of("8/8/8/8/8/8/8/K7");
        assert_eq!(king_moves(sq("a1"), Color::White, &grid).len(), 3);
    }

    #[test]
    fn test_rook_moves_empty_board() {
        let grid = grid_of("8/8/8/8/4R3/8/8/8");
        assert_eq!(rook_moves(sq("e4"), Color::White, &grid).len(), 14);
    }

    #[test]
    fn test_bishop_moves_empty_board() {
        let grid = grid_of("8/8/8/8/4B3/8/8/8");
        assert_eq!(bishop_moves(sq("e4"), Color::White, &grid).len(), 13);
    }

    #[test]
    fn test_queen_moves_empty_board() {
        let grid = grid_of("8/8/8/8/4Q3/8/8/8");
        assert_eq!(queen_moves(sq("e4"), Color::White, &grid).len(), 27);
    }

    #[test]
    fn test_ray_stops_at_friendly_piece() {
        // Rook on e4, own pawn on e6: e5 reachable, e6 and beyond not.
        let grid = grid_of("8/8/4P3/8/4R3/8/8/8");
        let moves = rook_moves(sq("e4"), Color::White, &grid);
        assert!(moves.contains(&Move::new(sq("e4"), sq("e5"))));
        assert!(!moves.contains(&Move::new(sq("e4"), sq("e6"))));
        assert!(!moves.contains(&Move::new(sq("e4"), sq("e7"))));
    }

    #[test]
    fn test_ray_captures_enemy_and_stops() {
        let grid = grid_of("8/8/4p3/8/4R3/8/8/8");
        let moves = rook_moves(sq("e4"), Color::White, &grid);
        assert!(moves.contains(&Move::new(sq("e4"), sq("e6"))));
        assert!(!moves.contains(&Move::new(sq("e4"), sq("e7"))));
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let grid = Board::startpos().to_char_grid();
        let moves = pawn_moves(sq("e2"), Color::White, &grid);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("e2"), sq("e3"))));
        assert!(moves.contains(&Move::new(sq("e2"), sq("e4"))));
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        // Knight on e3 blocks both the push and the double step.
        let grid = grid_of("8/8/8/8/8/4n3/4P3/8");
        assert!(pawn_moves(sq("e2"), Color::White, &grid).is_empty());
    }

    #[test]
    fn test_pawn_captures_diagonally_only() {
        // Black pawns on d5 and e5: e5 blocks the push, d5 is capturable.
        let grid = grid_of("8/8/8/3pp3/4P3/8/8/8");
        let moves = pawn_moves(sq("e4"), Color::White, &grid);
        assert_eq!(moves, vec![Move::new(sq("e4"), sq("d5"))]);
    }

    #[test]
    fn test_pawn_no_file_wraparound() {
        // Pawn on a4 with an enemy on h5: no capture across the board edge.
        let grid = grid_of("8/8/8/7p/P7/8/8/8");
        let moves = pawn_moves(sq("a4"), Color::White, &grid);
        assert_eq!(moves, vec![Move::new(sq("a4"), sq("a5"))]);
    }

    #[test]
    fn test_black_pawn_direction() {
        let grid = Board::startpos().to_char_grid();
        let moves = pawn_moves(sq("e7"), Color::Black, &grid);
        assert!(moves.contains(&Move::new(sq("e7"), sq("e6"))));
        assert!(moves.contains(&Move::new(sq("e7"), sq("e5"))));
    }

    #[test]
    fn test_no_move_targets_friendly_square() {
        let board = Board::startpos();
        let grid = board.to_char_grid();
        for piece in board.pieces() {
            for mv in piece_moves(piece.kind, piece.square, piece.color, &grid) {
                assert!(!is_friendly(at(&grid, mv.end), piece.color), "{mv} lands on a friendly piece");
            }
        }
    }
}
