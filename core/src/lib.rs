// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hexchess Core - Board Model and Hexagon Geometry
//!
//! This crate provides the board-side functionality including:
//! - Glinski board coordinates and the cell validity predicate
//! - FEN-like position parsing and generation
//! - Hexagon layout math (cell-to-pixel and pixel-to-cell mapping)
//! - A painter-agnostic board renderer

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod fen;
pub mod layout;
pub mod palette;
pub mod position;
pub mod render;

use serde::{Deserialize, Serialize};

/// Piece color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White player (bottom side of the board)
    White,
    /// Black player
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Kind of chess piece
///
/// Discriminants follow the classic piece numbering so that sprite
/// sheets laid out pawn-to-king can be indexed with `code - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All kinds in sprite-sheet column order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase FEN letter for this kind
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a lowercase FEN letter
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece; an empty cell is `Option::<Piece>::None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning side
    pub color: Color,
    /// Piece kind
    pub kind: PieceKind,
}

impl Piece {
    /// Create a new piece
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a FEN letter; uppercase is White, lowercase is Black
    pub fn from_fen_letter(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c.to_ascii_lowercase())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }

    /// FEN letter for this piece; uppercase for White
    pub fn fen_letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Numeric piece code: kind in the low three bits, color in bit 3
    ///
    /// White pieces are 1..=6, black pieces 9..=14.
    pub fn code(&self) -> u8 {
        let kind = self.kind as u8;
        match self.color {
            Color::White => kind,
            Color::Black => kind | 8,
        }
    }

    /// Sprite sheet cell for this piece as `(column, row)`
    ///
    /// The sheet holds six columns (pawn, knight, bishop, rook, queen,
    /// king) and two rows (White on row 0, Black on row 1).
    pub fn atlas_cell(&self) -> (usize, usize) {
        let column = (self.kind as u8 - 1) as usize;
        let row = match self.color {
            Color::White => 0,
            Color::Black => 1,
        };
        (column, row)
    }
}

/// Board coordinate on the hexagonal grid
///
/// Files index the eleven columns left to right, ranks run bottom to
/// top along each column. Both are signed so that the inverse pixel
/// mapping can express near-miss coordinates just outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCell {
    /// Column index, 0..=10 on the board
    pub file: i8,
    /// Row index along the column, 0..=10 on the board
    pub rank: i8,
}

impl HexCell {
    /// Sentinel for "no cell", e.g. a pointer outside the board
    pub const OFF_BOARD: HexCell = HexCell { file: -1, rank: -1 };

    /// Create a new cell coordinate
    pub fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Check whether this coordinate names one of the 91 board cells
    ///
    /// The 11x11 coordinate space loses its corners to the hexagonal
    /// outline: above rank 5 each rank narrows by one file on both
    /// sides, leaving 9, 7, 5, 3 and finally 1 cell on rank 10.
    pub fn is_valid(&self) -> bool {
        if !(0..=10).contains(&self.file) || !(0..=10).contains(&self.rank) {
            return false;
        }
        if self.rank > 5 {
            let taper = self.rank - 5;
            (taper..=10 - taper).contains(&self.file)
        } else {
            true
        }
    }

    /// The six neighboring cells, which may lie off the board
    ///
    /// Columns fold toward the center file: a horizontal step away from
    /// the center meets ranks `r` and `r - 1`, a step toward it meets
    /// ranks `r` and `r + 1`. Callers filter with [`HexCell::is_valid`].
    pub fn neighbors(&self) -> [HexCell; 6] {
        let (f, r) = (self.file, self.rank);
        let mut out = [HexCell::OFF_BOARD; 6];
        out[0] = HexCell::new(f, r + 1);
        out[1] = HexCell::new(f, r - 1);
        let mut i = 2;
        for d in [-1i8, 1] {
            let nf = f + d;
            if (nf - 5).abs() > (f - 5).abs() {
                out[i] = HexCell::new(nf, r);
                out[i + 1] = HexCell::new(nf, r - 1);
            } else {
                out[i] = HexCell::new(nf, r);
                out[i + 1] = HexCell::new(nf, r + 1);
            }
            i += 2;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn test_valid_cell_census() {
        let per_rank = |rank: i8| {
            (0..11)
                .filter(|&file| HexCell::new(file, rank).is_valid())
                .count()
        };
        for rank in 0..=5 {
            assert_eq!(per_rank(rank), 11, "rank {rank}");
        }
        assert_eq!(per_rank(6), 9);
        assert_eq!(per_rank(7), 7);
        assert_eq!(per_rank(8), 5);
        assert_eq!(per_rank(9), 3);
        assert_eq!(per_rank(10), 1);

        let total: usize = (0..11).map(per_rank).sum();
        assert_eq!(total, 91);
    }

    #[test]
    fn test_column_heights() {
        let heights: Vec<usize> = (0..11)
            .map(|file| {
                (0..11)
                    .filter(|&rank| HexCell::new(file, rank).is_valid())
                    .count()
            })
            .collect();
        assert_eq!(heights, vec![6, 7, 8, 9, 10, 11, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_off_board_cells() {
        assert!(!HexCell::OFF_BOARD.is_valid());
        assert!(!HexCell::new(-1, 0).is_valid());
        assert!(!HexCell::new(0, 11).is_valid());
        assert!(!HexCell::new(11, 0).is_valid());
        // Corners cut by the taper
        assert!(!HexCell::new(0, 6).is_valid());
        assert!(!HexCell::new(10, 6).is_valid());
        assert!(!HexCell::new(4, 10).is_valid());
        assert!(!HexCell::new(6, 10).is_valid());
        // The single top cell sits on the center file
        assert!(HexCell::new(5, 10).is_valid());
    }

    #[test]
    fn test_neighbor_symmetry() {
        for file in 0..11 {
            for rank in 0..11 {
                let cell = HexCell::new(file, rank);
                if !cell.is_valid() {
                    continue;
                }
                for n in cell.neighbors() {
                    if n.is_valid() {
                        assert!(
                            n.neighbors().contains(&cell),
                            "{cell:?} missing from neighbors of {n:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        // Interior cells keep all six neighbors; the lone top cell
        // keeps three (the cell below and the rank-9 diagonal pair).
        let center = HexCell::new(5, 5);
        assert_eq!(center.neighbors().iter().filter(|n| n.is_valid()).count(), 6);
        let top = HexCell::new(5, 10);
        assert_eq!(top.neighbors().iter().filter(|n| n.is_valid()).count(), 3);
    }

    #[test]
    fn test_piece_codes() {
        let wp = Piece::new(Color::White, PieceKind::Pawn);
        let wk = Piece::new(Color::White, PieceKind::King);
        let bp = Piece::new(Color::Black, PieceKind::Pawn);
        let bk = Piece::new(Color::Black, PieceKind::King);
        assert_eq!(wp.code(), 1);
        assert_eq!(wk.code(), 6);
        assert_eq!(bp.code(), 9);
        assert_eq!(bk.code(), 14);
    }

    #[test]
    fn test_atlas_cells() {
        assert_eq!(Piece::new(Color::White, PieceKind::Pawn).atlas_cell(), (0, 0));
        assert_eq!(Piece::new(Color::White, PieceKind::King).atlas_cell(), (5, 0));
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).atlas_cell(), (4, 1));
        // All twelve pieces land on distinct cells of the 6x2 sheet
        let mut seen = std::collections::HashSet::new();
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let cell = Piece::new(color, kind).atlas_cell();
                assert!(cell.0 < 6 && cell.1 < 2);
                assert!(seen.insert(cell));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_fen_letters() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_fen_letter(piece.fen_letter()), Some(piece));
            }
        }
        assert_eq!(Piece::from_fen_letter('x'), None);
        assert_eq!(
            Piece::from_fen_letter('Q'),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }
}
