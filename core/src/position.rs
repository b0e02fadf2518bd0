// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board position storage
//!
//! A position is the full 11x11 coordinate space flattened into one
//! vector; the hexagonal outline leaves 91 of the 121 slots usable and
//! the rest permanently empty. Positions are built once from board
//! data and read every frame by the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fen::{self, DecodeError};
use crate::{HexCell, Piece};

/// Width of the backing storage in files and ranks
const STORAGE_SIDE: usize = 11;

/// Piece placement for a whole board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    cells: Vec<Option<Piece>>,
}

impl Position {
    /// Create an empty position
    pub fn empty() -> Self {
        Self {
            cells: vec![None; STORAGE_SIDE * STORAGE_SIDE],
        }
    }

    /// Decode a position from FEN-like board data
    pub fn from_fen(input: &str) -> Result<Self, DecodeError> {
        fen::decode(input)
    }

    /// The Glinski starting position
    pub fn initial() -> Self {
        fen::decode(fen::START_FEN).expect("start position FEN is valid")
    }

    /// Serialize this position's board data
    pub fn to_fen(&self) -> String {
        fen::encode(self)
    }

    /// Piece at the given cell, `None` when empty
    ///
    /// # Panics
    ///
    /// Panics when the coordinate lies outside the 11x11 storage. That
    /// is a programming error, not a user input: the renderer and the
    /// decoder only ever address storage coordinates.
    pub fn get(&self, cell: HexCell) -> Option<Piece> {
        self.cells[Self::index(cell)]
    }

    /// Place or clear a piece at the given cell
    ///
    /// # Panics
    ///
    /// Panics when the coordinate lies outside the 11x11 storage.
    pub fn set(&mut self, cell: HexCell, piece: Option<Piece>) {
        let idx = Self::index(cell);
        self.cells[idx] = piece;
    }

    /// Iterate over the occupied board cells
    pub fn pieces(&self) -> impl Iterator<Item = (HexCell, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, slot)| {
            let cell = HexCell::new((idx % STORAGE_SIDE) as i8, (idx / STORAGE_SIDE) as i8);
            let piece = (*slot)?;
            cell.is_valid().then_some((cell, piece))
        })
    }

    fn index(cell: HexCell) -> usize {
        assert!(
            (0..STORAGE_SIDE as i8).contains(&cell.file)
                && (0..STORAGE_SIDE as i8).contains(&cell.rank),
            "coordinate outside board storage: {cell:?}"
        );
        cell.rank as usize * STORAGE_SIDE + cell.file as usize
    }
}

impl fmt::Display for Position {
    /// Debug dump of the raw storage, rank 10 at the top
    ///
    /// Cut-corner slots print as blanks, empty cells as dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..STORAGE_SIDE as i8).rev() {
            let mut line = String::new();
            for file in 0..STORAGE_SIDE as i8 {
                let cell = HexCell::new(file, rank);
                let c = if !cell.is_valid() {
                    ' '
                } else {
                    match self.get(cell) {
                        Some(piece) => piece.fen_letter(),
                        None => '.',
                    }
                };
                line.push(c);
                line.push(' ');
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
