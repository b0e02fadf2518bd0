// SPDX-License-Identifier: MIT OR Apache-2.0

//! FEN-like encoding of Glinski board positions
//!
//! The format mirrors classic FEN adapted to the hexagonal board: the
//! eleven storage ranks are written top (rank 10) to bottom, separated
//! by `/`. Digit runs skip empty files and accumulate decimally, so
//! `11` clears a whole rank. Letters `pnbrqk` place pieces, uppercase
//! for White. A rank may stop early; unmentioned files stay empty. The
//! first space ends the board data and everything after it (side to
//! move, counters) is ignored.
//!
//! Placements addressed to coordinates cut away by the hexagonal
//! outline are dropped; only the 91 board cells are ever populated.

use thiserror::Error;

use crate::position::Position;
use crate::{HexCell, Piece};

/// Canonical Glinski starting position
pub const START_FEN: &str =
    "5b5/4qbk4/3n1b1n3/2r5r2/1ppppppppp1/11/5P5/4P1P4/P1B1P3/2P2B2P2/1PRNQBKNRP1 w - 0 1";

/// Reasons a position string fails to decode
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A letter in the board data names no piece
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
    /// A digit run or placement walked past the last file of a rank
    #[error("rank {rank} overflows past file 10")]
    FileOverflow { rank: i8 },
    /// More than eleven rank groups before the board data ended
    #[error("more than 11 ranks in board data")]
    TooManyRanks,
}

/// Decode board data into a position
///
/// Errors are fatal: a malformed string yields no partial position.
pub fn decode(input: &str) -> Result<Position, DecodeError> {
    let mut position = Position::empty();
    let mut rank: i8 = 10;
    let mut file: i8 = 0;
    let mut run: u32 = 0;

    for c in input.chars() {
        if let Some(d) = c.to_digit(10) {
            run = run.saturating_mul(10).saturating_add(d);
            continue;
        }
        file = flush_run(file, rank, &mut run)?;
        match c {
            '/' => {
                if rank == 0 {
                    return Err(DecodeError::TooManyRanks);
                }
                rank -= 1;
                file = 0;
            }
            ' ' => break,
            _ => {
                if file > 10 {
                    return Err(DecodeError::FileOverflow { rank });
                }
                let piece = Piece::from_fen_letter(c).ok_or(DecodeError::UnknownPiece(c))?;
                let cell = HexCell::new(file, rank);
                if cell.is_valid() {
                    position.set(cell, Some(piece));
                }
                file += 1;
            }
        }
    }
    flush_run(file, rank, &mut run)?;

    tracing::debug!(pieces = position.pieces().count(), "decoded board position");
    Ok(position)
}

/// Serialize a position's board data
///
/// Ranks are always written in full, so empty trailing files come out
/// as an explicit run instead of the short form decode also accepts.
pub fn encode(position: &Position) -> String {
    let mut out = String::new();
    for rank in (0..11i8).rev() {
        if rank < 10 {
            out.push('/');
        }
        let mut run = 0u32;
        for file in 0..11i8 {
            let cell = HexCell::new(file, rank);
            let piece = if cell.is_valid() { position.get(cell) } else { None };
            match piece {
                Some(p) => {
                    if run > 0 {
                        out.push_str(&run.to_string());
                        run = 0;
                    }
                    out.push(p.fen_letter());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }
    }
    out
}

fn flush_run(file: i8, rank: i8, run: &mut u32) -> Result<i8, DecodeError> {
    if *run == 0 {
        return Ok(file);
    }
    let next = file as u32 + *run;
    *run = 0;
    if next > 11 {
        return Err(DecodeError::FileOverflow { rank });
    }
    Ok(next as i8)
}
