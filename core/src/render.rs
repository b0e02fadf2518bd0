// SPDX-License-Identifier: MIT OR Apache-2.0

//! Painter-agnostic board rendering
//!
//! The renderer walks the board, decides colors and placement, and
//! hands every draw call to a [`BoardPainter`] supplied by the
//! front-end. Hexagons go down first, sprites second, and the cell
//! under the pointer is repainted last so the highlight sits on top.

use crate::layout::{BoardLayout, PixelPos};
use crate::palette::{self, Rgb};
use crate::position::Position;
use crate::{HexCell, Piece};

/// Drawing backend the renderer delegates to
///
/// Implementations own the actual graphics resources; the renderer
/// only ever hands them anchor points in the layout's pixel space.
pub trait BoardPainter {
    /// Fill one hexagon whose anchor is the top-left vertex of its top
    /// edge
    fn fill_hexagon(&mut self, anchor: PixelPos, color: Rgb);
    /// Draw the sprite for a piece at the same anchor
    fn draw_sprite(&mut self, anchor: PixelPos, piece: Piece);
}

/// Shade index of a cell, 0..=2 into [`palette::CELL_SHADES`]
///
/// No two adjacent hexagons share a shade: every neighbor step changes
/// `|file - 5| - rank` by 1 or 2, never by a multiple of 3.
pub fn cell_shade(cell: HexCell) -> usize {
    ((cell.file as i32 - 5).abs() - cell.rank as i32).rem_euclid(3) as usize
}

/// Draw a full frame of the board through the painter
///
/// Invalid coordinates of the 11x11 space are skipped entirely. When
/// the pointer resolves to a valid cell that cell is refilled with the
/// highlight color and its occupant redrawn on top.
pub fn render(
    layout: &BoardLayout,
    position: &Position,
    pointer: Option<PixelPos>,
    painter: &mut dyn BoardPainter,
) {
    for rank in 0..11i8 {
        for file in 0..11i8 {
            let cell = HexCell::new(file, rank);
            if !cell.is_valid() {
                continue;
            }
            let anchor = layout.cell_to_pixel(cell);
            painter.fill_hexagon(anchor, palette::CELL_SHADES[cell_shade(cell)]);
        }
    }
    for (cell, piece) in position.pieces() {
        painter.draw_sprite(layout.cell_to_pixel(cell), piece);
    }
    if let Some(pos) = pointer {
        let cell = layout.pixel_to_cell(pos);
        if cell.is_valid() {
            tracing::trace!(file = cell.file, rank = cell.rank, "highlighting hovered cell");
            let anchor = layout.cell_to_pixel(cell);
            painter.fill_hexagon(anchor, palette::HIGHLIGHT);
            if let Some(piece) = position.get(cell) {
                painter.draw_sprite(anchor, piece);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    #[derive(Default)]
    struct RecordingPainter {
        fills: Vec<(PixelPos, Rgb)>,
        sprites: Vec<(PixelPos, Piece)>,
    }

    impl BoardPainter for RecordingPainter {
        fn fill_hexagon(&mut self, anchor: PixelPos, color: Rgb) {
            self.fills.push((anchor, color));
        }

        fn draw_sprite(&mut self, anchor: PixelPos, piece: Piece) {
            self.sprites.push((anchor, piece));
        }
    }

    fn layout() -> BoardLayout {
        BoardLayout::new(40.0, PixelPos::new(0.0, 0.0))
    }

    #[test]
    fn test_render_fills_every_cell_once() {
        let mut painter = RecordingPainter::default();
        render(&layout(), &Position::empty(), None, &mut painter);
        assert_eq!(painter.fills.len(), 91);
        assert_eq!(painter.sprites.len(), 0);
    }

    #[test]
    fn test_render_draws_every_piece() {
        let mut painter = RecordingPainter::default();
        render(&layout(), &Position::initial(), None, &mut painter);
        assert_eq!(painter.fills.len(), 91);
        assert_eq!(painter.sprites.len(), 36);
    }

    #[test]
    fn test_hover_repaints_on_top() {
        let l = layout();
        let position = Position::initial();
        let cell = HexCell::new(5, 0);
        let mut painter = RecordingPainter::default();
        render(&l, &position, Some(l.cell_center(cell)), &mut painter);

        assert_eq!(painter.fills.len(), 92);
        let (anchor, color) = *painter.fills.last().unwrap();
        assert_eq!(color, palette::HIGHLIGHT);
        assert_eq!(anchor, l.cell_to_pixel(cell));

        // The white bishop standing there is redrawn over the highlight
        assert_eq!(painter.sprites.len(), 37);
        let (_, piece) = *painter.sprites.last().unwrap();
        assert_eq!(piece, Piece::new(Color::White, PieceKind::Bishop));
    }

    #[test]
    fn test_pointer_outside_board_adds_nothing() {
        let mut painter = RecordingPainter::default();
        render(
            &layout(),
            &Position::empty(),
            Some(PixelPos::new(-5.0, -5.0)),
            &mut painter,
        );
        assert_eq!(painter.fills.len(), 91);
    }

    #[test]
    fn test_pointer_over_cut_corner_adds_nothing() {
        let l = layout();
        let mut painter = RecordingPainter::default();
        // Top-left of the bounding box hangs above the short columns
        render(&l, &Position::empty(), Some(PixelPos::new(5.0, 5.0)), &mut painter);
        assert_eq!(painter.fills.len(), 91);
    }

    #[test]
    fn test_shade_is_a_proper_coloring() {
        for file in 0..11i8 {
            for rank in 0..11i8 {
                let cell = HexCell::new(file, rank);
                if !cell.is_valid() {
                    continue;
                }
                for n in cell.neighbors() {
                    if n.is_valid() {
                        assert_ne!(
                            cell_shade(cell),
                            cell_shade(n),
                            "{cell:?} and {n:?} share a shade"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_top_cell_shade_is_dark() {
        assert_eq!(cell_shade(HexCell::new(5, 10)), 2);
        assert_eq!(palette::CELL_SHADES[2], palette::DARK_CELL);
    }
}
