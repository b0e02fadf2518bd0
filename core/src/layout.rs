// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hexagon layout math for the Glinski board
//!
//! Flat-top hexagons stand in eleven columns. Cells stack vertically
//! within a column, and every column is shifted down by half a cell
//! height per file of distance from the center file, folding the grid
//! into the hexagonal outline. All math is in f32 pixel space.

use serde::{Deserialize, Serialize};

use crate::HexCell;

/// sqrt(3) at f32 precision; a unit-edge flat-top hexagon is this tall
pub const SQRT_3: f32 = 1.732_050_8;

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    /// Create a new pixel position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Immutable board geometry: hexagon edge length and pixel origin
///
/// The origin is the top-left corner of the board's bounding rectangle.
/// Cell anchors returned by [`BoardLayout::cell_to_pixel`] are the
/// top-left vertex of the hexagon's horizontal top edge, which is also
/// where sprites are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Hexagon edge length in pixels
    pub cell_size: f32,
    /// Top-left corner of the board bounding box
    pub origin: PixelPos,
}

impl BoardLayout {
    /// Create a layout with the given edge length and origin
    pub fn new(cell_size: f32, origin: PixelPos) -> Self {
        Self { cell_size, origin }
    }

    /// Height of one hexagon, `cell_size * sqrt(3)`
    pub fn cell_height(&self) -> f32 {
        self.cell_size * SQRT_3
    }

    /// Bounding rectangle of the whole board as `(width, height)`
    ///
    /// Eleven columns at 1.5 edge lengths of horizontal advance plus
    /// the two outer half-wings give a width of 17 edge lengths; the
    /// center column alone spans the full height of 11 cells.
    pub fn board_size(&self) -> (f32, f32) {
        (17.0 * self.cell_size, 11.0 * self.cell_height())
    }

    /// Vertical displacement of a column from the board top
    fn column_offset(&self, file: i8) -> f32 {
        (file as f32 - 5.0).abs() * self.cell_height() * 0.5
    }

    /// Anchor point of a cell's hexagon (top-left vertex of its top edge)
    ///
    /// Defined for any coordinate; only meaningful for cells that pass
    /// [`HexCell::is_valid`].
    pub fn cell_to_pixel(&self, cell: HexCell) -> PixelPos {
        let s = self.cell_size;
        let x = cell.file as f32 * 1.5 * s + 0.5 * s + self.origin.x;
        let y = (10 - cell.rank) as f32 * self.cell_height() - self.column_offset(cell.file)
            + self.origin.y;
        PixelPos::new(x, y)
    }

    /// Center point of a cell's hexagon
    pub fn cell_center(&self, cell: HexCell) -> PixelPos {
        let anchor = self.cell_to_pixel(cell);
        PixelPos::new(
            anchor.x + self.cell_size * 0.5,
            anchor.y + self.cell_height() * 0.5,
        )
    }

    /// The six outline vertices of a cell's hexagon, clockwise from the
    /// anchor
    pub fn hexagon_vertices(&self, anchor: PixelPos) -> [PixelPos; 6] {
        let s = self.cell_size;
        let h = self.cell_height() * 0.5;
        [
            PixelPos::new(anchor.x, anchor.y),
            PixelPos::new(anchor.x + s, anchor.y),
            PixelPos::new(anchor.x + 1.5 * s, anchor.y + h),
            PixelPos::new(anchor.x + s, anchor.y + 2.0 * h),
            PixelPos::new(anchor.x, anchor.y + 2.0 * h),
            PixelPos::new(anchor.x - 0.5 * s, anchor.y + h),
        ]
    }

    /// Map a pixel back to the cell whose hexagon contains it
    ///
    /// Returns [`HexCell::OFF_BOARD`] for pixels outside the bounding
    /// rectangle. Pixels inside the rectangle but over the cut corners
    /// resolve to coordinates that fail [`HexCell::is_valid`]; no
    /// validity filtering happens here, so callers decide how to treat
    /// near-miss coordinates.
    ///
    /// Horizontally a pixel is either inside exactly one column's core
    /// rectangle or inside the half-cell strip where a column's slanted
    /// wing interleaves with its right neighbor's. In the strip the two
    /// file candidates are separated by the zig-zag of hexagon edges,
    /// which alternates direction every half row of the left column.
    /// The rank then falls out of the forward formula for the resolved
    /// column. A cell's top edge counts as part of that cell, so every
    /// in-board pixel maps to exactly one cell.
    pub fn pixel_to_cell(&self, pos: PixelPos) -> HexCell {
        let s = self.cell_size;
        let ch = self.cell_height();
        let x = pos.x - self.origin.x;
        let y = pos.y - self.origin.y;
        let (width, height) = self.board_size();
        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return HexCell::OFF_BOARD;
        }

        let file_high = (x / (1.5 * s)).floor() as i32;
        let file_low = ((x - 0.5 * s) / (1.5 * s)).floor() as i32;

        let file = if file_low == file_high {
            file_low
        } else {
            let offset_low = (file_low as f32 - 5.0).abs() * ch * 0.5;
            let half_rows = (y + offset_low) / (ch * 0.5);
            let row = half_rows.floor();
            let frac_y = half_rows - row;
            let frac_x = (x - file_high as f32 * 1.5 * s) / (0.5 * s);
            let left = if row as i32 % 2 == 0 {
                frac_x < frac_y
            } else {
                frac_x < 1.0 - frac_y
            };
            if left {
                file_low
            } else {
                file_high
            }
        };

        let offset = (file as f32 - 5.0).abs() * ch * 0.5;
        let rank = 10 - ((y + offset) / ch).floor() as i32;
        HexCell::new(file as i8, rank as i8)
    }
}
