// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hexagonal board widget
//!
//! Owns the widget rectangle and the pointer plumbing, sizes the board
//! to the available space every frame, and feeds draw calls from the
//! core renderer into the egui painter.

use egui::{Color32, Pos2, Stroke, Vec2};

use hexchess_core::layout::{BoardLayout, PixelPos, SQRT_3};
use hexchess_core::palette::Rgb;
use hexchess_core::position::Position;
use hexchess_core::render::{render, BoardPainter};
use hexchess_core::{Color, HexCell, Piece};

use crate::theme::BoardTheme;

/// Empty space kept around the board inside the widget rectangle
const BOARD_MARGIN: f32 = 16.0;

/// Piece glyphs laid out like the sprite sheet: one column per kind
/// (pawn to king), White on row 0 and Black on row 1
const PIECE_GLYPHS: [[char; 6]; 2] = [
    ['\u{2659}', '\u{2658}', '\u{2657}', '\u{2656}', '\u{2655}', '\u{2654}'],
    ['\u{265F}', '\u{265E}', '\u{265D}', '\u{265C}', '\u{265B}', '\u{265A}'],
];

/// Glyph drawn for a piece, chosen through its sprite sheet cell
pub fn piece_glyph(piece: Piece) -> char {
    let (column, row) = piece.atlas_cell();
    PIECE_GLYPHS[row][column]
}

/// Widget for rendering and interacting with the hexagonal board
pub struct BoardWidget {
    /// Smallest hexagon edge length the widget will shrink to
    min_cell_size: f32,
    /// Largest hexagon edge length the widget will grow to
    max_cell_size: f32,
    /// Cell under the pointer after the last frame
    hover_cell: Option<HexCell>,
}

impl BoardWidget {
    pub fn new() -> Self {
        Self {
            min_cell_size: 14.0,
            max_cell_size: 64.0,
            hover_cell: None,
        }
    }

    /// Cell under the pointer after the last call to
    /// [`BoardWidget::render`]
    pub fn hover_cell(&self) -> Option<HexCell> {
        self.hover_cell
    }

    /// Render the board and return the clicked cell if any
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        position: &Position,
        theme: &BoardTheme,
    ) -> Option<HexCell> {
        // Size the hexagons to the space the panel gives us
        let available = ui.available_size();
        let cell_size = ((available.x - 2.0 * BOARD_MARGIN) / 17.0)
            .min((available.y - 2.0 * BOARD_MARGIN) / (11.0 * SQRT_3))
            .clamp(self.min_cell_size, self.max_cell_size);
        let board = Vec2::new(17.0 * cell_size, 11.0 * SQRT_3 * cell_size);
        let desired = board + Vec2::splat(2.0 * BOARD_MARGIN);

        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());
        let origin = rect.center() - board * 0.5;
        let layout = BoardLayout::new(cell_size, PixelPos::new(origin.x, origin.y));

        let pointer = response.hover_pos().map(to_pixel);
        self.hover_cell = pointer
            .map(|p| layout.pixel_to_cell(p))
            .filter(|cell| cell.is_valid());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let mut board_painter = EguiBoardPainter {
                painter: &painter,
                layout: &layout,
                theme,
            };
            render(&layout, position, pointer, &mut board_painter);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let cell = layout.pixel_to_cell(to_pixel(pos));
                if cell.is_valid() {
                    tracing::debug!(
                        file = cell.file,
                        rank = cell.rank,
                        pos_x = pos.x,
                        pos_y = pos.y,
                        "board cell clicked"
                    );
                    return Some(cell);
                }
            }
        }

        None
    }
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new()
    }
}

fn to_pixel(pos: Pos2) -> PixelPos {
    PixelPos::new(pos.x, pos.y)
}

/// Core renderer delegate drawing through the egui painter
struct EguiBoardPainter<'a> {
    painter: &'a egui::Painter,
    layout: &'a BoardLayout,
    theme: &'a BoardTheme,
}

impl BoardPainter for EguiBoardPainter<'_> {
    fn fill_hexagon(&mut self, anchor: PixelPos, color: Rgb) {
        let points: Vec<Pos2> = self
            .layout
            .hexagon_vertices(anchor)
            .iter()
            .map(|p| Pos2::new(p.x, p.y))
            .collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            Color32::from_rgb(color[0], color[1], color[2]),
            Stroke::new(
                self.theme.cell_stroke_width,
                Color32::from(self.theme.cell_stroke),
            ),
        ));
    }

    fn draw_sprite(&mut self, anchor: PixelPos, piece: Piece) {
        let center = Pos2::new(
            anchor.x + self.layout.cell_size * 0.5,
            anchor.y + self.layout.cell_height() * 0.5,
        );
        let glyph = piece_glyph(piece);
        let font = egui::FontId::proportional(self.layout.cell_height() * self.theme.glyph_scale);
        let (fill, halo) = match piece.color {
            Color::White => (self.theme.white_piece, self.theme.black_piece),
            Color::Black => (self.theme.black_piece, self.theme.white_piece),
        };
        // A one pixel halo in the opposing color keeps glyphs readable
        // on same-toned cells
        for offset in [
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
        ] {
            self.painter.text(
                center + offset,
                egui::Align2::CENTER_CENTER,
                glyph,
                font.clone(),
                Color32::from(halo),
            );
        }
        self.painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            font,
            Color32::from(fill),
        );
    }
}
