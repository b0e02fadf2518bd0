// SPDX-License-Identifier: MIT OR Apache-2.0

//! eframe application wrapping the board widget

use egui::Color32;

use hexchess_core::position::Position;
use hexchess_core::{HexCell, Piece};

use crate::board_widget::BoardWidget;
use crate::theme::BoardTheme;

/// Top level application state
pub struct HexchessApp {
    position: Position,
    theme: BoardTheme,
    widget: BoardWidget,
    /// Last cell the user clicked
    selected: Option<HexCell>,
}

impl HexchessApp {
    pub fn new(position: Position, theme: BoardTheme) -> Self {
        Self {
            position,
            theme,
            widget: BoardWidget::new(),
            selected: None,
        }
    }

    fn status_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(cell) = self.widget.hover_cell() {
            parts.push(format!("hover {}", cell_label(cell)));
        }
        if let Some(cell) = self.selected {
            match self.position.get(cell) {
                Some(piece) => parts.push(format!(
                    "selected {} ({})",
                    cell_label(cell),
                    piece_label(piece)
                )),
                None => parts.push(format!("selected {} (empty)", cell_label(cell))),
            }
        }
        if parts.is_empty() {
            parts.push(format!("{} pieces", self.position.pieces().count()));
        }
        parts.join("  |  ")
    }
}

impl eframe::App for HexchessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_line());
        });

        let frame = egui::Frame::default().fill(Color32::from(self.theme.background));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if let Some(cell) = self.widget.render(ui, &self.position, &self.theme) {
                self.selected = Some(cell);
            }
        });
    }
}

fn cell_label(cell: HexCell) -> String {
    format!("({}, {})", cell.file, cell.rank)
}

fn piece_label(piece: Piece) -> String {
    format!("{:?} {:?}", piece.color, piece.kind).to_lowercase()
}
