// SPDX-License-Identifier: MIT OR Apache-2.0

//! Widget-level checks that run without a window

use hexchess_core::{Color, Piece, PieceKind};
use hexchess_ui_egui::board_widget::{piece_glyph, BoardWidget};
use hexchess_ui_egui::theme::BoardTheme;

#[test]
fn test_widget_defaults() {
    let widget = BoardWidget::new();
    assert_eq!(widget.hover_cell(), None);
}

#[test]
fn test_glyphs_cover_all_twelve_pieces() {
    let mut seen = std::collections::HashSet::new();
    for color in [Color::White, Color::Black] {
        for kind in PieceKind::ALL {
            seen.insert(piece_glyph(Piece::new(color, kind)));
        }
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_white_glyphs_differ_from_black() {
    for kind in PieceKind::ALL {
        assert_ne!(
            piece_glyph(Piece::new(Color::White, kind)),
            piece_glyph(Piece::new(Color::Black, kind))
        );
    }
}

#[test]
fn test_king_glyphs() {
    assert_eq!(piece_glyph(Piece::new(Color::White, PieceKind::King)), '♔');
    assert_eq!(piece_glyph(Piece::new(Color::Black, PieceKind::King)), '♚');
}

#[test]
fn test_theme_file_round_trip() {
    let path = std::env::temp_dir().join(format!("hexchess-theme-{}.json", std::process::id()));
    let theme = BoardTheme::default();
    theme.save_to_file(&path).unwrap();
    let loaded = BoardTheme::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, theme);
}

#[test]
fn test_missing_theme_file_errors() {
    let path = std::env::temp_dir().join("hexchess-theme-that-does-not-exist.json");
    assert!(BoardTheme::load_from_file(&path).is_err());
}
