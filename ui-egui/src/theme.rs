// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visual configuration for the board window
//!
//! Themes are plain JSON files so users can restyle the board without
//! rebuilding. Cell shades stay in the core palette; the theme covers
//! everything around them.

use std::path::Path;

use anyhow::{Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Board window theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTheme {
    /// Window title
    pub window_title: String,
    /// Page background behind the board
    pub background: SerializableColor,
    /// Hexagon outline color
    pub cell_stroke: SerializableColor,
    /// Hexagon outline width in pixels
    pub cell_stroke_width: f32,
    /// Glyph color for White's pieces
    pub white_piece: SerializableColor,
    /// Glyph color for Black's pieces
    pub black_piece: SerializableColor,
    /// Glyph size as a fraction of the cell height
    pub glyph_scale: f32,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            window_title: "Hexchess".to_string(),
            background: Color32::from_rgb(40, 40, 44).into(),
            cell_stroke: Color32::from_rgb(15, 15, 15).into(),
            cell_stroke_width: 1.0,
            white_piece: Color32::from_rgb(245, 245, 240).into(),
            black_piece: Color32::from_rgb(18, 16, 14).into(),
            glyph_scale: 0.62,
        }
    }
}

impl BoardTheme {
    /// Load a theme from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        let theme = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse theme file {}", path.display()))?;
        Ok(theme)
    }

    /// Save this theme as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write theme file {}", path.display()))?;
        Ok(())
    }
}
