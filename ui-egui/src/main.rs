// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hexchess board viewer
//!
//! Decodes a board position, loads an optional theme, and opens the
//! egui window.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hexchess_core::position::Position;
use hexchess_ui_egui::app::HexchessApp;
use hexchess_ui_egui::theme::BoardTheme;

#[derive(Parser, Debug)]
#[command(
    name = "hexchess",
    version,
    about = "Glinski hexagonal chess board viewer"
)]
struct Args {
    /// Board position as FEN-like board data
    #[arg(long)]
    fen: Option<String>,
    /// JSON theme file overriding the built-in look
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let position = match &args.fen {
        Some(fen) => {
            Position::from_fen(fen).with_context(|| format!("invalid board position {fen:?}"))?
        }
        None => Position::initial(),
    };
    let theme = match &args.theme {
        Some(path) => BoardTheme::load_from_file(path)?,
        None => BoardTheme::default(),
    };
    info!(pieces = position.pieces().count(), "starting board viewer");

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(760.0, 880.0)),
        min_window_size: Some(egui::vec2(420.0, 520.0)),
        centered: true,
        ..Default::default()
    };
    let title = theme.window_title.clone();
    let app = HexchessApp::new(position, theme);
    eframe::run_native(&title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("failed to start window: {e}"))
}
