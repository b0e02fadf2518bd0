// SPDX-License-Identifier: MIT OR Apache-2.0

//! egui front-end for the hexagonal chess board renderer
//!
//! The core crate decides what to draw; this crate owns the window,
//! the pointer, and the egui draw calls.

#![deny(unsafe_code)]

pub mod app;
pub mod board_widget;
pub mod theme;
