// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board colors as plain RGB 8-bit values
//!
//! The core stays toolkit-agnostic; front-ends convert these into
//! whatever color type their painter wants.

/// RGB color with 8-bit channels
pub type Rgb = [u8; 3];

/// Lightest of the three cell shades
pub const LIGHT_CELL: Rgb = [200, 200, 200];
/// Middle cell shade
pub const GREY_CELL: Rgb = [120, 120, 120];
/// Darkest cell shade
pub const DARK_CELL: Rgb = [30, 30, 30];

/// The three cell shades indexed by [`crate::render::cell_shade`]
pub const CELL_SHADES: [Rgb; 3] = [LIGHT_CELL, GREY_CELL, DARK_CELL];

/// Fill for the cell under the pointer
pub const HIGHLIGHT: Rgb = [200, 10, 10];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shades_are_distinct() {
        assert_ne!(LIGHT_CELL, GREY_CELL);
        assert_ne!(GREY_CELL, DARK_CELL);
        assert_ne!(LIGHT_CELL, DARK_CELL);
    }

    #[test]
    fn test_shade_order_light_to_dark() {
        for i in 0..2 {
            assert!(CELL_SHADES[i][0] > CELL_SHADES[i + 1][0]);
        }
    }
}
