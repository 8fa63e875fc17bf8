use log::{debug, warn};

use super::address::AddressTranslator;
use super::room::{Tile, TileMap};
use crate::bus::{Interface, Ports};

/// Blank background cell
pub const BLANK: Tile = 0x00;

/// Fills a rectangle of background cells with one tile
///
/// No bounds checks: the rectangle must lie inside the region the translator covers.
pub fn fill_rect(
    hw: &mut dyn Interface,
    nta: &AddressTranslator,
    (col, row): (u8, u8),
    (width, height): (u8, u8),
    tile: Tile,
) {
    let mut addr = nta.translate(col, row);
    for _ in 0..height {
        hw.set_addr(addr);
        for _ in 0..width {
            hw.write_data(tile);
        }
        addr += nta.row_stride();
    }
}

/// Paints the visible part of a room at its origin
pub fn draw_room(hw: &mut dyn Interface, nta: &AddressTranslator, room: &TileMap) {
    let (col, row) = room.origin();
    let (width, height) = room.visible();

    let mut addr = nta.translate(col, row);
    for y in 0..height {
        hw.set_addr(addr);
        for x in 0..width {
            hw.write_data(room.tile(x, y));
        }
        addr += nta.row_stride();
    }
}

/// Bordered text box
///
/// Border glyphs come in a 3x3 block of the tile set starting at `glyph`: one
/// row of 16 tiles per border row (corner, edge, corner).
#[derive(Debug, Clone, Copy)]
pub struct Dialog {
    /// Screen tile of the top-left corner
    pub at: (u8, u8),
    /// Text cells inside the border
    pub interior: (u8, u8),
    pub glyph: Tile,
    pub text: &'static [u8],
}

/// The box the A button opens
pub const DIALOG: Dialog = Dialog {
    at: (10, 8),
    interior: (4, 2),
    glyph: 0x65,
    text: b"HARDWORK",
};

/// Tile distance between two border glyph rows
const GLYPH_ROW: Tile = 0x10;

impl Dialog {
    /// Number of characters that fit inside
    pub fn capacity(&self) -> usize {
        self.interior.0 as usize * self.interior.1 as usize
    }

    /// Outer size including the border
    pub fn size(&self) -> (u8, u8) {
        (self.interior.0 + 2, self.interior.1 + 2)
    }

    /// Draws the box, then parks the address latch at 0x0000
    ///
    /// Text runs left to right, top to bottom. Cells past the end of the text
    /// stay blank; text past the interior is dropped.
    pub fn show(&self, hw: &mut dyn Interface, nta: &AddressTranslator) {
        if self.text.len() > self.capacity() {
            warn!(
                "dialog text is {} characters, only {} fit",
                self.text.len(),
                self.capacity()
            );
        }
        debug!("dialog at {:?}", self.at);

        let (width, height) = self.interior;
        let mut text = self.text.iter().copied();
        let mut addr = nta.translate(self.at.0, self.at.1);

        hw.set_addr(addr);
        self.border_row(hw, self.glyph);

        let side = self.glyph + GLYPH_ROW;
        for _ in 0..height {
            addr += nta.row_stride();
            hw.set_addr(addr);
            hw.write_data(side);
            for _ in 0..width {
                hw.write_data(text.next().unwrap_or(BLANK));
            }
            hw.write_data(side + 2);
        }

        addr += nta.row_stride();
        hw.set_addr(addr);
        self.border_row(hw, self.glyph + 2 * GLYPH_ROW);

        hw.set_addr(0x0000);
    }

    fn border_row(&self, hw: &mut dyn Interface, left: Tile) {
        hw.write_data(left);
        for _ in 0..self.interior.0 {
            hw.write_data(left + 1);
        }
        hw.write_data(left + 2);
    }
}
