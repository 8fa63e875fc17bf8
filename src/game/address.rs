use crate::bus::NAMETABLE_0;

/// Bytes per background tile row
pub const ROW_STRIDE: u16 = 32;
/// Background tile rows on screen
pub const NAMETABLE_ROWS: u8 = 30;

/// Maps tile coordinates to linear video memory addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressTranslator {
    base: u16,
    row_stride: u16,
    rows: u8,
}

/// Translator for nametable 0
pub const NAMETABLE: AddressTranslator = AddressTranslator::new(NAMETABLE_0, ROW_STRIDE, NAMETABLE_ROWS);

impl AddressTranslator {
    pub const fn new(base: u16, row_stride: u16, rows: u8) -> Self {
        Self {
            base,
            row_stride,
            rows,
        }
    }

    pub fn row_stride(&self) -> u16 {
        self.row_stride
    }

    /// Returns `base + row * row_stride + col`
    ///
    /// `row` must be inside the region; rows past the end land in whatever
    /// follows it (attribute table, next nametable).
    pub fn translate(&self, col: u8, row: u8) -> u16 {
        debug_assert!(row < self.rows, "row {} outside the {} row region", row, self.rows);
        self.base + u16::from(row) * self.row_stride + u16::from(col)
    }
}
