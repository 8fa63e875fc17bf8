/// Graphic cell code of the background grid
pub type Tile = u8;

/// The one tile code the player may stand on
pub const WALKABLE: Tile = 0x81;

/// Pixels per tile side
pub const TILE_SIZE: u8 = 8;

/// Columns of the sample room grid
pub const ROOM1_COLUMNS: u8 = 16;
/// Rows of the sample room grid
pub const ROOM1_ROWS: u8 = 13;

#[rustfmt::skip]
static ROOM1_TILES: [Tile; ROOM1_COLUMNS as usize * ROOM1_ROWS as usize] = [
    0x62, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x64, 0x00, 0x00,
    0x72, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x71, 0x71, 0x61, 0x73, 0x00, 0x00,
    0x72, 0x01, 0x98, 0x61, 0x61, 0xC0, 0xC1, 0x61, 0x61, 0x61, 0x90, 0x91, 0x61, 0x73, 0x00, 0x00,
    0x72, 0x01, 0xA8, 0x61, 0x61, 0xD0, 0xD1, 0x61, 0x61, 0x61, 0xA0, 0xA1, 0x61, 0x73, 0x00, 0x00,
    0x72, 0x01, 0xB8, 0x61, 0xA2, 0xA3, 0xA4, 0xA5, 0x61, 0x61, 0xB0, 0xB1, 0x61, 0x73, 0x00, 0x00,
    0x72, 0x01, 0xC8, 0x71, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0x71, 0xA0, 0xA1, 0x71, 0x73, 0x00, 0x00,
    0x72, 0xD7, 0xD8, 0x81, 0xC2, 0x03, 0x03, 0xC5, 0xC6, 0x81, 0x81, 0x81, 0x81, 0x73, 0x00, 0x00,
    0x82, 0x81, 0x81, 0x81, 0xD2, 0xD3, 0xD3, 0xD5, 0x81, 0x81, 0x81, 0x81, 0x81, 0x83, 0x00, 0x00,
    0x82, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x83, 0x00, 0x00,
    0x82, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x83, 0x00, 0x00,
    0x82, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x83, 0x00, 0x00,
    0x82, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x83, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// The only room of the game, placed at tile (5, 6) of the screen
pub static ROOM1: TileMap = TileMap::new(&ROOM1_TILES, ROOM1_COLUMNS, ROOM1_ROWS, (5, 6), (14, 12));

/// Collision shape of the player in tile units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub col: u8,
    pub row: u8,
}

impl Footprint {
    pub const WIDTH: u8 = 2;
    pub const HEIGHT: u8 = 1;
}

/// Read-only row-major grid of tiles with its placement on screen
#[derive(Debug)]
pub struct TileMap {
    tiles: &'static [Tile],
    columns: u8,
    rows: u8,
    origin: (u8, u8),
    visible: (u8, u8),
}

impl TileMap {
    /// Builds a map over `tiles`
    ///
    /// `origin` is the screen tile of the grid's top-left cell, `visible` the
    /// columns and rows that get painted.
    pub const fn new(
        tiles: &'static [Tile],
        columns: u8,
        rows: u8,
        origin: (u8, u8),
        visible: (u8, u8),
    ) -> Self {
        assert!(tiles.len() == columns as usize * rows as usize);
        assert!(visible.0 <= columns && visible.1 <= rows);
        Self {
            tiles,
            columns,
            rows,
            origin,
            visible,
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Screen tile of the top-left cell
    pub fn origin(&self) -> (u8, u8) {
        self.origin
    }

    /// Painted columns and rows, counted from the top-left cell
    pub fn visible(&self) -> (u8, u8) {
        self.visible
    }

    /// Returns the tile at a grid-relative cell
    ///
    /// Panics when the cell lies outside the grid.
    pub fn tile(&self, col: u8, row: u8) -> Tile {
        assert!(
            col < self.columns && row < self.rows,
            "cell ({}, {}) is outside the {}x{} room",
            col,
            row,
            self.columns,
            self.rows
        );
        self.tiles[row as usize * self.columns as usize + col as usize]
    }

    /// Converts a screen pixel to the grid-relative cell under it
    ///
    /// 8-bit wrapping arithmetic, like the sprite coordinates it works on.
    pub fn footprint(&self, x: u8, y: u8) -> Footprint {
        let col = x.wrapping_sub(self.origin.0 * TILE_SIZE) / TILE_SIZE;
        let row = y.wrapping_sub(self.origin.1 * TILE_SIZE) / TILE_SIZE;
        Footprint { col, row }
    }
}
