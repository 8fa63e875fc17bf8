use super::room::{Footprint, Tile, TileMap, WALKABLE};

/// Directional movement queries against a static room
///
/// Stateless: every query is answered from the feet pixel it is given. The
/// vertical queries answer yes/no for the whole footprint, the horizontal ones hand
/// back the raw tile next to it and leave the comparison to the caller, so an
/// obstacle type could get its own response.
pub struct Collision<'a> {
    room: &'a TileMap,
}

impl<'a> Collision<'a> {
    pub fn new(room: &'a TileMap) -> Self {
        Self { room }
    }

    /// True if both cells of the footprint one pixel up are walkable
    pub fn can_move_up(&self, (x, y): (u8, u8)) -> bool {
        let fp = self.room.footprint(x, y.wrapping_sub(1));
        self.span_walkable(fp.col, fp.row)
    }

    /// True if both cells below the footprint one pixel down are walkable
    pub fn can_move_down(&self, (x, y): (u8, u8)) -> bool {
        let fp = self.room.footprint(x, y.wrapping_add(1));
        self.span_walkable(fp.col, fp.row.wrapping_add(Footprint::HEIGHT))
    }

    /// Raw tile of the cell left of the footprint, one pixel over
    pub fn can_move_left(&self, (x, y): (u8, u8)) -> Tile {
        let fp = self.room.footprint(x.wrapping_sub(1), y);
        self.room.tile(fp.col, fp.row)
    }

    /// Raw tile of the cell right after the footprint's span
    pub fn can_move_right(&self, (x, y): (u8, u8)) -> Tile {
        let fp = self.room.footprint(x, y);
        self.room.tile(fp.col.wrapping_add(Footprint::WIDTH), fp.row)
    }

    fn span_walkable(&self, col: u8, row: u8) -> bool {
        (0..Footprint::WIDTH).all(|i| self.room.tile(col.wrapping_add(i), row) == WALKABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::room::ROOM1;

    /// Pixel of grid cell (col, row) in ROOM1
    fn cell(col: u8, row: u8) -> (u8, u8) {
        (40 + col * 8, 48 + row * 8)
    }

    #[test]
    fn test_down_open_floor() {
        let collision = Collision::new(&ROOM1);
        assert!(collision.can_move_down(cell(9, 9)));
    }

    #[test]
    fn test_down_needs_both_cells() {
        static TILES: [Tile; 9] = [
            0x81, 0x81, 0x81, //
            0x81, 0x81, 0x81, //
            0x81, 0x81, 0x62,
        ];
        static MAP: TileMap = TileMap::new(&TILES, 3, 3, (0, 0), (3, 3));
        let collision = Collision::new(&MAP);

        // Row 2 below the footprint at (0, 0): both open
        assert!(collision.can_move_down((0, 0x07)));
        // Row 2 below the footprint at (1, 0): second cell is a wall
        assert!(!collision.can_move_down((8, 0x07)));
    }

    #[test]
    fn test_up_needs_both_cells() {
        let collision = Collision::new(&ROOM1);
        // Row 6 above holds 0xC6 then 0x81
        assert!(!collision.can_move_up(cell(8, 7)));
        // Row 6 columns 9 and 10 are floor
        assert!(collision.can_move_up(cell(9, 7)));
        // Row 5 column 9 is a wall
        assert!(!collision.can_move_up(cell(9, 6)));
    }

    #[test]
    fn test_up_within_cell() {
        let collision = Collision::new(&ROOM1);
        // One pixel up stays on row 7
        let (x, y) = cell(8, 7);
        assert!(collision.can_move_up((x, y + 1)));
    }

    #[test]
    fn test_horizontal_returns_raw_tile() {
        let collision = Collision::new(&ROOM1);
        assert_eq!(collision.can_move_right(cell(9, 9)), WALKABLE);
        assert_eq!(collision.can_move_right(cell(11, 9)), 0x83);

        assert_eq!(collision.can_move_left(cell(2, 9)), WALKABLE);
        assert_eq!(collision.can_move_left(cell(1, 9)), 0x82);
        assert_eq!(collision.can_move_left(cell(4, 5)), 0x71);
    }

    #[test]
    fn test_vertical_and_horizontal_disagree_on_type() {
        // Same wall, two answers: a flag from the vertical probe, a tile code from
        // the horizontal one
        let collision = Collision::new(&ROOM1);
        assert!(!collision.can_move_up(cell(9, 6)));
        assert_eq!(collision.can_move_left(cell(10, 5)), 0x71);
    }
}
