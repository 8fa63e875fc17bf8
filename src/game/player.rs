use log::debug;

use super::collision::Collision;
use super::room::{TileMap, WALKABLE};
use super::sprites::SpritePage;

/// Pixel position of the player's top-left corner at boot
pub const START: (u8, u8) = (0x70, 0x60);

/// Sprite table slots used by the player
pub const FIRST_SLOT: usize = 1;
pub const PLAYER_SLOTS: usize = 8;

/// Offset of each slot from the player's top-left corner, 2 wide by 4 tall
const SLOT_OFFSETS: [(u8, u8); PLAYER_SLOTS] = [
    (0, 0),
    (8, 0),
    (0, 8),
    (8, 8),
    (0, 16),
    (8, 16),
    (0, 24),
    (8, 24),
];

/// Offset of the bottom-left slot, whose cell is the collision footprint
const FEET: (u8, u8) = SLOT_OFFSETS[6];

/// (tile, attribute) per slot
pub type SpriteImage = [(u8, u8); PLAYER_SLOTS];

#[rustfmt::skip]
const IMAGE_DOWN: SpriteImage = [
    (0x99, 0x00), (0x99, 0x40),
    (0xA9, 0x00), (0xA9, 0x40),
    (0xB9, 0x00), (0xB9, 0x40),
    (0xC9, 0x00), (0xC9, 0x40),
];

#[rustfmt::skip]
const IMAGE_UP: SpriteImage = [
    (0x9B, 0x00), (0x9B, 0x40),
    (0xAB, 0x00), (0xAB, 0x40),
    (0xBB, 0x00), (0xBB, 0x40),
    (0xC9, 0x00), (0xC9, 0x40),
];

#[rustfmt::skip]
const IMAGE_RIGHT: SpriteImage = [
    (0x9E, 0x40), (0x99, 0x40),
    (0xAE, 0x40), (0xAD, 0x40),
    (0xBE, 0x40), (0xBD, 0x40),
    (0xC9, 0x00), (0xCD, 0x40),
];

#[rustfmt::skip]
const IMAGE_LEFT: SpriteImage = [
    (0x99, 0x00), (0x9E, 0x00),
    (0xAD, 0x00), (0xAE, 0x00),
    (0xBD, 0x00), (0xBE, 0x00),
    (0xCD, 0x00), (0xC9, 0x40),
];

/// Indexed by `Direction as usize`
const IMAGES: [SpriteImage; 4] = [IMAGE_DOWN, IMAGE_UP, IMAGE_RIGHT, IMAGE_LEFT];

/// Facing of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down = 0,
    Up = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    /// Sprite image shown while facing this way
    pub fn image(self) -> &'static SpriteImage {
        &IMAGES[self as usize]
    }
}

/// Outcome of one movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub moved: bool,
    pub turned: bool,
}

/// The 16x32 actor made of 8 hardware sprites
pub struct Player {
    x: u8,
    y: u8,
    facing: Direction,
}

impl Player {
    pub fn new(x: u8, y: u8) -> Self {
        Self {
            x,
            y,
            facing: Direction::Down,
        }
    }

    pub fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Pixel of the feet cell, where collisions are measured from
    pub fn feet(&self) -> (u8, u8) {
        (self.x.wrapping_add(FEET.0), self.y.wrapping_add(FEET.1))
    }

    /// Writes every slot: positions plus the current facing's image
    pub fn spawn(&self, sprites: &mut SpritePage) {
        self.place(sprites);
        self.load_image(sprites);
    }

    /// Turns the player
    ///
    /// The image is only rewritten when the facing changes. Returns true if it did.
    pub fn set_direction(&mut self, direction: Direction, sprites: &mut SpritePage) -> bool {
        if self.facing == direction {
            return false;
        }
        debug!("player turns {:?} -> {:?}", self.facing, direction);
        self.facing = direction;
        self.load_image(sprites);
        true
    }

    /// Moves one pixel towards `direction` if the room allows it, then faces that way
    ///
    /// The facing changes even when the move is blocked.
    pub fn try_move(&mut self, direction: Direction, room: &TileMap, sprites: &mut SpritePage) -> Step {
        let collision = Collision::new(room);
        let feet = self.feet();
        let open = match direction {
            Direction::Down => collision.can_move_down(feet),
            Direction::Up => collision.can_move_up(feet),
            Direction::Right => collision.can_move_right(feet) == WALKABLE,
            Direction::Left => collision.can_move_left(feet) == WALKABLE,
        };

        if open {
            match direction {
                Direction::Down => self.y = self.y.wrapping_add(1),
                Direction::Up => self.y = self.y.wrapping_sub(1),
                Direction::Right => self.x = self.x.wrapping_add(1),
                Direction::Left => self.x = self.x.wrapping_sub(1),
            }
            self.place(sprites);
        }

        Step {
            moved: open,
            turned: self.set_direction(direction, sprites),
        }
    }

    fn place(&self, sprites: &mut SpritePage) {
        for (i, (dx, dy)) in SLOT_OFFSETS.iter().enumerate() {
            let sprite = sprites.get_mut(FIRST_SLOT + i);
            sprite.x = self.x.wrapping_add(*dx);
            sprite.y = self.y.wrapping_add(*dy);
        }
    }

    fn load_image(&self, sprites: &mut SpritePage) {
        for (i, (tile, attr)) in self.facing.image().iter().enumerate() {
            let sprite = sprites.get_mut(FIRST_SLOT + i);
            sprite.tile = *tile;
            sprite.attr = *attr;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(START.0, START.1)
    }
}
