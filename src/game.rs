use log::{info, trace};

use crate::bus::{Interface, Ports};
use crate::ppu::registers::{Controller, Mask};

use address::NAMETABLE;
use draw::DIALOG;
use input::Buttons;
use palette::{PaletteCycle, PRESETS};
use player::Player;
use room::{Tile, TileMap, ROOM1};
use sprites::SpritePage;

pub mod address;
pub mod collision;
pub mod draw;
pub mod input;
pub mod palette;
pub mod player;
pub mod room;
pub mod sprites;

/// Status bar under the room
const UI_BAR_AT: (u8, u8) = (1, 22);
const UI_BAR_SIZE: (u8, u8) = (30, 1);
const UI_BAR_TILE: Tile = 0x04;

/// What one frame routine did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub buttons: Buttons,
    /// Player movement in pixels
    pub delta: (i8, i8),
    /// A held direction ran into a wall
    pub blocked: bool,
    /// The player's sprite image was swapped
    pub turned: bool,
    /// Palette preset applied by Select
    pub palette: Option<usize>,
    /// The dialog box was drawn
    pub dialog: bool,
}

impl FrameReport {
    fn new(buttons: Buttons) -> Self {
        Self {
            buttons,
            delta: (0, 0),
            blocked: false,
            turned: false,
            palette: None,
            dialog: false,
        }
    }
}

/// Entry points the hardware jumps to
pub struct Vectors {
    pub nmi: fn(&mut Game, &mut dyn Interface) -> FrameReport,
    pub reset: fn(&mut Game, &mut dyn Interface),
    pub irq: fn(&mut Game, &mut dyn Interface),
}

pub const VECTORS: Vectors = Vectors {
    nmi: Game::nmi,
    reset: Game::reset,
    irq: Game::irq,
};

/// Process-wide game state
///
/// Only ever touched from the reset routine and then the frame interrupt, which
/// runs to completion before the next one.
pub struct Game {
    room: &'static TileMap,
    player: Player,
    sprites: SpritePage,
    palette: PaletteCycle,
    buttons: Buttons,
}

impl Game {
    pub fn new() -> Self {
        Self {
            room: &ROOM1,
            player: Player::default(),
            sprites: SpritePage::new(),
            palette: PaletteCycle::new(),
            buttons: Buttons::empty(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn sprites(&self) -> &SpritePage {
        &self.sprites
    }

    pub fn palette(&self) -> &PaletteCycle {
        &self.palette
    }

    /// Buttons latched by the last frame
    pub fn buttons(&self) -> Buttons {
        self.buttons
    }

    /// Boot routine: paints the static screen with rendering off, then hands over
    /// to the frame interrupt
    pub fn reset(&mut self, hw: &mut dyn Interface) {
        hw.write_ctrl(Controller::empty());
        hw.write_mask(Mask::empty());

        // The Ppu needs two frames to warm up
        hw.wait_vblank();
        hw.wait_vblank();

        palette::apply(hw, &PRESETS[0]);
        draw::fill_rect(hw, &NAMETABLE, UI_BAR_AT, UI_BAR_SIZE, UI_BAR_TILE);
        draw::draw_room(hw, &NAMETABLE, self.room);

        self.player = Player::default();
        self.sprites = SpritePage::new();
        self.palette = PaletteCycle::new();
        self.buttons = Buttons::empty();
        self.player.spawn(&mut self.sprites);

        hw.write_ctrl(Controller::NMI_ENABLED);
        hw.write_mask(Mask::SHOW_BG8 | Mask::SHOW_SP8 | Mask::SHOW_BG | Mask::SHOW_SP);

        hw.set_addr(0x0000);
        hw.set_scroll(0, 0);

        info!("boot complete, player at {:?}", self.player.position());
    }

    /// Frame routine, runs at the start of every vertical blank
    pub fn nmi(&mut self, hw: &mut dyn Interface) -> FrameReport {
        self.buttons = input::read_joypad(hw);
        let report = self.handle_input(hw);
        self.sprites.transfer(hw);
        report
    }

    pub fn irq(&mut self, _hw: &mut dyn Interface) {}

    fn handle_input(&mut self, hw: &mut dyn Interface) -> FrameReport {
        let buttons = self.buttons;
        let mut report = FrameReport::new(buttons);
        if buttons.is_empty() {
            return report;
        }
        trace!("buttons: {:?}", buttons);

        if buttons.contains(Buttons::SELECT) {
            report.palette = Some(self.palette.advance(hw));
        }
        if buttons.contains(Buttons::A) {
            DIALOG.show(hw, &NAMETABLE);
            report.dialog = true;
        }

        let (x0, y0) = self.player.position();
        for direction in [buttons.vertical(), buttons.horizontal()].into_iter().flatten() {
            let step = self.player.try_move(direction, self.room, &mut self.sprites);
            report.blocked |= !step.moved;
            report.turned |= step.turned;
        }
        let (x1, y1) = self.player.position();
        report.delta = (x1.wrapping_sub(x0) as i8, y1.wrapping_sub(y0) as i8);

        report
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
