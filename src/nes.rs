use log::trace;

use crate::bus::{MainBus, MirrorMode};
use crate::game::{FrameReport, Game, VECTORS};
use crate::joypad::{Button, JoyPort};
use crate::ppu::Frame;

#[cfg(feature = "desktop")]
pub mod desktop;

/// The console with the game plugged in
///
/// Drives the game through its vector table the way the hardware would: reset on power
/// up, then the frame routine on every NMI.
pub struct Nes {
    bus: MainBus,
    game: Game,
    frame_count: u64,
}

impl Nes {
    /// Powers the console up and runs the boot routine
    pub fn new() -> Self {
        let mut nes = Self {
            bus: MainBus::new(MirrorMode::Horizontal),
            game: Game::new(),
            frame_count: 0,
        };
        nes.reset();
        nes
    }

    pub fn reset(&mut self) {
        (VECTORS.reset)(&mut self.game, &mut self.bus);
        self.frame_count = 0;
    }

    /// Runs the console up to the next vertical blank
    ///
    /// Returns the frame routine's report, or `None` if no NMI was requested.
    pub fn frame(&mut self) -> Option<FrameReport> {
        let nmi = self.bus.run_to_vblank();
        self.frame_count += 1;
        if !nmi {
            trace!("frame {}: nmi disabled", self.frame_count);
            return None;
        }
        let report = (VECTORS.nmi)(&mut self.game, &mut self.bus);
        trace!("frame {}: {:?}", self.frame_count, report);
        Some(report)
    }

    pub fn update_joypad(&mut self, button: Button, pressed: bool, port: JoyPort) {
        self.bus.update_joypad(button, pressed, port);
    }

    pub fn render(&self) -> Frame {
        self.bus.render()
    }

    /// Frames run since the last reset
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn bus(&self) -> &MainBus {
        &self.bus
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}

impl Default for Nes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::address::NAMETABLE;
    use crate::game::player::Direction;
    use crate::game::room::{Tile, WALKABLE};
    use crate::ppu::registers::Controller;
    use crate::ppu::SYSTEM_PALETTE;

    fn cell(nes: &Nes, col: u8, row: u8) -> Tile {
        nes.bus().ppu().peek(NAMETABLE.translate(col, row))
    }

    fn hold(nes: &mut Nes, buttons: &[Button], frames: usize) -> Vec<FrameReport> {
        for &button in buttons {
            nes.update_joypad(button, true, JoyPort::Port1);
        }
        let reports = (0..frames).filter_map(|_| nes.frame()).collect();
        for &button in buttons {
            nes.update_joypad(button, false, JoyPort::Port1);
        }
        reports
    }

    fn position(nes: &Nes) -> (u8, u8) {
        nes.game().player().position()
    }

    #[test]
    fn test_boot_screen() {
        let nes = Nes::new();
        let ppu = nes.bus().ppu();

        assert_eq!(cell(&nes, 1, 22), 0x04);
        assert_eq!(cell(&nes, 30, 22), 0x04);
        assert_eq!(cell(&nes, 5, 6), 0x62);
        assert_eq!(cell(&nes, 8, 15), WALKABLE);
        assert_eq!(ppu.peek(0x3F00), 0x0F);
        assert_eq!(ppu.peek(0x3F13), 0x20);

        assert!(ppu.ctrl().contains(Controller::NMI_ENABLED));
        assert!(ppu.mask().rendering());
        assert_eq!(ppu.addr(), 0x0000);
        assert_eq!(ppu.scroll(), (0, 0));
        assert_eq!(position(&nes), (0x70, 0x60));
    }

    #[test]
    fn test_every_frame_runs_nmi() {
        let mut nes = Nes::new();
        for _ in 0..3 {
            assert!(nes.frame().is_some());
        }
        assert_eq!(nes.frame_count(), 3);
    }

    #[test]
    fn test_first_frame_uploads_sprites() {
        let mut nes = Nes::new();
        nes.frame();
        let oam = nes.bus().ppu().oam();
        assert_eq!(&oam[4..8], &[0x60, 0x99, 0x00, 0x70]);
        assert_eq!(&oam[32..36], &[0x78, 0xC9, 0x40, 0x78]);
        assert_eq!(oam[0], 0xFE);
        assert_eq!(oam[36], 0xFE);
    }

    #[test]
    fn test_turn_then_walk() {
        let mut nes = Nes::new();

        let reports = hold(&mut nes, &[Button::Left], 1);
        assert_eq!(reports[0].delta, (-1, 0));
        assert!(reports[0].turned);
        assert_eq!(position(&nes), (0x6F, 0x60));
        assert_eq!(nes.game().player().facing(), Direction::Left);

        let reports = hold(&mut nes, &[Button::Down], 8);
        assert_eq!(reports.len(), 8);
        assert!(reports.iter().all(|r| r.delta == (0, 1)));
        assert!(reports[0].turned);
        assert!(reports[1..].iter().all(|r| !r.turned));
        assert_eq!(position(&nes), (0x6F, 0x68));

        // Released: nothing moves
        let report = nes.frame().unwrap();
        assert_eq!(report.delta, (0, 0));
        assert!(report.buttons.is_empty());

        let oam = nes.bus().ppu().oam();
        assert_eq!(&oam[4..8], &[0x68, 0x99, 0x00, 0x6F]);
    }

    #[test]
    fn test_opposite_directions() {
        let mut nes = Nes::new();
        let reports = hold(&mut nes, &[Button::Down, Button::Up], 1);
        assert_eq!(reports[0].delta, (0, 1));

        let reports = hold(&mut nes, &[Button::Left, Button::Right], 1);
        assert_eq!(reports[0].delta, (1, 0));
    }

    #[test]
    fn test_bottom_wall() {
        let mut nes = Nes::new();
        let reports = hold(&mut nes, &[Button::Down], 30);
        assert_eq!(position(&nes), (0x70, 0x6F));
        assert_eq!(reports.last().map(|r| r.delta), Some((0, 0)));
        assert!(reports[..15].iter().all(|r| !r.blocked));
        assert!(reports[15..].iter().all(|r| r.blocked));
    }

    #[test]
    fn test_top_wall() {
        let mut nes = Nes::new();
        hold(&mut nes, &[Button::Up], 40);
        assert_eq!(position(&nes), (0x70, 0x48));
        assert_eq!(nes.game().player().facing(), Direction::Up);
    }

    #[test]
    fn test_side_walls() {
        let mut nes = Nes::new();
        hold(&mut nes, &[Button::Right], 30);
        assert_eq!(position(&nes), (0x80, 0x60));

        hold(&mut nes, &[Button::Left], 100);
        assert_eq!(position(&nes), (0x30, 0x60));
    }

    #[test]
    fn test_select_cycles_palette() {
        let mut nes = Nes::new();
        let reports = hold(&mut nes, &[Button::Select], 7);
        let applied: Vec<usize> = reports.iter().filter_map(|r| r.palette).collect();
        assert_eq!(applied, vec![0, 0, 0, 0, 0, 0, 1]);

        let ppu = nes.bus().ppu();
        assert_eq!(ppu.peek(0x3F01), 0x0F);
        assert_eq!(ppu.peek(0x3F12), 0x00);
        assert_eq!(ppu.addr(), 0x0000);
    }

    #[test]
    fn test_a_opens_dialog() {
        let mut nes = Nes::new();
        let reports = hold(&mut nes, &[Button::A], 1);
        assert!(reports[0].dialog);
        assert_eq!(cell(&nes, 10, 8), 0x65);
        assert_eq!(cell(&nes, 11, 9), b'H');
        assert_eq!(cell(&nes, 14, 10), b'K');
        assert_eq!(cell(&nes, 15, 11), 0x87);
    }

    #[test]
    fn test_frame_writes_stay_in_vblank() {
        let mut nes = Nes::new();
        hold(&mut nes, &[Button::A, Button::Select, Button::Right], 10);
        hold(&mut nes, &[Button::Down], 10);
        assert_eq!(nes.bus().ppu().unsafe_writes(), 0);
    }

    #[test]
    fn test_reset_restarts_game() {
        let mut nes = Nes::new();
        hold(&mut nes, &[Button::Select], 8);
        hold(&mut nes, &[Button::Down, Button::Right], 5);
        assert_ne!(position(&nes), (0x70, 0x60));

        nes.reset();
        assert_eq!(position(&nes), (0x70, 0x60));
        assert_eq!(nes.game().player().facing(), Direction::Down);
        assert_eq!(nes.game().palette().counter(), 0);
        assert_eq!(nes.bus().ppu().peek(0x3F01), 0x00);
        assert_eq!(nes.frame_count(), 0);
        assert!(nes.frame().is_some());
    }

    #[test]
    fn test_render_shows_bar_and_player() {
        let mut nes = Nes::new();
        nes.frame();
        let frame = nes.render();
        // Bar tile 0x04 picks palette entry 2, the player's top slot sprite entry 0x11
        assert_eq!(frame.pixel(8 + 3, 22 * 8 + 3), SYSTEM_PALETTE[0x10]);
        assert_eq!(frame.pixel(0x70, 0x61), SYSTEM_PALETTE[0x00]);
    }
}
