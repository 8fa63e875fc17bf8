use bitflags::bitflags;

use super::player::Direction;
use crate::bus::{Interface, Ports};

bitflags! {
    /// Buttons held this frame, as assembled by the controller poll
    ///
    /// The first bit shifted out (A) ends up in bit 7.
    pub struct Buttons: u8 {
        const A      = 0b10000000;
        const B      = 0b01000000;
        const SELECT = 0b00100000;
        const START  = 0b00010000;
        const UP     = 0b00001000;
        const DOWN   = 0b00000100;
        const LEFT   = 0b00000010;
        const RIGHT  = 0b00000001;
    }
}

impl Buttons {
    /// Vertical intent: Down wins over Up
    pub fn vertical(&self) -> Option<Direction> {
        if self.contains(Self::DOWN) {
            Some(Direction::Down)
        } else if self.contains(Self::UP) {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Horizontal intent: Right wins over Left
    pub fn horizontal(&self) -> Option<Direction> {
        if self.contains(Self::RIGHT) {
            Some(Direction::Right)
        } else if self.contains(Self::LEFT) {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Polls controller 1 through its serial protocol
///
/// Exactly eight reads, no retry: whatever the register shifted out is the state for
/// this frame.
pub fn read_joypad(hw: &mut dyn Interface) -> Buttons {
    hw.strobe_joypad();
    let mut state = 0u8;
    for _ in 0..8 {
        state = (state << 1) | hw.read_joypad_bit();
    }
    Buttons::from_bits_truncate(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bus::{MainBus, MirrorMode, TestBus, JOYPAD1};
    use crate::joypad::{Button, JoyPort};

    #[test]
    fn test_poll_bit_order() {
        let mut bus = TestBus::new();
        // A, B, Select, Start, Up, Down, Left, Right
        bus.queue_reads(JOYPAD1, &[1, 0, 1, 0, 0, 1, 0, 1]);
        let buttons = read_joypad(&mut bus);
        assert_eq!(buttons, Buttons::A | Buttons::SELECT | Buttons::DOWN | Buttons::RIGHT);
        assert_eq!(bus.reads_left(JOYPAD1), 0);
    }

    #[test]
    fn test_poll_ignores_open_bus_bits() {
        let mut bus = TestBus::new();
        bus.queue_reads(JOYPAD1, &[0x40, 0x41, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40]);
        assert_eq!(read_joypad(&mut bus), Buttons::B);
    }

    #[test]
    fn test_poll_through_console() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        bus.update_joypad(Button::Up, true, JoyPort::Port1);
        bus.update_joypad(Button::Left, true, JoyPort::Port1);
        assert_eq!(read_joypad(&mut bus), Buttons::UP | Buttons::LEFT);

        bus.update_joypad(Button::Up, false, JoyPort::Port1);
        bus.update_joypad(Button::Left, false, JoyPort::Port1);
        assert!(read_joypad(&mut bus).is_empty());
    }

    #[test]
    fn test_down_masks_up() {
        let buttons = Buttons::DOWN | Buttons::UP;
        assert_eq!(buttons.vertical(), Some(Direction::Down));
        assert_eq!(Buttons::UP.vertical(), Some(Direction::Up));
        assert_eq!(Buttons::A.vertical(), None);
    }

    #[test]
    fn test_right_masks_left() {
        let buttons = Buttons::RIGHT | Buttons::LEFT;
        assert_eq!(buttons.horizontal(), Some(Direction::Right));
        assert_eq!(Buttons::LEFT.horizontal(), Some(Direction::Left));
        assert_eq!(Buttons::SELECT.horizontal(), None);
    }
}
