use log::debug;

use crate::bus::{Interface, Ports, BG_PALETTE, SP_PALETTE};

/// Four colours, written to both the first background and first sprite palette
pub type Preset = [u8; 4];

/// From full brightness down to black
pub const PRESETS: [Preset; 4] = [
    [0x0F, 0x00, 0x10, 0x20],
    [0x0F, 0x0F, 0x00, 0x10],
    [0x0F, 0x0F, 0x0F, 0x00],
    [0x0F, 0x0F, 0x0F, 0x0F],
];

/// Counter value that wraps back to 0 once exceeded
const WRAP_AFTER: u8 = 16;

/// Writes a preset into palette RAM
pub fn apply(hw: &mut dyn Interface, preset: &Preset) {
    for base in [BG_PALETTE, SP_PALETTE] {
        hw.set_addr(base);
        for color in preset {
            hw.write_data(*color);
        }
    }
}

/// Select-button fade through the presets
///
/// Each press applies the preset picked by the counter, then bumps it. Presets
/// get uneven shares of the counter range (0-5, 6-7, 8-11, 12-16).
#[derive(Debug, Default)]
pub struct PaletteCycle {
    counter: u8,
}

impl PaletteCycle {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Preset for the current counter value
    pub fn preset(&self) -> usize {
        match self.counter {
            0..=5 => 0,
            6..=7 => 1,
            8..=11 => 2,
            _ => 3,
        }
    }

    /// Applies the current preset, advances the counter and parks the address latch
    ///
    /// Returns the preset that was applied.
    pub fn advance(&mut self, hw: &mut dyn Interface) -> usize {
        let preset = self.preset();
        apply(hw, &PRESETS[preset]);

        self.counter += 1;
        if self.counter > WRAP_AFTER {
            self.counter = 0;
        }
        debug!("palette preset {} (counter {})", preset, self.counter);

        hw.set_addr(0x0000);
        preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bus::{MainBus, MirrorMode};

    #[test]
    fn test_apply_writes_both_palettes() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        apply(&mut bus, &PRESETS[1]);
        let ppu = bus.ppu();
        assert_eq!(ppu.peek(0x3F01), 0x0F);
        assert_eq!(ppu.peek(0x3F02), 0x00);
        assert_eq!(ppu.peek(0x3F03), 0x10);
        assert_eq!(ppu.peek(0x3F11), 0x0F);
        assert_eq!(ppu.peek(0x3F13), 0x10);
    }

    #[test]
    fn test_cycle_sequence() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        let mut cycle = PaletteCycle::new();
        let applied: Vec<usize> = (0..18).map(|_| cycle.advance(&mut bus)).collect();
        assert_eq!(
            applied,
            vec![0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 0]
        );
    }

    #[test]
    fn test_first_five_presses_stay_on_first_preset() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        let mut cycle = PaletteCycle::new();
        for _ in 0..5 {
            assert_eq!(cycle.advance(&mut bus), 0);
        }
        assert_eq!(cycle.preset(), 0);
    }

    #[test]
    fn test_wraps_after_sixteen() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        let mut cycle = PaletteCycle::new();
        for _ in 0..16 {
            cycle.advance(&mut bus);
        }
        assert_eq!(cycle.counter(), 16);
        cycle.advance(&mut bus);
        assert_eq!(cycle.counter(), 0);
    }

    #[test]
    fn test_latch_parked() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        PaletteCycle::new().advance(&mut bus);
        assert_eq!(bus.ppu().addr(), 0x0000);
    }
}
