use crate::bus::{Interface, Ports};

/// Hardware sprite slots
pub const SLOT_COUNT: usize = 64;
/// CPU RAM page the sprite table is copied from
pub const SHADOW_PAGE: u8 = 0x02;
/// Y position that puts a sprite below the visible area
pub const HIDDEN_Y: u8 = 0xFE;

/// One 8x8 hardware sprite, laid out like a sprite table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub y: u8,
    pub tile: u8,
    pub attr: u8,
    pub x: u8,
}

impl Sprite {
    pub const HIDDEN: Sprite = Sprite {
        y: HIDDEN_Y,
        tile: 0,
        attr: 0,
        x: 0,
    };

    pub fn to_bytes(self) -> [u8; 4] {
        [self.y, self.tile, self.attr, self.x]
    }
}

/// Shadow of the sprite table, uploaded once per frame
pub struct SpritePage {
    slots: [Sprite; SLOT_COUNT],
}

impl SpritePage {
    pub fn new() -> Self {
        Self {
            slots: [Sprite::HIDDEN; SLOT_COUNT],
        }
    }

    pub fn get(&self, slot: usize) -> Sprite {
        Self::check(slot);
        self.slots[slot]
    }

    pub fn get_mut(&mut self, slot: usize) -> &mut Sprite {
        Self::check(slot);
        &mut self.slots[slot]
    }

    /// Stores the page in CPU RAM and kicks the DMA copy into the sprite table
    pub fn transfer(&self, hw: &mut dyn Interface) {
        let base = u16::from(SHADOW_PAGE) << 8;
        for (slot, sprite) in self.slots.iter().enumerate() {
            for (i, byte) in sprite.to_bytes().iter().enumerate() {
                hw.write(base + (slot * 4 + i) as u16, *byte);
            }
        }
        hw.oam_dma(SHADOW_PAGE);
    }

    fn check(slot: usize) {
        assert!(
            slot < SLOT_COUNT,
            "sprite table only contains {} slots, got {}",
            SLOT_COUNT,
            slot
        );
    }
}

impl Default for SpritePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bus::{MainBus, MirrorMode};

    #[test]
    fn test_starts_hidden() {
        let page = SpritePage::new();
        assert_eq!(page.get(0).y, HIDDEN_Y);
        assert_eq!(page.get(63), Sprite::HIDDEN);
    }

    #[test]
    fn test_transfer_reaches_oam() {
        let mut bus = MainBus::new(MirrorMode::Horizontal);
        let mut page = SpritePage::new();
        *page.get_mut(1) = Sprite {
            y: 0x60,
            tile: 0x99,
            attr: 0x40,
            x: 0x78,
        };
        page.transfer(&mut bus);

        assert_eq!(bus.peek_ram(0x0204), 0x60);
        assert_eq!(&bus.ppu().oam()[4..8], &[0x60, 0x99, 0x40, 0x78]);
        assert_eq!(bus.ppu().oam()[0], HIDDEN_Y);
    }

    #[test]
    #[should_panic]
    fn test_slot_out_of_range() {
        SpritePage::new().get(SLOT_COUNT);
    }
}
