use log::trace;

use crate::ppu;

/// First address of the pattern table memory space
const CHR_START: u16 = 0x0000;
/// Last address of the pattern table memory space
const CHR_END: u16 = 0x1FFF;

/// Size of one nametable
const NTA_SIZE: u16 = 0x400;
/// Size of the VRAM: two physical nametables
const VRAM_SIZE: usize = 0x800;
/// First address of the VRAM memory space
const VRAM_START: u16 = 0x2000;
/// Last address of the VRAM memory space
const VRAM_END: u16 = 0x3EFF;

/// Size of the palette RAM
const PALETTE_RAM_SIZE: usize = 0x20;
/// First address of the palette RAM memory space
const PALETTE_START: u16 = 0x3F00;
/// Last address of the palette RAM memory space
const PALETTE_END: u16 = 0x3FFF;

/// Mirroring modes for the VRAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    Vertical,
    Horizontal,
}

/// Memory bus of the Ppu
pub struct PpuBus {
    mirror_mode: MirrorMode,
    pal_ram: [u8; PALETTE_RAM_SIZE],
    vram: [u8; VRAM_SIZE],
}

impl ppu::Interface for PpuBus {
    fn read(&self, addr: u16) -> u8 {
        // The ppu bus only maps from 0x0000 to 0x3FFF;
        let addr = addr & 0x3FFF;
        match addr {
            // Pattern data ships with the cartridge and is not modelled
            CHR_START..=CHR_END => 0,
            VRAM_START..=VRAM_END => self.vram[self.mirrored_vaddr(addr) as usize],
            PALETTE_START..=PALETTE_END => self.pal_ram[Self::palette_index(addr)],
            _ => unreachable!("Reached impossible match arm. (Ppu bus addr) {:#04X}", addr),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            CHR_START..=CHR_END => trace!("ignored pattern write at {:#06X}", addr),
            VRAM_START..=VRAM_END => {
                let index = self.mirrored_vaddr(addr) as usize;
                self.vram[index] = data;
            }
            PALETTE_START..=PALETTE_END => self.pal_ram[Self::palette_index(addr)] = data,
            _ => unreachable!("Reached impossible match arm. (Ppu bus addr) {:#04X}", addr),
        }
    }
}

impl PpuBus {
    pub fn new(mirror_mode: MirrorMode) -> Self {
        Self {
            mirror_mode,
            pal_ram: [0; PALETTE_RAM_SIZE],
            vram: [0; VRAM_SIZE],
        }
    }

    fn palette_index(addr: u16) -> usize {
        let mut index = addr;
        // 0x3F10/0x3F14/0x3F18/0x3F1C mirror 0x3F00/0x3F04/0x3F08/0x3F0C
        if index % 4 == 0 {
            index &= 0x0F;
        }
        // Palette mirrors every 0x20 (32)
        (index & 0x1F) as usize
    }

    /// Returns the address mirrored based on the current mirroring mode
    fn mirrored_vaddr(&self, addr: u16) -> u16 {
        // Mask because 0x2000 - 0x2FFF mirrors 0x3000 - 0x3EFF
        let addr = addr & 0x2FFF;
        let index = addr - VRAM_START;
        let nta = index / NTA_SIZE;
        match self.mirror_mode {
            // 0 and 1 are distinct, 2 mirrors 0 and 3 mirrors 1
            MirrorMode::Vertical => match nta {
                2 | 3 => index - (NTA_SIZE * 2),
                _ => index,
            },
            // 0 and 1 share the first table, 2 and 3 share the second
            MirrorMode::Horizontal => match nta {
                1 | 2 => index - NTA_SIZE,
                3 => index - (NTA_SIZE * 2),
                _ => index,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ppu::Interface;

    #[test]
    fn test_horizontal_mirroring() {
        let mut bus = PpuBus::new(MirrorMode::Horizontal);
        bus.write(0x2005, 0x62);
        assert_eq!(bus.read(0x2405), 0x62);
        assert_eq!(bus.read(0x2805), 0);

        bus.write(0x2C10, 0x73);
        assert_eq!(bus.read(0x2810), 0x73);
    }

    #[test]
    fn test_vertical_mirroring() {
        let mut bus = PpuBus::new(MirrorMode::Vertical);
        bus.write(0x2005, 0x62);
        assert_eq!(bus.read(0x2805), 0x62);
        assert_eq!(bus.read(0x2405), 0);
    }

    #[test]
    fn test_palette_mirrors() {
        let mut bus = PpuBus::new(MirrorMode::Horizontal);
        bus.write(0x3F10, 0x0F);
        assert_eq!(bus.read(0x3F00), 0x0F);

        bus.write(0x3F11, 0x20);
        assert_eq!(bus.read(0x3F31), 0x20);
        assert_eq!(bus.read(0x3F01), 0);
    }

    #[test]
    fn test_pattern_space_reads_zero() {
        let mut bus = PpuBus::new(MirrorMode::Horizontal);
        bus.write(0x0010, 0xFF);
        assert_eq!(bus.read(0x0010), 0);
    }
}
