use super::{
    Interface, JOYPAD1, OAM_ADDR, OAM_DMA, PPU_ADDR, PPU_CTRL, PPU_DATA, PPU_MASK, PPU_SCROLL,
    PPU_STATUS,
};
use crate::ppu::registers::{Controller, Mask, Status};

/// Ordered register sequences of the console
///
/// Every multi-write protocol (address latch, DMA kick, controller strobe) lives here
/// so the rest of the game only ever talks in whole operations.
pub trait Ports: Interface {
    /// Points the video memory address latch at `addr`
    ///
    /// High byte first, then low byte.
    fn set_addr(&mut self, addr: u16) {
        self.write(PPU_ADDR, (addr >> 8) as u8);
        self.write(PPU_ADDR, (addr & 0xFF) as u8);
    }

    /// Streams one byte into video memory at the latched address
    fn write_data(&mut self, data: u8) {
        self.write(PPU_DATA, data);
    }

    fn write_ctrl(&mut self, ctrl: Controller) {
        self.write(PPU_CTRL, ctrl.bits());
    }

    fn write_mask(&mut self, mask: Mask) {
        self.write(PPU_MASK, mask.bits());
    }

    fn set_scroll(&mut self, x: u8, y: u8) {
        self.write(PPU_SCROLL, x);
        self.write(PPU_SCROLL, y);
    }

    /// Spins until the Ppu reports the start of vertical blank
    fn wait_vblank(&mut self) {
        while !Status::from_bits_truncate(self.read(PPU_STATUS)).in_vblank() {}
    }

    /// Copies CPU RAM page `page` into the sprite table
    ///
    /// Only valid during vertical blank, once per frame.
    fn oam_dma(&mut self, page: u8) {
        self.write(OAM_ADDR, 0x00);
        self.write(OAM_DMA, page);
    }

    /// Latches then releases the controller shift registers
    fn strobe_joypad(&mut self) {
        self.write(JOYPAD1, 0x01);
        self.write(JOYPAD1, 0x00);
    }

    /// Shifts one button bit out of controller 1
    fn read_joypad_bit(&mut self) -> u8 {
        self.read(JOYPAD1) & 0x01
    }
}

impl<T: Interface + ?Sized> Ports for T {}
