pub use main_bus::MainBus;
pub use ports::Ports;
pub use ppu_bus::{MirrorMode, PpuBus};
#[cfg(test)]
pub use test_bus::TestBus;

mod main_bus;
mod ports;
mod ppu_bus;
#[cfg(test)]
mod test_bus;

/// Ppu control register
pub const PPU_CTRL: u16 = 0x2000;
/// Ppu mask register
pub const PPU_MASK: u16 = 0x2001;
/// Ppu status register
pub const PPU_STATUS: u16 = 0x2002;
/// Oam address register
pub const OAM_ADDR: u16 = 0x2003;
/// Oam data register
pub const OAM_DATA: u16 = 0x2004;
/// Ppu scroll register (written twice: x then y)
pub const PPU_SCROLL: u16 = 0x2005;
/// Ppu address latch (written twice: high byte then low byte)
pub const PPU_ADDR: u16 = 0x2006;
/// Ppu data port
pub const PPU_DATA: u16 = 0x2007;
/// Oam DMA page register
pub const OAM_DMA: u16 = 0x4014;
/// Controller port 1 (write: strobe, read: serial data)
pub const JOYPAD1: u16 = 0x4016;
/// Controller port 2
pub const JOYPAD2: u16 = 0x4017;

/// First address of nametable 0 in video memory
pub const NAMETABLE_0: u16 = 0x2000;
/// Background palettes in video memory
pub const BG_PALETTE: u16 = 0x3F00;
/// Sprite palettes in video memory
pub const SP_PALETTE: u16 = 0x3F10;

/// Game code's interface to the console hardware
pub trait Interface {
    /// Reads a byte from `addr`
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to `addr`
    fn write(&mut self, addr: u16, data: u8);
}
