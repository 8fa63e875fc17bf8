use log::{trace, warn};

use registers::{Controller, Mask, Status};

pub use frame::Frame;
pub use palette::{color, Pixel, SYSTEM_PALETTE};

pub mod frame;
mod palette;
pub mod registers;

const PPU_CTRL: u16 = 0x0;
const PPU_MASK: u16 = 0x1;
const PPU_STATUS: u16 = 0x2;
const OAM_ADDR: u16 = 0x3;
const OAM_DATA: u16 = 0x4;
const PPU_SCROLL: u16 = 0x5;
const PPU_ADDR: u16 = 0x6;
const PPU_DATA: u16 = 0x7;

/// Size of the sprite table
pub const OAM_SIZE: usize = 0x100;

/// Scanlines per frame
pub const SCANLINES: u16 = 262;
/// First scanline of vertical blank
pub const VBLANK_LINE: u16 = 241;
/// Vertical blank ends when the pre-render line starts
pub const PRE_RENDER_LINE: u16 = 261;

/// First address of the palette RAM memory space
const PALETTE_START: u16 = 0x3F00;
/// Nametable 0, the only one drawn by the renderer
const NAMETABLE_0: u16 = 0x2000;
/// Background tiles per nametable row
const NTA_COLUMNS: usize = 32;
/// Visible background tile rows
const NTA_ROWS: usize = 30;

/// Ppu's interface to video memory
pub trait Interface {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// Display coprocessor
pub struct Ppu {
    ctrl: Controller,
    mask: Mask,
    status: Status,

    bus: Box<dyn Interface>,
    open_bus: u8,
    addr_toggle: bool,
    addr: u16,
    addr_hi: u8,
    scroll: (u8, u8),
    read_buffer: u8,

    oam_addr: u8,
    oam: [u8; OAM_SIZE],

    scanline: u16,
    nmi: bool,
    unsafe_writes: usize,
}

impl Ppu {
    pub fn new(bus: Box<dyn Interface>) -> Self {
        Self {
            ctrl: Controller::from_bits_truncate(0),
            mask: Mask::from_bits_truncate(0),
            status: Status::from_bits_truncate(0),

            bus,
            open_bus: 0,
            addr_toggle: false,
            addr: 0,
            addr_hi: 0,
            scroll: (0, 0),
            read_buffer: 0,

            oam_addr: 0,
            oam: [0; OAM_SIZE],

            scanline: 0,
            nmi: false,
            unsafe_writes: 0,
        }
    }

    /// Reads a Ppu register (`addr` is the register offset 0-7)
    pub fn read(&mut self, addr: u16) -> u8 {
        let mut data = self.open_bus;
        match addr {
            PPU_STATUS => {
                data = self.status.bits() | (self.open_bus & Status::UNUSED.bits());
                self.status.set_vblank(false);
                self.addr_toggle = false;
            }
            OAM_DATA => data = self.oam[self.oam_addr as usize],
            PPU_DATA => {
                let vaddr = self.addr;
                if vaddr >= PALETTE_START {
                    // Palette reads skip the buffer, the buffer gets the nametable underneath
                    data = self.bus.read(vaddr);
                    self.read_buffer = self.bus.read(vaddr & 0x2FFF);
                } else {
                    data = self.read_buffer;
                    self.read_buffer = self.bus.read(vaddr);
                }
                self.increment_addr();
            }
            _ => {}
        }
        data
    }

    /// Writes a Ppu register (`addr` is the register offset 0-7)
    pub fn write(&mut self, addr: u16, data: u8) {
        self.open_bus = data;
        match addr {
            PPU_CTRL => {
                let was_enabled = self.ctrl.nmi_enabled();
                self.ctrl.set_raw(data);
                // Enabling NMI in the middle of vblank fires it right away
                if !was_enabled && self.ctrl.nmi_enabled() && self.status.in_vblank() {
                    self.nmi = true;
                }
            }
            PPU_MASK => self.mask.set_raw(data),
            OAM_ADDR => self.oam_addr = data,
            OAM_DATA => {
                self.oam[self.oam_addr as usize] = data;
                self.oam_addr = self.oam_addr.wrapping_add(1);
            }
            PPU_SCROLL => {
                match self.addr_toggle {
                    false => self.scroll.0 = data,
                    true => self.scroll.1 = data,
                }
                self.addr_toggle = !self.addr_toggle;
            }
            PPU_ADDR => {
                match self.addr_toggle {
                    false => self.addr_hi = data & 0x3F,
                    true => self.addr = u16::from(self.addr_hi) << 8 | u16::from(data),
                }
                self.addr_toggle = !self.addr_toggle;
            }
            PPU_DATA => {
                if self.mask.rendering() && !self.in_vblank_period() {
                    self.unsafe_writes += 1;
                    warn!(
                        "vram write outside vblank: {:#06X} <- {:#04X} (scanline {})",
                        self.addr, data, self.scanline
                    );
                }
                self.bus.write(self.addr, data);
                self.increment_addr();
            }
            _ => {}
        }
    }

    /// Fills the sprite table from a 256 byte page, starting at the current oam address
    pub fn write_oam_dma(&mut self, page: &[u8]) {
        trace!("oam dma: {} bytes from oam addr {:#04X}", page.len(), self.oam_addr);
        for &data in page {
            self.oam[self.oam_addr as usize] = data;
            self.oam_addr = self.oam_addr.wrapping_add(1);
        }
    }

    /// Advances the Ppu clock by one scanline
    pub fn step_scanline(&mut self) {
        self.scanline = (self.scanline + 1) % SCANLINES;
        match self.scanline {
            VBLANK_LINE => {
                self.status.set_vblank(true);
                if self.ctrl.nmi_enabled() {
                    self.nmi = true;
                }
            }
            PRE_RENDER_LINE => self.status.set_vblank(false),
            _ => {}
        }
    }

    /// Returns true while the beam is inside vertical blank
    pub fn in_vblank_period(&self) -> bool {
        (VBLANK_LINE..PRE_RENDER_LINE).contains(&self.scanline)
    }

    /// Returns and clears a pending NMI request
    pub fn poll_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi)
    }

    /// Reads video memory without side effects
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Current value of the address latch
    pub fn addr(&self) -> u16 {
        self.addr
    }

    pub fn scroll(&self) -> (u8, u8) {
        self.scroll
    }

    pub fn ctrl(&self) -> Controller {
        self.ctrl
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn oam(&self) -> &[u8] {
        &self.oam
    }

    pub fn scanline(&self) -> u16 {
        self.scanline
    }

    /// Number of video memory writes made while it was unsafe to do so
    pub fn unsafe_writes(&self) -> usize {
        self.unsafe_writes
    }

    /// Draws nametable 0 and the sprite table
    ///
    /// Pattern data is not modelled, so every 8x8 cell is painted flat with a
    /// palette colour picked from its tile code. The colours are a debug view of
    /// the tile codes, not what the Ppu would output.
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new();
        let backdrop = color(self.bus.read(PALETTE_START));

        for row in 0..NTA_ROWS {
            for col in 0..NTA_COLUMNS {
                let pixel = if self.mask.render_bg() {
                    let tile = self.bus.read(NAMETABLE_0 + (row * NTA_COLUMNS + col) as u16);
                    match tile {
                        0 => backdrop,
                        _ => color(self.bus.read(PALETTE_START + Self::cell_color(tile))),
                    }
                } else {
                    backdrop
                };
                frame.fill_cell(col * 8, row * 8, pixel);
            }
        }

        if self.mask.render_sp() {
            // Lower slots are drawn on top
            for sprite in self.oam.chunks_exact(4).rev() {
                let (y, tile, attr, x) = (sprite[0], sprite[1], sprite[2], sprite[3]);
                if y >= 0xEF {
                    continue;
                }
                let entry = 0x10 + u16::from(attr & 0x3) * 4 + Self::cell_color(tile);
                frame.fill_cell(x as usize, y as usize + 1, color(self.bus.read(PALETTE_START + entry)));
            }
        }

        frame
    }

    /// Palette entry 1-3 standing in for the tile's pattern
    fn cell_color(tile: u8) -> u16 {
        1 + u16::from(tile % 3)
    }

    fn increment_addr(&mut self) {
        self.addr = self.addr.wrapping_add(self.ctrl.increment()) & 0x3FFF;
    }
}
