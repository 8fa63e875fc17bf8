use log::trace;

use super::{Interface, MirrorMode, PpuBus, JOYPAD1, JOYPAD2, OAM_DMA};
use crate::joypad::{Button, JoyPad, JoyPort};
use crate::ppu::{Frame, Ppu, OAM_SIZE, VBLANK_LINE};

const RAM_SIZE: usize = 0x800;
const RAM_MASK: usize = 0x7FF;
const RAM_START: usize = 0x0000;
const RAM_END: usize = 0x1FFF;

const PPU_MASK: usize = 0x7;
const PPU_REG_START: usize = 0x2000;
const PPU_REG_END: usize = 0x3FFF;

/// Main bus of the console: RAM, Ppu registers, DMA port and controllers
pub struct MainBus {
    ram: [u8; RAM_SIZE],
    ppu: Ppu,
    joypads: [JoyPad; 2],
}

impl Interface for MainBus {
    fn read(&mut self, addr: u16) -> u8 {
        let addr = addr as usize;
        match addr {
            RAM_START..=RAM_END => self.ram[addr & RAM_MASK],
            PPU_REG_START..=PPU_REG_END => {
                let reg = (addr & PPU_MASK) as u16;
                let data = self.ppu.read(reg);
                // A status poll is a spinning cpu, let the beam move on
                if reg == 0x2 {
                    self.ppu.step_scanline();
                }
                data
            }
            a if a == JOYPAD1 as usize => self.joypads[0].read(),
            a if a == JOYPAD2 as usize => self.joypads[1].read(),
            _ => {
                trace!("ignored read at {:#06X}", addr);
                0
            }
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        let addr = addr as usize;
        match addr {
            RAM_START..=RAM_END => self.ram[addr & RAM_MASK] = data,
            PPU_REG_START..=PPU_REG_END => self.ppu.write((addr & PPU_MASK) as u16, data),
            a if a == OAM_DMA as usize => {
                let start = (usize::from(data) << 8) & RAM_MASK;
                self.ppu.write_oam_dma(&self.ram[start..start + OAM_SIZE]);
            }
            a if a == JOYPAD1 as usize => {
                // The strobe line is shared by both ports
                for pad in self.joypads.iter_mut() {
                    pad.strobe(data);
                }
            }
            _ => trace!("ignored write at {:#06X}", addr),
        }
    }
}

impl MainBus {
    pub fn new(mirror_mode: MirrorMode) -> Self {
        Self {
            ram: [0; RAM_SIZE],
            ppu: Ppu::new(Box::new(PpuBus::new(mirror_mode))),
            joypads: [JoyPad::new(); 2],
        }
    }

    /// Runs the Ppu until the next vertical blank starts
    ///
    /// Returns true if the Ppu requested an NMI on the way.
    pub fn run_to_vblank(&mut self) -> bool {
        loop {
            self.ppu.step_scanline();
            if self.ppu.scanline() == VBLANK_LINE {
                break;
            }
        }
        self.ppu.poll_nmi()
    }

    pub fn update_joypad(&mut self, button: Button, pressed: bool, port: JoyPort) {
        match port {
            JoyPort::Port1 => self.joypads[0].update(button, pressed),
            JoyPort::Port2 => self.joypads[1].update(button, pressed),
        }
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn render(&self) -> Frame {
        self.ppu.render()
    }

    pub fn peek_ram(&self, addr: u16) -> u8 {
        self.ram[addr as usize & RAM_MASK]
    }
}
