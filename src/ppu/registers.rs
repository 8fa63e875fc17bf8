use bitflags::bitflags;

bitflags! {
    /// PPUCTRL (0x2000): nmi enable, increment step, table selects
    pub struct Controller: u8 {
        const NMI_ENABLED    = 0b10000000;
        const MASTER_SLAVE   = 0b01000000;
        const SPRITE_SIZE    = 0b00100000;
        const BG_ADDRESS     = 0b00010000;
        const SP_ADDRESS     = 0b00001000;
        const VRAM_INCREMENT = 0b00000100;
        const NAMETABLE_V    = 0b00000010;
        const NAMETABLE_H    = 0b00000001;
    }
}

impl Controller {
    /// Replaces the register with a raw byte written by the game
    pub fn set_raw(&mut self, v: u8) {
        *self = Self::from_bits_truncate(v);
    }

    /// Address step after each data port access: one cell right or one row down
    pub fn increment(&self) -> u16 {
        if self.contains(Self::VRAM_INCREMENT) {
            32
        } else {
            1
        }
    }

    /// True if the frame interrupt fires at the start of vblank
    pub fn nmi_enabled(&self) -> bool {
        self.contains(Self::NMI_ENABLED)
    }
}

bitflags! {
    /// PPUMASK (0x2001): which layers are drawn
    pub struct Mask: u8 {
        const EMPH_BLUE  = 0b10000000;
        const EMPH_GREEN = 0b01000000;
        const EMPH_RED   = 0b00100000;
        const SHOW_SP    = 0b00010000;
        const SHOW_BG    = 0b00001000;
        const SHOW_SP8   = 0b00000100;
        const SHOW_BG8   = 0b00000010;
        const GREYSCALE  = 0b00000001;
    }
}

impl Mask {
    /// Replaces the register with a raw byte written by the game
    pub fn set_raw(&mut self, v: u8) {
        *self = Self::from_bits_truncate(v);
    }

    /// Background layer drawn
    pub fn render_bg(&self) -> bool {
        self.contains(Self::SHOW_BG)
    }

    /// Sprite layer drawn
    pub fn render_sp(&self) -> bool {
        self.contains(Self::SHOW_SP)
    }

    /// Returns true if either layer is being drawn
    pub fn rendering(&self) -> bool {
        self.render_bg() || self.render_sp()
    }
}

bitflags! {
    /// PPUSTATUS (0x2002), read by the vblank busy-wait
    pub struct Status: u8 {
        const IN_VBLANK   = 0b10000000;
        const SP_0_HIT    = 0b01000000;
        const SP_OVERFLOW = 0b00100000;
        const UNUSED      = 0b00011111;
    }
}

impl Status {
    /// Returns the vblank flag value
    pub fn in_vblank(&self) -> bool {
        self.contains(Self::IN_VBLANK)
    }

    /// Raised at the start of vblank, dropped on the pre-render line or a status read
    pub fn set_vblank(&mut self, v: bool) {
        self.set(Self::IN_VBLANK, v);
    }
}
