/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel(pub u8, pub u8, pub u8);

/// 2C02 system palette, indexed by the 6-bit colour stored in palette RAM
#[rustfmt::skip]
pub const SYSTEM_PALETTE: [Pixel; 64] = [
    Pixel(0x80, 0x80, 0x80), Pixel(0x00, 0x3D, 0xA6), Pixel(0x00, 0x12, 0xB0), Pixel(0x44, 0x00, 0x96),
    Pixel(0xA1, 0x00, 0x5E), Pixel(0xC7, 0x00, 0x28), Pixel(0xBA, 0x06, 0x00), Pixel(0x8C, 0x17, 0x00),
    Pixel(0x5C, 0x2F, 0x00), Pixel(0x10, 0x45, 0x00), Pixel(0x05, 0x4A, 0x00), Pixel(0x00, 0x47, 0x2E),
    Pixel(0x00, 0x41, 0x66), Pixel(0x00, 0x00, 0x00), Pixel(0x05, 0x05, 0x05), Pixel(0x05, 0x05, 0x05),
    Pixel(0xC7, 0xC7, 0xC7), Pixel(0x00, 0x77, 0xFF), Pixel(0x21, 0x55, 0xFF), Pixel(0x82, 0x37, 0xFA),
    Pixel(0xEB, 0x2F, 0xB5), Pixel(0xFF, 0x29, 0x50), Pixel(0xFF, 0x22, 0x00), Pixel(0xD6, 0x32, 0x00),
    Pixel(0xC4, 0x62, 0x00), Pixel(0x35, 0x80, 0x00), Pixel(0x05, 0x8F, 0x00), Pixel(0x00, 0x8A, 0x55),
    Pixel(0x00, 0x99, 0xCC), Pixel(0x21, 0x21, 0x21), Pixel(0x09, 0x09, 0x09), Pixel(0x09, 0x09, 0x09),
    Pixel(0xFF, 0xFF, 0xFF), Pixel(0x0F, 0xD7, 0xFF), Pixel(0x69, 0xA2, 0xFF), Pixel(0xD4, 0x80, 0xFF),
    Pixel(0xFF, 0x45, 0xF3), Pixel(0xFF, 0x61, 0x8B), Pixel(0xFF, 0x88, 0x33), Pixel(0xFF, 0x9C, 0x12),
    Pixel(0xFA, 0xBC, 0x20), Pixel(0x9F, 0xE3, 0x0E), Pixel(0x2B, 0xF0, 0x35), Pixel(0x0C, 0xF0, 0xA4),
    Pixel(0x05, 0xFB, 0xFF), Pixel(0x5E, 0x5E, 0x5E), Pixel(0x0D, 0x0D, 0x0D), Pixel(0x0D, 0x0D, 0x0D),
    Pixel(0xFF, 0xFF, 0xFF), Pixel(0xA6, 0xFC, 0xFF), Pixel(0xB3, 0xEC, 0xFF), Pixel(0xDA, 0xAB, 0xEB),
    Pixel(0xFF, 0xA8, 0xF9), Pixel(0xFF, 0xAB, 0xB3), Pixel(0xFF, 0xD2, 0xB0), Pixel(0xFF, 0xEF, 0xA6),
    Pixel(0xFF, 0xF7, 0x9C), Pixel(0xD7, 0xE8, 0x95), Pixel(0xA6, 0xED, 0xAF), Pixel(0xA2, 0xF2, 0xDA),
    Pixel(0x99, 0xFF, 0xFC), Pixel(0xDD, 0xDD, 0xDD), Pixel(0x11, 0x11, 0x11), Pixel(0x11, 0x11, 0x11),
];

/// Looks up the RGB value of a palette RAM entry
pub fn color(entry: u8) -> Pixel {
    SYSTEM_PALETTE[(entry & 0x3F) as usize]
}
