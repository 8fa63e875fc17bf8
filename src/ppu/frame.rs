use super::Pixel;

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 240;

/// One rendered picture, packed RGB24
pub struct Frame {
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; WIDTH * HEIGHT * 3],
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        let index = Self::index(x, y);
        Pixel(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        )
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        let index = Self::index(x, y);
        self.pixels[index] = pixel.0;
        self.pixels[index + 1] = pixel.1;
        self.pixels[index + 2] = pixel.2;
    }

    /// Paints an 8x8 cell, clipped to the screen
    pub fn fill_cell(&mut self, x: usize, y: usize, pixel: Pixel) {
        for py in y..(y + 8).min(HEIGHT) {
            for px in x..(x + 8).min(WIDTH) {
                self.set_pixel(px, py, pixel);
            }
        }
    }

    fn index(x: usize, y: usize) -> usize {
        assert!(x < WIDTH && y < HEIGHT, "pixel ({}, {}) is off screen", x, y);
        (y * 3) * WIDTH + (x * 3)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
