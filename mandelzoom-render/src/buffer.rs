/// One pixel as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// An RGB pixel buffer representing a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data, 3 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 3],
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn offset(&self, col: u32, row: u32) -> usize {
        debug_assert!(col < self.width && row < self.height);
        (row as usize * self.width as usize + col as usize) * 3
    }

    #[inline]
    pub fn set_pixel(&mut self, col: u32, row: u32, rgb: Rgb) {
        let i = self.offset(col, row);
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    #[inline]
    pub fn pixel(&self, col: u32, row: u32) -> Rgb {
        let i = self.offset(col, row);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Expand to RGBA with opaque alpha, e.g. for window icons.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixel_count() * 4);
        for px in self.pixels.chunks_exact(3) {
            out.extend_from_slice(px);
            out.push(255);
        }
        out
    }
}
