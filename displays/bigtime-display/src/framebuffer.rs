//! 1bpp framebuffer
//!
//! Row-major, MSB-first packing (the layout `embedded-graphics` uses for
//! `ImageRaw<BinaryColor>`). A set bit is ink: `BinaryColor::On` is black.

use core::convert::Infallible;

use bigtime_core::slots::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Screen width in pixels
pub const WIDTH: usize = SCREEN_WIDTH as usize;

/// Screen height in pixels
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Bytes per framebuffer row
pub const STRIDE: usize = WIDTH / 8;

/// Bytes needed to track one dirty flag per row
const DIRTY_BYTES: usize = HEIGHT.div_ceil(8);

/// Read one bit from a packed 1bpp buffer
pub(crate) fn get_bit(buf: &[u8], stride: usize, x: usize, y: usize) -> bool {
    buf[y * stride + x / 8] & (0x80 >> (x % 8)) != 0
}

/// Write one bit into a packed 1bpp buffer
pub(crate) fn set_bit(buf: &mut [u8], stride: usize, x: usize, y: usize, on: bool) {
    let byte = &mut buf[y * stride + x / 8];
    let mask = 0x80 >> (x % 8);
    if on {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

/// Full-screen 1bpp framebuffer with per-row dirty tracking
#[derive(Clone)]
pub struct Framebuffer {
    pixels: [u8; STRIDE * HEIGHT],
    dirty: [u8; DIRTY_BYTES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank (white) framebuffer with every row dirty
    pub const fn new() -> Self {
        Self {
            pixels: [0; STRIDE * HEIGHT],
            dirty: [0xFF; DIRTY_BYTES],
        }
    }

    /// Get a pixel; out-of-bounds reads are white
    pub fn pixel(&self, x: usize, y: usize) -> BinaryColor {
        if x < WIDTH && y < HEIGHT && get_bit(&self.pixels, STRIDE, x, y) {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }

    /// Set a pixel; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, color: BinaryColor) {
        if x < WIDTH && y < HEIGHT {
            set_bit(&mut self.pixels, STRIDE, x, y, color.is_on());
            self.mark_row_dirty(y);
        }
    }

    /// Packed pixels of one row
    pub fn row(&self, y: usize) -> Option<&[u8; STRIDE]> {
        self.pixels
            .get(y * STRIDE..(y + 1) * STRIDE)
            .and_then(|row| row.try_into().ok())
    }

    /// Check if a row changed since the last `mark_clean`
    pub fn is_row_dirty(&self, y: usize) -> bool {
        y < HEIGHT && self.dirty[y / 8] & (1 << (y % 8)) != 0
    }

    /// Check if any row changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&b| b != 0)
    }

    /// Iterate the indices of dirty rows
    pub fn dirty_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HEIGHT).filter(move |&y| self.is_row_dirty(y))
    }

    /// Mark every row clean (after flushing to the panel)
    pub fn mark_clean(&mut self) {
        self.dirty = [0; DIRTY_BYTES];
    }

    /// Count of set (black) pixels inside a rectangle
    pub fn ink_in(&self, area: &Rectangle) -> usize {
        area.points()
            .filter(|p| p.x >= 0 && p.y >= 0)
            .filter(|p| self.pixel(p.x as usize, p.y as usize).is_on())
            .count()
    }

    fn mark_row_dirty(&mut self, y: usize) {
        self.dirty[y / 8] |= 1 << (y % 8);
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }
}
