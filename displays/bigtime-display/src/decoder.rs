//! Seven-segment glyph decoder
//!
//! Digit images are rasterized on demand instead of being kept resident.
//! The decoder hands out at most `N` bitmaps at a time, which is the image
//! memory ceiling the slot pool works within.

use core::convert::Infallible;

use bigtime_core::slots::{CELL_HEIGHT, CELL_WIDTH};
use bigtime_core::traits::{DecodeError, GlyphDecoder};
use bigtime_core::Glyph;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::framebuffer::{get_bit, set_bit};

/// Glyph width in pixels (one quarter of the screen)
pub const GLYPH_WIDTH: usize = CELL_WIDTH as usize;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = CELL_HEIGHT as usize;

/// Bytes per glyph row
const GLYPH_STRIDE: usize = GLYPH_WIDTH / 8;

/// Bytes per decoded glyph
pub const GLYPH_BYTES: usize = GLYPH_STRIDE * GLYPH_HEIGHT;

/// Segment geometry inside the cell
mod geometry {
    pub const LEFT: i32 = 12;
    pub const TOP: i32 = 10;
    pub const WIDTH: u32 = 48;
    pub const HEIGHT: u32 = 64;
    pub const THICKNESS: u32 = 8;
    pub const MIDDLE: i32 = TOP + (HEIGHT / 2) as i32 - (THICKNESS / 2) as i32;
    pub const RIGHT: i32 = LEFT + (WIDTH - THICKNESS) as i32;
    pub const BOTTOM: i32 = TOP + (HEIGHT - THICKNESS) as i32;
    pub const UPPER_LEN: u32 = (MIDDLE - TOP) as u32 + THICKNESS;
    pub const LOWER_LEN: u32 = (TOP + HEIGHT as i32 - MIDDLE) as u32;
}

// Segment bits, standard a-g naming
const SEG_A: u8 = 0x01;
const SEG_B: u8 = 0x02;
const SEG_C: u8 = 0x04;
const SEG_D: u8 = 0x08;
const SEG_E: u8 = 0x10;
const SEG_F: u8 = 0x20;
const SEG_G: u8 = 0x40;

/// Lit segments for each digit
const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Rectangle covered by a segment
fn segment_rect(segment: u8) -> Option<Rectangle> {
    use geometry::*;

    let (x, y, w, h) = match segment {
        SEG_A => (LEFT, TOP, WIDTH, THICKNESS),
        SEG_B => (RIGHT, TOP, THICKNESS, UPPER_LEN),
        SEG_C => (RIGHT, MIDDLE, THICKNESS, LOWER_LEN),
        SEG_D => (LEFT, BOTTOM, WIDTH, THICKNESS),
        SEG_E => (LEFT, MIDDLE, THICKNESS, LOWER_LEN),
        SEG_F => (LEFT, TOP, THICKNESS, UPPER_LEN),
        SEG_G => (LEFT, MIDDLE, WIDTH, THICKNESS),
        _ => return None,
    };
    Some(Rectangle::new(Point::new(x, y), Size::new(w, h)))
}

/// Decoded digit image, black ink on white
pub struct GlyphBitmap {
    glyph: Glyph,
    data: [u8; GLYPH_BYTES],
}

impl GlyphBitmap {
    /// Rasterize a glyph
    fn render(glyph: Glyph) -> Self {
        let mut bitmap = Self {
            glyph,
            data: [0; GLYPH_BYTES],
        };
        let lit = DIGIT_SEGMENTS[glyph.value() as usize];
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);

        for bit in 0..7 {
            let segment = 1u8 << bit;
            if lit & segment == 0 {
                continue;
            }
            if let Some(rect) = segment_rect(segment) {
                let _ = rect.into_styled(fill).draw(&mut bitmap);
            }
        }
        bitmap
    }

    /// Digit shown by this bitmap
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Get a pixel; out-of-bounds reads are white
    pub fn pixel(&self, x: usize, y: usize) -> BinaryColor {
        if x < GLYPH_WIDTH && y < GLYPH_HEIGHT && get_bit(&self.data, GLYPH_STRIDE, x, y) {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }

    /// Packed pixel data
    pub fn data(&self) -> &[u8; GLYPH_BYTES] {
        &self.data
    }

    /// Count of ink pixels
    pub fn ink(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl OriginDimensions for GlyphBitmap {
    fn size(&self) -> Size {
        Size::new(GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32)
    }
}

impl DrawTarget for GlyphBitmap {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (x, y) = (point.x as usize, point.y as usize);
            if point.x >= 0 && point.y >= 0 && x < GLYPH_WIDTH && y < GLYPH_HEIGHT {
                set_bit(&mut self.data, GLYPH_STRIDE, x, y, color.is_on());
            }
        }
        Ok(())
    }
}

/// Glyph decoder with room for `N` decoded bitmaps
pub struct SegmentDecoder<const N: usize> {
    outstanding: usize,
}

impl<const N: usize> Default for SegmentDecoder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SegmentDecoder<N> {
    /// Create a decoder with no bitmaps handed out
    pub const fn new() -> Self {
        Self { outstanding: 0 }
    }

    /// Bitmaps currently handed out
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Bitmaps that can still be decoded
    pub fn available(&self) -> usize {
        N - self.outstanding
    }
}

impl<const N: usize> GlyphDecoder for SegmentDecoder<N> {
    type Bitmap = GlyphBitmap;

    fn acquire(&mut self, glyph: Glyph) -> Result<GlyphBitmap, DecodeError> {
        if self.outstanding >= N {
            return Err(DecodeError::OutOfMemory);
        }
        self.outstanding += 1;
        Ok(GlyphBitmap::render(glyph))
    }

    fn release(&mut self, _bitmap: GlyphBitmap) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }
}
