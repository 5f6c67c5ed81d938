//! Framebuffer compositor
//!
//! Each slot's element is an opaque 72x84 block. Attaching a glyph paints it
//! over its cell; detaching paints the cell with the face background. Empty
//! cells follow background changes, attached cells keep the style they were
//! loaded with until their row is redrawn.

use bigtime_core::slots::{Origin, CELL_HEIGHT, CELL_WIDTH, TOTAL_SLOTS};
use bigtime_core::traits::Compositor;
use bigtime_core::{DisplayStyle, SlotIndex};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::decoder::{GlyphBitmap, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuffer::Framebuffer;

/// Background color of the face for a style
///
/// White face for the normal style, black face for the inverted one.
pub const fn background_color(style: DisplayStyle) -> BinaryColor {
    match style {
        DisplayStyle::Normal => BinaryColor::Off,
        DisplayStyle::Inverted => BinaryColor::On,
    }
}

/// Screen area of a slot
pub fn cell_area(slot: SlotIndex) -> Rectangle {
    let Origin { x, y } = slot.origin();
    Rectangle::new(
        Point::new(x as i32, y as i32),
        Size::new(CELL_WIDTH as u32, CELL_HEIGHT as u32),
    )
}

/// Compositor drawing into a [`Framebuffer`]
pub struct FramebufferCompositor {
    framebuffer: Framebuffer,
    background: DisplayStyle,
    attached: [bool; TOTAL_SLOTS],
}

impl Default for FramebufferCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl FramebufferCompositor {
    /// Create a compositor over a blank white framebuffer
    pub const fn new() -> Self {
        Self {
            framebuffer: Framebuffer::new(),
            background: DisplayStyle::Normal,
            attached: [false; TOTAL_SLOTS],
        }
    }

    /// Get the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Get the framebuffer mutably (for flushing and dirty tracking)
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Current face background
    pub fn background(&self) -> DisplayStyle {
        self.background
    }

    /// Check if a slot has an element attached
    pub fn is_attached(&self, slot: SlotIndex) -> bool {
        self.attached[slot.as_usize()]
    }

    fn fill_cell(&mut self, slot: SlotIndex) {
        let color = background_color(self.background);
        let _ = cell_area(slot)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.framebuffer);
    }
}

impl Compositor<GlyphBitmap> for FramebufferCompositor {
    fn attach(
        &mut self,
        slot: SlotIndex,
        bitmap: &GlyphBitmap,
        origin: Origin,
        style: DisplayStyle,
    ) {
        let (ox, oy) = (origin.x as usize, origin.y as usize);
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                let color = match style {
                    DisplayStyle::Normal => bitmap.pixel(x, y),
                    DisplayStyle::Inverted => bitmap.pixel(x, y).invert(),
                };
                self.framebuffer.set_pixel(ox + x, oy + y, color);
            }
        }
        self.attached[slot.as_usize()] = true;
    }

    fn detach(&mut self, slot: SlotIndex) {
        self.attached[slot.as_usize()] = false;
        self.fill_cell(slot);
    }

    fn set_background(&mut self, style: DisplayStyle) {
        if style == self.background {
            return;
        }
        self.background = style;
        for slot in SlotIndex::ALL {
            if !self.attached[slot.as_usize()] {
                self.fill_cell(slot);
            }
        }
    }
}
