//! Glyph decoder and compositor traits

use crate::slots::{DisplayStyle, Glyph, Origin, SlotIndex};

/// Errors that can occur while decoding a glyph image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// No free image memory for another decoded glyph
    OutOfMemory,
    /// Glyph resource missing or malformed
    MalformedResource,
}

/// Trait for the image decoder backing the slot pool
///
/// Every `acquire` consumes one unit of the shared image budget until the
/// matching `release`. Bitmaps are never shared between slots.
pub trait GlyphDecoder {
    /// Decoded image owned by a slot while it is occupied
    type Bitmap;

    /// Decode the image for `glyph`
    fn acquire(&mut self, glyph: Glyph) -> Result<Self::Bitmap, DecodeError>;

    /// Return a decoded image to the decoder. Always succeeds.
    fn release(&mut self, bitmap: Self::Bitmap);
}

/// Trait for the display compositor
///
/// The compositor keeps one visual element per slot. It has no error path.
pub trait Compositor<B> {
    /// Attach the slot's element at `origin` and make it visible
    fn attach(&mut self, slot: SlotIndex, bitmap: &B, origin: Origin, style: DisplayStyle);

    /// Detach the slot's element from the display
    fn detach(&mut self, slot: SlotIndex);

    /// Switch the face background to match `style`
    ///
    /// Normal is a white face, Inverted a black one.
    fn set_background(&mut self, style: DisplayStyle);
}
