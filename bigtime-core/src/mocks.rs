//! Mock collaborators for unit tests

use crate::slots::{DisplayStyle, Glyph, Origin, SlotIndex, TOTAL_SLOTS};
use crate::traits::{Compositor, DecodeError, GlyphDecoder};

/// Bitmap handed out by [`MockDecoder`]
#[derive(Debug, PartialEq, Eq)]
pub struct MockBitmap {
    pub glyph: u8,
    pub id: u32,
}

/// Decoder that counts acquisitions and enforces a resource ceiling
pub struct MockDecoder {
    capacity: usize,
    next_id: u32,
    acquires: usize,
    releases: usize,
}

impl MockDecoder {
    /// Decoder with room for every slot
    pub fn new() -> Self {
        Self::with_capacity(TOTAL_SLOTS)
    }

    /// Decoder that fails once `capacity` bitmaps are outstanding
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            next_id: 0,
            acquires: 0,
            releases: 0,
        }
    }

    pub fn acquires(&self) -> usize {
        self.acquires
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn outstanding(&self) -> usize {
        self.acquires - self.releases
    }
}

impl GlyphDecoder for MockDecoder {
    type Bitmap = MockBitmap;

    fn acquire(&mut self, glyph: Glyph) -> Result<MockBitmap, DecodeError> {
        if self.outstanding() >= self.capacity {
            return Err(DecodeError::OutOfMemory);
        }
        self.acquires += 1;
        self.next_id += 1;
        Ok(MockBitmap {
            glyph: glyph.value(),
            id: self.next_id,
        })
    }

    fn release(&mut self, _bitmap: MockBitmap) {
        self.releases += 1;
    }
}

/// Element attached to [`MockCompositor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attached {
    pub glyph: u8,
    pub origin: Origin,
    pub style: DisplayStyle,
}

/// Compositor that records what is on screen
pub struct MockCompositor {
    elements: [Option<Attached>; TOTAL_SLOTS],
    background: Option<DisplayStyle>,
    attaches: usize,
    detaches: usize,
}

impl MockCompositor {
    pub fn new() -> Self {
        Self {
            elements: [None; TOTAL_SLOTS],
            background: None,
            attaches: 0,
            detaches: 0,
        }
    }

    pub fn attached(&self, slot: SlotIndex) -> Option<Attached> {
        self.elements[slot.as_usize()]
    }

    pub fn attached_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    pub fn background(&self) -> Option<DisplayStyle> {
        self.background
    }

    pub fn attaches(&self) -> usize {
        self.attaches
    }

    pub fn detaches(&self) -> usize {
        self.detaches
    }
}

impl Compositor<MockBitmap> for MockCompositor {
    fn attach(
        &mut self,
        slot: SlotIndex,
        bitmap: &MockBitmap,
        origin: Origin,
        style: DisplayStyle,
    ) {
        // An element can only have one parent
        assert!(
            self.elements[slot.as_usize()].is_none(),
            "slot {} attached twice",
            slot.get()
        );
        self.attaches += 1;
        self.elements[slot.as_usize()] = Some(Attached {
            glyph: bitmap.glyph,
            origin,
            style,
        });
    }

    fn detach(&mut self, slot: SlotIndex) {
        self.detaches += 1;
        self.elements[slot.as_usize()] = None;
    }

    fn set_background(&mut self, style: DisplayStyle) {
        self.background = Some(style);
    }
}
