//! Slot, glyph and style types
//!
//! Slot indices and glyph values are range-checked at construction, so the
//! pool never sees an out-of-range value once it holds one of these types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit slots on screen (2 rows x 2 columns)
pub const TOTAL_SLOTS: usize = 4;

/// Number of distinct digit glyphs
pub const NUMBER_OF_GLYPHS: usize = 10;

/// Slots per row
pub const SLOTS_PER_ROW: u8 = 2;

/// Width of one slot in pixels (half of a 144 px wide screen)
pub const CELL_WIDTH: u16 = 72;

/// Height of one slot in pixels (half of a 168 px tall screen)
pub const CELL_HEIGHT: u16 = 84;

/// Screen width in pixels
pub const SCREEN_WIDTH: u16 = CELL_WIDTH * SLOTS_PER_ROW as u16;

/// Screen height in pixels
pub const SCREEN_HEIGHT: u16 = CELL_HEIGHT * 2;

/// Position of a slot on screen
///
/// ```text
///     0 1
///     2 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// All slots in screen order
    pub const ALL: [SlotIndex; TOTAL_SLOTS] =
        [SlotIndex(0), SlotIndex(1), SlotIndex(2), SlotIndex(3)];

    /// Create a slot index, or `None` if it is not in 0..4
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < TOTAL_SLOTS {
            Some(SlotIndex(index))
        } else {
            None
        }
    }

    /// Raw index (0-3)
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index for array access
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Grid column (0 = left, 1 = right)
    pub const fn column(self) -> u8 {
        self.0 % SLOTS_PER_ROW
    }

    /// Grid row (0 = hours, 1 = minutes)
    pub const fn row(self) -> u8 {
        self.0 / SLOTS_PER_ROW
    }

    /// Top-left pixel of this slot
    pub const fn origin(self) -> Origin {
        Origin {
            x: self.column() as u16 * CELL_WIDTH,
            y: self.row() as u16 * CELL_HEIGHT,
        }
    }
}

impl TryFrom<u8> for SlotIndex {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        SlotIndex::new(index).ok_or(index)
    }
}

/// A single decimal digit (0-9) identifying one of the glyph images
///
/// Glyphs are identified by value. Two slots showing the same digit each
/// hold their own decoded copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glyph(u8);

impl Glyph {
    /// Create a glyph, or `None` if `digit` is not 0-9
    pub const fn new(digit: u8) -> Option<Self> {
        if (digit as usize) < NUMBER_OF_GLYPHS {
            Some(Glyph(digit))
        } else {
            None
        }
    }

    /// Last decimal digit of `value`
    pub const fn ones(value: u8) -> Self {
        Glyph(value % 10)
    }

    /// Tens digit of `value`, after reducing it to two digits
    pub const fn tens(value: u8) -> Self {
        Glyph((value % 100) / 10)
    }

    /// Digit value
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Glyph {
    type Error = u8;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        Glyph::new(digit).ok_or(digit)
    }
}

/// How glyphs are composited onto the screen
///
/// Selected from AM/PM and applied to every slot loaded in one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayStyle {
    /// Direct composite, black digits on a white face
    #[default]
    Normal,
    /// Color-inverted composite, white digits on a black face
    Inverted,
}

impl DisplayStyle {
    /// Check if pixels are inverted
    pub const fn is_inverted(self) -> bool {
        matches!(self, DisplayStyle::Inverted)
    }
}

/// Pixel coordinates of a slot's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}
