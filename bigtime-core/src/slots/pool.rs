//! Slot pool
//!
//! Owns the four display slots and the decoded glyph held by each one.
//! The pool is a fixed array, so no more than four glyph images can ever be
//! resident at once even though there are ten possible digits.

use core::array;

use super::types::{DisplayStyle, Glyph, SlotIndex, TOTAL_SLOTS};
use crate::traits::{Compositor, DecodeError, GlyphDecoder};

/// Result of a load request that did not fail in the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadOutcome {
    /// Glyph decoded and attached to the display
    Loaded,
    /// Slot already holds a glyph; nothing was done
    Occupied,
    /// Slot index or digit out of range; nothing was done
    Rejected,
}

/// A glyph resident in a slot
struct Occupant<B> {
    glyph: Glyph,
    style: DisplayStyle,
    bitmap: B,
}

/// Fixed pool of four digit slots
///
/// A slot holds a decoded bitmap if and only if it has an occupant. Loading
/// never replaces an occupant; callers unload first.
///
/// Slots are not released on drop. Call [`SlotPool::unload_all`] at teardown
/// so every bitmap goes back to the decoder.
pub struct SlotPool<D: GlyphDecoder, C> {
    decoder: D,
    compositor: C,
    slots: [Option<Occupant<D::Bitmap>>; TOTAL_SLOTS],
}

impl<D, C> SlotPool<D, C>
where
    D: GlyphDecoder,
    C: Compositor<D::Bitmap>,
{
    /// Create a pool with all slots empty
    pub fn new(decoder: D, compositor: C) -> Self {
        Self {
            decoder,
            compositor,
            slots: array::from_fn(|_| None),
        }
    }

    /// Load `glyph` into an empty slot
    ///
    /// Decodes the glyph, positions it at the slot's grid origin with the
    /// requested style and attaches it to the display. An occupied slot is
    /// left untouched and reports [`LoadOutcome::Occupied`].
    ///
    /// A decoder failure leaves the slot empty and is returned to the caller.
    pub fn load(
        &mut self,
        slot: SlotIndex,
        glyph: Glyph,
        style: DisplayStyle,
    ) -> Result<LoadOutcome, DecodeError> {
        let cell = &mut self.slots[slot.as_usize()];
        if cell.is_some() {
            return Ok(LoadOutcome::Occupied);
        }

        let bitmap = self.decoder.acquire(glyph)?;
        self.compositor.attach(slot, &bitmap, slot.origin(), style);
        *cell = Some(Occupant {
            glyph,
            style,
            bitmap,
        });

        Ok(LoadOutcome::Loaded)
    }

    /// Load a digit given as raw integers
    ///
    /// Out-of-range slot indices or digits are ignored and report
    /// [`LoadOutcome::Rejected`].
    pub fn load_digit(
        &mut self,
        slot: u8,
        digit: u8,
        style: DisplayStyle,
    ) -> Result<LoadOutcome, DecodeError> {
        match (SlotIndex::new(slot), Glyph::new(digit)) {
            (Some(slot), Some(glyph)) => self.load(slot, glyph, style),
            _ => Ok(LoadOutcome::Rejected),
        }
    }

    /// Remove a slot's glyph from the display and release its bitmap
    ///
    /// Safe to call on an empty slot. Returns the glyph that was removed.
    pub fn unload(&mut self, slot: SlotIndex) -> Option<Glyph> {
        let occupant = self.slots[slot.as_usize()].take()?;
        self.compositor.detach(slot);
        self.decoder.release(occupant.bitmap);
        Some(occupant.glyph)
    }

    /// Unload every slot
    pub fn unload_all(&mut self) {
        for slot in SlotIndex::ALL {
            self.unload(slot);
        }
    }

    /// Glyph currently held by a slot
    pub fn occupant(&self, slot: SlotIndex) -> Option<Glyph> {
        self.slots[slot.as_usize()].as_ref().map(|o| o.glyph)
    }

    /// Style the slot's glyph was loaded with
    pub fn style(&self, slot: SlotIndex) -> Option<DisplayStyle> {
        self.slots[slot.as_usize()].as_ref().map(|o| o.style)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: SlotIndex) -> bool {
        self.slots[slot.as_usize()].is_none()
    }

    /// Number of decoded bitmaps currently held
    pub fn resident(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupant of every slot in screen order
    pub fn occupancy(&self) -> [Option<Glyph>; TOTAL_SLOTS] {
        array::from_fn(|i| self.slots[i].as_ref().map(|o| o.glyph))
    }

    /// Get the glyph decoder
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Get the compositor
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Get the compositor mutably
    pub fn compositor_mut(&mut self) -> &mut C {
        &mut self.compositor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::mocks::{MockCompositor, MockDecoder};
    use crate::slots::Origin;

    fn pool() -> SlotPool<MockDecoder, MockCompositor> {
        SlotPool::new(MockDecoder::new(), MockCompositor::new())
    }

    fn slot(i: u8) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn glyph(d: u8) -> Glyph {
        Glyph::new(d).unwrap()
    }

    #[test]
    fn test_new_pool_is_empty() {
        let pool = pool();
        assert_eq!(pool.resident(), 0);
        assert_eq!(pool.occupancy(), [None; 4]);
        for s in SlotIndex::ALL {
            assert!(pool.is_empty(s));
        }
    }

    #[test]
    fn test_unload_empty_slot_is_noop() {
        let mut pool = pool();
        for s in SlotIndex::ALL {
            assert_eq!(pool.unload(s), None);
            assert_eq!(pool.unload(s), None);
        }
        assert_eq!(pool.resident(), 0);
        assert_eq!(pool.decoder().releases(), 0);
        assert_eq!(pool.compositor().detaches(), 0);
    }

    #[test]
    fn test_load_attaches_at_grid_origin() {
        let mut pool = pool();
        let outcome = pool.load(slot(3), glyph(7), DisplayStyle::Inverted);

        assert_eq!(outcome, Ok(LoadOutcome::Loaded));
        assert_eq!(pool.occupant(slot(3)), Some(glyph(7)));
        assert_eq!(pool.style(slot(3)), Some(DisplayStyle::Inverted));
        assert_eq!(pool.resident(), 1);
        assert_eq!(pool.decoder().outstanding(), 1);

        let attached = pool.compositor().attached(slot(3)).unwrap();
        assert_eq!(attached.glyph, 7);
        assert_eq!(attached.origin, Origin { x: 72, y: 84 });
        assert_eq!(attached.style, DisplayStyle::Inverted);
    }

    #[test]
    fn test_load_occupied_slot_does_not_acquire() {
        let mut pool = pool();
        pool.load(slot(0), glyph(1), DisplayStyle::Normal).unwrap();

        let outcome = pool.load(slot(0), glyph(2), DisplayStyle::Inverted);

        assert_eq!(outcome, Ok(LoadOutcome::Occupied));
        assert_eq!(pool.occupant(slot(0)), Some(glyph(1)));
        assert_eq!(pool.style(slot(0)), Some(DisplayStyle::Normal));
        assert_eq!(pool.decoder().acquires(), 1);
    }

    #[test]
    fn test_unload_releases_bitmap() {
        let mut pool = pool();
        pool.load(slot(2), glyph(4), DisplayStyle::Normal).unwrap();

        assert_eq!(pool.unload(slot(2)), Some(glyph(4)));
        assert!(pool.is_empty(slot(2)));
        assert_eq!(pool.decoder().outstanding(), 0);
        assert!(pool.compositor().attached(slot(2)).is_none());

        // Second unload is a no-op
        assert_eq!(pool.unload(slot(2)), None);
        assert_eq!(pool.decoder().releases(), 1);
    }

    #[test]
    fn test_same_glyph_in_every_slot_is_decoded_per_slot() {
        let mut pool = pool();
        for s in SlotIndex::ALL {
            pool.load(s, glyph(8), DisplayStyle::Normal).unwrap();
        }
        assert_eq!(pool.resident(), 4);
        assert_eq!(pool.decoder().acquires(), 4);
        assert_eq!(pool.decoder().outstanding(), 4);
    }

    #[test]
    fn test_load_digit_rejects_out_of_range() {
        let mut pool = pool();
        assert_eq!(
            pool.load_digit(4, 1, DisplayStyle::Normal),
            Ok(LoadOutcome::Rejected)
        );
        assert_eq!(
            pool.load_digit(0, 10, DisplayStyle::Normal),
            Ok(LoadOutcome::Rejected)
        );
        assert_eq!(pool.resident(), 0);
        assert_eq!(pool.decoder().acquires(), 0);

        assert_eq!(
            pool.load_digit(1, 9, DisplayStyle::Normal),
            Ok(LoadOutcome::Loaded)
        );
        assert_eq!(pool.occupant(slot(1)), Some(glyph(9)));
    }

    #[test]
    fn test_decoder_failure_leaves_slot_empty() {
        let mut pool = SlotPool::new(MockDecoder::with_capacity(1), MockCompositor::new());
        pool.load(slot(0), glyph(1), DisplayStyle::Normal).unwrap();

        let result = pool.load(slot(1), glyph(2), DisplayStyle::Normal);

        assert_eq!(result, Err(DecodeError::OutOfMemory));
        assert!(pool.is_empty(slot(1)));
        assert!(pool.compositor().attached(slot(1)).is_none());
        assert_eq!(pool.resident(), 1);
    }

    #[test]
    fn test_unload_all() {
        let mut pool = pool();
        for (s, d) in SlotIndex::ALL.into_iter().zip([1, 2, 3, 4]) {
            pool.load(s, glyph(d), DisplayStyle::Normal).unwrap();
        }

        pool.unload_all();

        assert_eq!(pool.resident(), 0);
        assert_eq!(pool.decoder().outstanding(), 0);
        assert_eq!(pool.compositor().attached_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_load_empty_slot_occupies_it(i in 0u8..4, d in 0u8..10, inverted in any::<bool>()) {
            let mut pool = pool();
            let style = if inverted { DisplayStyle::Inverted } else { DisplayStyle::Normal };

            prop_assert_eq!(pool.load(slot(i), glyph(d), style), Ok(LoadOutcome::Loaded));
            prop_assert_eq!(pool.occupant(slot(i)), Some(glyph(d)));
            prop_assert_eq!(pool.style(slot(i)), Some(style));
            prop_assert_eq!(pool.decoder().acquires(), 1);

            prop_assert_eq!(pool.load(slot(i), glyph(d), style), Ok(LoadOutcome::Occupied));
            prop_assert_eq!(pool.decoder().acquires(), 1);
        }

        #[test]
        fn prop_resident_never_exceeds_slots(
            ops in prop::collection::vec((0u8..4, 0u8..10, any::<bool>()), 0..64),
        ) {
            let mut pool = pool();
            for (i, d, unload) in ops {
                if unload {
                    pool.unload(slot(i));
                } else {
                    let _ = pool.load(slot(i), glyph(d), DisplayStyle::Normal);
                }
                prop_assert!(pool.resident() <= TOTAL_SLOTS);
                prop_assert_eq!(pool.decoder().outstanding(), pool.resident());
                prop_assert_eq!(pool.compositor().attached_count(), pool.resident());
            }
        }
    }
}
