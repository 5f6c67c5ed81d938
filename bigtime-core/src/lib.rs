//! Board-agnostic core logic for the Big Time watch face
//!
//! The screen is split into four quadrants, one large digit per quadrant:
//!
//! ```text
//!     0 1     hour row
//!     2 3     minute row
//! ```
//!
//! There is only enough RAM for a subset of the ten digit bitmaps, so each
//! quadrant owns a slot that loads and unloads its bitmap on demand.
//!
//! - Slot pool with explicit acquire/release of decoded glyphs
//! - Time renderer (row decomposition, AM/PM styling, 12/24h hours)
//! - Tick tracking and change masks
//! - Collaborator traits (glyph decoder, compositor, clock format)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod render;
pub mod slots;
pub mod traits;

#[cfg(test)]
mod mocks;

pub use clock::{ChangeMask, TickTime, WallClock};
pub use config::{HourFormat, WatchfaceConfig};
pub use render::{RenderError, TimeRenderer};
pub use slots::{DisplayStyle, Glyph, LoadOutcome, Origin, SlotIndex, SlotPool};
