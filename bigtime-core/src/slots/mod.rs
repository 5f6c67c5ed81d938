//! Digit slots
//!
//! A fixed pool of four display slots, each holding at most one decoded glyph.

pub mod pool;
pub mod types;

pub use pool::{LoadOutcome, SlotPool};
pub use types::*;
