//! Collaborator traits
//!
//! These traits define the interface between the slot/render logic and the
//! image decoder, compositor and clock-format query supplied by the host.

pub mod clock;
pub mod display;

pub use clock::ClockFormat;
pub use display::{Compositor, DecodeError, GlyphDecoder};
