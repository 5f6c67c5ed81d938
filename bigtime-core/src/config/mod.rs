//! Configuration types
//!
//! The watch face has a single option: 12-hour or 24-hour hours.

pub mod types;

pub use types::*;
