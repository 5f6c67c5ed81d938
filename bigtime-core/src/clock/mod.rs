//! Time observations
//!
//! The tick source hands the renderer a parsed time and a mask of which
//! units changed since the previous tick.

pub mod time;
pub mod wall;

pub use time::{ChangeMask, TickTime};
pub use wall::WallClock;
