//! Time rendering
//!
//! Turns a tick (time + change mask) into slot pool operations.

pub mod renderer;

pub use renderer::{compute_display_style, display_hour, RenderError, Row, TimeRenderer};
