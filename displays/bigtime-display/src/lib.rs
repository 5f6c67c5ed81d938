//! Display components for the Big Time watch face
//!
//! This crate provides the concrete collaborators behind the core slot pool:
//! - `SegmentDecoder`: rasterizes digit glyphs into a bounded number of bitmaps
//! - `Framebuffer`: 1bpp 144x168 screen buffer (an `embedded-graphics` draw target)
//! - `FramebufferCompositor`: places glyph bitmaps into the framebuffer
//! - `memory_lcd`: line framing for Sharp memory LCD panels
//!
//! # Architecture
//!
//! Everything here is `no_std` and hardware-free so it can be tested on the
//! host. The firmware owns the SPI bus and pushes encoded lines to the panel.

#![no_std]

pub mod compositor;
pub mod decoder;
pub mod framebuffer;
pub mod memory_lcd;

// Re-export key types
pub use compositor::FramebufferCompositor;
pub use decoder::{GlyphBitmap, SegmentDecoder};
pub use framebuffer::Framebuffer;
