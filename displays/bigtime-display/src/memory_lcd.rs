//! Sharp memory LCD line framing
//!
//! Frame format (SPI, MSB-first, chip select active high):
//! - MODE (1 byte): write bit 0x80, VCOM bit 0x40
//! - per line: ADDRESS (1 byte, 1-based, bit-reversed), DATA (18 bytes), DUMMY (0x00)
//! - TRAILER (1 byte): 0x00
//!
//! A data bit of 1 is a white pixel, the opposite of the framebuffer's ink bit.

use heapless::Vec;

use crate::framebuffer::{Framebuffer, HEIGHT, STRIDE};

/// Write-line mode bit
pub const MODE_WRITE: u8 = 0x80;

/// VCOM polarity bit
pub const MODE_VCOM: u8 = 0x40;

/// All-clear mode bit
pub const MODE_CLEAR: u8 = 0x20;

/// Bytes per encoded line (ADDRESS + DATA + DUMMY)
pub const LINE_LEN: usize = 1 + STRIDE + 1;

/// Maximum encoded frame size (MODE + every line + TRAILER)
pub const MAX_FRAME_SIZE: usize = 1 + HEIGHT * LINE_LEN + 1;

/// Encoded panel update
pub type PanelFrame = Vec<u8, MAX_FRAME_SIZE>;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Row outside the panel
    InvalidRow,
    /// Frame buffer full
    BufferTooSmall,
}

fn mode_byte(mode: u8, vcom: bool) -> u8 {
    if vcom {
        mode | MODE_VCOM
    } else {
        mode
    }
}

/// Panel line address for a 0-based row
pub fn line_address(row: usize) -> Result<u8, EncodeError> {
    if row >= HEIGHT {
        return Err(EncodeError::InvalidRow);
    }
    Ok(((row + 1) as u8).reverse_bits())
}

/// Append one line to a frame
pub fn encode_line(
    row: usize,
    pixels: &[u8; STRIDE],
    frame: &mut PanelFrame,
) -> Result<(), EncodeError> {
    let address = line_address(row)?;
    frame.push(address).map_err(|_| EncodeError::BufferTooSmall)?;
    for &byte in pixels {
        frame.push(!byte).map_err(|_| EncodeError::BufferTooSmall)?;
    }
    frame.push(0x00).map_err(|_| EncodeError::BufferTooSmall)
}

/// Encode every dirty framebuffer row
///
/// Returns an empty frame if nothing changed. The caller marks the
/// framebuffer clean once the frame is on the wire.
pub fn encode_update(framebuffer: &Framebuffer, vcom: bool) -> Result<PanelFrame, EncodeError> {
    let mut frame = PanelFrame::new();
    if !framebuffer.is_dirty() {
        return Ok(frame);
    }

    frame
        .push(mode_byte(MODE_WRITE, vcom))
        .map_err(|_| EncodeError::BufferTooSmall)?;
    for row in framebuffer.dirty_rows() {
        let pixels = framebuffer.row(row).ok_or(EncodeError::InvalidRow)?;
        encode_line(row, pixels, &mut frame)?;
    }
    frame.push(0x00).map_err(|_| EncodeError::BufferTooSmall)?;

    Ok(frame)
}

/// Display-hold command, sent periodically to toggle VCOM
pub fn maintain_command(vcom: bool) -> [u8; 2] {
    [mode_byte(0x00, vcom), 0x00]
}

/// Clear-all command
pub fn clear_command(vcom: bool) -> [u8; 2] {
    [mode_byte(MODE_CLEAR, vcom), 0x00]
}
