//! Sharp memory LCD panel
//!
//! Pushes dirty framebuffer lines over SPI and toggles VCOM at least once a
//! second, which the panel needs to avoid DC bias on the liquid crystal.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{block_for, Duration};

use bigtime_display::memory_lcd::{self, EncodeError};
use bigtime_display::Framebuffer;

/// Chip select setup and hold time
const SCS_SETUP_US: u64 = 6;

/// Errors that can occur while updating the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// SPI transfer failed
    Bus,
    /// Frame could not be encoded
    Encode(EncodeError),
}

impl From<EncodeError> for PanelError {
    fn from(e: EncodeError) -> Self {
        PanelError::Encode(e)
    }
}

/// Memory LCD driver
pub struct MemoryLcd {
    spi: Spi<'static, SPI0, Blocking>,
    cs: Output<'static>,
    /// Display enable, held high while the driver lives
    _disp: Output<'static>,
    vcom: bool,
}

impl MemoryLcd {
    /// Create a driver; the panel content is undefined until `clear`
    pub fn new(
        spi: Spi<'static, SPI0, Blocking>,
        cs: Output<'static>,
        disp: Output<'static>,
    ) -> Self {
        Self {
            spi,
            cs,
            _disp: disp,
            vcom: false,
        }
    }

    /// Clear the whole panel to white
    pub fn clear(&mut self) -> Result<(), PanelError> {
        let vcom = self.next_vcom();
        self.transfer(&memory_lcd::clear_command(vcom))
    }

    /// Send every dirty framebuffer line, then mark the framebuffer clean
    ///
    /// Falls back to a VCOM toggle when nothing is dirty.
    pub fn flush(&mut self, framebuffer: &mut Framebuffer) -> Result<(), PanelError> {
        let vcom = self.next_vcom();
        let frame = memory_lcd::encode_update(framebuffer, vcom)?;
        if frame.is_empty() {
            return self.transfer(&memory_lcd::maintain_command(vcom));
        }

        trace!("Panel flush: {} bytes", frame.len());
        self.transfer(&frame)?;
        framebuffer.mark_clean();
        Ok(())
    }

    fn next_vcom(&mut self) -> bool {
        self.vcom = !self.vcom;
        self.vcom
    }

    fn transfer(&mut self, bytes: &[u8]) -> Result<(), PanelError> {
        self.cs.set_high();
        block_for(Duration::from_micros(SCS_SETUP_US));
        let result = self.spi.blocking_write(bytes).map_err(|_| PanelError::Bus);
        block_for(Duration::from_micros(SCS_SETUP_US));
        self.cs.set_low();
        result
    }
}
