//! 12/24-hour format jumper

use embassy_rp::gpio::Input;

use bigtime_core::traits::ClockFormat;

/// Jumper input read once per render pass
///
/// Pulled up; shorting it to ground selects 24-hour mode.
pub struct FormatJumper {
    pin: Input<'static>,
}

impl FormatJumper {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl ClockFormat for FormatJumper {
    fn is_24h(&self) -> bool {
        self.pin.is_low()
    }
}
